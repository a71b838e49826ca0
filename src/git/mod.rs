//! Git integration layer
//!
//! Repository discovery and hook file management go through git2. Listing
//! staged paths lives in [`staged`], which can use either the git binary or
//! git2.

pub mod staged;

use anyhow::{Context, Result};
use git2::Repository;
use std::fs;
use std::path::{Path, PathBuf};

/// Git operations handler
pub struct GitOperations {
    repo: Repository,
}

impl GitOperations {
    /// Discover and open the repository containing `path`
    pub fn discover<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path).context("No Git repository found")?;

        Ok(Self { repo })
    }

    /// Path of the hooks directory inside `.git`
    pub fn hooks_dir(&self) -> PathBuf {
        self.repo.path().join("hooks")
    }

    /// Full path of a hook file
    pub fn hook_path(&self, hook_name: &str) -> PathBuf {
        self.hooks_dir().join(hook_name)
    }

    /// Read an existing hook, `None` if it is not installed
    pub fn read_hook(&self, hook_name: &str) -> Result<Option<String>> {
        let hook_path = self.hook_path(hook_name);
        if !hook_path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&hook_path)
            .with_context(|| format!("Failed to read hook {}", hook_path.display()))?;
        Ok(Some(content))
    }

    /// Install a git hook
    pub fn install_hook(&self, hook_name: &str, hook_content: &str) -> Result<PathBuf> {
        let hooks_dir = self.hooks_dir();
        let hook_path = hooks_dir.join(hook_name);

        fs::create_dir_all(&hooks_dir).context("Failed to create hooks directory")?;
        fs::write(&hook_path, hook_content).context("Failed to write hook file")?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&hook_path)
                .context("Failed to get hook file metadata")?
                .permissions();
            perms.set_mode(0o755);
            fs::set_permissions(&hook_path, perms)
                .context("Failed to set hook file permissions")?;
        }

        Ok(hook_path)
    }

    /// Remove a git hook, returns whether a file was removed
    pub fn remove_hook(&self, hook_name: &str) -> Result<bool> {
        let hook_path = self.hook_path(hook_name);

        if !hook_path.exists() {
            return Ok(false);
        }
        fs::remove_file(&hook_path).context("Failed to remove hook file")?;
        Ok(true)
    }
}
