//! Listing the paths staged for the next commit
//!
//! Only Added, Copied and Modified paths are reported, relative to the
//! working-tree root, the same set `git diff --cached --name-only
//! --diff-filter=ACM` prints. The git binary is asked for NUL-terminated
//! output so non-ASCII names arrive unquoted.

use crate::cli::Output;
use crate::config::{GitBackend, GitConfig};
use crate::guard::StagedPath;
use anyhow::{Context, Result, bail};
use git2::{Delta, DiffFindOptions, DiffOptions, ErrorCode, Repository};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Arguments passed to the git binary
pub const DIFF_ARGS: [&str; 5] = ["diff", "--cached", "--name-only", "--diff-filter=ACM", "-z"];

pub const LIST_FAILURE_WARNING: &str =
    "[pre-commit] warning: failed to list staged files, skipping size checks";

/// Something that can report the currently staged paths
pub trait StagedSource {
    fn staged_paths(&self) -> Result<Vec<StagedPath>>;

    /// Name of this source for logging
    fn name(&self) -> &'static str;
}

/// Runs the git binary
pub struct GitCli {
    binary: String,
    workdir: PathBuf,
}

impl GitCli {
    pub fn new(binary: impl Into<String>, workdir: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            workdir: workdir.into(),
        }
    }
}

impl StagedSource for GitCli {
    fn staged_paths(&self) -> Result<Vec<StagedPath>> {
        let binary = which::which(&self.binary)
            .with_context(|| format!("'{}' executable not found", self.binary))?;

        tracing::debug!("Running {} {}", binary.display(), DIFF_ARGS.join(" "));
        let output = Command::new(&binary)
            .args(DIFF_ARGS)
            .current_dir(&self.workdir)
            .output()
            .with_context(|| format!("Failed to run {}", binary.display()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("git diff exited with {}: {}", output.status, stderr.trim());
        }

        Ok(parse_name_only(&output.stdout))
    }

    fn name(&self) -> &'static str {
        "git-cli"
    }
}

/// Diffs HEAD against the index with libgit2
pub struct Libgit2Index {
    workdir: PathBuf,
}

impl Libgit2Index {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }
}

impl StagedSource for Libgit2Index {
    fn staged_paths(&self) -> Result<Vec<StagedPath>> {
        let repo = Repository::discover(&self.workdir).context("No Git repository found")?;

        // Before the first commit everything in the index counts as added
        let head_tree = match repo.head() {
            Ok(head) => Some(head.peel_to_tree().context("Failed to resolve HEAD tree")?),
            Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => None,
            Err(e) => return Err(e).context("Failed to read HEAD"),
        };
        let index = repo.index().context("Failed to read index")?;

        let mut diff_opts = DiffOptions::new();
        diff_opts.include_typechange(true);
        let mut diff = repo
            .diff_tree_to_index(head_tree.as_ref(), Some(&index), Some(&mut diff_opts))
            .context("Failed to diff HEAD against the index")?;

        let mut find_opts = DiffFindOptions::new();
        find_opts.renames(true).copies(true);
        diff.find_similar(Some(&mut find_opts))
            .context("Failed to detect copies")?;

        let paths = diff
            .deltas()
            .filter(|delta| matches!(delta.status(), Delta::Added | Delta::Copied | Delta::Modified))
            .filter_map(|delta| {
                delta
                    .new_file()
                    .path()
                    .map(|path| path.to_string_lossy().into_owned())
            })
            .collect();

        Ok(paths)
    }

    fn name(&self) -> &'static str {
        "libgit2"
    }
}

/// Build the configured source for a working directory
pub fn source_for(config: &GitConfig, workdir: &Path) -> Box<dyn StagedSource> {
    match config.backend {
        GitBackend::Cli => Box::new(GitCli::new(config.binary.clone(), workdir)),
        GitBackend::Libgit2 => Box::new(Libgit2Index::new(workdir)),
    }
}

/// Split `--name-only -z` output into non-empty paths.
///
/// Each entry is decoded on its own, so one name that is not valid UTF-8
/// does not hide the others.
pub fn parse_name_only(raw: &[u8]) -> Vec<StagedPath> {
    raw.split(|&b| b == 0)
        .filter(|entry| !entry.is_empty())
        .map(|entry| String::from_utf8_lossy(entry).into_owned())
        .collect()
}

/// List staged paths, failing open.
///
/// Any failure of the source is logged and reported as a warning, and the
/// commit is treated as having nothing staged.
pub fn list_staged_paths(source: &dyn StagedSource, output: &Output) -> Vec<StagedPath> {
    match source.staged_paths() {
        Ok(paths) => {
            tracing::debug!("{} reported {} staged paths", source.name(), paths.len());
            paths
        }
        Err(e) => {
            tracing::warn!("Listing staged files via {} failed: {:#}", source.name(), e);
            output.warning(LIST_FAILURE_WARNING);
            Vec::new()
        }
    }
}
