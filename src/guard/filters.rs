//! Per-path policy filters
//!
//! Each staged path runs through the filters in order and the first one that
//! rejects it wins, so a path inside the excluded directory never has its
//! metadata read.
//!
//! 1. **Exclusion Filter** - path segments only, no I/O
//! 2. **Size Filter** - one metadata read, never opens the file

use super::ViolationReason;
use std::fs;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// Base trait every path filter implements
pub trait Filter {
    /// Decide whether the staged path passes this filter
    fn check(&self, path: &str) -> FilterDecision;

    /// Name of this filter for logging
    fn name(&self) -> &'static str;
}

/// Outcome of running one filter against one path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDecision {
    /// Path is acceptable as far as this filter is concerned
    Pass,
    /// Path must not be committed
    Reject(ViolationReason),
}

/// Rejects paths that live inside a given directory name
pub struct ExclusionFilter {
    segment: &'static str,
}

impl ExclusionFilter {
    pub fn new(segment: &'static str) -> Self {
        Self { segment }
    }

    /// True if any separator-delimited segment equals the excluded name, or
    /// the raw path starts with `<segment>/`.
    ///
    /// git always reports `/`-separated paths, so on platforms whose separator
    /// differs only the prefix check can catch a top-level match.
    pub fn matches(&self, path: &str) -> bool {
        let in_segment = path.split(MAIN_SEPARATOR).any(|part| part == self.segment);
        let prefixed = path
            .strip_prefix(self.segment)
            .is_some_and(|rest| rest.starts_with('/'));

        in_segment || prefixed
    }
}

impl Filter for ExclusionFilter {
    fn check(&self, path: &str) -> FilterDecision {
        if self.matches(path) {
            FilterDecision::Reject(ViolationReason::ExcludedDirectory {
                segment: self.segment,
            })
        } else {
            FilterDecision::Pass
        }
    }

    fn name(&self) -> &'static str {
        "ExclusionFilter"
    }
}

/// Rejects regular files larger than a byte limit
pub struct SizeFilter {
    root: PathBuf,
    max_size_bytes: u64,
}

impl SizeFilter {
    /// Paths are resolved against `root` before their metadata is read
    pub fn new(root: impl Into<PathBuf>, max_size_bytes: u64) -> Self {
        Self {
            root: root.into(),
            max_size_bytes,
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(Path::new(path))
    }
}

impl Filter for SizeFilter {
    fn check(&self, path: &str) -> FilterDecision {
        let full_path = self.resolve(path);

        // Removed after staging, a submodule, or unreadable: not ours to judge
        let metadata = match fs::metadata(&full_path) {
            Ok(metadata) => metadata,
            Err(e) => {
                tracing::debug!("Skipping size check for {}: {}", path, e);
                return FilterDecision::Pass;
            }
        };

        if metadata.is_file() && metadata.len() > self.max_size_bytes {
            FilterDecision::Reject(ViolationReason::Oversized {
                size_bytes: metadata.len(),
                limit_bytes: self.max_size_bytes,
            })
        } else {
            FilterDecision::Pass
        }
    }

    fn name(&self) -> &'static str {
        "SizeFilter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    fn sized_file(dir: &TempDir, name: &str, len: u64) {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        File::create(&path).unwrap().set_len(len).unwrap();
    }

    #[test]
    fn test_exclusion_matches_segments_anywhere() {
        let filter = ExclusionFilter::new("node_modules");

        assert!(filter.matches("node_modules/pkg/index.js"));
        assert!(filter.matches("node_modules"));
        assert!(filter.matches("packages/web/node_modules/react/index.js"));
    }

    #[test]
    fn test_exclusion_ignores_lookalike_names() {
        let filter = ExclusionFilter::new("node_modules");

        assert!(!filter.matches("src/app.js"));
        assert!(!filter.matches("node_modules_backup/index.js"));
        assert!(!filter.matches("src/node_modules.rs"));
        assert!(!filter.matches("my_node_modules/x.js"));
    }

    #[test]
    fn test_exclusion_filter_decision() {
        let filter = ExclusionFilter::new("node_modules");

        assert_eq!(
            filter.check("node_modules/left-pad/index.js"),
            FilterDecision::Reject(ViolationReason::ExcludedDirectory {
                segment: "node_modules"
            })
        );
        assert_eq!(filter.check("README.md"), FilterDecision::Pass);
    }

    #[test]
    fn test_size_filter_threshold_is_exclusive() {
        let dir = TempDir::new().unwrap();
        sized_file(&dir, "at_limit.bin", 1024);
        sized_file(&dir, "over_limit.bin", 1025);

        let filter = SizeFilter::new(dir.path(), 1024);

        assert_eq!(filter.check("at_limit.bin"), FilterDecision::Pass);
        assert_eq!(
            filter.check("over_limit.bin"),
            FilterDecision::Reject(ViolationReason::Oversized {
                size_bytes: 1025,
                limit_bytes: 1024
            })
        );
    }

    #[test]
    fn test_size_filter_skips_missing_files() {
        let dir = TempDir::new().unwrap();
        let filter = SizeFilter::new(dir.path(), 0);

        assert_eq!(filter.check("gone.bin"), FilterDecision::Pass);
    }

    #[test]
    fn test_size_filter_skips_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("vendor/submodule")).unwrap();
        let filter = SizeFilter::new(dir.path(), 0);

        assert_eq!(filter.check("vendor/submodule"), FilterDecision::Pass);
    }

    #[test]
    fn test_size_filter_resolves_nested_paths() {
        let dir = TempDir::new().unwrap();
        sized_file(&dir, "assets/video/intro.mp4", 4096);
        let filter = SizeFilter::new(dir.path(), 2048);

        assert!(matches!(
            filter.check("assets/video/intro.mp4"),
            FilterDecision::Reject(ViolationReason::Oversized { .. })
        ));
    }
}
