//! Staged file policy
//!
//! Decides, for one snapshot of staged paths, whether a commit may proceed.
//! Two policies apply to every path:
//!
//! - nothing inside [`EXCLUDED_SEGMENT`] may be committed
//! - no regular file may exceed [`MAX_BYTES`]
//!
//! Both limits are compiled in. Evaluation only reads metadata; file content
//! is never opened.

pub mod filters;
pub mod report;

use filters::{ExclusionFilter, Filter, FilterDecision, SizeFilter};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::process::ExitCode;

pub use report::{HEADER, REMEDIATION, report};

/// Largest file size, in bytes, that may be committed
pub const MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Directory name that must never appear in a committed path
pub const EXCLUDED_SEGMENT: &str = "node_modules";

const MEBIBYTE: f64 = 1024.0 * 1024.0;

/// A path relative to the repository root, as git reported it
pub type StagedPath = String;

/// A staged path that the guard refuses to let through
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub path: StagedPath,
    pub reason: ViolationReason,
}

/// Why a staged path was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViolationReason {
    /// The path lies inside the excluded directory
    ExcludedDirectory { segment: &'static str },
    /// The file is larger than the size limit
    Oversized { size_bytes: u64, limit_bytes: u64 },
}

impl fmt::Display for ViolationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationReason::ExcludedDirectory { segment } => {
                write!(f, "Committed path is inside {segment}")
            }
            ViolationReason::Oversized {
                size_bytes,
                limit_bytes,
            } => write!(
                f,
                "File size {} MB exceeds {} MB",
                format_mebibytes(*size_bytes),
                format_mebibytes(*limit_bytes)
            ),
        }
    }
}

/// Render a byte count as mebibytes rounded to two decimals, without
/// trailing zeros (`11`, `10.5`, `10.25`).
pub fn format_mebibytes(bytes: u64) -> String {
    let mebibytes = (bytes as f64 / MEBIBYTE * 100.0).round() / 100.0;
    let text = format!("{mebibytes:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Whether the commit may proceed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Allow,
    Block,
}

impl Verdict {
    pub fn from_violations(violations: &[Violation]) -> Self {
        if violations.is_empty() {
            Verdict::Allow
        } else {
            Verdict::Block
        }
    }

    /// Process exit status git reads from the hook
    pub fn code(self) -> u8 {
        match self {
            Verdict::Allow => 0,
            Verdict::Block => 1,
        }
    }
}

impl From<Verdict> for ExitCode {
    fn from(verdict: Verdict) -> Self {
        ExitCode::from(verdict.code())
    }
}

/// Applies the exclusion and size policies to staged paths
pub struct StagedFileGuard {
    filters: Vec<Box<dyn Filter>>,
}

impl StagedFileGuard {
    /// Create a guard whose size checks resolve paths against `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            filters: vec![
                Box::new(ExclusionFilter::new(EXCLUDED_SEGMENT)),
                Box::new(SizeFilter::new(root, MAX_BYTES)),
            ],
        }
    }

    /// Collect violations in the order the paths were given
    pub fn evaluate(&self, paths: &[StagedPath]) -> Vec<Violation> {
        if paths.is_empty() {
            return Vec::new();
        }

        paths
            .iter()
            .filter_map(|path| self.evaluate_path(path))
            .collect()
    }

    fn evaluate_path(&self, path: &str) -> Option<Violation> {
        self.filters.iter().find_map(|filter| match filter.check(path) {
            FilterDecision::Pass => None,
            FilterDecision::Reject(reason) => {
                tracing::debug!("{} rejected {}: {}", filter.name(), path, reason);
                Some(Violation {
                    path: path.to_string(),
                    reason,
                })
            }
        })
    }
}
