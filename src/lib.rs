//! # stage-guard - keep oversized files and dependencies out of commits
//!
//! A pre-commit hook that looks at the files staged for a commit and blocks
//! the commit when:
//!
//! - a staged path lies inside `node_modules`, or
//! - a staged regular file is larger than 10 MB.
//!
//! If git cannot be asked for the staged files the hook lets the commit
//! through with a warning; it never blocks a commit because of its own
//! failure.
//!
//! ## Quick Start
//!
//! ```bash
//! cargo install stage-guard
//!
//! # Write .git/hooks/pre-commit
//! stage-guard install
//!
//! # Run the check by hand
//! stage-guard check
//! ```
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use stage_guard::guard::StagedFileGuard;
//!
//! let guard = StagedFileGuard::new(std::env::current_dir()?);
//! let staged = vec!["node_modules/pkg/index.js".to_string(), "src/app.js".to_string()];
//! for violation in guard.evaluate(&staged) {
//!     eprintln!(" - {}: {}", violation.path, violation.reason);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod git;
pub mod guard;
pub mod hooks;

pub use cli::{Cli, Output};
pub use config::StageGuardConfig;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
