//! Output handler for hook diagnostics
//!
//! git shows a hook's stderr to the user and ignores its stdout, so every
//! message goes to stderr.

use console::{StyledObject, style};

/// Output handler for consistent CLI formatting
pub struct Output {
    verbose: bool,
    quiet: bool,
    color: bool,
}

impl Output {
    /// Create a new output handler
    pub fn new(verbose: bool, quiet: bool, color: bool) -> Self {
        Self {
            verbose,
            quiet,
            color,
        }
    }

    /// Whether styled output is allowed at all
    pub fn colors_enabled(&self) -> bool {
        self.color
    }

    fn paint<D>(&self, object: StyledObject<D>) -> StyledObject<D> {
        let object = object.for_stderr();
        if self.color {
            object
        } else {
            object.force_styling(false)
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", self.paint(style("✔").green()), message);
        }
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", self.paint(style("⚠").yellow()), message);
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", self.paint(style("ℹ").blue()), message);
        }
    }

    /// Print a message only in verbose mode
    pub fn verbose(&self, message: &str) {
        if self.verbose && !self.quiet {
            eprintln!("{} {}", self.paint(style("ℹ").dim()), self.paint(style(message).dim()));
        }
    }

    /// Print a header/title
    pub fn header(&self, title: &str) {
        if !self.quiet {
            eprintln!("\n{}", self.paint(style(title).bold().underlined()));
        }
    }

    /// Print a key-value pair
    pub fn key_value(&self, key: &str, value: &str) {
        if !self.quiet {
            eprintln!("  {:<14} {}", self.paint(style(key).dim()), value);
        }
    }
}
