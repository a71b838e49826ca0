//! Violation report rendering
//!
//! Nothing is written when the commit is allowed.

use super::{Verdict, Violation, ViolationReason};
use crate::config::OutputFormat;
use anyhow::{Context, Result};
use console::style;
use serde::Serialize;
use std::io::Write;

pub const HEADER: &str = "[pre-commit] The following staged files are blocked:";

pub const REMEDIATION: &str = "[pre-commit] To proceed, unstage or remove these files \
     (e.g. `git restore --staged <file>`), add them to .gitignore, or reduce their size.";

#[derive(Serialize)]
struct JsonReport<'a> {
    blocked: bool,
    violations: Vec<JsonViolation<'a>>,
}

#[derive(Serialize)]
struct JsonViolation<'a> {
    path: &'a str,
    reason: &'a ViolationReason,
    message: String,
}

/// Write the report for `violations` to `out` and return the verdict.
///
/// A failure to write does not change the verdict.
pub fn report<W: Write>(
    violations: &[Violation],
    format: OutputFormat,
    color: bool,
    out: &mut W,
) -> Verdict {
    let verdict = Verdict::from_violations(violations);
    if verdict == Verdict::Allow {
        return verdict;
    }

    let written = match format {
        OutputFormat::Text => write_text(violations, color, out),
        OutputFormat::Json => write_json(violations, out),
    };
    if let Err(e) = written {
        tracing::error!("Failed to write violation report: {:#}", e);
    }

    verdict
}

fn write_text<W: Write>(violations: &[Violation], color: bool, out: &mut W) -> Result<()> {
    let header = if color {
        style(HEADER).red().bold().for_stderr().to_string()
    } else {
        HEADER.to_string()
    };

    writeln!(out)?;
    writeln!(out, "{header}")?;
    for violation in violations {
        writeln!(out, " - {}: {}", violation.path, violation.reason)?;
    }
    writeln!(out)?;
    writeln!(out, "{REMEDIATION}")?;
    out.flush().context("Failed to flush report")
}

fn write_json<W: Write>(violations: &[Violation], out: &mut W) -> Result<()> {
    let document = JsonReport {
        blocked: true,
        violations: violations
            .iter()
            .map(|v| JsonViolation {
                path: &v.path,
                reason: &v.reason,
                message: v.reason.to_string(),
            })
            .collect(),
    };

    serde_json::to_writer_pretty(&mut *out, &document).context("Failed to serialize report")?;
    writeln!(out)?;
    out.flush().context("Failed to flush report")
}
