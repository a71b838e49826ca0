//! Pre-commit hook implementation
//!
//! Lists the staged paths once, checks them against the staged file policy
//! and reports any violations. Only a policy violation blocks the commit; if
//! the staged paths cannot be listed the commit goes ahead.

use super::HookContext;
use crate::git::staged::{StagedSource, list_staged_paths, source_for};
use crate::guard::{StagedFileGuard, Verdict, report};
use std::io::{self, Write};

/// Execute the pre-commit hook against the configured git backend
pub fn execute(context: &HookContext) -> Verdict {
    let source = source_for(&context.config.git, &context.workdir);
    let stderr = io::stderr();
    run(context, source.as_ref(), &mut stderr.lock())
}

/// Run the check with an explicit source, writing the report to `out`
pub fn run<W: Write>(context: &HookContext, source: &dyn StagedSource, out: &mut W) -> Verdict {
    let staged = list_staged_paths(source, &context.output);
    if staged.is_empty() {
        tracing::info!("No staged files to check");
        return Verdict::Allow;
    }

    context
        .output
        .verbose(&format!("Checking {} staged files", staged.len()));

    let guard = StagedFileGuard::new(&context.workdir);
    let violations = guard.evaluate(&staged);

    report(
        &violations,
        context.config.output.format,
        context.output.colors_enabled(),
        out,
    )
}
