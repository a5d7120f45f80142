//! Check command - Report zap logging convention violations.

use anyhow::{Ok, Result};

use super::super::{args::CheckCommand, exit_status::ExitStatus, report};
use crate::{core::CheckContext, issues::Issue};

pub fn check(cmd: CheckCommand, verbose: bool) -> Result<ExitStatus> {
    let ctx = CheckContext::new(&cmd.args.common, &cmd.paths)?;

    let parse_errors = ctx.parse_errors();
    let mut issues: Vec<Issue> = ctx.issues().to_vec();
    issues.extend(parse_errors.iter().cloned().map(Issue::ParseError));

    if issues.is_empty() {
        report::print_success(ctx.files.len());
    } else {
        report::report(&issues);
    }
    report::print_parse_warning(parse_errors.len(), verbose);

    Ok(ExitStatus::from_outcome(
        parse_errors.len(),
        !ctx.issues().is_empty(),
    ))
}
