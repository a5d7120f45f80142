//! Fix command - Rewrite field keys to the configured naming case.
//!
//! Every key naming issue carries a suggested fix replacing the key
//! expression. The command previews those replacements, or writes them back
//! to the Go sources with `--apply`.
//!
//! Exit status in dry-run mode is `Failure` while fixes are pending, so it can
//! gate CI the same way `check` does.

use std::collections::HashSet;

use anyhow::{Ok, Result};
use colored::Colorize;

use super::super::{
    actions::{Action, ActionStats, ApplyFix},
    args::FixCommand,
    exit_status::ExitStatus,
    report,
};
use crate::{
    core::CheckContext,
    issues::{Issue, KeyNamingIssue},
};

pub fn fix(cmd: FixCommand, verbose: bool) -> Result<ExitStatus> {
    let args = &cmd.args;
    let ctx = CheckContext::new(&args.common, &cmd.paths)?;
    let apply = args.apply;

    let fixable: Vec<KeyNamingIssue> = ctx
        .issues()
        .iter()
        .filter_map(|issue| match issue {
            Issue::KeyNaming(issue) => Some(issue.clone()),
            _ => None,
        })
        .collect();

    if fixable.is_empty() {
        println!(
            "{} {}",
            report::SUCCESS_MARK.green(),
            format!("Checked {} file(s) - nothing to fix", ctx.files.len()).green()
        );
    } else if apply {
        let stats: ActionStats = ApplyFix::run(&fixable)?;
        println!(
            "{} {} key(s) in {} file(s) (processed {} issue(s)).",
            "Fixed".green().bold(),
            stats.changes_applied,
            stats.files_modified,
            stats.processed
        );
        if stats.skipped > 0 {
            println!(
                "  - skipped: {} edit(s) that overlap or no longer match the source",
                stats.skipped
            );
        }
    } else {
        ApplyFix::preview(&fixable);
        let files: HashSet<&str> = fixable
            .iter()
            .map(|issue| issue.context.file_path())
            .collect();
        println!(
            "{} {} key(s) in {} file(s).",
            "Would fix".yellow().bold(),
            fixable.len(),
            files.len()
        );
        println!("Run with {} to rewrite these keys.", "--apply".cyan());
    }

    let parse_error_count = ctx.parse_errors().len();
    report::print_parse_warning(parse_error_count, verbose);

    Ok(ExitStatus::from_outcome(
        parse_error_count,
        !fixable.is_empty() && !apply,
    ))
}
