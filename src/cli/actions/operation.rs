//! Low-level file operations produced by actions.

use std::{collections::BTreeMap, fs};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::core::literal::unquote;
use crate::core::{SourceContext, SourceText};
use crate::issues::TextEdit;

use super::traits::ActionStats;

#[derive(Debug, Clone)]
pub enum Operation {
    /// Replace the text covered by `edit.span` in the file of `context`.
    ReplaceText {
        context: SourceContext,
        edit: TextEdit,
    },
}

impl Operation {
    pub fn file_path(&self) -> &str {
        match self {
            Operation::ReplaceText { context, .. } => context.file_path(),
        }
    }

    /// Print the change this operation would make.
    pub fn preview(&self) {
        match self {
            Operation::ReplaceText { context, edit } => {
                println!(
                    "  {} {}:{}:{}",
                    "-->".blue(),
                    context.file_path(),
                    context.line(),
                    context.col()
                );
                match context
                    .source_line
                    .as_deref()
                    .and_then(|line| replace_in_line(line, context.col(), edit))
                {
                    Some((before, after)) => {
                        println!("  {} {}", "-".red().bold(), before.red());
                        println!("  {} {}", "+".green().bold(), after.green());
                    }
                    None => {
                        println!("  {} {}", "+".green().bold(), edit.new_text.green());
                    }
                }
                println!();
            }
        }
    }
}

/// The source line before and after a single-line edit.
fn replace_in_line(line: &str, col: usize, edit: &TextEdit) -> Option<(String, String)> {
    if edit.span.pos.line != edit.span.end.line {
        return None;
    }
    let start = col.checked_sub(1)?;
    let end = start + edit.span.end.col.checked_sub(edit.span.pos.col)?;
    let replaced = format!(
        "{}{}{}",
        line.get(..start)?,
        edit.new_text,
        line.get(end..)?
    );
    Some((line.to_string(), replaced))
}

/// Apply replace operations, grouped per file.
///
/// Edits are applied back to front so earlier offsets stay valid. An edit
/// is skipped when it falls outside the file, when the text under it is no
/// longer a string literal, or when it overlaps an edit already applied.
pub(crate) fn execute_operations(ops: &[Operation]) -> Result<ActionStats> {
    let mut by_file: BTreeMap<&str, Vec<&TextEdit>> = BTreeMap::new();
    for op in ops {
        let Operation::ReplaceText { edit, .. } = op;
        by_file.entry(op.file_path()).or_default().push(edit);
    }

    let mut stats = ActionStats {
        processed: ops.len(),
        ..Default::default()
    };

    for (file_path, edits) in by_file {
        let content = fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read {}", file_path))?;
        let (new_content, applied) = apply_edits(&SourceText::new(content), &edits);

        stats.skipped += edits.len() - applied;
        if applied > 0 {
            fs::write(file_path, new_content)
                .with_context(|| format!("Failed to write {}", file_path))?;
            stats.changes_applied += applied;
            stats.files_modified += 1;
        }
    }

    Ok(stats)
}

/// Returns the rewritten text and the number of edits applied.
fn apply_edits(source: &SourceText, edits: &[&TextEdit]) -> (String, usize) {
    let mut ranges: Vec<(usize, usize, &str)> = edits
        .iter()
        .filter_map(|edit| {
            let start = source.offset(edit.span.pos)?;
            let end = source.offset(edit.span.end)?;
            // Fixes only ever replace key literals; anything else means the
            // file changed since the dump was taken.
            unquote(source.as_str().get(start..end)?)?;
            Some((start, end, edit.new_text.as_str()))
        })
        .collect();
    ranges.sort_by(|a, b| b.0.cmp(&a.0).then(b.1.cmp(&a.1)));
    ranges.dedup();

    let mut text = source.as_str().to_string();
    let mut applied = 0;
    let mut limit = usize::MAX;
    for (start, end, new_text) in ranges {
        if end > limit {
            continue;
        }
        text.replace_range(start..end, new_text);
        limit = start;
        applied += 1;
    }
    (text, applied)
}
