//! ApplyFix action.
//!
//! Rewrites keys in Go sources with the fix attached to a naming issue.
//! Used by the `zaplint fix` command.

use crate::issues::{KeyNamingIssue, Report};

use super::operation::Operation;
use super::traits::Action;

/// Action to apply suggested key renames.
pub struct ApplyFix;

impl Action<KeyNamingIssue> for ApplyFix {
    fn to_operations(issues: &[KeyNamingIssue]) -> Vec<Operation> {
        issues
            .iter()
            .filter_map(|issue| {
                issue.fix().map(|fix| Operation::ReplaceText {
                    context: issue.context.clone(),
                    edit: fix.edit.clone(),
                })
            })
            .collect()
    }
}
