//! Argument layout rule.
//!
//! Trailing arguments (fields, or key/value pairs for the `w` variants) must
//! each start on their own line. The message is not part of the check.

use std::collections::HashSet;

use crate::core::ast::{CallExpr, Expr};
use crate::core::catalog::CallShape;
use crate::core::source::Locator;
use crate::issues::ArgsLayoutIssue;

/// Report a call whose trailing arguments share a line, at the call start.
pub fn check_args_layout(
    call: &CallExpr,
    shape: &CallShape,
    locator: &Locator,
) -> Option<ArgsLayoutIssue> {
    let args = shape.variadic_args(&call.args);
    if !share_a_line(args, shape.is_kv) {
        return None;
    }
    Some(ArgsLayoutIssue {
        context: locator.context(call.span.pos),
    })
}

fn share_a_line(args: &[Expr], is_kv: bool) -> bool {
    if args.len() <= 1 {
        return false;
    }

    if is_kv {
        // Pairs are only checked when every key has its value.
        if args.len() % 2 != 0 {
            return false;
        }
        // A key and its value may share a line; two pairs may not.
        return has_duplicate_line(args.iter().step_by(2));
    }

    has_duplicate_line(args.iter())
}

fn has_duplicate_line<'a>(mut args: impl Iterator<Item = &'a Expr>) -> bool {
    let mut lines = HashSet::new();
    args.any(|arg| !lines.insert(arg.pos().line))
}
