//! Global logger detection rule.
//!
//! Flags `zap.L()` and `zap.S()`, which hand out the process-wide logger
//! instead of one passed in by the caller.

use crate::core::ast::CallExpr;
use crate::core::catalog::CallShape;
use crate::core::source::Locator;
use crate::issues::GlobalLoggerIssue;

/// Report a global accessor call at its operator position.
pub fn check_global(
    call: &CallExpr,
    shape: &CallShape,
    locator: &Locator,
) -> Option<GlobalLoggerIssue> {
    shape.is_global.then(|| GlobalLoggerIssue {
        context: locator.context(call.operator_pos()),
    })
}
