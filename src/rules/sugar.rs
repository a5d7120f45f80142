//! Sugared logger detection rule.

use crate::core::ast::CallExpr;
use crate::core::catalog::CallShape;
use crate::core::resolve::resolve_call;
use crate::core::source::Locator;
use crate::issues::SugaredLoggerIssue;

/// Report a call into `SugaredLogger`.
///
/// In a chain such as `sugar.With("k", v).Infow("msg")` only the innermost
/// sugared call is reported: a call whose receiver is itself a catalogued
/// sugared call stays silent.
pub fn check_sugar(
    call: &CallExpr,
    shape: &CallShape,
    locator: &Locator,
) -> Option<SugaredLoggerIssue> {
    if !shape.is_sugar || has_sugared_receiver(call) {
        return None;
    }
    Some(SugaredLoggerIssue {
        context: locator.context(call.operator_pos()),
    })
}

fn has_sugared_receiver(call: &CallExpr) -> bool {
    call.receiver_call()
        .and_then(resolve_call)
        .is_some_and(|(_, shape)| shape.is_sugar)
}
