//! Static message rule.
//!
//! A message is static when it is a string literal, an identifier denoting a
//! constant, or a `+` concatenation of static operands.

use crate::core::ast::Expr;
use crate::core::source::Locator;
use crate::issues::DynamicMessageIssue;

pub fn is_static_msg(msg: &Expr) -> bool {
    match msg {
        Expr::Lit(_) => msg.as_str_lit().is_some(),
        Expr::Ident(ident) => ident.is_const(),
        Expr::Binary(bin) => bin.is_add() && is_static_msg(&bin.x) && is_static_msg(&bin.y),
        Expr::Selector(_) | Expr::Call(_) | Expr::Other(_) => false,
    }
}

/// Report a message that is not static, at the message position.
pub fn check_static_msg(msg: &Expr, locator: &Locator) -> Option<DynamicMessageIssue> {
    (!is_static_msg(msg)).then(|| DynamicMessageIssue {
        context: locator.context(msg.pos()),
    })
}
