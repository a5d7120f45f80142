//! Message style rule.
//!
//! Only literal messages are checked; constants and concatenations are left
//! alone.

use crate::core::ast::Expr;
use crate::core::case::MessageStyle;
use crate::core::literal::unquote;
use crate::core::source::Locator;
use crate::issues::MessageStyleIssue;

pub fn check_msg_style(
    msg: &Expr,
    style: MessageStyle,
    locator: &Locator,
) -> Option<MessageStyleIssue> {
    let value = unquote(&msg.as_str_lit()?.value)?;
    if style.matches(&value) {
        return None;
    }
    Some(MessageStyleIssue {
        context: locator.context(msg.pos()),
        style,
    })
}
