//! Field key rules.
//!
//! Each check looks at one key expression yielded by
//! [`Keys`](crate::core::extract::Keys) and runs independently of the
//! others, so a single key can produce several issues.

use std::collections::HashSet;

use crate::core::ast::Expr;
use crate::core::case::KeyCase;
use crate::core::literal::{quote, unquote};
use crate::core::source::Locator;
use crate::issues::{ForbiddenKeyIssue, KeyNamingIssue, RawKeyIssue, SuggestedFix, TextEdit};

/// The value of a key written as a well-formed string literal.
pub fn key_name(key: &Expr) -> Option<String> {
    unquote(&key.as_str_lit()?.value)
}

/// Report a key written as a string literal.
pub fn check_raw_key(key: &Expr, locator: &Locator) -> Option<RawKeyIssue> {
    key.as_str_lit().map(|_| RawKeyIssue {
        context: locator.context(key.pos()),
    })
}

pub fn check_forbidden_key(
    key: &Expr,
    forbidden: &HashSet<String>,
    locator: &Locator,
) -> Option<ForbiddenKeyIssue> {
    let name = key_name(key)?;
    if !forbidden.contains(&name) {
        return None;
    }
    Some(ForbiddenKeyIssue {
        context: locator.context(key.pos()),
        key: name,
    })
}

/// Report a literal key not written in `case`, with a fix replacing the whole
/// literal by the converted name.
pub fn check_key_naming(key: &Expr, case: KeyCase, locator: &Locator) -> Option<KeyNamingIssue> {
    let name = key_name(key)?;
    let converted = case.convert(&name);
    if converted == name {
        return None;
    }

    let new_text = quote(&converted);
    Some(KeyNamingIssue {
        context: locator.context(key.pos()),
        case,
        fix: SuggestedFix {
            message: format!("Change to {}", new_text),
            edit: TextEdit {
                span: key.span(),
                new_text,
            },
        },
    })
}
