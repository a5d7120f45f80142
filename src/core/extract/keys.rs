//! Field key extraction.
//!
//! Two layouts carry keys:
//!
//! - `Logger` calls take field constructors: `logger.Info("msg", zap.String("k", v))`.
//!   The key is the first argument of each constructor call.
//! - Sugared key/value calls take flat pairs: `sugar.Infow("msg", "k", v)`.
//!   The key is the first element of each complete pair.

use crate::core::ast::{CallExpr, Expr};
use crate::core::catalog::{CallShape, ZAP_PKG};
use crate::core::resolve::callee_pkg_path;

/// Short name of the sugared call that attaches fields without logging.
const ADD_FIELDS: &str = "With";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    Fields,
    Pairs,
    Empty,
}

/// Lazy iterator over the key expressions of a call.
///
/// Cloning the iterator restarts it from its current position; build a new
/// one with [`Keys::new`] to start over.
#[derive(Debug, Clone)]
pub struct Keys<'a> {
    layout: Layout,
    args: &'a [Expr],
    index: usize,
}

impl<'a> Keys<'a> {
    pub fn new(call: &'a CallExpr, shape: &CallShape) -> Self {
        let is_add_fields = call
            .callee
            .as_ref()
            .is_some_and(|callee| callee.name == ADD_FIELDS);

        let layout = if !shape.is_sugar {
            Layout::Fields
        } else if shape.is_kv || is_add_fields {
            Layout::Pairs
        } else {
            Layout::Empty
        };

        Self {
            layout,
            args: shape.variadic_args(&call.args),
            index: 0,
        }
    }
}

impl<'a> Iterator for Keys<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        match self.layout {
            Layout::Fields => {
                while let Some(arg) = self.args.get(self.index) {
                    self.index += 1;
                    if let Some(key) = field_key(arg) {
                        return Some(key);
                    }
                }
                None
            }
            Layout::Pairs => {
                // An unpaired trailing key is not a key position.
                if self.index + 1 >= self.args.len() {
                    return None;
                }
                let key = &self.args[self.index];
                self.index += 2;
                Some(key)
            }
            Layout::Empty => None,
        }
    }
}

/// The key of a field constructor call such as `zap.String("k", v)`.
fn field_key(arg: &Expr) -> Option<&Expr> {
    let call = arg.as_call()?;
    let pkg_path = callee_pkg_path(call)?;
    if pkg_path != ZAP_PKG {
        return None;
    }
    call.args.first()
}

/// The message argument of a call, if its shape declares one.
pub fn message_arg<'a>(call: &'a CallExpr, shape: &CallShape) -> Option<&'a Expr> {
    shape.message(&call.args)
}
