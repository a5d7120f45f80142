//! Catalog of known `go.uber.org/zap` call shapes.
//!
//! Maps a normalized callee identity to the layout of the call's arguments.
//! Callees that are not in the catalog are not logging calls and are ignored.

use std::{collections::HashMap, sync::LazyLock};

use crate::core::ast::Expr;
use crate::core::resolve::SymbolId;

/// Import path of the logging package.
pub const ZAP_PKG: &str = "go.uber.org/zap";

const LOGGER: &str = "(*go.uber.org/zap.Logger)";
const SUGARED_LOGGER: &str = "(*go.uber.org/zap.SugaredLogger)";

/// Log levels shared by `Logger` and `SugaredLogger`.
const LEVELS: &[&str] = &["Debug", "Info", "Warn", "Error", "DPanic", "Panic", "Fatal"];

/// Argument layout of a catalogued call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CallShape {
    /// `zap.L()` / `zap.S()`: no arguments of interest.
    pub is_global: bool,
    /// Belongs to `SugaredLogger`.
    pub is_sugar: bool,
    /// Trailing arguments are flat key/value pairs (`Infow` and friends).
    pub is_kv: bool,
    /// Index of the message argument.
    pub msg_pos: Option<usize>,
    /// Index of the first trailing (variadic) argument.
    pub args_start: usize,
}

impl CallShape {
    const GLOBAL: CallShape = CallShape {
        is_global: true,
        is_sugar: false,
        is_kv: false,
        msg_pos: None,
        args_start: 0,
    };

    const fn new(is_sugar: bool, is_kv: bool, has_msg: bool) -> Self {
        CallShape {
            is_global: false,
            is_sugar,
            is_kv,
            msg_pos: if has_msg { Some(0) } else { None },
            args_start: if has_msg { 1 } else { 0 },
        }
    }

    pub fn has_msg(&self) -> bool {
        self.msg_pos.is_some()
    }

    /// The message argument, if the shape has one and the call supplies it.
    pub fn message<'a>(&self, args: &'a [Expr]) -> Option<&'a Expr> {
        self.msg_pos.and_then(|pos| args.get(pos))
    }

    /// The trailing arguments carrying fields or key/value pairs.
    pub fn variadic_args<'a>(&self, args: &'a [Expr]) -> &'a [Expr] {
        args.get(self.args_start..).unwrap_or_default()
    }
}

static CATALOG: LazyLock<HashMap<String, CallShape>> = LazyLock::new(|| {
    let mut table = HashMap::new();

    table.insert(format!("{ZAP_PKG}.L"), CallShape::GLOBAL);
    table.insert(format!("{ZAP_PKG}.S"), CallShape::GLOBAL);

    for level in LEVELS {
        table.insert(format!("{LOGGER}.{level}"), CallShape::new(false, false, true));
        table.insert(format!("{SUGARED_LOGGER}.{level}"), CallShape::new(true, false, false));
        table.insert(format!("{SUGARED_LOGGER}.{level}f"), CallShape::new(true, false, true));
        table.insert(format!("{SUGARED_LOGGER}.{level}w"), CallShape::new(true, true, true));
    }

    table.insert(format!("{LOGGER}.With"), CallShape::new(false, false, false));
    table.insert(format!("{LOGGER}.Sugar"), CallShape::new(false, false, false));
    table.insert(format!("{SUGARED_LOGGER}.With"), CallShape::new(true, false, false));

    table
});

/// Look up the call shape for a normalized callee identity.
pub fn lookup(id: &SymbolId) -> Option<CallShape> {
    CATALOG.get(id.as_str()).copied()
}
