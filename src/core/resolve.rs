//! Callee resolution.
//!
//! Turns the statically resolved target of a call into a [`SymbolId`] that can
//! be looked up in the catalog. A vendored copy of the logging package
//! (`app/vendor/go.uber.org/zap`) resolves to the same identity as the
//! canonical one.

use std::fmt;

use crate::core::ast::CallExpr;
use crate::core::catalog::{self, CallShape};

const VENDOR: &str = "vendor/";

/// Characters that may precede a path inside a qualified Go name.
const PATH_DELIMITERS: &[u8] = b"/*[] ,\t)";

/// Normalized, fully qualified callee identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymbolId(String);

impl SymbolId {
    pub fn new(full_name: &str) -> Self {
        Self(clean_vendor_path(full_name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strip the vendor segment from a package path or qualified name.
///
/// Splices out everything between the last `vendor/` marker and the nearest
/// delimiter before the path segment that holds it.
///
/// ```
/// use zaplint::core::resolve::clean_vendor_path;
///
/// assert_eq!(
///     clean_vendor_path("(*app/vendor/go.uber.org/zap.Logger).Info"),
///     "(*go.uber.org/zap.Logger).Info"
/// );
/// assert_eq!(clean_vendor_path("go.uber.org/zap"), "go.uber.org/zap");
/// ```
pub fn clean_vendor_path(path: &str) -> String {
    let Some(marker) = path.rfind(VENDOR) else {
        return path.to_string();
    };

    let start = match marker.checked_sub(1) {
        Some(slash_before) => path.as_bytes()[..slash_before]
            .iter()
            .rposition(|b| PATH_DELIMITERS.contains(b))
            .map_or(0, |delimiter| delimiter + 1),
        None => 0,
    };

    format!("{}{}", &path[..start], &path[marker + VENDOR.len()..])
}

/// Normalized identity of the statically known callee, if any.
pub fn static_callee(call: &CallExpr) -> Option<SymbolId> {
    call.callee
        .as_ref()
        .map(|callee| SymbolId::new(&callee.full_name))
}

/// Normalized import path of the callee's package, if any.
pub fn callee_pkg_path(call: &CallExpr) -> Option<String> {
    call.callee
        .as_ref()
        .and_then(|callee| callee.pkg_path.as_deref())
        .map(clean_vendor_path)
}

/// Resolve a call to its catalog entry. Returns `None` for dynamic calls and
/// for callees outside the catalog.
pub fn resolve_call(call: &CallExpr) -> Option<(SymbolId, CallShape)> {
    let id = static_callee(call)?;
    let shape = catalog::lookup(&id)?;
    Some((id, shape))
}
