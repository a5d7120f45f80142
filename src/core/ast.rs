//! Syntax model for Go expressions handed over by the type-checking frontend.
//!
//! The frontend parses and type-checks Go sources, then serializes each file's
//! top-level expressions into a *syntax dump* (`*.ast.json`). Everything the
//! analyzer needs from the type checker is already attached to the nodes:
//!
//! - every call carries its statically resolved [`Callee`] (or none when the
//!   target is only known at run time),
//! - every identifier carries the [`ObjKind`] of the object it denotes,
//! - every node carries a [`Span`] of 1-based line/column positions.
//!
//! Traversal follows the `Visit`/`walk_*` convention: override the `visit_*`
//! methods you care about and call the matching `walk_*` function to descend.

use serde::{Deserialize, Serialize};

/// A 1-based source position. `col` counts bytes, like `go/token`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Pos {
    pub line: usize,
    pub col: usize,
}

impl Pos {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

/// Half-open source range `[pos, end)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub pos: Pos,
    pub end: Pos,
}

impl Span {
    pub fn new(pos: Pos, end: Pos) -> Self {
        Self { pos, end }
    }
}

/// One serialized Go source file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileDump {
    /// Path of the Go source file, relative to the source root.
    pub file: String,
    /// Top-level expressions of the file, in source order.
    #[serde(default)]
    pub exprs: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum Expr {
    Lit(Lit),
    Ident(Ident),
    Selector(SelectorExpr),
    Call(CallExpr),
    Binary(BinaryExpr),
    /// Any expression the analyzer does not inspect. Nested expressions that
    /// may contain calls (closures, composite literals, ...) are kept as children.
    Other(OtherExpr),
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::Lit(lit) => lit.span,
            Expr::Ident(ident) => ident.span,
            Expr::Selector(sel) => sel.span,
            Expr::Call(call) => call.span,
            Expr::Binary(bin) => bin.span,
            Expr::Other(other) => other.span,
        }
    }

    pub fn pos(&self) -> Pos {
        self.span().pos
    }

    /// Returns the literal if this is a string literal (interpreted or raw).
    pub fn as_str_lit(&self) -> Option<&Lit> {
        match self {
            Expr::Lit(lit) if lit.kind == LitKind::String => Some(lit),
            _ => None,
        }
    }

    pub fn as_call(&self) -> Option<&CallExpr> {
        match self {
            Expr::Call(call) => Some(call),
            _ => None,
        }
    }
}

impl From<CallExpr> for Expr {
    fn from(call: CallExpr) -> Self {
        Expr::Call(call)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LitKind {
    Int,
    Float,
    Imag,
    Char,
    String,
}

/// A basic literal. `value` is the raw source text, quotes included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lit {
    pub span: Span,
    pub kind: LitKind,
    pub value: String,
}

/// Kind of object an identifier resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjKind {
    Const,
    Var,
    Func,
    Type,
    Package,
    Nil,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ident {
    pub span: Span,
    pub name: String,
    /// `None` when the identifier is unresolved (blank, label, ...).
    #[serde(default)]
    pub obj: Option<ObjKind>,
}

impl Ident {
    pub fn is_const(&self) -> bool {
        self.obj == Some(ObjKind::Const)
    }
}

/// `x.sel`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectorExpr {
    pub span: Span,
    pub x: Box<Expr>,
    pub sel: Ident,
}

/// The statically known target of a call, as `types.Func` describes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Callee {
    /// Fully qualified name, e.g. `(*go.uber.org/zap.Logger).Info`.
    pub full_name: String,
    /// Import path of the declaring package; absent for builtins.
    #[serde(default)]
    pub pkg_path: Option<String>,
    /// Short name, e.g. `Info`.
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallExpr {
    pub span: Span,
    pub fun: Box<Expr>,
    #[serde(default)]
    pub args: Vec<Expr>,
    #[serde(default)]
    pub callee: Option<Callee>,
}

impl CallExpr {
    /// The receiver call in a chain like `x.With(...).Info(...)`.
    pub fn receiver_call(&self) -> Option<&CallExpr> {
        match self.fun.as_ref() {
            Expr::Selector(sel) => sel.x.as_call(),
            _ => None,
        }
    }

    /// Position of the called name: the selector for `x.Info(...)`, otherwise
    /// the start of the call.
    pub fn operator_pos(&self) -> Pos {
        match self.fun.as_ref() {
            Expr::Selector(sel) => sel.sel.span.pos,
            _ => self.span.pos,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpr {
    pub span: Span,
    /// Operator token as written, e.g. `+`.
    pub op: String,
    pub x: Box<Expr>,
    pub y: Box<Expr>,
}

impl BinaryExpr {
    pub fn is_add(&self) -> bool {
        self.op == "+"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherExpr {
    pub span: Span,
    #[serde(default)]
    pub children: Vec<Expr>,
}

/// Read-only preorder traversal over [`Expr`] trees.
pub trait Visit {
    fn visit_expr(&mut self, expr: &Expr) {
        walk_expr(self, expr);
    }

    fn visit_call_expr(&mut self, call: &CallExpr) {
        walk_call_expr(self, call);
    }
}

pub fn walk_expr<V: Visit + ?Sized>(visitor: &mut V, expr: &Expr) {
    match expr {
        Expr::Lit(_) | Expr::Ident(_) => {}
        Expr::Selector(sel) => visitor.visit_expr(&sel.x),
        Expr::Call(call) => visitor.visit_call_expr(call),
        Expr::Binary(bin) => {
            visitor.visit_expr(&bin.x);
            visitor.visit_expr(&bin.y);
        }
        Expr::Other(other) => {
            for child in &other.children {
                visitor.visit_expr(child);
            }
        }
    }
}

pub fn walk_call_expr<V: Visit + ?Sized>(visitor: &mut V, call: &CallExpr) {
    visitor.visit_expr(&call.fun);
    for arg in &call.args {
        visitor.visit_expr(arg);
    }
}
