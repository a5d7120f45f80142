//! Core analysis engine.
//!
//! ## Pipeline
//!
//! 1. **Discovery**: `file_scanner` collects syntax dumps (`*.ast.json`)
//! 2. **Resolution**: `resolve` maps each call's callee to a [`catalog`] entry
//! 3. **Extraction**: `extract` pulls the message and field keys out of a call
//! 4. **Rules**: `analyzer` runs the enabled rules and collects issues
//!
//! [`CheckContext`] drives the pipeline for the CLI commands.

pub mod analyzer;
pub mod ast;
pub mod case;
pub mod catalog;
pub mod context;
pub mod extract;
pub mod file_scanner;
pub mod literal;
pub mod policy;
pub mod resolve;
pub mod source;


pub use analyzer::FileAnalyzer;
pub use context::CheckContext;
pub use policy::{Options, Policy};
pub use source::{SourceContext, SourceLocation, SourceText};
