//! zaplint - convention checker for go.uber.org/zap logging calls
//!
//! zaplint reads syntax dumps of type-checked Go files and checks every call
//! into the zap API against a configurable style policy: no global loggers,
//! no sugared logger, static and consistently styled messages, well-named
//! field keys, and one argument per line.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, actions, report output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Syntax model, call catalog, resolution and the per-file analyzer
//! - `issues`: Issue type definitions and reporting
//! - `rules`: The individual style checks

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
