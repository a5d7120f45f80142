//! Argument extraction for catalogued calls.
//!
//! Pulls the semantically meaningful sub-expressions out of a logging call:
//! the message argument and the keys of the attached fields.

pub mod keys;

pub use keys::{Keys, message_arg};
