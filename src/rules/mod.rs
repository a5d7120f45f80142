//! Rule implementations for zaplint.
//!
//! This module contains pure functions that check a single logging call
//! site (or a single key of it). Each function takes only the specific inputs
//! it needs and returns a specific issue type. The order in which they run and
//! the options gating them live in [`crate::core::analyzer`].
//!
//! ## Module Structure
//!
//! - `global`: global logger accessors (`zap.L()`, `zap.S()`)
//! - `sugar`: `SugaredLogger` usage
//! - `static_msg`: non-constant messages
//! - `msg_style`: first-letter case of literal messages
//! - `keys`: raw, forbidden and badly cased field keys
//! - `layout`: trailing arguments sharing a line

pub mod global;
pub mod keys;
pub mod layout;
pub mod msg_style;
pub mod static_msg;
pub mod sugar;

pub use global::check_global;
pub use keys::{check_forbidden_key, check_key_naming, check_raw_key};
pub use layout::check_args_layout;
pub use msg_style::check_msg_style;
pub use static_msg::check_static_msg;
pub use sugar::check_sugar;
