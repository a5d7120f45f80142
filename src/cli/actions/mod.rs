//! Actions for applying suggested fixes.
//!
//! Actions convert Issues into Operations and execute them.
//!
//! ```text
//! Issue (problem detected)
//!     ↓
//! Action (Issue → Operation conversion)
//!     ↓
//! Operation (text replacement in a Go source)
//! ```

mod apply_fix;
mod operation;
mod traits;

pub use apply_fix::ApplyFix;
pub use operation::Operation;
pub use traits::{Action, ActionStats};
