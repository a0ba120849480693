//! fedgrid-cursor — retry-aware selection over a ranked sequence.
//!
//! The final pipeline stage hands the workflow a `SelectionCursor`: an
//! immutable ranked candidate list plus a forward-only position and a
//! grow-only failed set. Its snapshot is what a long-running deployment
//! workflow persists to survive restarts mid-placement.

pub mod cursor;
pub mod error;

pub use cursor::{CursorSnapshot, CursorState, SelectionCursor};
pub use error::{CursorError, CursorResult};
