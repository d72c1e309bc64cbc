//! Presentation-facing APIs.
//!
//! Thin, pure functions between the resolver and whatever renders its
//! output (editor plugin, LSP server). No editor types appear here; rows
//! are anchored by byte offset and converted at the presentation boundary
//! (see [`crate::base::LineIndex`]).

mod goto;
mod inlay_hints;

pub use goto::{GotoTarget, class_location, member_location};
pub use inlay_hints::{HintRow, RowKind, file_member_rows, member_rows};
