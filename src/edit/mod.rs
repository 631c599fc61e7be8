//! Editing engine for the line model
//!
//! Id generation and the structural split/merge operations. All other
//! line mutation (text replacement, style application) is a property
//! update that never changes the sequence shape.

pub mod engine;
pub mod id;

pub use engine::{backspace, split_line, BackspaceOutcome, Caret, EditError};
pub use id::IdGenerator;
