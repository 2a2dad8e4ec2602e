//! Note definitions: chart data and the live sprites the host plays.

mod note;
mod note_data;

pub use note::*;
pub use note_data::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a spawned note sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteId(pub Uuid);

impl NoteId {
    /// Create a new random note ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a nil note ID.
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
