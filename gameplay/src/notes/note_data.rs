//! Chart note data as parsed from a song file.

use serde::{Deserialize, Serialize};

use crate::mechanics::{NoteDirection, STRUMLINE_SIZE};

/// Which side of the field a note belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strumline {
    Player,
    Opponent,
}

/// A single note in a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongNoteData {
    /// Song position in milliseconds.
    pub time: f64,
    /// Raw lane index. `0..4` is the player, `4..8` the opponent.
    pub data: u8,
    /// Hold length in milliseconds, `0.0` for taps.
    #[serde(default)]
    pub length: f64,
    /// Custom note kind, e.g. `"mom"` or `"hey"`.
    #[serde(default)]
    pub kind: Option<String>,
}

impl SongNoteData {
    /// Create a tap note.
    pub fn new(time: f64, data: u8) -> Self {
        Self {
            time,
            data,
            length: 0.0,
            kind: None,
        }
    }

    /// Set the hold length.
    pub fn with_length(mut self, length: f64) -> Self {
        self.length = length.max(0.0);
        self
    }

    /// Set the note kind.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn direction(&self) -> NoteDirection {
        NoteDirection::from_lane(self.data)
    }

    pub fn strumline(&self) -> Strumline {
        if self.data < STRUMLINE_SIZE {
            Strumline::Player
        } else {
            Strumline::Opponent
        }
    }

    pub fn is_hold(&self) -> bool {
        self.length > 0.0
    }

    /// Song position at which the note (including its hold) ends.
    pub fn end_time(&self) -> f64 {
        self.time + self.length
    }
}

impl std::fmt::Display for SongNoteData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}ms", self.direction(), self.time)?;
        if self.is_hold() {
            write!(f, "+{}ms", self.length)?;
        }
        if let Some(kind) = &self.kind {
            write!(f, " [{}]", kind)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tap_note() {
        let note = SongNoteData::new(1200.0, 2);
        assert_eq!(note.direction(), NoteDirection::Up);
        assert_eq!(note.strumline(), Strumline::Player);
        assert!(!note.is_hold());
        assert_eq!(note.end_time(), 1200.0);
    }

    #[test]
    fn test_opponent_hold_note() {
        let note = SongNoteData::new(500.0, 7).with_length(250.0);
        assert_eq!(note.direction(), NoteDirection::Right);
        assert_eq!(note.strumline(), Strumline::Opponent);
        assert!(note.is_hold());
        assert_eq!(note.end_time(), 750.0);
    }

    #[test]
    fn test_negative_length_clamped() {
        let note = SongNoteData::new(0.0, 0).with_length(-10.0);
        assert!(!note.is_hold());
    }

    #[test]
    fn test_display() {
        let note = SongNoteData::new(100.0, 0).with_length(50.0).with_kind("hey");
        assert_eq!(note.to_string(), "left@100ms+50ms [hey]");
    }

    #[test]
    fn test_deserialize_defaults() {
        let note: SongNoteData = serde_json::from_str(r#"{"time": 10.0, "data": 1}"#).unwrap();
        assert_eq!(note, SongNoteData::new(10.0, 1));
    }
}
