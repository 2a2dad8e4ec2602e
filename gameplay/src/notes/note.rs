//! Live note sprites owned by the host while a song plays.

use serde::{Deserialize, Serialize};

use super::{NoteId, SongNoteData};
use crate::mechanics::NoteDirection;

/// A note currently on screen, as tracked by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteSprite {
    pub id: NoteId,
    pub data: SongNoteData,

    // Judgement state, updated by the host every frame
    pub may_hit: bool,
    pub too_early: bool,
    pub has_been_hit: bool,
    pub has_missed: bool,
    /// Hit after a later note in the same lane.
    pub lower_priority: bool,

    // Presentation
    pub visible: bool,
    pub alpha: f32,
}

impl NoteSprite {
    /// Spawn a sprite for the given chart note.
    pub fn new(data: SongNoteData) -> Self {
        Self {
            id: NoteId::new(),
            data,
            may_hit: false,
            too_early: true,
            has_been_hit: false,
            has_missed: false,
            lower_priority: false,
            visible: true,
            alpha: 1.0,
        }
    }

    pub fn direction(&self) -> NoteDirection {
        self.data.direction()
    }

    /// Whether the note has been judged either way.
    pub fn is_judged(&self) -> bool {
        self.has_been_hit || self.has_missed
    }

    /// Mark the note as hit and hide it.
    pub fn mark_hit(&mut self) {
        self.has_been_hit = true;
        self.may_hit = false;
        self.visible = false;
    }

    /// Mark the note as missed and fade it.
    pub fn mark_missed(&mut self) {
        self.has_missed = true;
        self.may_hit = false;
        self.alpha = 0.3;
    }
}

impl std::fmt::Display for NoteSprite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Note({})", self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sprite() {
        let sprite = NoteSprite::new(SongNoteData::new(300.0, 1));
        assert_eq!(sprite.direction(), NoteDirection::Down);
        assert!(sprite.visible);
        assert!(!sprite.is_judged());
    }

    #[test]
    fn test_mark_hit() {
        let mut sprite = NoteSprite::new(SongNoteData::new(300.0, 1));
        sprite.may_hit = true;
        sprite.mark_hit();

        assert!(sprite.has_been_hit);
        assert!(!sprite.may_hit);
        assert!(!sprite.visible);
        assert!(sprite.is_judged());
    }

    #[test]
    fn test_mark_missed() {
        let mut sprite = NoteSprite::new(SongNoteData::new(300.0, 1));
        sprite.mark_missed();

        assert!(sprite.has_missed);
        assert!(sprite.visible);
        assert!(sprite.alpha < 1.0);
    }
}
