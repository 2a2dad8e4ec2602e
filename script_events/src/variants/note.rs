//! Note judgement events: hits, misses, and ghost misses.

use gameplay::{NoteDirection, NoteSprite, PlayTuning};

use crate::event::{impl_event, Event, EventHeader, ScriptEventType};

/// Whether a [`NoteEvent`] reports a hit or a miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteEventKind {
    Hit,
    Miss,
}

impl From<NoteEventKind> for ScriptEventType {
    fn from(kind: NoteEventKind) -> Self {
        match kind {
            NoteEventKind::Hit => ScriptEventType::NoteHit,
            NoteEventKind::Miss => ScriptEventType::NoteMiss,
        }
    }
}

/// A specific note was hit or missed.
///
/// The note sprite is shared with the host: handlers may edit it but cannot
/// swap it for another one.
#[derive(Debug)]
pub struct NoteEvent<'a> {
    header: EventHeader,
    note: &'a mut NoteSprite,
    combo_count: u32,
    /// Play the miss scratch sound. Ignored for hits.
    pub play_sound: bool,
}

impl<'a> NoteEvent<'a> {
    /// Create a hit or miss event for `note`.
    pub fn new(
        kind: NoteEventKind,
        note: &'a mut NoteSprite,
        combo_count: u32,
        cancelable: bool,
    ) -> Self {
        Self {
            header: EventHeader::new(kind.into(), cancelable),
            note,
            combo_count,
            play_sound: true,
        }
    }

    /// Create a `NOTE_HIT` event.
    pub fn hit(note: &'a mut NoteSprite, combo_count: u32, cancelable: bool) -> Self {
        Self::new(NoteEventKind::Hit, note, combo_count, cancelable)
    }

    /// Create a `NOTE_MISS` event.
    pub fn miss(note: &'a mut NoteSprite, combo_count: u32, cancelable: bool) -> Self {
        Self::new(NoteEventKind::Miss, note, combo_count, cancelable)
    }

    /// The judged note.
    pub fn note(&self) -> &NoteSprite {
        &*self.note
    }

    /// Edit the judged note in place.
    pub fn note_mut(&mut self) -> &mut NoteSprite {
        &mut *self.note
    }

    /// Combo at the moment of the judgement.
    pub fn combo_count(&self) -> u32 {
        self.combo_count
    }

    /// The combo the host should commit, or `None` if the event was canceled.
    pub fn combo_to_apply(&self) -> Option<u32> {
        (!self.is_canceled()).then_some(self.combo_count)
    }
}

impl_event!(NoteEvent<'_>);

impl std::fmt::Display for NoteEvent<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "NoteEvent(type={}, cancelable={}, note={}, combo_count={})",
            self.header.event_type(),
            self.header.is_cancelable(),
            self.note,
            self.combo_count
        )
    }
}

/// Health and score penalty the host applies for a ghost miss.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GhostMissPenalty {
    pub health_change: f64,
    pub score_change: i32,
}

/// A key was pressed in a lane with nothing to hit.
///
/// Always cancelable. Handlers can zero out `health_change` and
/// `score_change` to waive the penalty while keeping the sound and
/// animation, or toggle those independently.
#[derive(Debug)]
pub struct GhostMissEvent {
    header: EventHeader,
    direction: NoteDirection,
    has_possible_notes: bool,
    pub health_change: f64,
    pub score_change: i32,
    pub play_sound: bool,
    pub play_anim: bool,
}

impl GhostMissEvent {
    /// Create a ghost miss with explicit signed penalties.
    pub fn new(
        direction: NoteDirection,
        has_possible_notes: bool,
        health_change: f64,
        score_change: i32,
    ) -> Self {
        Self {
            header: EventHeader::new(ScriptEventType::NoteGhostMiss, true),
            direction,
            has_possible_notes,
            health_change,
            score_change,
            play_sound: true,
            play_anim: true,
        }
    }

    /// Build the event with the penalties configured in `tuning`. With ghost
    /// tapping on, both changes start at zero.
    pub fn from_tuning(
        direction: NoteDirection,
        has_possible_notes: bool,
        tuning: &PlayTuning,
    ) -> Self {
        Self::new(
            direction,
            has_possible_notes,
            tuning.ghost_miss_health_change(),
            tuning.ghost_miss_score_change(),
        )
    }

    /// Lane that was pressed.
    pub fn direction(&self) -> NoteDirection {
        self.direction
    }

    /// Whether any note in any lane could have been hit at the time.
    pub fn has_possible_notes(&self) -> bool {
        self.has_possible_notes
    }

    /// The penalty to apply, or `None` if the event was canceled.
    pub fn penalty(&self) -> Option<GhostMissPenalty> {
        (!self.is_canceled()).then_some(GhostMissPenalty {
            health_change: self.health_change,
            score_change: self.score_change,
        })
    }
}

impl_event!(GhostMissEvent);

impl std::fmt::Display for GhostMissEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "GhostMissEvent(type={}, cancelable={}, direction={}, has_possible_notes={}, health_change={}, score_change={})",
            self.header.event_type(),
            self.header.is_cancelable(),
            self.direction,
            self.has_possible_notes,
            self.health_change,
            self.score_change
        )
    }
}
