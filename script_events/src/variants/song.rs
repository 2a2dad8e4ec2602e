//! Song timing and chart events.

use gameplay::{Difficulty, SongEventData, SongNoteData};

use crate::event::{impl_event, EventHeader, ScriptEventType};

/// A chart-embedded song event was reached. Always cancelable.
#[derive(Debug)]
pub struct SongEventOccurrence<'a> {
    header: EventHeader,
    event: &'a mut SongEventData,
}

impl<'a> SongEventOccurrence<'a> {
    /// Wrap a chart event the song just reached.
    pub fn new(event: &'a mut SongEventData) -> Self {
        Self {
            header: EventHeader::new(ScriptEventType::SongEvent, true),
            event,
        }
    }

    /// The song event being triggered.
    pub fn event(&self) -> &SongEventData {
        &*self.event
    }

    /// Edit the song event before the host applies it.
    pub fn event_mut(&mut self) -> &mut SongEventData {
        &mut *self.event
    }
}

impl_event!(SongEventOccurrence<'_>);

impl std::fmt::Display for SongEventOccurrence<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SongEventOccurrence(type={}, cancelable={}, event={})",
            self.header.event_type(),
            self.header.is_cancelable(),
            self.event
        )
    }
}

/// Per-frame tick. Never cancelable.
#[derive(Debug)]
pub struct UpdateEvent {
    header: EventHeader,
    elapsed: f64,
}

impl UpdateEvent {
    /// `elapsed` is the frame time in seconds.
    pub fn new(elapsed: f64) -> Self {
        Self {
            header: EventHeader::new(ScriptEventType::Update, false),
            elapsed,
        }
    }

    /// Frame time in seconds.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}

impl_event!(UpdateEvent);

impl std::fmt::Display for UpdateEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "UpdateEvent(type={}, cancelable={}, elapsed={})",
            self.header.event_type(),
            self.header.is_cancelable(),
            self.elapsed
        )
    }
}

/// Whether a [`SongTimeEvent`] marks a beat or a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SongTimeKind {
    Beat,
    Step,
}

impl From<SongTimeKind> for ScriptEventType {
    fn from(kind: SongTimeKind) -> Self {
        match kind {
            SongTimeKind::Beat => ScriptEventType::SongBeatHit,
            SongTimeKind::Step => ScriptEventType::SongStepHit,
        }
    }
}

/// Periodic beat or step tick. Always cancelable.
#[derive(Debug)]
pub struct SongTimeEvent {
    header: EventHeader,
    beat: i32,
    step: i32,
}

impl SongTimeEvent {
    /// Create a beat or step tick.
    pub fn new(kind: SongTimeKind, beat: i32, step: i32) -> Self {
        Self {
            header: EventHeader::new(kind.into(), true),
            beat,
            step,
        }
    }

    /// Create a `SONG_BEAT_HIT` tick.
    pub fn beat_hit(beat: i32, step: i32) -> Self {
        Self::new(SongTimeKind::Beat, beat, step)
    }

    /// Create a `SONG_STEP_HIT` tick.
    pub fn step_hit(beat: i32, step: i32) -> Self {
        Self::new(SongTimeKind::Step, beat, step)
    }

    /// Current beat.
    pub fn beat(&self) -> i32 {
        self.beat
    }

    /// Current step.
    pub fn step(&self) -> i32 {
        self.step
    }
}

impl_event!(SongTimeEvent);

impl std::fmt::Display for SongTimeEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SongTimeEvent(type={}, cancelable={}, beat={}, step={})",
            self.header.event_type(),
            self.header.is_cancelable(),
            self.beat,
            self.step
        )
    }
}

/// A chart finished parsing. Never cancelable.
///
/// `notes` is the one payload handlers are expected to replace wholesale,
/// e.g. to remix a chart. It stays an ordered list: duplicates are allowed
/// and the host plays notes back in list order.
#[derive(Debug)]
pub struct SongLoadEvent {
    header: EventHeader,
    id: String,
    difficulty: Difficulty,
    pub notes: Vec<SongNoteData>,
}

impl SongLoadEvent {
    /// Create the event for a freshly parsed chart.
    pub fn new(id: impl Into<String>, difficulty: Difficulty, notes: Vec<SongNoteData>) -> Self {
        Self {
            header: EventHeader::new(ScriptEventType::SongLoaded, false),
            id: id.into(),
            difficulty,
            notes,
        }
    }

    /// Song identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Difficulty the chart was loaded for.
    pub fn difficulty(&self) -> &Difficulty {
        &self.difficulty
    }

    /// Swap in a new note list, returning the previous one.
    pub fn replace_notes(&mut self, notes: Vec<SongNoteData>) -> Vec<SongNoteData> {
        std::mem::replace(&mut self.notes, notes)
    }

    /// Hand the final note list back to the host.
    pub fn into_notes(self) -> Vec<SongNoteData> {
        self.notes
    }
}

impl_event!(SongLoadEvent);

impl std::fmt::Display for SongLoadEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SongLoadEvent(type={}, cancelable={}, id={}, difficulty={}, notes={})",
            self.header.event_type(),
            self.header.is_cancelable(),
            self.id,
            self.difficulty,
            self.notes.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Event;
    use serde_json::json;

    #[test]
    fn test_song_event_occurrence_edits_shared_data() {
        let mut data = SongEventData::new(2000.0, "FocusCamera", json!({ "char": "dad" }));
        {
            let mut event = SongEventOccurrence::new(&mut data);
            assert!(event.is_cancelable());
            event.event_mut().set("char", json!("bf"));
            event.cancel();
            assert!(event.is_canceled());
        }
        assert_eq!(data.get_str("char"), Some("bf"));
    }

    #[test]
    fn test_update_event_cannot_be_canceled() {
        let mut event = UpdateEvent::new(1.0 / 60.0);
        event.cancel();

        assert!(!event.is_canceled());
        assert!((event.elapsed() - 1.0 / 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_song_time_event() {
        let mut event = SongTimeEvent::beat_hit(8, 32);
        assert_eq!(event.event_type(), ScriptEventType::SongBeatHit);

        event.cancel();
        event.stop_propagation();

        assert!(event.is_canceled());
        assert!(!event.should_propagate());
        assert_eq!(event.beat(), 8);
        assert_eq!(event.step(), 32);
        assert_eq!(
            event.to_string(),
            "SongTimeEvent(type=SONG_BEAT_HIT, cancelable=true, beat=8, step=32)"
        );
    }

    #[test]
    fn test_song_load_notes_replaced() {
        let n1 = SongNoteData::new(100.0, 0);
        let n2 = SongNoteData::new(200.0, 1);
        let n3 = SongNoteData::new(300.0, 2);

        let mut event = SongLoadEvent::new(
            "bopeebo",
            Difficulty::new("hard"),
            vec![n1.clone(), n2.clone()],
        );
        let previous = event.replace_notes(vec![n3.clone()]);

        assert_eq!(previous, vec![n1, n2]);
        assert_eq!(event.notes, vec![n3]);
        assert_eq!(event.id(), "bopeebo");
        assert_eq!(event.difficulty().as_str(), "hard");
    }

    #[test]
    fn test_song_load_keeps_order_and_duplicates() {
        let a = SongNoteData::new(500.0, 3);
        let b = SongNoteData::new(100.0, 0);

        let mut event = SongLoadEvent::new("tutorial", Difficulty::default(), Vec::new());
        event.notes = vec![a.clone(), b.clone(), a.clone()];
        event.cancel();

        assert!(!event.is_canceled());
        assert_eq!(event.into_notes(), vec![a.clone(), b, a]);
    }
}
