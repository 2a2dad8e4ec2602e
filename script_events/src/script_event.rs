//! The closed set of event variants, for handlers that accept any event.

use crate::event::{sealed, Event, EventHeader};
use crate::variants::*;

/// Any script event.
///
/// Generic handlers either branch on [`Event::event_type`] or match on the
/// arms directly; both are exhaustive.
#[derive(Debug)]
pub enum ScriptEvent<'a> {
    Basic(BasicEvent),
    Note(NoteEvent<'a>),
    GhostMiss(GhostMissEvent),
    SongEvent(SongEventOccurrence<'a>),
    Update(UpdateEvent),
    SongTime(SongTimeEvent),
    Countdown(CountdownEvent),
    Dialogue(DialogueEvent<'a>),
    KeyboardInput(KeyboardInputEvent<'a>),
    SongLoad(SongLoadEvent),
    StateChange(StateChangeEvent<'a>),
    SubStateChange(SubStateChangeEvent<'a>),
    Pause(PauseEvent),
}

impl<'a> ScriptEvent<'a> {
    /// The wrapped variant as a trait object.
    pub fn as_event(&self) -> &(dyn Event + 'a) {
        match self {
            ScriptEvent::Basic(e) => e,
            ScriptEvent::Note(e) => e,
            ScriptEvent::GhostMiss(e) => e,
            ScriptEvent::SongEvent(e) => e,
            ScriptEvent::Update(e) => e,
            ScriptEvent::SongTime(e) => e,
            ScriptEvent::Countdown(e) => e,
            ScriptEvent::Dialogue(e) => e,
            ScriptEvent::KeyboardInput(e) => e,
            ScriptEvent::SongLoad(e) => e,
            ScriptEvent::StateChange(e) => e,
            ScriptEvent::SubStateChange(e) => e,
            ScriptEvent::Pause(e) => e,
        }
    }

    /// The wrapped variant as a mutable trait object.
    pub fn as_event_mut(&mut self) -> &mut (dyn Event + 'a) {
        match self {
            ScriptEvent::Basic(e) => e,
            ScriptEvent::Note(e) => e,
            ScriptEvent::GhostMiss(e) => e,
            ScriptEvent::SongEvent(e) => e,
            ScriptEvent::Update(e) => e,
            ScriptEvent::SongTime(e) => e,
            ScriptEvent::Countdown(e) => e,
            ScriptEvent::Dialogue(e) => e,
            ScriptEvent::KeyboardInput(e) => e,
            ScriptEvent::SongLoad(e) => e,
            ScriptEvent::StateChange(e) => e,
            ScriptEvent::SubStateChange(e) => e,
            ScriptEvent::Pause(e) => e,
        }
    }
}

impl sealed::Sealed for ScriptEvent<'_> {}

impl Event for ScriptEvent<'_> {
    fn header(&self) -> &EventHeader {
        self.as_event().header()
    }

    fn cancel(&mut self) {
        self.as_event_mut().cancel();
    }

    fn stop_propagation(&mut self) {
        self.as_event_mut().stop_propagation();
    }
}

impl std::fmt::Display for ScriptEvent<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self.as_event(), f)
    }
}

macro_rules! impl_from_variant {
    ($($arm:ident($ty:ty)),+ $(,)?) => {
        $(
            impl<'a> From<$ty> for ScriptEvent<'a> {
                fn from(event: $ty) -> Self {
                    ScriptEvent::$arm(event)
                }
            }
        )+
    };
}

impl_from_variant!(
    Basic(BasicEvent),
    Note(NoteEvent<'a>),
    GhostMiss(GhostMissEvent),
    SongEvent(SongEventOccurrence<'a>),
    Update(UpdateEvent),
    SongTime(SongTimeEvent),
    Countdown(CountdownEvent),
    Dialogue(DialogueEvent<'a>),
    KeyboardInput(KeyboardInputEvent<'a>),
    SongLoad(SongLoadEvent),
    StateChange(StateChangeEvent<'a>),
    SubStateChange(SubStateChangeEvent<'a>),
    Pause(PauseEvent),
);
