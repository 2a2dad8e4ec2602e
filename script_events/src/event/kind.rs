//! The event type tag.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Discriminator carried by every event.
///
/// Handlers registered for "all events" branch on this instead of on the
/// concrete Rust type. The script-facing names are the `SCREAMING_SNAKE_CASE`
/// forms returned by [`ScriptEventType::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScriptEventType {
    // Lifecycle
    Create,
    Destroy,
    Added,
    Update,
    FocusLost,
    FocusGained,

    // Gameplay
    NoteHit,
    NoteMiss,
    NoteGhostMiss,
    Pause,
    Resume,
    GameOver,

    // Song
    SongEvent,
    SongBeatHit,
    SongStepHit,
    SongStart,
    SongEnd,
    SongRetry,
    SongLoaded,

    // Countdown
    CountdownStart,
    CountdownStep,
    CountdownEnd,

    // Dialogue
    DialogueStart,
    DialogueLine,
    DialogueCompleteLine,
    DialogueSkip,
    DialogueEnd,

    // Input
    KeyDown,
    KeyUp,

    // Screens
    StateChangeBegin,
    StateChangeEnd,
    SubstateOpenBegin,
    SubstateOpenEnd,
    SubstateCloseBegin,
    SubstateCloseEnd,
}

impl ScriptEventType {
    /// Every tag, in declaration order.
    pub const ALL: [ScriptEventType; 35] = [
        ScriptEventType::Create,
        ScriptEventType::Destroy,
        ScriptEventType::Added,
        ScriptEventType::Update,
        ScriptEventType::FocusLost,
        ScriptEventType::FocusGained,
        ScriptEventType::NoteHit,
        ScriptEventType::NoteMiss,
        ScriptEventType::NoteGhostMiss,
        ScriptEventType::Pause,
        ScriptEventType::Resume,
        ScriptEventType::GameOver,
        ScriptEventType::SongEvent,
        ScriptEventType::SongBeatHit,
        ScriptEventType::SongStepHit,
        ScriptEventType::SongStart,
        ScriptEventType::SongEnd,
        ScriptEventType::SongRetry,
        ScriptEventType::SongLoaded,
        ScriptEventType::CountdownStart,
        ScriptEventType::CountdownStep,
        ScriptEventType::CountdownEnd,
        ScriptEventType::DialogueStart,
        ScriptEventType::DialogueLine,
        ScriptEventType::DialogueCompleteLine,
        ScriptEventType::DialogueSkip,
        ScriptEventType::DialogueEnd,
        ScriptEventType::KeyDown,
        ScriptEventType::KeyUp,
        ScriptEventType::StateChangeBegin,
        ScriptEventType::StateChangeEnd,
        ScriptEventType::SubstateOpenBegin,
        ScriptEventType::SubstateOpenEnd,
        ScriptEventType::SubstateCloseBegin,
        ScriptEventType::SubstateCloseEnd,
    ];

    /// Script-facing name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScriptEventType::Create => "CREATE",
            ScriptEventType::Destroy => "DESTROY",
            ScriptEventType::Added => "ADDED",
            ScriptEventType::Update => "UPDATE",
            ScriptEventType::FocusLost => "FOCUS_LOST",
            ScriptEventType::FocusGained => "FOCUS_GAINED",
            ScriptEventType::NoteHit => "NOTE_HIT",
            ScriptEventType::NoteMiss => "NOTE_MISS",
            ScriptEventType::NoteGhostMiss => "NOTE_GHOST_MISS",
            ScriptEventType::Pause => "PAUSE",
            ScriptEventType::Resume => "RESUME",
            ScriptEventType::GameOver => "GAME_OVER",
            ScriptEventType::SongEvent => "SONG_EVENT",
            ScriptEventType::SongBeatHit => "SONG_BEAT_HIT",
            ScriptEventType::SongStepHit => "SONG_STEP_HIT",
            ScriptEventType::SongStart => "SONG_START",
            ScriptEventType::SongEnd => "SONG_END",
            ScriptEventType::SongRetry => "SONG_RETRY",
            ScriptEventType::SongLoaded => "SONG_LOADED",
            ScriptEventType::CountdownStart => "COUNTDOWN_START",
            ScriptEventType::CountdownStep => "COUNTDOWN_STEP",
            ScriptEventType::CountdownEnd => "COUNTDOWN_END",
            ScriptEventType::DialogueStart => "DIALOGUE_START",
            ScriptEventType::DialogueLine => "DIALOGUE_LINE",
            ScriptEventType::DialogueCompleteLine => "DIALOGUE_COMPLETE_LINE",
            ScriptEventType::DialogueSkip => "DIALOGUE_SKIP",
            ScriptEventType::DialogueEnd => "DIALOGUE_END",
            ScriptEventType::KeyDown => "KEY_DOWN",
            ScriptEventType::KeyUp => "KEY_UP",
            ScriptEventType::StateChangeBegin => "STATE_CHANGE_BEGIN",
            ScriptEventType::StateChangeEnd => "STATE_CHANGE_END",
            ScriptEventType::SubstateOpenBegin => "SUBSTATE_OPEN_BEGIN",
            ScriptEventType::SubstateOpenEnd => "SUBSTATE_OPEN_END",
            ScriptEventType::SubstateCloseBegin => "SUBSTATE_CLOSE_BEGIN",
            ScriptEventType::SubstateCloseEnd => "SUBSTATE_CLOSE_END",
        }
    }

    /// Coarse grouping, handy for filtering logs.
    pub fn category(&self) -> &'static str {
        use ScriptEventType::*;
        match self {
            Create | Destroy | Added | Update | FocusLost | FocusGained => "lifecycle",
            NoteHit | NoteMiss | NoteGhostMiss | Pause | Resume | GameOver => "gameplay",
            SongEvent | SongBeatHit | SongStepHit | SongStart | SongEnd | SongRetry
            | SongLoaded => "song",
            CountdownStart | CountdownStep | CountdownEnd => "countdown",
            DialogueStart | DialogueLine | DialogueCompleteLine | DialogueSkip | DialogueEnd => {
                "dialogue"
            }
            KeyDown | KeyUp => "input",
            StateChangeBegin | StateChangeEnd | SubstateOpenBegin | SubstateOpenEnd
            | SubstateCloseBegin | SubstateCloseEnd => "state",
        }
    }
}

impl std::fmt::Display for ScriptEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a script names an event type that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown script event type `{0}`")]
pub struct ParseEventTypeError(pub String);

impl std::str::FromStr for ScriptEventType {
    type Err = ParseEventTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScriptEventType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| ParseEventTypeError(s.to_string()))
    }
}
