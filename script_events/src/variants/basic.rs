//! Payload-free lifecycle signals.

use crate::event::{impl_event, EventHeader, ScriptEventType};

/// Occurrences that carry nothing beyond the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleKind {
    Create,
    Destroy,
    Added,
    SongStart,
    SongEnd,
    SongRetry,
    GameOver,
    Resume,
    FocusLost,
    FocusGained,
}

impl From<LifecycleKind> for ScriptEventType {
    fn from(kind: LifecycleKind) -> Self {
        match kind {
            LifecycleKind::Create => ScriptEventType::Create,
            LifecycleKind::Destroy => ScriptEventType::Destroy,
            LifecycleKind::Added => ScriptEventType::Added,
            LifecycleKind::SongStart => ScriptEventType::SongStart,
            LifecycleKind::SongEnd => ScriptEventType::SongEnd,
            LifecycleKind::SongRetry => ScriptEventType::SongRetry,
            LifecycleKind::GameOver => ScriptEventType::GameOver,
            LifecycleKind::Resume => ScriptEventType::Resume,
            LifecycleKind::FocusLost => ScriptEventType::FocusLost,
            LifecycleKind::FocusGained => ScriptEventType::FocusGained,
        }
    }
}

/// A lifecycle signal such as `CREATE` or `SONG_END`.
#[derive(Debug)]
pub struct BasicEvent {
    header: EventHeader,
}

impl BasicEvent {
    /// Create a payload-free lifecycle event.
    pub fn new(kind: LifecycleKind, cancelable: bool) -> Self {
        Self {
            header: EventHeader::new(kind.into(), cancelable),
        }
    }
}

impl_event!(BasicEvent);

impl std::fmt::Display for BasicEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Event;

    #[test]
    fn test_basic_event() {
        let mut event = BasicEvent::new(LifecycleKind::SongEnd, true);
        assert_eq!(event.event_type(), ScriptEventType::SongEnd);
        assert!(!event.is_canceled());

        event.cancel();
        assert!(event.is_canceled());
        assert_eq!(
            event.to_string(),
            "ScriptEvent(type=SONG_END, cancelable=true)"
        );
    }

    #[test]
    fn test_non_cancelable_basic_event() {
        let mut event = BasicEvent::new(LifecycleKind::Create, false);
        event.cancel();
        assert!(!event.is_canceled());
        assert!(event.should_propagate());
    }
}
