//! Events around the song proper: countdown, dialogue, pausing.

use gameplay::{Conversation, CountdownStep};

use crate::event::{impl_event, Event, EventHeader, ScriptEventType};

/// Countdown phase being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownKind {
    Start,
    Step,
    End,
}

impl From<CountdownKind> for ScriptEventType {
    fn from(kind: CountdownKind) -> Self {
        match kind {
            CountdownKind::Start => ScriptEventType::CountdownStart,
            CountdownKind::Step => ScriptEventType::CountdownStep,
            CountdownKind::End => ScriptEventType::CountdownEnd,
        }
    }
}

/// The countdown changed phase. Cancelable unless constructed otherwise.
#[derive(Debug)]
pub struct CountdownEvent {
    header: EventHeader,
    step: CountdownStep,
}

impl CountdownEvent {
    /// Create a cancelable countdown event.
    pub fn new(kind: CountdownKind, step: CountdownStep) -> Self {
        Self::with_cancelable(kind, step, true)
    }

    /// Create a countdown event with explicit cancelability.
    pub fn with_cancelable(kind: CountdownKind, step: CountdownStep, cancelable: bool) -> Self {
        Self {
            header: EventHeader::new(kind.into(), cancelable),
            step,
        }
    }

    /// Countdown step at the time of the event.
    pub fn step(&self) -> CountdownStep {
        self.step
    }
}

impl_event!(CountdownEvent);

impl std::fmt::Display for CountdownEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CountdownEvent(type={}, cancelable={}, step={:?})",
            self.header.event_type(),
            self.header.is_cancelable(),
            self.step
        )
    }
}

/// Dialogue lifecycle point being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogueKind {
    Start,
    Line,
    CompleteLine,
    Skip,
    End,
}

impl From<DialogueKind> for ScriptEventType {
    fn from(kind: DialogueKind) -> Self {
        match kind {
            DialogueKind::Start => ScriptEventType::DialogueStart,
            DialogueKind::Line => ScriptEventType::DialogueLine,
            DialogueKind::CompleteLine => ScriptEventType::DialogueCompleteLine,
            DialogueKind::Skip => ScriptEventType::DialogueSkip,
            DialogueKind::End => ScriptEventType::DialogueEnd,
        }
    }
}

/// Something happened in a running conversation. Cancelable unless
/// constructed otherwise.
#[derive(Debug)]
pub struct DialogueEvent<'a> {
    header: EventHeader,
    conversation: &'a mut Conversation,
}

impl<'a> DialogueEvent<'a> {
    /// Create a cancelable dialogue event.
    pub fn new(kind: DialogueKind, conversation: &'a mut Conversation) -> Self {
        Self::with_cancelable(kind, conversation, true)
    }

    /// Create a dialogue event with explicit cancelability.
    pub fn with_cancelable(
        kind: DialogueKind,
        conversation: &'a mut Conversation,
        cancelable: bool,
    ) -> Self {
        Self {
            header: EventHeader::new(kind.into(), cancelable),
            conversation,
        }
    }

    /// The conversation in progress.
    pub fn conversation(&self) -> &Conversation {
        &*self.conversation
    }

    /// Edit the conversation in progress.
    pub fn conversation_mut(&mut self) -> &mut Conversation {
        &mut *self.conversation
    }
}

impl_event!(DialogueEvent<'_>);

impl std::fmt::Display for DialogueEvent<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "DialogueEvent(type={}, cancelable={}, conversation={})",
            self.header.event_type(),
            self.header.is_cancelable(),
            self.conversation
        )
    }
}

/// How the host should pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseMode {
    Standard,
    /// The rare joke pause screen.
    Gitaroo,
}

/// The player asked to pause. Always cancelable; canceling suppresses the
/// pause entirely.
#[derive(Debug)]
pub struct PauseEvent {
    header: EventHeader,
    pub gitaroo: bool,
}

impl PauseEvent {
    /// Create a pause request.
    pub fn new(gitaroo: bool) -> Self {
        Self {
            header: EventHeader::new(ScriptEventType::Pause, true),
            gitaroo,
        }
    }

    /// The pause to open, or `None` if a handler canceled it.
    pub fn pause_mode(&self) -> Option<PauseMode> {
        if self.is_canceled() {
            None
        } else if self.gitaroo {
            Some(PauseMode::Gitaroo)
        } else {
            Some(PauseMode::Standard)
        }
    }
}

impl_event!(PauseEvent);

impl std::fmt::Display for PauseEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PauseEvent(type={}, cancelable={}, gitaroo={})",
            self.header.event_type(),
            self.header.is_cancelable(),
            self.gitaroo
        )
    }
}
