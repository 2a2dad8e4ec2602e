//! Screen transitions.
//!
//! Both variants default to non-cancelable. A call site that lets scripts
//! veto its transition opts in with `with_cancelable`, and must abort the
//! transition when [`StateChangeEvent::transition_allowed`] is false.

use gameplay::Screen;

use crate::event::{impl_event, Event, EventHeader, ScriptEventType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChangeKind {
    Begin,
    End,
}

impl From<StateChangeKind> for ScriptEventType {
    fn from(kind: StateChangeKind) -> Self {
        match kind {
            StateChangeKind::Begin => ScriptEventType::StateChangeBegin,
            StateChangeKind::End => ScriptEventType::StateChangeEnd,
        }
    }
}

/// The host is switching to another top-level state.
#[derive(Debug)]
pub struct StateChangeEvent<'a> {
    header: EventHeader,
    target: &'a mut Screen,
}

impl<'a> StateChangeEvent<'a> {
    /// Create a non-cancelable state change.
    pub fn new(kind: StateChangeKind, target: &'a mut Screen) -> Self {
        Self::with_cancelable(kind, target, false)
    }

    /// Create a state change, choosing whether handlers may veto it.
    pub fn with_cancelable(
        kind: StateChangeKind,
        target: &'a mut Screen,
        cancelable: bool,
    ) -> Self {
        Self {
            header: EventHeader::new(kind.into(), cancelable),
            target,
        }
    }

    /// The state being switched to.
    pub fn target(&self) -> &Screen {
        &*self.target
    }

    /// Edit the incoming state before it takes over.
    pub fn target_mut(&mut self) -> &mut Screen {
        &mut *self.target
    }

    /// Whether the host should go through with the switch.
    pub fn transition_allowed(&self) -> bool {
        !self.is_canceled()
    }
}

impl_event!(StateChangeEvent<'_>);

impl std::fmt::Display for StateChangeEvent<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "StateChangeEvent(type={}, cancelable={}, target={})",
            self.header.event_type(),
            self.header.is_cancelable(),
            self.target
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubStateChangeKind {
    OpenBegin,
    OpenEnd,
    CloseBegin,
    CloseEnd,
}

impl From<SubStateChangeKind> for ScriptEventType {
    fn from(kind: SubStateChangeKind) -> Self {
        match kind {
            SubStateChangeKind::OpenBegin => ScriptEventType::SubstateOpenBegin,
            SubStateChangeKind::OpenEnd => ScriptEventType::SubstateOpenEnd,
            SubStateChangeKind::CloseBegin => ScriptEventType::SubstateCloseBegin,
            SubStateChangeKind::CloseEnd => ScriptEventType::SubstateCloseEnd,
        }
    }
}

/// A substate is opening over, or closing from, the current state.
#[derive(Debug)]
pub struct SubStateChangeEvent<'a> {
    header: EventHeader,
    target: &'a mut Screen,
}

impl<'a> SubStateChangeEvent<'a> {
    /// Create a non-cancelable substate change.
    pub fn new(kind: SubStateChangeKind, target: &'a mut Screen) -> Self {
        Self::with_cancelable(kind, target, false)
    }

    /// Create a substate change, choosing whether handlers may veto it.
    pub fn with_cancelable(
        kind: SubStateChangeKind,
        target: &'a mut Screen,
        cancelable: bool,
    ) -> Self {
        Self {
            header: EventHeader::new(kind.into(), cancelable),
            target,
        }
    }

    /// The substate being opened or closed.
    pub fn target(&self) -> &Screen {
        &*self.target
    }

    /// Edit the substate before the transition.
    pub fn target_mut(&mut self) -> &mut Screen {
        &mut *self.target
    }

    /// Whether the host should go through with the transition.
    pub fn transition_allowed(&self) -> bool {
        !self.is_canceled()
    }
}

impl_event!(SubStateChangeEvent<'_>);

impl std::fmt::Display for SubStateChangeEvent<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SubStateChangeEvent(type={}, cancelable={}, target={})",
            self.header.event_type(),
            self.header.is_cancelable(),
            self.target
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gameplay::ScreenKind;

    #[test]
    fn test_state_change_not_cancelable_by_default() {
        let mut screen = Screen::new(ScreenKind::Freeplay);
        let mut event = StateChangeEvent::new(StateChangeKind::Begin, &mut screen);

        event.cancel();
        assert!(!event.is_canceled());
        assert!(event.transition_allowed());
    }

    #[test]
    fn test_vetoable_state_change() {
        let mut screen = Screen::new(ScreenKind::Play);
        let mut event =
            StateChangeEvent::with_cancelable(StateChangeKind::Begin, &mut screen, true);

        event.cancel();
        assert!(!event.transition_allowed());
    }

    #[test]
    fn test_events_for_same_target_share_no_state() {
        let mut screen = Screen::new(ScreenKind::Results);

        {
            let mut first =
                StateChangeEvent::with_cancelable(StateChangeKind::Begin, &mut screen, true);
            first.cancel();
            first.stop_propagation();
            assert!(first.is_canceled());
        }

        let second =
            StateChangeEvent::with_cancelable(StateChangeKind::Begin, &mut screen, true);
        assert!(!second.is_canceled());
        assert!(second.should_propagate());
    }

    #[test]
    fn test_substate_handler_edits_target() {
        let mut pause = Screen::new(ScreenKind::Pause);
        {
            let mut event = SubStateChangeEvent::new(SubStateChangeKind::OpenBegin, &mut pause);
            assert_eq!(event.event_type(), ScriptEventType::SubstateOpenBegin);
            assert!(event.target().is_substate());
            event.target_mut().persistent_update = true;
        }
        assert!(pause.persistent_update);
    }

    #[test]
    fn test_vetoable_substate_change() {
        let mut pause = Screen::new(ScreenKind::Pause);
        let mut event =
            SubStateChangeEvent::with_cancelable(SubStateChangeKind::OpenBegin, &mut pause, true);
        assert!(event.transition_allowed());

        event.cancel();
        assert!(event.is_canceled());
        assert!(!event.transition_allowed());
    }

    #[test]
    fn test_substate_not_cancelable_by_default() {
        let mut pause = Screen::new(ScreenKind::Pause);
        let mut event = SubStateChangeEvent::new(SubStateChangeKind::CloseBegin, &mut pause);
        event.cancel();
        assert!(event.transition_allowed());
    }

    #[test]
    fn test_substate_display() {
        let mut screen = Screen::new(ScreenKind::GameOver);
        let event = SubStateChangeEvent::new(SubStateChangeKind::CloseEnd, &mut screen);
        assert_eq!(
            event.to_string(),
            "SubStateChangeEvent(type=SUBSTATE_CLOSE_END, cancelable=false, target=GameOverSubState)"
        );
    }
}
