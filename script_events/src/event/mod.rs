//! Event base: the shared header and the control protocol every event obeys.
//!
//! An event is created once per occurrence, handed by `&mut` to each handler
//! in turn, and read back by the host once the pass is over. Handlers have
//! exactly two controls over the header:
//!
//! - [`Event::cancel`] vetoes the host's default behavior, but only if the
//!   event was constructed as cancelable. Otherwise it does nothing.
//! - [`Event::stop_propagation`] tells the dispatcher to skip the remaining
//!   handlers.
//!
//! Both flips are one-way. Neither ever fails, so a script that cancels
//! twice, or cancels something that cannot be canceled, cannot disturb the
//! host. Handlers never get a `&mut EventHeader`, so there is no other way
//! to touch the flags.

mod kind;

pub use kind::*;

/// Control state shared by every event variant.
///
/// Only this crate can build a header:
///
/// ```compile_fail
/// use script_events::{EventHeader, ScriptEventType};
///
/// let fresh = EventHeader::new(ScriptEventType::Pause, true);
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct EventHeader {
    event_type: ScriptEventType,
    cancelable: bool,
    canceled: bool,
    propagate: bool,
}

impl EventHeader {
    /// Fix the type and cancelability of a fresh event.
    pub(crate) fn new(event_type: ScriptEventType, cancelable: bool) -> Self {
        Self {
            event_type,
            cancelable,
            canceled: false,
            propagate: true,
        }
    }

    /// The tag the event was created with.
    pub fn event_type(&self) -> ScriptEventType {
        self.event_type
    }

    /// Whether canceling has any effect.
    pub fn is_cancelable(&self) -> bool {
        self.cancelable
    }

    /// Whether a handler vetoed the host's default behavior.
    pub fn is_canceled(&self) -> bool {
        self.canceled
    }

    /// Whether the remaining handlers should still see the event.
    pub fn should_propagate(&self) -> bool {
        self.propagate
    }

    /// Cancel the event if it is cancelable. A no-op otherwise.
    pub(crate) fn cancel(&mut self) {
        if self.cancelable {
            self.canceled = true;
        }
    }

    /// Skip the remaining handlers.
    pub(crate) fn stop_propagation(&mut self) {
        self.propagate = false;
    }
}

impl std::fmt::Display for EventHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ScriptEvent(type={}, cancelable={})",
            self.event_type, self.cancelable
        )
    }
}

pub(crate) mod sealed {
    /// Restricts [`Event`](super::Event) to the variants in this crate.
    pub trait Sealed {}
}

/// Implemented by every event variant and by [`crate::ScriptEvent`].
///
/// `cancel` and `stop_propagation` are the only mutators. The header is
/// readable through [`Event::header`] but never handed out mutably.
pub trait Event: sealed::Sealed + std::fmt::Display {
    fn header(&self) -> &EventHeader;

    /// Veto the host's default behavior. A silent no-op unless the event is
    /// cancelable.
    fn cancel(&mut self);

    /// Tell the dispatcher to skip the remaining handlers.
    fn stop_propagation(&mut self);

    fn event_type(&self) -> ScriptEventType {
        self.header().event_type()
    }

    fn is_cancelable(&self) -> bool {
        self.header().is_cancelable()
    }

    fn is_canceled(&self) -> bool {
        self.header().is_canceled()
    }

    fn should_propagate(&self) -> bool {
        self.header().should_propagate()
    }
}

/// Implements [`Event`] for variants that store their header in `header`.
macro_rules! impl_event {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::event::sealed::Sealed for $ty {}

            impl $crate::event::Event for $ty {
                fn header(&self) -> &$crate::event::EventHeader {
                    &self.header
                }

                fn cancel(&mut self) {
                    self.header.cancel();
                }

                fn stop_propagation(&mut self) {
                    self.header.stop_propagation();
                }
            }
        )+
    };
}

pub(crate) use impl_event;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_header() {
        let header = EventHeader::new(ScriptEventType::Update, false);
        assert_eq!(header.event_type(), ScriptEventType::Update);
        assert!(!header.is_cancelable());
        assert!(!header.is_canceled());
        assert!(header.should_propagate());
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut header = EventHeader::new(ScriptEventType::Pause, true);
        header.cancel();
        assert!(header.is_canceled());

        header.cancel();
        header.cancel();
        assert!(header.is_canceled());
    }

    #[test]
    fn test_cancel_ignored_when_not_cancelable() {
        let mut header = EventHeader::new(ScriptEventType::KeyDown, false);
        for _ in 0..3 {
            header.cancel();
        }
        assert!(!header.is_canceled());
    }

    #[test]
    fn test_stop_propagation_is_terminal() {
        let mut header = EventHeader::new(ScriptEventType::SongBeatHit, true);
        header.stop_propagation();
        assert!(!header.should_propagate());

        header.cancel();
        header.stop_propagation();
        assert!(!header.should_propagate());
    }

    #[test]
    fn test_stop_propagation_leaves_cancel_alone() {
        let mut header = EventHeader::new(ScriptEventType::Create, true);
        header.stop_propagation();
        assert!(!header.is_canceled());
    }

    #[test]
    fn test_display() {
        let header = EventHeader::new(ScriptEventType::NoteHit, true);
        assert_eq!(
            header.to_string(),
            "ScriptEvent(type=NOTE_HIT, cancelable=true)"
        );
    }
}
