//! What the host reads back once a dispatch pass is over.

use serde::Serialize;
use tracing::debug;

use crate::event::{Event, ScriptEventType};

/// Snapshot of an event's control state after dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventOutcome {
    pub event_type: ScriptEventType,
    pub cancelable: bool,
    pub canceled: bool,
    pub propagation_stopped: bool,
    /// The event's `Display` form, for logs.
    pub description: String,
}

impl EventOutcome {
    /// Capture the final state of `event` and log it.
    pub fn of<E: Event + ?Sized>(event: &E) -> Self {
        let outcome = Self {
            event_type: event.event_type(),
            cancelable: event.is_cancelable(),
            canceled: event.is_canceled(),
            propagation_stopped: !event.should_propagate(),
            description: event.to_string(),
        };

        debug!(
            target: "script_events",
            event_type = %outcome.event_type,
            canceled = outcome.canceled,
            propagation_stopped = outcome.propagation_stopped,
            "{}",
            outcome.description
        );

        outcome
    }

    /// Whether the host should carry on with its default behavior.
    pub fn proceed(&self) -> bool {
        !self.canceled
    }
}
