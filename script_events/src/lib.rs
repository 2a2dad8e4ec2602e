//! # Script Events
//!
//! The contract between the rhythm-game host and third-party scripts. The
//! host raises an event for each occurrence it lets scripts observe, hands it
//! to handlers one at a time, then reads the event back to decide whether to
//! carry on with its default behavior.
//!
//! ## Core Components
//!
//! - **event**: the [`ScriptEventType`] tag, the [`EventHeader`] every event
//!   carries, and the [`Event`] trait with the cancel/propagation protocol
//! - **variants**: one event type per occurrence (note hits, ghost misses,
//!   song ticks, countdown, dialogue, input, song load, screen changes, pause)
//! - **script_event**: [`ScriptEvent`], the closed sum of all variants
//! - **outcome**: [`EventOutcome`], the post-dispatch snapshot the host logs
//!
//! Deciding which handlers run, and in which order, is left to the host.

pub mod event;
pub mod outcome;
pub mod script_event;
pub mod variants;

pub use event::*;
pub use outcome::*;
pub use script_event::*;
pub use variants::*;
