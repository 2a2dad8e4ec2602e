//! Event variants, one per kind of occurrence.
//!
//! Each variant pairs an [`EventHeader`](crate::event::EventHeader) with its
//! payload. Payload fields come in three flavors:
//!
//! - **Host references** (`note`, `conversation`, `target`, ...): borrowed
//!   from the host for the dispatch. Handlers edit them through `*_mut()`
//!   accessors but can never swap them out.
//! - **Control knobs** (`play_sound`, `health_change`, `gitaroo`, ...): public
//!   fields the host reads back after dispatch.
//! - **Snapshots** (`combo_count`, `beat`, `elapsed`, ...): fixed at
//!   construction, exposed through getters only.

mod basic;
mod flow;
mod input;
mod note;
mod screen;
mod song;

pub use basic::*;
pub use flow::*;
pub use input::*;
pub use note::*;
pub use screen::*;
pub use song::*;
