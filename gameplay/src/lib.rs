//! # Gameplay
//!
//! Host-owned data the script event layer refers to: chart notes and live
//! note sprites, song events, conversations, screens, raw keyboard input,
//! and play tuning. This crate holds no event or scripting logic.

pub mod dialogue;
pub mod input;
pub mod mechanics;
pub mod notes;
pub mod screens;
pub mod song;
pub mod tuning;

pub use dialogue::*;
pub use input::*;
pub use mechanics::*;
pub use notes::*;
pub use screens::*;
pub use song::*;
pub use tuning::*;
