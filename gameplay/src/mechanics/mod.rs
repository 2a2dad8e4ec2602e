//! Gameplay mechanics: lane directions, countdown steps, difficulties.

use serde::{Deserialize, Serialize};

/// Number of lanes on a single strumline.
pub const STRUMLINE_SIZE: u8 = 4;

/// The four note lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoteDirection {
    Left,
    Down,
    Up,
    Right,
}

impl NoteDirection {
    /// Map a raw chart lane index to a direction, wrapping per strumline.
    pub fn from_lane(lane: u8) -> Self {
        match lane % STRUMLINE_SIZE {
            0 => NoteDirection::Left,
            1 => NoteDirection::Down,
            2 => NoteDirection::Up,
            _ => NoteDirection::Right,
        }
    }

    /// Lane index within a strumline.
    pub fn lane(&self) -> u8 {
        match self {
            NoteDirection::Left => 0,
            NoteDirection::Down => 1,
            NoteDirection::Up => 2,
            NoteDirection::Right => 3,
        }
    }

    /// Lowercase name as used by animations and scripts.
    pub fn name(&self) -> &'static str {
        match self {
            NoteDirection::Left => "left",
            NoteDirection::Down => "down",
            NoteDirection::Up => "up",
            NoteDirection::Right => "right",
        }
    }
}

impl std::fmt::Display for NoteDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Phases of the pre-song countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CountdownStep {
    #[default]
    Before,
    Three,
    Two,
    One,
    Go,
    After,
}

impl CountdownStep {
    /// The step that follows this one. `After` is terminal.
    pub fn next(&self) -> Self {
        match self {
            CountdownStep::Before => CountdownStep::Three,
            CountdownStep::Three => CountdownStep::Two,
            CountdownStep::Two => CountdownStep::One,
            CountdownStep::One => CountdownStep::Go,
            CountdownStep::Go | CountdownStep::After => CountdownStep::After,
        }
    }

    /// Whether the host plays a countdown sound on this step.
    pub fn is_audible(&self) -> bool {
        !matches!(self, CountdownStep::Before | CountdownStep::After)
    }
}

/// Chart difficulty identifier, e.g. `easy`, `normal`, `hard`, `erect`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Difficulty(String);

impl Difficulty {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::new("normal")
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_lane_wraps() {
        assert_eq!(NoteDirection::from_lane(0), NoteDirection::Left);
        assert_eq!(NoteDirection::from_lane(3), NoteDirection::Right);
        assert_eq!(NoteDirection::from_lane(5), NoteDirection::Down);
        assert_eq!(NoteDirection::from_lane(6).lane(), 2);
    }

    #[test]
    fn test_countdown_sequence() {
        let mut step = CountdownStep::default();
        let mut seen = vec![step];
        while step != CountdownStep::After {
            step = step.next();
            seen.push(step);
        }

        assert_eq!(seen.len(), 6);
        assert_eq!(CountdownStep::After.next(), CountdownStep::After);
        assert!(CountdownStep::Go.is_audible());
        assert!(!CountdownStep::Before.is_audible());
    }

    #[test]
    fn test_default_difficulty() {
        assert_eq!(Difficulty::default().as_str(), "normal");
        assert_eq!(Difficulty::new("erect").to_string(), "erect");
    }
}
