//! Raw keyboard input as delivered by the windowing layer.

use serde::{Deserialize, Serialize};

/// A key press, release, or repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardEvent {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub kind: KeyEventKind,
}

/// A key on the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// A printable key, lowercased.
    Char(char),
    Enter,
    Escape,
    Space,
    Backspace,
    Tab,
    Up,
    Down,
    Left,
    Right,
    /// Function keys F1-F12.
    F(u8),
}

/// Modifier keys held during the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeyModifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEventKind {
    Press,
    Release,
    /// Key held down long enough to auto-repeat.
    Repeat,
}

impl KeyboardEvent {
    pub fn new(key: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> Self {
        Self {
            key,
            modifiers,
            kind,
        }
    }

    /// A press with no modifiers.
    pub fn press(key: KeyCode) -> Self {
        Self::new(key, KeyModifiers::default(), KeyEventKind::Press)
    }

    /// A release with no modifiers.
    pub fn release(key: KeyCode) -> Self {
        Self::new(key, KeyModifiers::default(), KeyEventKind::Release)
    }

    /// Press and repeat both count as the key being down.
    pub fn is_down(&self) -> bool {
        matches!(self.kind, KeyEventKind::Press | KeyEventKind::Repeat)
    }
}

impl KeyModifiers {
    /// No modifier held.
    pub fn is_empty(&self) -> bool {
        !self.ctrl && !self.alt && !self.shift
    }
}

impl std::fmt::Display for KeyboardEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.modifiers.ctrl {
            f.write_str("Ctrl+")?;
        }
        if self.modifiers.alt {
            f.write_str("Alt+")?;
        }
        if self.modifiers.shift {
            f.write_str("Shift+")?;
        }
        match self.key {
            KeyCode::Char(c) => write!(f, "{}", c.to_ascii_uppercase())?,
            KeyCode::F(n) => write!(f, "F{}", n)?,
            other => write!(f, "{:?}", other)?,
        }
        write!(f, " {:?}", self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_down() {
        assert!(KeyboardEvent::press(KeyCode::Enter).is_down());
        assert!(!KeyboardEvent::release(KeyCode::Enter).is_down());

        let repeat = KeyboardEvent::new(
            KeyCode::Left,
            KeyModifiers::default(),
            KeyEventKind::Repeat,
        );
        assert!(repeat.is_down());
    }

    #[test]
    fn test_modifiers() {
        assert!(KeyModifiers::default().is_empty());
        let ctrl = KeyModifiers {
            ctrl: true,
            ..Default::default()
        };
        assert!(!ctrl.is_empty());
    }

    #[test]
    fn test_display() {
        let event = KeyboardEvent::new(
            KeyCode::Char('r'),
            KeyModifiers {
                shift: true,
                ..Default::default()
            },
            KeyEventKind::Press,
        );
        assert_eq!(event.to_string(), "Shift+R Press");
        assert_eq!(KeyboardEvent::release(KeyCode::F(7)).to_string(), "F7 Release");
    }
}
