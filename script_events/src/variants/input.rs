//! Raw keyboard passthrough.

use gameplay::KeyboardEvent;

use crate::event::{impl_event, EventHeader, ScriptEventType};

/// A raw key event forwarded to scripts. Never cancelable; the key event
/// itself is read-only.
#[derive(Debug)]
pub struct KeyboardInputEvent<'a> {
    header: EventHeader,
    key: &'a KeyboardEvent,
}

impl<'a> KeyboardInputEvent<'a> {
    /// Tagged `KEY_DOWN` for presses and repeats, `KEY_UP` for releases.
    pub fn new(key: &'a KeyboardEvent) -> Self {
        let event_type = if key.is_down() {
            ScriptEventType::KeyDown
        } else {
            ScriptEventType::KeyUp
        };
        Self {
            header: EventHeader::new(event_type, false),
            key,
        }
    }

    /// The raw key event. Read-only.
    pub fn key(&self) -> &'a KeyboardEvent {
        self.key
    }
}

impl_event!(KeyboardInputEvent<'_>);

impl std::fmt::Display for KeyboardInputEvent<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "KeyboardInputEvent(type={}, cancelable={}, key={})",
            self.header.event_type(),
            self.header.is_cancelable(),
            self.key
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Event;
    use gameplay::{KeyCode, KeyEventKind, KeyModifiers};

    #[test]
    fn test_press_and_release_tags() {
        let press = KeyboardEvent::press(KeyCode::Enter);
        let release = KeyboardEvent::release(KeyCode::Enter);
        let repeat =
            KeyboardEvent::new(KeyCode::Up, KeyModifiers::default(), KeyEventKind::Repeat);

        let tag = |key: &KeyboardEvent| KeyboardInputEvent::new(key).event_type();
        assert_eq!(tag(&press), ScriptEventType::KeyDown);
        assert_eq!(tag(&release), ScriptEventType::KeyUp);
        assert_eq!(tag(&repeat), ScriptEventType::KeyDown);
    }

    #[test]
    fn test_keyboard_input_not_cancelable() {
        let key = KeyboardEvent::press(KeyCode::Escape);
        let mut event = KeyboardInputEvent::new(&key);

        event.cancel();
        assert!(!event.is_canceled());

        event.stop_propagation();
        assert!(!event.should_propagate());
        assert_eq!(event.key().key, KeyCode::Escape);
    }

    #[test]
    fn test_display() {
        let key = KeyboardEvent::press(KeyCode::Char('p'));
        assert_eq!(
            KeyboardInputEvent::new(&key).to_string(),
            "KeyboardInputEvent(type=KEY_DOWN, cancelable=false, key=P Press)"
        );
    }
}
