//! Song-level data: chart-embedded song events.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An event embedded in a chart, e.g. a camera focus or a character animation.
///
/// The `value` payload is free-form and owned by whichever module handles
/// the event kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongEventData {
    /// Song position in milliseconds.
    pub time: f64,
    /// Event kind, e.g. `"FocusCamera"` or `"PlayAnimation"`.
    pub event_kind: String,
    #[serde(default)]
    pub value: Value,
    /// Set by the host once the event has been reached.
    #[serde(skip)]
    pub activated: bool,
}

impl SongEventData {
    /// Create a new song event with the given kind and payload.
    pub fn new(time: f64, event_kind: impl Into<String>, value: Value) -> Self {
        Self {
            time,
            event_kind: event_kind.into(),
            value,
            activated: false,
        }
    }

    /// Look up a field of an object payload.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.value.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    /// Replace one field of an object payload. A non-object payload is
    /// turned into an object first.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        if !self.value.is_object() {
            self.value = Value::Object(Default::default());
        }
        if let Value::Object(map) = &mut self.value {
            map.insert(key.into(), value);
        }
    }
}

impl std::fmt::Display for SongEventData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}ms {}", self.event_kind, self.time, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_typed_accessors() {
        let event = SongEventData::new(
            4000.0,
            "FocusCamera",
            json!({ "char": "bf", "x": 12.5, "ease": true }),
        );

        assert_eq!(event.get_str("char"), Some("bf"));
        assert_eq!(event.get_f64("x"), Some(12.5));
        assert_eq!(event.get_bool("ease"), Some(true));
        assert!(event.get("missing").is_none());
        assert!(!event.activated);
    }

    #[test]
    fn test_set_on_scalar_payload() {
        let mut event = SongEventData::new(0.0, "PlayAnimation", json!(3));
        event.set("anim", json!("hey"));

        assert_eq!(event.get_str("anim"), Some("hey"));
    }

    #[test]
    fn test_activated_not_serialized() {
        let mut event = SongEventData::new(0.0, "Test", Value::Null);
        event.activated = true;

        let text = serde_json::to_string(&event).unwrap();
        let back: SongEventData = serde_json::from_str(&text).unwrap();
        assert!(!back.activated);
        assert_eq!(back.event_kind, "Test");
    }
}
