//! Conversation state driven by the dialogue engine.

use serde::{Deserialize, Serialize};

/// Lifecycle of a conversation box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DialogueState {
    #[default]
    Start,
    Opening,
    Speaking,
    Idle,
    Ending,
}

/// One speaker's block of lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogueEntry {
    pub speaker: String,
    pub lines: Vec<String>,
}

impl DialogueEntry {
    pub fn new(
        speaker: impl Into<String>,
        lines: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            speaker: speaker.into(),
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

/// A running conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub conversation_id: String,
    pub state: DialogueState,
    pub entries: Vec<DialogueEntry>,
    entry_index: usize,
    line_index: usize,
}

impl Conversation {
    /// Create a conversation positioned at its first line.
    pub fn new(conversation_id: impl Into<String>, entries: Vec<DialogueEntry>) -> Self {
        Self {
            conversation_id: conversation_id.into(),
            state: DialogueState::Start,
            entries,
            entry_index: 0,
            line_index: 0,
        }
    }

    pub fn current_entry(&self) -> Option<&DialogueEntry> {
        self.entries.get(self.entry_index)
    }

    pub fn current_speaker(&self) -> Option<&str> {
        self.current_entry().map(|e| e.speaker.as_str())
    }

    pub fn current_line(&self) -> Option<&str> {
        self.current_entry()
            .and_then(|e| e.lines.get(self.line_index))
            .map(String::as_str)
    }

    /// Move to the next line, crossing into the next entry when needed.
    ///
    /// Returns `false` and switches to [`DialogueState::Ending`] once the
    /// conversation is exhausted.
    pub fn advance(&mut self) -> bool {
        let Some(line_count) = self.current_entry().map(|e| e.lines.len()) else {
            self.state = DialogueState::Ending;
            return false;
        };

        if self.line_index + 1 < line_count {
            self.line_index += 1;
        } else {
            self.entry_index += 1;
            self.line_index = 0;
        }

        if self.current_line().is_some() {
            self.state = DialogueState::Speaking;
            true
        } else {
            self.state = DialogueState::Ending;
            false
        }
    }
}

impl std::fmt::Display for Conversation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Conversation({}, {:?}, entry {}/{})",
            self.conversation_id,
            self.state,
            self.entry_index,
            self.entries.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Conversation {
        Conversation::new(
            "senpai",
            vec![
                DialogueEntry::new(
                    "senpai",
                    ["Ah, a new fair maiden has come in search of true love!"],
                ),
                DialogueEntry::new("bf", ["Beep.", "Bop!"]),
            ],
        )
    }

    #[test]
    fn test_walks_all_lines() {
        let mut conversation = sample();
        assert_eq!(conversation.current_speaker(), Some("senpai"));

        assert!(conversation.advance());
        assert_eq!(conversation.current_speaker(), Some("bf"));
        assert_eq!(conversation.current_line(), Some("Beep."));

        assert!(conversation.advance());
        assert_eq!(conversation.current_line(), Some("Bop!"));
        assert_eq!(conversation.state, DialogueState::Speaking);

        assert!(!conversation.advance());
        assert_eq!(conversation.state, DialogueState::Ending);
        assert!(conversation.current_line().is_none());
    }

    #[test]
    fn test_empty_conversation() {
        let conversation = Conversation::new("empty", Vec::new());
        assert!(conversation.current_line().is_none());
    }
}
