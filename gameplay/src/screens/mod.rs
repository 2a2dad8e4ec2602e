//! Screens the host can switch between: top-level states and overlaid substates.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a screen instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScreenId(pub Uuid);

impl ScreenId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for ScreenId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ScreenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kinds of screens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScreenKind {
    // States
    Title,
    MainMenu,
    StoryMenu,
    Freeplay,
    Options,
    Play,
    Results,

    // Substates
    Pause,
    GameOver,
    StickerTransition,

    /// A screen provided by a script module.
    Custom { name: String, substate: bool },
}

impl ScreenKind {
    /// Substates are overlaid on a parent state instead of replacing it.
    pub fn is_substate(&self) -> bool {
        match self {
            ScreenKind::Pause | ScreenKind::GameOver | ScreenKind::StickerTransition => true,
            ScreenKind::Custom { substate, .. } => *substate,
            _ => false,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ScreenKind::Title => "TitleState",
            ScreenKind::MainMenu => "MainMenuState",
            ScreenKind::StoryMenu => "StoryMenuState",
            ScreenKind::Freeplay => "FreeplayState",
            ScreenKind::Options => "OptionsState",
            ScreenKind::Play => "PlayState",
            ScreenKind::Results => "ResultState",
            ScreenKind::Pause => "PauseSubState",
            ScreenKind::GameOver => "GameOverSubState",
            ScreenKind::StickerTransition => "StickerSubState",
            ScreenKind::Custom { name, .. } => name.as_str(),
        }
    }
}

/// A screen instance the host can transition to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Screen {
    pub id: ScreenId,
    pub kind: ScreenKind,
    /// Keep updating while a substate is open on top.
    pub persistent_update: bool,
    /// Keep drawing while a substate is open on top.
    pub persistent_draw: bool,
}

impl Screen {
    pub fn new(kind: ScreenKind) -> Self {
        Self {
            id: ScreenId::new(),
            kind,
            persistent_update: false,
            persistent_draw: true,
        }
    }

    pub fn is_substate(&self) -> bool {
        self.kind.is_substate()
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind.name())
    }
}
