//! Keyboard bindings for the note view

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use sprig_core::{Configs, Error};

/// A key without modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
    Space,
    Tab,
    PageUp,
    PageDown,
    Home,
    End,
    /// A printable key, stored lowercase
    Char(char),
}

impl Key {
    fn from_name(name: &str) -> Option<Self> {
        let key = match name {
            "up" => Self::Up,
            "down" => Self::Down,
            "left" => Self::Left,
            "right" => Self::Right,
            "enter" | "return" => Self::Enter,
            "esc" | "escape" => Self::Escape,
            "space" => Self::Space,
            "tab" => Self::Tab,
            "pageup" => Self::PageUp,
            "pagedown" => Self::PageDown,
            "home" => Self::Home,
            "end" => Self::End,
            _ => {
                let mut chars = name.chars();
                let c = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                Self::Char(c.to_ascii_lowercase())
            }
        };
        Some(key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
            Self::Enter => "enter",
            Self::Escape => "esc",
            Self::Space => "space",
            Self::Tab => "tab",
            Self::PageUp => "pageup",
            Self::PageDown => "pagedown",
            Self::Home => "home",
            Self::End => "end",
            Self::Char(c) => return write!(f, "{c}"),
        };
        f.write_str(name)
    }
}

/// A key plus the modifiers held with it, parsed from strings like
/// `"shift+3"` or `"ctrl+alt+s"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct KeyCombo {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
    pub key: Key,
}

impl KeyCombo {
    /// A key pressed without modifiers
    pub const fn plain(key: Key) -> Self {
        Self {
            ctrl: false,
            alt: false,
            shift: false,
            meta: false,
            key,
        }
    }
}

impl FromStr for KeyCombo {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidShortcut(s.to_string());
        let normalized = s.trim().to_ascii_lowercase();
        let mut parts: Vec<&str> = normalized.split('+').map(str::trim).collect();
        let key_name = parts.pop().filter(|name| !name.is_empty()).ok_or_else(invalid)?;

        let mut combo = Self::plain(Key::from_name(key_name).ok_or_else(invalid)?);
        for modifier in parts {
            match modifier {
                "ctrl" | "control" => combo.ctrl = true,
                "alt" | "option" => combo.alt = true,
                "shift" => combo.shift = true,
                "meta" | "cmd" | "command" => combo.meta = true,
                _ => return Err(invalid()),
            }
        }
        Ok(combo)
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let modifiers = [
            (self.ctrl, "ctrl+"),
            (self.alt, "alt+"),
            (self.shift, "shift+"),
            (self.meta, "meta+"),
        ];
        for (held, prefix) in modifiers {
            if held {
                f.write_str(prefix)?;
            }
        }
        write!(f, "{}", self.key)
    }
}

/// Handlers a key binding can invoke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewAction {
    ScrollUp,
    ScrollDown,
    EditNote,
    RemoveNote,
    ToggleFavorite,
}

/// One `(combo, action)` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeyBinding {
    pub combo: KeyCombo,
    pub action: ViewAction,
}

/// Ordered key bindings; later entries win over earlier ones
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Keymap {
    bindings: Vec<KeyBinding>,
}

impl Keymap {
    /// Up/down scrolling, which is always bound
    pub fn base() -> Self {
        let mut keymap = Self::default();
        keymap.bind(KeyCombo::plain(Key::Up), ViewAction::ScrollUp);
        keymap.bind(KeyCombo::plain(Key::Down), ViewAction::ScrollDown);
        keymap
    }

    /// Base bindings followed by the edit, remove and favorite shortcuts
    /// from `configs`. Shortcuts that fail to parse are skipped.
    pub fn for_configs(configs: &Configs) -> Self {
        let mut keymap = Self::base();
        let configured = [
            (&configs.actions_edit, ViewAction::EditNote),
            (&configs.actions_remove, ViewAction::RemoveNote),
            (&configs.actions_rotate_star, ViewAction::ToggleFavorite),
        ];
        for (shortcut, action) in configured {
            match shortcut.parse::<KeyCombo>() {
                Ok(combo) => keymap.bind(combo, action),
                Err(e) => tracing::warn!("Skipping shortcut for {:?}: {}", action, e),
            }
        }
        keymap
    }

    /// Append a binding
    pub fn bind(&mut self, combo: KeyCombo, action: ViewAction) {
        self.bindings.push(KeyBinding { combo, action });
    }

    /// Action bound to `combo`, preferring the most recently added binding
    pub fn lookup(&self, combo: &KeyCombo) -> Option<ViewAction> {
        self.bindings
            .iter()
            .rev()
            .find(|binding| binding.combo == *combo)
            .map(|binding| binding.action)
    }

    pub fn bindings(&self) -> &[KeyBinding] {
        &self.bindings
    }
}
