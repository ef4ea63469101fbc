use serde::{Deserialize, Serialize};
use std::str::FromStr;

use casement_common::PlatformError;

pub(super) const MOD_CTRL: u8 = 0b0001;
pub(super) const MOD_ALT: u8 = 0b0010;
pub(super) const MOD_SHIFT: u8 = 0b0100;
pub(super) const MOD_META: u8 = 0b1000;

/// Modifier keys, either held during a key event or required by a combo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifierKeys {
    pub alt: bool,
    pub ctrl: bool,
    pub shift: bool,
    /// Cmd on macOS, Win on Windows, Super on Linux.
    pub meta: bool,
}

impl ModifierKeys {
    pub fn bits(self) -> u8 {
        let mut mods = 0u8;
        if self.ctrl {
            mods |= MOD_CTRL;
        }
        if self.alt {
            mods |= MOD_ALT;
        }
        if self.shift {
            mods |= MOD_SHIFT;
        }
        if self.meta {
            mods |= MOD_META;
        }
        mods
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyPhase {
    Down,
    Up,
}

/// A raw key event as reported by the host window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyInput {
    pub phase: KeyPhase,
    pub key: String,
    pub modifiers: ModifierKeys,
}

impl KeyInput {
    pub fn up(key: impl Into<String>, modifiers: ModifierKeys) -> Self {
        Self {
            phase: KeyPhase::Up,
            key: key.into(),
            modifiers,
        }
    }

    pub fn down(key: impl Into<String>, modifiers: ModifierKeys) -> Self {
        Self {
            phase: KeyPhase::Down,
            key: key.into(),
            modifiers,
        }
    }
}

/// A key plus the modifiers that must be held for it to fire.
///
/// Modifiers are stored as a bitmask: Ctrl=1, Alt=2, Shift=4, Meta=8.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub mods: u8,
    pub key: String,
}

impl KeyCombo {
    /// A bare key with no modifier requirement.
    pub fn key(key: impl Into<String>) -> Self {
        Self {
            mods: 0,
            key: key.into(),
        }
    }

    pub fn with_modifiers(key: impl Into<String>, modifiers: ModifierKeys) -> Self {
        Self {
            mods: modifiers.bits(),
            key: key.into(),
        }
    }

    /// Returns `true` when `input` is a key release of this combo's key
    /// with at least the required modifiers held.
    ///
    /// Keys compare exactly or case-insensitively. Extra held modifiers do
    /// not prevent a match.
    pub fn matches(&self, input: &KeyInput) -> bool {
        if input.phase != KeyPhase::Up {
            return false;
        }
        let same_key = input.key == self.key || input.key.to_uppercase() == self.key.to_uppercase();
        same_key && input.modifiers.bits() & self.mods == self.mods
    }
}

impl FromStr for KeyCombo {
    type Err = PlatformError;

    /// Parses `"F12"`, `"Ctrl+Shift+I"`, `"Cmd+Alt+K"`.
    ///
    /// `Cmd`/`Command` maps to Meta on macOS and Ctrl elsewhere;
    /// `Option` maps to Alt. The last token is the key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split('+').map(str::trim).collect();
        let (key, modifiers) = tokens
            .split_last()
            .filter(|(key, _)| !key.is_empty())
            .ok_or_else(|| PlatformError::NotSupported(format!("keybind has no key: {s:?}")))?;

        let mut mods = 0u8;
        for token in modifiers {
            mods |= modifier_bit(token).ok_or_else(|| {
                PlatformError::NotSupported(format!("unrecognized modifier: {token}"))
            })?;
        }

        Ok(Self {
            mods,
            key: (*key).to_string(),
        })
    }
}

fn modifier_bit(token: &str) -> Option<u8> {
    match token.to_lowercase().as_str() {
        "ctrl" | "control" => Some(MOD_CTRL),
        "alt" | "option" | "opt" => Some(MOD_ALT),
        "shift" => Some(MOD_SHIFT),
        "cmd" | "command" => {
            if cfg!(target_os = "macos") {
                Some(MOD_META)
            } else {
                Some(MOD_CTRL)
            }
        }
        "super" | "win" | "meta" => Some(MOD_META),
        _ => None,
    }
}
