//! Key-combo matching for window-level shortcuts.
//!
//! Only simple matching lives here: a key release plus required modifiers.
//! Routing input anywhere else is the host's business.

mod key_combo;

pub use key_combo::{KeyCombo, KeyInput, KeyPhase, ModifierKeys};
