#![forbid(unsafe_code)]

//! Canonical input event types.
//!
//! Pages deliver two input classes to widgets: key presses and pointer
//! clicks. Both are plain values; handlers receive them by reference and
//! report what they did through widget-level outcome types.
//!
//! # Design Notes
//!
//! - [`KeyCode::from_key_str`] maps host key names to codes, including the
//!   legacy aliases some hosts still emit (`"Right"` for `"ArrowRight"`,
//!   `"Esc"` for `"Escape"`, `"Spacebar"` for `" "`).
//! - Events carry [`Modifiers`] for fidelity even where a widget dispatches
//!   on the bare code.
//! - Only key-down delivery is modeled; hosts auto-repeat held keys as
//!   fresh events.

use bitflags::bitflags;

use crate::element::NodeId;

/// Canonical input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A key press.
    Key(KeyEvent),

    /// A pointer click.
    Pointer(PointerEvent),
}

/// A key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key that was pressed.
    pub code: KeyCode,

    /// Modifier keys held during the press.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create a key event with no modifiers.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
        }
    }

    /// Attach modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Key codes a page can deliver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A regular character key. Space is `Char(' ')`.
    Char(char),

    /// Enter/Return key.
    Enter,

    /// Escape key.
    Escape,

    /// Backspace key.
    Backspace,

    /// Tab key.
    Tab,

    /// Home key.
    Home,

    /// End key.
    End,

    /// Page Up key.
    PageUp,

    /// Page Down key.
    PageDown,

    /// Up arrow key.
    Up,

    /// Down arrow key.
    Down,

    /// Left arrow key.
    Left,

    /// Right arrow key.
    Right,
}

impl KeyCode {
    /// Map a host key name to a code.
    ///
    /// Accepts the canonical names (`"ArrowRight"`, `"Escape"`, `" "`) and
    /// the legacy aliases older hosts emit (`"Right"`, `"Esc"`,
    /// `"Spacebar"`). Any other single-character name maps to
    /// [`KeyCode::Char`]; unknown multi-character names map to `None`.
    #[must_use]
    pub fn from_key_str(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(Self::Enter),
            "Escape" | "Esc" => Some(Self::Escape),
            "Backspace" => Some(Self::Backspace),
            "Tab" => Some(Self::Tab),
            "Home" => Some(Self::Home),
            "End" => Some(Self::End),
            "PageUp" => Some(Self::PageUp),
            "PageDown" => Some(Self::PageDown),
            "ArrowUp" | "Up" => Some(Self::Up),
            "ArrowDown" | "Down" => Some(Self::Down),
            "ArrowLeft" | "Left" => Some(Self::Left),
            "ArrowRight" | "Right" => Some(Self::Right),
            " " | "Space" | "Spacebar" => Some(Self::Char(' ')),
            other => {
                let mut chars = other.chars();
                if let Some(c) = chars.next()
                    && chars.next().is_none()
                {
                    return Some(Self::Char(c));
                }
                None
            }
        }
    }
}

bitflags! {
    /// Modifier keys that can be held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

/// A pointer click on a page element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    /// The element the click landed on.
    pub target: NodeId,

    /// Which button was pressed.
    pub button: PointerButton,
}

impl PointerEvent {
    /// A primary-button click on `target` (the common case).
    #[must_use]
    pub const fn click(target: NodeId) -> Self {
        Self {
            target,
            button: PointerButton::Primary,
        }
    }

    /// Set the button.
    #[must_use]
    pub const fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }
}

/// Pointer button identifiers, numbered as hosts report them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Main button (usually left).
    Primary,

    /// Auxiliary button (usually middle/wheel).
    Auxiliary,

    /// Secondary button (usually right).
    Secondary,
}

impl PointerButton {
    /// Map a host button number (0/1/2) to a button.
    #[must_use]
    pub const fn from_button(button: u8) -> Option<Self> {
        match button {
            0 => Some(Self::Primary),
            1 => Some(Self::Auxiliary),
            2 => Some(Self::Secondary),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys_accept_legacy_aliases() {
        assert_eq!(KeyCode::from_key_str("ArrowRight"), Some(KeyCode::Right));
        assert_eq!(KeyCode::from_key_str("Right"), Some(KeyCode::Right));
        assert_eq!(KeyCode::from_key_str("ArrowLeft"), Some(KeyCode::Left));
        assert_eq!(KeyCode::from_key_str("Left"), Some(KeyCode::Left));
    }

    #[test]
    fn space_accepts_all_spellings() {
        for name in [" ", "Space", "Spacebar"] {
            assert_eq!(KeyCode::from_key_str(name), Some(KeyCode::Char(' ')));
        }
    }

    #[test]
    fn escape_accepts_short_form() {
        assert_eq!(KeyCode::from_key_str("Escape"), Some(KeyCode::Escape));
        assert_eq!(KeyCode::from_key_str("Esc"), Some(KeyCode::Escape));
    }

    #[test]
    fn single_characters_map_to_char() {
        assert_eq!(KeyCode::from_key_str("a"), Some(KeyCode::Char('a')));
        assert_eq!(KeyCode::from_key_str("3"), Some(KeyCode::Char('3')));
    }

    #[test]
    fn unknown_names_map_to_none() {
        assert_eq!(KeyCode::from_key_str("F1"), None);
        assert_eq!(KeyCode::from_key_str("Dead"), None);
        assert_eq!(KeyCode::from_key_str(""), None);
    }

    #[test]
    fn key_event_carries_modifiers() {
        let ev = KeyEvent::new(KeyCode::Right).with_modifiers(Modifiers::CTRL);
        assert_eq!(ev.code, KeyCode::Right);
        assert!(ev.modifiers.contains(Modifiers::CTRL));
        assert_eq!(KeyEvent::new(KeyCode::Right).modifiers, Modifiers::NONE);
    }

    #[test]
    fn click_is_primary() {
        let ev = PointerEvent::click(NodeId::new(3));
        assert_eq!(ev.button, PointerButton::Primary);
        assert_eq!(ev.target, NodeId::new(3));
        let aux = ev.with_button(PointerButton::Auxiliary);
        assert_eq!(aux.button, PointerButton::Auxiliary);
    }

    #[test]
    fn button_numbers_follow_host_convention() {
        assert_eq!(PointerButton::from_button(0), Some(PointerButton::Primary));
        assert_eq!(
            PointerButton::from_button(1),
            Some(PointerButton::Auxiliary)
        );
        assert_eq!(
            PointerButton::from_button(2),
            Some(PointerButton::Secondary)
        );
        assert_eq!(PointerButton::from_button(5), None);
    }
}
