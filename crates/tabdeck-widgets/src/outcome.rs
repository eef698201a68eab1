#![forbid(unsafe_code)]

//! Input outcomes.
//!
//! Handlers report what an input did so the host can decide whether to let
//! the page's default action run. `suppresses_default` is the
//! prevent-default contract: true exactly when the widget consumed the
//! input (focus movement or activation), false when the input was ignored
//! and the default action should proceed.

/// Result of feeding a key event to a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Key not handled; the default action proceeds.
    Ignored,

    /// Focus moved to the tab at this index. No activation happened.
    FocusMoved(usize),

    /// The tab at this index was activated.
    Activated(usize),
}

impl KeyOutcome {
    /// Whether the host must suppress the default action for this key.
    #[must_use]
    pub const fn suppresses_default(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Result of feeding a pointer event to a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    /// The click landed elsewhere; the default action proceeds.
    Ignored,

    /// The tab at this index was activated.
    Activated(usize),
}

impl PointerOutcome {
    /// Whether the host must suppress the default action for this click.
    #[must_use]
    pub const fn suppresses_default(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Result of feeding any event to a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// Outcome of a key event.
    Key(KeyOutcome),

    /// Outcome of a pointer event.
    Pointer(PointerOutcome),
}

impl EventOutcome {
    /// Whether the host must suppress the default action for this event.
    #[must_use]
    pub const fn suppresses_default(&self) -> bool {
        match self {
            Self::Key(outcome) => outcome.suppresses_default(),
            Self::Pointer(outcome) => outcome.suppresses_default(),
        }
    }
}
