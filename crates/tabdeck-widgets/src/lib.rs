#![forbid(unsafe_code)]

//! Widgets for tabdeck.
//!
//! Currently one widget lives here: [`Tabs`], the tabbed-panel controller.
//! Input handlers return [`outcome`] values telling the host whether the
//! default action for an event should be suppressed.

pub mod outcome;
pub mod tabs;

pub use outcome::{EventOutcome, KeyOutcome, PointerOutcome};
pub use tabs::{Tabs, TabsOptions};
