#![forbid(unsafe_code)]

//! Page environment for tabdeck.
//!
//! This crate supplies everything a headless widget needs from "the page":
//! an element store in document order ([`page::Page`]), the per-element
//! records it holds ([`element::Element`]), the address fragment and history
//! mechanics ([`location::Location`]), and the canonical input event types
//! ([`event`]).
//!
//! The page is an explicit, injected collaborator: widgets borrow it per
//! operation and mutate element attributes through it. Nothing here spawns
//! work or blocks; every operation completes synchronously.

pub mod element;
pub mod event;
pub mod location;
pub mod page;

pub use element::{Element, NodeId};
pub use event::{Event, KeyCode, KeyEvent, Modifiers, PointerButton, PointerEvent};
pub use location::Location;
pub use page::Page;
