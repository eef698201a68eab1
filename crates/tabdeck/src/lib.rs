#![forbid(unsafe_code)]

//! tabdeck public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports common types from the internal crates and offers a
//! lightweight prelude for day-to-day usage.
//!
//! # Example
//!
//! ```
//! use tabdeck::prelude::*;
//!
//! let mut page = Page::new();
//! page.append(
//!     Element::new("button")
//!         .with_class("tab-btn")
//!         .with_dataset("tab", "first"),
//! );
//! page.append(
//!     Element::new("button")
//!         .with_class("tab-btn")
//!         .with_dataset("tab", "second"),
//! );
//! page.append(Element::new("section").with_class("tab-content").with_id("first"));
//! page.append(Element::new("section").with_class("tab-content").with_id("second"));
//!
//! let tabs = Tabs::mount(&mut page, TabsOptions::default()).expect("tabs and panels exist");
//! assert_eq!(tabs.active(&page), Some(0));
//!
//! tabs.activate(&mut page, 1);
//! assert_eq!(tabs.active(&page), Some(1));
//! assert_eq!(page.location().fragment(), "second");
//! ```

// --- Page re-exports -------------------------------------------------------

pub use tabdeck_dom::element::{Element, NodeId};
pub use tabdeck_dom::location::Location;
pub use tabdeck_dom::page::Page;

// --- Event re-exports ------------------------------------------------------

pub use tabdeck_dom::event::{
    Event, KeyCode, KeyEvent, Modifiers, PointerButton, PointerEvent,
};

// --- Widget re-exports -----------------------------------------------------

pub use tabdeck_widgets::outcome::{EventOutcome, KeyOutcome, PointerOutcome};
pub use tabdeck_widgets::tabs::{Tabs, TabsOptions};

// --- Prelude ---------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Element, Event, EventOutcome, KeyCode, KeyEvent, KeyOutcome, Location, Modifiers,
        NodeId, Page, PointerButton, PointerEvent, PointerOutcome, Tabs, TabsOptions,
    };

    pub use crate::{dom, widgets};
}

pub use tabdeck_dom as dom;
pub use tabdeck_widgets as widgets;
