#![forbid(unsafe_code)]

//! Tabbed-panel widget.
//!
//! [`Tabs`] binds a row of tab buttons to their content panels on a
//! [`Page`]: exactly one tab/panel pair is active at a time, activation
//! rewrites the accessibility attributes and the location fragment, and
//! keyboard focus moves independently of activation (the manual-activation
//! pattern).
//!
//! # Page contract
//!
//! Tabs are the elements carrying the tab marker class, each naming its
//! panel through a dataset entry (`data-tab` by default). Panels carry the
//! panel marker class and are keyed by element id. Marker classes, the
//! active class, and the dataset key are configured via [`TabsOptions`].
//!
//! # Keyboard model
//!
//! | Key | Effect |
//! |-----|--------|
//! | Right arrow | focus next tab, wrapping |
//! | Left arrow | focus previous tab, wrapping |
//! | Home / End | focus first / last tab |
//! | Enter / Space | activate the focused tab |
//! | anything else | ignored, default action proceeds |
//!
//! Focus movement never activates; selection happens only via click or
//! Enter/Space.

use tabdeck_dom::element::NodeId;
use tabdeck_dom::event::{Event, KeyCode, KeyEvent, PointerButton, PointerEvent};
use tabdeck_dom::page::Page;

use crate::outcome::{EventOutcome, KeyOutcome, PointerOutcome};

#[cfg(feature = "tracing")]
use web_time::Instant;

// ---------------------------------------------------------------------------
// Attribute names
// ---------------------------------------------------------------------------

const ARIA_SELECTED: &str = "aria-selected";
const ARIA_HIDDEN: &str = "aria-hidden";
const TAB_INDEX: &str = "tabindex";

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Configuration for [`Tabs`].
///
/// | Setting | Default | Description |
/// |---------|---------|-------------|
/// | `tab_marker` | `"tab-btn"` | class identifying tab buttons |
/// | `panel_marker` | `"tab-content"` | class identifying panels |
/// | `active_class` | `"active"` | class marking the active pair |
/// | `dataset_key` | `"tab"` | dataset entry naming a tab's panel |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabsOptions {
    tab_marker: String,
    panel_marker: String,
    active_class: String,
    dataset_key: String,
}

impl TabsOptions {
    /// Options with the default markers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tab_marker: "tab-btn".to_string(),
            panel_marker: "tab-content".to_string(),
            active_class: "active".to_string(),
            dataset_key: "tab".to_string(),
        }
    }

    /// Set the class identifying tab buttons.
    #[must_use]
    pub fn tab_marker(mut self, class: impl Into<String>) -> Self {
        self.tab_marker = class.into();
        self
    }

    /// Set the class identifying panels.
    #[must_use]
    pub fn panel_marker(mut self, class: impl Into<String>) -> Self {
        self.panel_marker = class.into();
        self
    }

    /// Set the class marking the active pair.
    #[must_use]
    pub fn active_class(mut self, class: impl Into<String>) -> Self {
        self.active_class = class.into();
        self
    }

    /// Set the dataset entry naming a tab's panel.
    #[must_use]
    pub fn dataset_key(mut self, key: impl Into<String>) -> Self {
        self.dataset_key = key.into();
        self
    }
}

impl Default for TabsOptions {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

/// Tabbed-panel widget bound to one page.
#[derive(Debug, Clone)]
pub struct Tabs {
    tabs: Vec<NodeId>,
    panels: Vec<NodeId>,
    options: TabsOptions,
}

impl Tabs {
    /// Discover tabs and panels on `page` and activate the initial pair.
    ///
    /// Discovery collects elements carrying the marker classes, in document
    /// order, once; later page growth is not observed. Returns `None`
    /// without touching the page when either collection is empty (an
    /// expected configuration, not an error).
    ///
    /// The initial tab is chosen by the first match in this chain:
    /// 1. the tab whose dataset target equals the location fragment,
    /// 2. the first tab already carrying the active class in the markup,
    /// 3. the first tab in document order.
    ///
    /// The chosen tab is activated even when it was already marked active,
    /// normalizing its attributes, focus, and fragment.
    #[must_use]
    pub fn mount(page: &mut Page, options: TabsOptions) -> Option<Self> {
        let tabs = page.nodes_with_class(&options.tab_marker);
        let panels = page.nodes_with_class(&options.panel_marker);
        if tabs.is_empty() || panels.is_empty() {
            return None;
        }

        let widget = Self {
            tabs,
            panels,
            options,
        };

        let initial = {
            let fragment = page.location().fragment();
            let by_fragment = if fragment.is_empty() {
                None
            } else {
                widget.tab_by_target(page, fragment)
            };
            by_fragment
                .or_else(|| widget.premarked(page))
                .unwrap_or(0)
        };
        widget.activate_with_reason(page, initial, "init");

        Some(widget)
    }

    /// Activate the tab at `index`.
    ///
    /// Every tab is deactivated (active class removed,
    /// `aria-selected="false"`, `tabindex="-1"`) and every panel hidden
    /// (active class removed, `aria-hidden="true"`) before the chosen pair
    /// is activated, so an observer never sees two active pairs. The chosen
    /// tab gains the active class, `aria-selected="true"`, `tabindex="0"`,
    /// and input focus; the panel named by its dataset target gains the
    /// active class and `aria-hidden="false"`. A dangling target is skipped
    /// silently.
    ///
    /// The location fragment is then set to the target: rewritten in place
    /// when replace-style history updates are supported, assigned directly
    /// (with the scroll jump that entails) otherwise.
    ///
    /// Out-of-range indices clamp to the last tab. Re-activating the active
    /// tab reproduces the same end state.
    pub fn activate(&self, page: &mut Page, index: usize) {
        self.activate_with_reason(page, index, "direct");
    }

    fn activate_with_reason(&self, page: &mut Page, index: usize, reason: &'static str) {
        #[cfg(not(feature = "tracing"))]
        let _ = reason;

        let index = index.min(self.tabs.len().saturating_sub(1));

        #[cfg(feature = "tracing")]
        let activate_start = Instant::now();
        #[cfg(feature = "tracing")]
        let previous = self.active(page);
        #[cfg(feature = "tracing")]
        let tab_count = self.tabs.len();
        #[cfg(feature = "tracing")]
        let activate_span = tracing::debug_span!(
            "tabs.activate",
            tab_count,
            index,
            reason,
            activate_duration_us = tracing::field::Empty
        );
        #[cfg(feature = "tracing")]
        let _activate_guard = activate_span.enter();

        let tab_node = self.tabs[index];
        let target = page
            .get(tab_node)
            .and_then(|el| el.dataset(&self.options.dataset_key))
            .unwrap_or_default()
            .to_string();

        for &node in &self.tabs {
            if let Some(el) = page.get_mut(node) {
                el.remove_class(&self.options.active_class);
                el.set_attribute(ARIA_SELECTED, "false");
                el.set_attribute(TAB_INDEX, "-1");
            }
        }
        for &node in &self.panels {
            if let Some(el) = page.get_mut(node) {
                el.remove_class(&self.options.active_class);
                el.set_attribute(ARIA_HIDDEN, "true");
            }
        }

        if let Some(el) = page.get_mut(tab_node) {
            el.add_class(&self.options.active_class);
            el.set_attribute(ARIA_SELECTED, "true");
            el.set_attribute(TAB_INDEX, "0");
        }
        page.focus(tab_node);

        if let Some(panel) = page.element_by_id(&target)
            && let Some(el) = page.get_mut(panel)
        {
            el.add_class(&self.options.active_class);
            el.set_attribute(ARIA_HIDDEN, "false");
        }

        let location = page.location_mut();
        if location.replace_state_supported() {
            location.replace_fragment(&target);
        } else {
            location.assign_fragment(&target);
        }

        #[cfg(feature = "tracing")]
        {
            Self::log_switch(reason, previous, index);
            let elapsed_us = activate_start.elapsed().as_micros() as u64;
            activate_span.record("activate_duration_us", elapsed_us);
        }
    }

    /// Handle a key press delivered while one of the tabs holds focus.
    ///
    /// Keys arriving while focus is elsewhere are ignored.
    pub fn handle_key(&self, page: &mut Page, key: &KeyEvent) -> KeyOutcome {
        let Some(index) = self.focused_tab(page) else {
            return KeyOutcome::Ignored;
        };
        let count = self.tabs.len();

        // Dispatch on the bare code: a held modifier does not change the
        // tab-row keys.
        let next = match key.code {
            KeyCode::Right => Some((index + 1) % count),
            KeyCode::Left => Some((index + count - 1) % count),
            KeyCode::Home => Some(0),
            KeyCode::End => Some(count - 1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.activate_with_reason(page, index, "key");
                return KeyOutcome::Activated(index);
            }
            _ => None,
        };

        match next {
            Some(next) => {
                page.focus(self.tabs[next]);
                KeyOutcome::FocusMoved(next)
            }
            None => KeyOutcome::Ignored,
        }
    }

    /// Handle a pointer click.
    ///
    /// A primary-button click on one of the tabs activates it; any other
    /// click is ignored.
    pub fn handle_pointer(&self, page: &mut Page, pointer: &PointerEvent) -> PointerOutcome {
        if pointer.button != PointerButton::Primary {
            return PointerOutcome::Ignored;
        }
        match self.tabs.iter().position(|&tab| tab == pointer.target) {
            Some(index) => {
                self.activate_with_reason(page, index, "pointer");
                PointerOutcome::Activated(index)
            }
            None => PointerOutcome::Ignored,
        }
    }

    /// Handle any input event.
    pub fn handle_event(&self, page: &mut Page, event: &Event) -> EventOutcome {
        match event {
            Event::Key(key) => EventOutcome::Key(self.handle_key(page, key)),
            Event::Pointer(pointer) => EventOutcome::Pointer(self.handle_pointer(page, pointer)),
        }
    }

    /// Index of the currently active tab, read back from the page.
    #[must_use]
    pub fn active(&self, page: &Page) -> Option<usize> {
        self.tabs.iter().position(|&node| {
            page.get(node)
                .is_some_and(|el| el.has_class(&self.options.active_class))
        })
    }

    /// The discovered tab nodes, in document order.
    #[must_use]
    pub fn tab_nodes(&self) -> &[NodeId] {
        &self.tabs
    }

    /// The discovered panel nodes, in document order.
    #[must_use]
    pub fn panel_nodes(&self) -> &[NodeId] {
        &self.panels
    }

    /// Number of tabs.
    #[must_use]
    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    /// The dataset target of the tab at `index`.
    #[must_use]
    pub fn target_id<'p>(&self, page: &'p Page, index: usize) -> Option<&'p str> {
        let node = self.tabs.get(index)?;
        page.get(*node)?.dataset(&self.options.dataset_key)
    }

    /// The options this widget was mounted with.
    #[must_use]
    pub fn options(&self) -> &TabsOptions {
        &self.options
    }

    fn focused_tab(&self, page: &Page) -> Option<usize> {
        let focused = page.focused()?;
        self.tabs.iter().position(|&tab| tab == focused)
    }

    fn tab_by_target(&self, page: &Page, target: &str) -> Option<usize> {
        self.tabs.iter().position(|&node| {
            page.get(node).and_then(|el| el.dataset(&self.options.dataset_key)) == Some(target)
        })
    }

    fn premarked(&self, page: &Page) -> Option<usize> {
        self.tabs.iter().position(|&node| {
            page.get(node)
                .is_some_and(|el| el.has_class(&self.options.active_class))
        })
    }

    #[cfg(feature = "tracing")]
    fn log_switch(reason: &str, from: Option<usize>, to: usize) {
        tracing::debug!(message = "tabs.switch", reason, from = ?from, to);
    }
}
