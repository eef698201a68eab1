#![forbid(unsafe_code)]

//! Address fragment and history mechanics.
//!
//! A [`Location`] models the part of the page address after `#` together
//! with the two ways it can be rewritten:
//!
//! - [`Location::replace_fragment`] — rewrite the current history entry in
//!   place. Never scrolls, never grows the history.
//! - [`Location::assign_fragment`] — direct assignment. Pushes a new history
//!   entry and scrolls the page to the fragment target.
//!
//! Replace-style updates are a capability some hosts lack. Callers are
//! expected to feature-detect via [`Location::replace_state_supported`] and
//! fall back to assignment, accepting the scroll jump that comes with it.
//!
//! Fragments are stored without the leading `#`; [`Location::with_fragment`]
//! tolerates both `"b"` and `"#b"`.

/// Address fragment plus history state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Fragment of every history entry, oldest first. Never empty: a page
    /// starts with one entry.
    entries: Vec<String>,
    supports_replace_state: bool,
    last_scroll_target: Option<String>,
}

impl Location {
    /// A fresh location with an empty fragment and a single history entry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: vec![String::new()],
            supports_replace_state: true,
            last_scroll_target: None,
        }
    }

    /// Set the initial fragment. A leading `#` is stripped.
    #[must_use]
    pub fn with_fragment(mut self, fragment: &str) -> Self {
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
        if let Some(last) = self.entries.last_mut() {
            *last = fragment.to_string();
        }
        self
    }

    /// Mark replace-style history updates as unavailable, forcing callers
    /// onto the assignment fallback.
    #[must_use]
    pub fn without_replace_state(mut self) -> Self {
        self.supports_replace_state = false;
        self
    }

    /// Whether replace-style history updates are available.
    #[must_use]
    pub fn replace_state_supported(&self) -> bool {
        self.supports_replace_state
    }

    /// The current fragment, without the leading `#`.
    #[must_use]
    pub fn fragment(&self) -> &str {
        self.entries.last().map(String::as_str).unwrap_or_default()
    }

    /// Rewrite the current history entry's fragment in place.
    ///
    /// Never scrolls and never adds an entry. Callers should consult
    /// [`Location::replace_state_supported`] first; hosts without the
    /// capability use [`Location::assign_fragment`] instead.
    pub fn replace_fragment(&mut self, fragment: &str) {
        if let Some(last) = self.entries.last_mut() {
            *last = fragment.to_string();
        }
    }

    /// Assign the fragment directly.
    ///
    /// Pushes a new history entry unconditionally (re-assigning the current
    /// fragment appends a duplicate equivalent entry) and records a scroll
    /// to the fragment target.
    pub fn assign_fragment(&mut self, fragment: &str) {
        self.entries.push(fragment.to_string());
        self.last_scroll_target = Some(fragment.to_string());
    }

    /// Number of history entries.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Fragment of every history entry, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Target of the most recent assignment-triggered scroll, if any.
    #[must_use]
    pub fn last_scroll_target(&self) -> Option<&str> {
        self.last_scroll_target.as_deref()
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new()
    }
}
