//! End-to-end activation flows through the facade surface.

use pretty_assertions::assert_eq;
use tabdeck::prelude::*;

/// A documentation page with three tabbed sections and an unrelated heading.
fn doc_page() -> Page {
    let mut page = Page::new();
    page.append(Element::new("h1").with_id("title"));
    for id in ["overview", "install", "faq"] {
        page.append(
            Element::new("button")
                .with_class("tab-btn")
                .with_dataset("tab", id),
        );
    }
    for id in ["overview", "install", "faq"] {
        page.append(Element::new("section").with_class("tab-content").with_id(id));
    }
    page
}

fn attr<'p>(page: &'p Page, node: NodeId, name: &str) -> Option<&'p str> {
    page.get(node).and_then(|el| el.attribute(name))
}

#[test]
fn fresh_visit_selects_first_tab_and_fragment() {
    let mut page = doc_page();
    let tabs = Tabs::mount(&mut page, TabsOptions::default()).expect("doc page should mount");

    assert_eq!(tabs.tab_count(), 3);
    assert_eq!(tabs.active(&page), Some(0));
    assert_eq!(page.location().fragment(), "overview");
    assert_eq!(page.focused(), Some(tabs.tab_nodes()[0]));

    let first_tab = tabs.tab_nodes()[0];
    assert_eq!(attr(&page, first_tab, "aria-selected"), Some("true"));
    assert_eq!(attr(&page, first_tab, "tabindex"), Some("0"));
    let first_panel = page.element_by_id("overview").expect("overview panel");
    assert_eq!(attr(&page, first_panel, "aria-hidden"), Some("false"));
    let hidden_panel = page.element_by_id("faq").expect("faq panel");
    assert_eq!(attr(&page, hidden_panel, "aria-hidden"), Some("true"));
}

#[test]
fn deep_link_restores_tab_from_fragment() {
    let mut page = doc_page().with_location(Location::new().with_fragment("#install"));
    let tabs = Tabs::mount(&mut page, TabsOptions::default()).expect("doc page should mount");

    assert_eq!(tabs.active(&page), Some(1), "fragment names the install tab");
    assert_eq!(page.location().fragment(), "install");
    let panel = page.element_by_id("install").expect("install panel");
    assert!(page.get(panel).is_some_and(|el| el.has_class("active")));
}

#[test]
fn click_then_keyboard_flow() {
    let mut page = doc_page();
    let tabs = Tabs::mount(&mut page, TabsOptions::default()).expect("doc page should mount");

    // Click the last tab.
    let outcome = tabs.handle_pointer(&mut page, &PointerEvent::click(tabs.tab_nodes()[2]));
    assert_eq!(outcome, PointerOutcome::Activated(2));
    assert_eq!(page.location().fragment(), "faq");

    // Arrow left moves focus without selecting.
    let outcome = tabs.handle_key(&mut page, &KeyEvent::new(KeyCode::Left));
    assert_eq!(outcome, KeyOutcome::FocusMoved(1));
    assert_eq!(tabs.active(&page), Some(2), "focus moved, selection did not");
    assert_eq!(page.location().fragment(), "faq");

    // Enter commits the focused tab.
    let outcome = tabs.handle_key(&mut page, &KeyEvent::new(KeyCode::Enter));
    assert_eq!(outcome, KeyOutcome::Activated(1));
    assert_eq!(tabs.active(&page), Some(1));
    assert_eq!(page.location().fragment(), "install");

    // Replace-style updates never grew the history.
    assert_eq!(page.location().entry_count(), 1);
}

#[test]
fn legacy_history_flow_records_entries() {
    let mut page = doc_page().with_location(Location::new().without_replace_state());
    let tabs = Tabs::mount(&mut page, TabsOptions::default()).expect("doc page should mount");

    tabs.activate(&mut page, 1);
    tabs.activate(&mut page, 2);

    // Initial entry + mount + two activations.
    assert_eq!(page.location().entry_count(), 4);
    assert_eq!(page.location().fragment(), "faq");
    assert_eq!(
        page.location().last_scroll_target(),
        Some("faq"),
        "direct fragment assignment jumps to the target"
    );
}

#[test]
fn host_key_strings_drive_the_widget() {
    let mut page = doc_page();
    let tabs = Tabs::mount(&mut page, TabsOptions::default()).expect("doc page should mount");

    // A host loop feeding raw key names through the parser.
    for name in ["ArrowRight", "Right", "Enter"] {
        let code = KeyCode::from_key_str(name).expect("known key name");
        let outcome = tabs.handle_event(&mut page, &Event::Key(KeyEvent::new(code)));
        assert!(outcome.suppresses_default(), "{name} should be consumed");
    }

    assert_eq!(tabs.active(&page), Some(2), "two steps right, then commit");
    assert_eq!(page.location().fragment(), "faq");
}

#[test]
fn host_button_numbers_drive_the_widget() {
    let mut page = doc_page();
    let tabs = Tabs::mount(&mut page, TabsOptions::default()).expect("doc page should mount");
    let faq_tab = tabs.tab_nodes()[2];

    // A host loop mapping raw button numbers before dispatch.
    let secondary = PointerButton::from_button(2).expect("known button number");
    let click = PointerEvent::click(faq_tab).with_button(secondary);
    assert_eq!(tabs.handle_pointer(&mut page, &click), PointerOutcome::Ignored);
    assert_eq!(tabs.active(&page), Some(0), "secondary click selects nothing");

    let primary = PointerButton::from_button(0).expect("known button number");
    let click = PointerEvent::click(faq_tab).with_button(primary);
    assert_eq!(
        tabs.handle_pointer(&mut page, &click),
        PointerOutcome::Activated(2)
    );
    assert_eq!(page.location().fragment(), "faq");
}

#[test]
fn page_without_panels_is_left_untouched() {
    let mut page = Page::new();
    page.append(
        Element::new("button")
            .with_class("tab-btn")
            .with_dataset("tab", "lonely"),
    );
    assert!(Tabs::mount(&mut page, TabsOptions::default()).is_none());

    let tab = page.nodes_with_class("tab-btn")[0];
    assert_eq!(attr(&page, tab, "aria-selected"), None);
    assert_eq!(page.focused(), None);
    assert_eq!(page.location().fragment(), "");
    assert_eq!(page.location().entry_count(), 1);
}
