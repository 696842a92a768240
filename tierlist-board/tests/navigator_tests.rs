use pretty_assertions::assert_eq;
use tierlist_board::NavigatorPanel;
use tierlist_interact::{ElementInfo, FocusHost, FocusTree, KeyDisposition, NodeId};
use tierlist_types::{Key, KeyEvent, Tier};

struct Page {
    tree: FocusTree,
    fab: NodeId,
    reset: NodeId,
    last_item: NodeId,
    panel: NavigatorPanel<NodeId>,
}

/// body > [fab, panel > [reset button, listbox > 3 options]]
fn page() -> Page {
    let mut tree = FocusTree::new();
    let root = tree.root();
    let fab = tree.append(root, ElementInfo::new("button"));
    let panel_el = tree.append(root, ElementInfo::new("div").with_role("dialog"));
    let reset = tree.append(panel_el, ElementInfo::new("button"));
    let list = tree.append(panel_el, ElementInfo::new("div").with_role("listbox"));
    let mut last_item = reset;
    for _ in 0..3 {
        last_item = tree.append(list, ElementInfo::new("div").with_tabindex(0));
    }
    let panel = NavigatorPanel::new(panel_el, fab);
    Page {
        tree,
        fab,
        reset,
        last_item,
        panel,
    }
}

#[test]
fn opening_focuses_first_control() {
    let mut page = page();
    assert!(!page.panel.open(&mut page.tree, false));
    assert!(page.panel.is_open());
    assert_eq!(page.tree.focused(), Some(page.reset));
}

#[test]
fn tab_wraps_inside_open_panel() {
    let mut page = page();
    page.panel.open(&mut page.tree, false);
    page.tree.focus(&page.last_item);

    let tab = KeyEvent::new(Key::Tab);
    assert_eq!(page.panel.handle_key(&mut page.tree, &tab), KeyDisposition::Handled);
    assert_eq!(page.tree.focused(), Some(page.reset));
}

#[test]
fn escape_closes_and_refocuses_fab() {
    let mut page = page();
    page.panel.open(&mut page.tree, false);

    let escape = KeyEvent::new(Key::Escape);
    assert_eq!(page.panel.handle_key(&mut page.tree, &escape), KeyDisposition::Handled);
    assert!(!page.panel.is_open());
    assert_eq!(page.tree.focused(), Some(page.fab));

    // Closed: keys go to the page.
    assert_eq!(page.panel.handle_key(&mut page.tree, &escape), KeyDisposition::Ignored);
}

#[test]
fn tour_blocks_escape_until_finished() {
    let mut page = page();
    assert!(page.panel.open(&mut page.tree, true));
    assert!(page.panel.is_touring());

    let escape = KeyEvent::new(Key::Escape);
    assert_eq!(page.panel.handle_key(&mut page.tree, &escape), KeyDisposition::Handled);
    assert!(page.panel.is_open());

    page.panel.finish_tour();
    page.panel.handle_key(&mut page.tree, &escape);
    assert!(!page.panel.is_open());
}

#[test]
fn close_restores_focus() {
    let mut page = page();
    page.panel.open(&mut page.tree, false);
    page.panel.close(&mut page.tree);
    assert!(!page.panel.is_open());
    assert_eq!(page.tree.focused(), Some(page.fab));
}

#[test]
fn jump_closes_and_names_section() {
    let mut page = page();
    page.panel.open(&mut page.tree, false);
    assert_eq!(page.tree.focused(), Some(page.reset));

    assert_eq!(page.panel.jump_to(&mut page.tree, Tier::Three), "tier-3");
    assert!(!page.panel.is_open());
    assert_eq!(page.tree.focused(), Some(page.fab));
}
