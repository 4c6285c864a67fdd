//! Child lists, back-references and destruction

use super::{location, render_frame};
use crate::core::config::UiConfig;
use crate::ui::{Anchor, Color, Node, UIManager, UiError};

#[test]
fn test_add_child_sets_back_reference() {
    let mut ui = UIManager::new();
    let panel = ui.spawn(Node::rectangle());
    let a = ui.insert(Node::rectangle());
    let b = ui.insert(Node::text("b"));

    ui.add_children(panel, &[a, b]).unwrap();
    assert_eq!(ui.node(panel).unwrap().children(), &[a, b]);
    assert_eq!(ui.node(a).unwrap().parent(), Some(panel));
    assert_eq!(ui.node(b).unwrap().parent(), Some(panel));
}

#[test]
fn test_add_child_keeps_stale_entry_in_old_parent() {
    let mut ui = UIManager::new();
    let first = ui.spawn(Node::group());
    let second = ui.spawn(Node::group());
    let child = ui.attach(first, Node::rectangle()).unwrap();

    ui.add_child(second, child).unwrap();

    assert_eq!(ui.node(child).unwrap().parent(), Some(second));
    assert_eq!(ui.node(first).unwrap().children(), &[child]);
    assert_eq!(ui.node(second).unwrap().children(), &[child]);
}

#[test]
fn test_detach_on_add_moves_child() {
    let mut ui = UIManager::with_config(UiConfig::new().with_detach_on_add(true));
    let first = ui.spawn(Node::group());
    let second = ui.spawn(Node::group());
    let child = ui.attach(first, Node::rectangle()).unwrap();

    ui.add_child(second, child).unwrap();

    assert!(ui.node(first).unwrap().children().is_empty());
    assert_eq!(ui.node(second).unwrap().children(), &[child]);
}

#[test]
fn test_reparent_always_detaches() {
    let mut ui = UIManager::new();
    let first = ui.spawn(Node::group());
    let second = ui.spawn(Node::group());
    let child = ui.attach(first, Node::rectangle()).unwrap();

    ui.reparent(second, child).unwrap();

    assert!(ui.node(first).unwrap().children().is_empty());
    assert_eq!(ui.node(child).unwrap().parent(), Some(second));
}

#[test]
fn test_remove_child_clears_back_reference() {
    let mut ui = UIManager::new();
    let panel = ui.spawn(Node::group());
    let a = ui.attach(panel, Node::rectangle()).unwrap();
    let b = ui.attach(panel, Node::rectangle()).unwrap();

    assert_eq!(ui.remove_children(panel, &[a, b]), 2);
    assert!(ui.node(panel).unwrap().children().is_empty());
    assert_eq!(ui.node(a).unwrap().parent(), None);

    // Removing again is a no-op
    assert!(!ui.remove_child(panel, a));
}

#[test]
fn test_removed_child_lays_out_against_viewport() {
    let mut ui = UIManager::new();
    let panel = ui.spawn(Node::rectangle().with_size(200.0, 100.0).with_offset(50.0, 40.0));
    let badge = ui
        .attach(panel, Node::rectangle().with_size(20.0, 10.0).with_anchor(Anchor::BottomRight))
        .unwrap();
    render_frame(&mut ui);
    assert_eq!(location(&ui, badge), (230.0, 130.0));

    ui.remove_child(panel, badge);
    ui.add_element(badge).unwrap();
    render_frame(&mut ui);
    assert_eq!(location(&ui, badge), (780.0, 590.0));
}

#[test]
fn test_destroy_unlinks_from_parent_and_roots() {
    let mut ui = UIManager::new();
    let panel = ui.spawn(Node::group());
    let row = ui.attach(panel, Node::group().with_size(200.0, 100.0)).unwrap();
    let cell = ui
        .attach(row, Node::rectangle().with_size(10.0, 10.0).with_anchor(Anchor::BottomRight))
        .unwrap();
    ui.add_element(row).unwrap();

    let removed = ui.destroy(row).unwrap();
    assert_eq!(removed.children(), &[cell]);
    assert!(!ui.contains(row));
    assert_eq!(ui.elements(), &[panel]);
    assert!(ui.node(panel).unwrap().children().is_empty());

    // The orphan keeps a stale handle and falls back to the viewport
    assert_eq!(ui.node(cell).unwrap().parent(), Some(row));
    ui.add_element(cell).unwrap();
    render_frame(&mut ui);
    assert_eq!(location(&ui, cell), (790.0, 590.0));

    assert_eq!(ui.destroy(row).unwrap_err(), UiError::UnknownNode(row));
}

#[test]
fn test_stale_handles_rejected() {
    let mut ui = UIManager::new();
    let panel = ui.spawn(Node::group());
    let gone = ui.insert(Node::rectangle());
    ui.destroy(gone).unwrap();

    assert_eq!(ui.add_child(panel, gone), Err(UiError::UnknownNode(gone)));
    assert_eq!(ui.add_element(gone), Err(UiError::UnknownNode(gone)));
    assert!(!ui.remove_child(panel, gone));
}

#[test]
fn test_stale_child_entries_skipped() {
    let mut ui = UIManager::new();
    let first = ui.spawn(Node::group());
    let second = ui.spawn(Node::group());
    let child = ui.attach(first, Node::rectangle().with_size(5.0, 5.0)).unwrap();
    ui.add_child(second, child).unwrap();

    // Destroy unlinks only from the latest parent; the stale entry in `first` is ignored
    ui.destroy(child).unwrap();
    assert_eq!(ui.node(first).unwrap().children(), &[child]);
    let backend = render_frame(&mut ui);
    assert!(backend.draw_commands().is_empty());
}

#[test]
fn test_remove_child_from_stale_parent_keeps_current_parent() {
    let mut ui = UIManager::new();
    let first = ui.spawn(Node::group());
    let second = ui.spawn(Node::group());
    let child = ui.attach(second, Node::rectangle()).unwrap();

    // Not listed under `first` at all
    assert!(!ui.remove_child(first, child));
    assert_eq!(ui.node(child).unwrap().parent(), Some(second));
    assert_eq!(ui.node(second).unwrap().children(), &[child]);

    // Stale entry left by add_child: removing it does not orphan the child
    ui.add_child(first, child).unwrap();
    ui.add_child(second, child).unwrap();
    assert!(ui.remove_child(first, child));
    assert_eq!(ui.node(child).unwrap().parent(), Some(second));
}

#[test]
fn test_remove_children_drops_every_entry() {
    let mut ui = UIManager::new();
    let panel = ui.spawn(Node::rectangle().with_size(200.0, 100.0).with_offset(50.0, 40.0));
    let badge = ui.insert(Node::rectangle().with_size(10.0, 10.0).with_color(Color::WHITE));
    ui.add_children(panel, &[badge, badge]).unwrap();

    assert_eq!(ui.remove_children(panel, &[badge]), 1);
    assert!(ui.node(panel).unwrap().children().is_empty());
    assert_eq!(ui.node(badge).unwrap().parent(), None);

    // The single-child variant only takes the first entry
    ui.add_children(panel, &[badge, badge]).unwrap();
    assert!(ui.remove_child(panel, badge));
    assert_eq!(ui.node(panel).unwrap().children(), &[badge]);
}
