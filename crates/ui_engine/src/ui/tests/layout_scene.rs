//! Layout through full render passes

use super::{location, render_frame};
use crate::foundation::math::Vec3;
use crate::ui::{Anchor, Node, UIManager};
use approx::assert_relative_eq;

#[test]
fn test_child_grid_inside_parent() {
    for align in Anchor::ALL {
        for origin in Anchor::ALL {
            let mut ui = UIManager::new();
            let parent = ui.spawn(Node::rectangle().with_size(200.0, 100.0));
            let child = ui
                .attach(parent, Node::rectangle().with_size(20.0, 10.0).with_align(align).with_origin(origin))
                .unwrap();
            render_frame(&mut ui);

            let (a, o) = (align.to_normalized(), origin.to_normalized());
            let (x, y) = location(&ui, child);
            assert_relative_eq!(x, 200.0 * a.x - 20.0 * o.x);
            assert_relative_eq!(y, 100.0 * a.y - 10.0 * o.y);
        }
    }
}

#[test]
fn test_nested_locations_accumulate() {
    let mut ui = UIManager::new();
    let outer = ui.spawn(Node::rectangle().with_size(300.0, 200.0).with_offset(50.0, 40.0));
    let inner = ui
        .attach(outer, Node::rectangle().with_size(100.0, 80.0).with_anchor(Anchor::Center))
        .unwrap();
    let leaf = ui
        .attach(inner, Node::rectangle().with_size(10.0, 10.0).with_anchor(Anchor::BottomRight).with_offset(-2.0, 0.0))
        .unwrap();
    render_frame(&mut ui);

    assert_eq!(location(&ui, outer), (50.0, 40.0));
    assert_eq!(location(&ui, inner), (50.0 + 150.0 - 50.0, 40.0 + 100.0 - 40.0));
    assert_eq!(location(&ui, leaf), (150.0 + 100.0 - 10.0 - 2.0, 100.0 + 80.0 - 10.0));
}

#[test]
fn test_root_uses_viewport() {
    let mut ui = UIManager::new();
    let hud = ui.spawn(Node::rectangle().with_size(40.0, 20.0).with_anchor(Anchor::BottomRight));
    render_frame(&mut ui);
    assert_eq!(location(&ui, hud), (760.0, 580.0));
}

#[test]
fn test_overlay_children_use_viewport() {
    let mut ui = UIManager::new();
    let mut host = crate::ui::HeadlessHost::new();
    let menu = ui.spawn(ui.new_overlay());
    // Configured overlay size is ignored
    ui.node_mut(menu).unwrap().set_size(Vec3::new(10.0, 10.0, 0.0));
    let button = ui
        .attach(menu, Node::rectangle().with_size(20.0, 10.0).with_anchor(Anchor::Center))
        .unwrap();
    ui.show_overlay(menu, &mut host).unwrap();
    render_frame(&mut ui);

    assert_eq!(location(&ui, button), (390.0, 295.0));
    assert_relative_eq!(ui.node(menu).unwrap().size().x, 800.0);
}

#[test]
fn test_depth_follows_parent() {
    let mut ui = UIManager::new();
    let back = ui.spawn(Node::group().with_depth(2.0));
    let front = ui.attach(back, Node::rectangle().with_depth(1.5)).unwrap();
    render_frame(&mut ui);

    assert_relative_eq!(ui.node(back).unwrap().render_location().z, 2.0);
    assert_relative_eq!(ui.node(front).unwrap().render_location().z, 3.5);
}

#[test]
fn test_text_width_measured_at_render() {
    let mut ui = UIManager::new();
    let panel = ui.spawn(Node::rectangle().with_size(150.0, 30.0));
    let label = ui.attach(panel, Node::text("Options").with_size(0.0, 9.0)).unwrap();
    let banner = ui.attach(panel, Node::text("Title").with_size(0.0, 9.0)).unwrap();
    if let Some(text) = ui.node_mut(banner).and_then(|node| node.as_text_mut()) {
        text.auto_fit = true;
    }
    render_frame(&mut ui);

    // 7 glyphs at the recording backend's 6px advance
    assert_relative_eq!(ui.node(label).unwrap().size().x, 42.0);
    assert_relative_eq!(ui.node(banner).unwrap().size().x, 150.0);
}

#[test]
fn test_centered_text_uses_measured_width() {
    let mut ui = UIManager::new();
    let label = ui.spawn(Node::text("abcd").with_size(0.0, 8.0).with_anchor(Anchor::Center));
    render_frame(&mut ui);
    assert_eq!(location(&ui, label), (400.0 - 12.0, 300.0 - 4.0));
}
