//! Overlay demo application
//!
//! Drives the UI engine headlessly: builds a small HUD and a pause menu
//! overlay, then replays a scripted sequence of input ticks and frames
//! against the recording backend and logs what happened.
//!
//! Usage: `overlay_demo [config.toml|config.ron]`

use std::cell::Cell;
use std::rc::Rc;
use ui_engine::foundation::logging;
use ui_engine::prelude::*;
use ui_engine::ui::{Modifiers, RoundedRectangle, KEY_ESCAPE};

const GUI_SCALE: f64 = 2.0;
const WINDOW: (f64, f64) = (854.0, 480.0);

const BUTTON_IDLE: Color = Color::rgba(40, 40, 48, 0.9);
const BUTTON_HOVER: Color = Color::rgba(80, 80, 110, 0.9);

#[derive(thiserror::Error, Debug)]
enum AppError {
    #[error("UI error: {0}")]
    Ui(#[from] UiError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Handles the demo keeps after building the scene
struct Scene {
    hud: NodeId,
    menu: NodeId,
    resume: NodeId,
    resume_clicked: Rc<Cell<bool>>,
    quit_requested: Rc<Cell<bool>>,
}

fn build_scene(ui: &mut UIManager) -> Result<Scene, AppError> {
    // HUD: rounded score panel in the top-left corner
    let hud = ui.spawn(
        ui.new_rounded_rectangle()
            .with_size(90.0, 20.0)
            .with_offset(4.0, 4.0)
            .with_color(Color::rgba(0, 0, 0, 0.5)),
    );
    ui.attach(
        hud,
        Node::text("Score: 0")
            .with_size(0.0, 9.0)
            .with_anchor(Anchor::Center)
            .with_color(Color::WHITE),
    )?;

    // Pause menu
    let menu = ui.spawn(ui.new_overlay());
    let column = ui.attach(menu, Node::group().with_size(120.0, 60.0).with_anchor(Anchor::Center))?;

    let resume = ui.attach(column, menu_button(ui, 0.0))?;
    ui.attach(resume, label("Resume"))?;
    let quit = ui.attach(column, menu_button(ui, 32.0))?;
    ui.attach(quit, label("Quit"))?;

    let resume_clicked = Rc::new(Cell::new(false));
    let quit_requested = Rc::new(Cell::new(false));

    if let Some(node) = ui.node_mut(resume) {
        let clicked = Rc::clone(&resume_clicked);
        node.set_on_click(move |_, ctx| {
            if ctx.pressed && ctx.button == MouseButton::Left {
                clicked.set(true);
            }
        });
    }
    if let Some(node) = ui.node_mut(quit) {
        let requested = Rc::clone(&quit_requested);
        node.set_on_click(move |_, ctx| {
            if ctx.pressed {
                requested.set(true);
            }
        });
    }

    if let Some(overlay) = ui.node_mut(menu).and_then(Node::as_overlay_mut) {
        overlay.set_on_key(|_, ctx| {
            if ctx.modifiers.contains(Modifiers::CONTROL) {
                log::info!("Menu shortcut: key {} with {:?}", ctx.key_code, ctx.modifiers);
            }
        });
        overlay.set_on_scroll(|hovered, ctx| {
            if let Some(node) = hovered {
                let mut offset = node.offset();
                offset.y += ctx.amount * 4.0;
                node.set_offset(offset);
            }
        });
    }

    Ok(Scene {
        hud,
        menu,
        resume,
        resume_clicked,
        quit_requested,
    })
}

/// Full-width menu button that lights up while hovered
fn menu_button(ui: &UIManager, y: f64) -> Node {
    let style = RoundedRectangle::from_config(&ui.config().shapes).with_radius(4);
    Node::new(NodeKind::RoundedRectangle(style))
        .with_size(120.0, 24.0)
        .with_offset(0.0, y)
        .with_color(BUTTON_IDLE)
        .on_hover(|node, ctx| {
            node.set_color(if ctx.hovered { BUTTON_HOVER } else { BUTTON_IDLE });
        })
}

fn label(content: &str) -> Node {
    Node::text(content)
        .with_size(0.0, 9.0)
        .with_anchor(Anchor::Center)
        .with_color(Color::WHITE)
}

/// One input tick followed by one frame
///
/// Events raised by key/scroll/drag since the last step are logged before the
/// update drops them.
fn step(
    ui: &mut UIManager,
    input: &mut UIInputProcessor,
    host: &HeadlessHost,
    backend: &mut RecordingBackend,
) {
    log_events(ui);
    ui.update_sample(input.sample(), host);
    backend.take_commands();
    ui.render(backend, 1.0 / 60.0);
    log_events(ui);
}

fn log_events(ui: &mut UIManager) {
    for event in ui.drain_events() {
        log::debug!("{:?} -> {:?}", event.node, event.event);
    }
}

fn run(config: UiConfig) -> Result<(), AppError> {
    let mut ui = UIManager::with_config(config);
    let mut host = HeadlessHost::new();
    let mut input = UIInputProcessor::new(GUI_SCALE);
    let mut backend = RecordingBackend::new(WINDOW.0 / GUI_SCALE, WINDOW.1 / GUI_SCALE);

    let scene = build_scene(&mut ui)?;
    log::info!("Scene built: {} nodes, {} roots", ui.node_count(), ui.elements().len());

    // Lay out once so hit tests have locations
    ui.render(&mut backend, 0.0);
    log::info!("HUD frame: {} draw calls", backend.draw_commands().len());

    // Open the pause menu
    ui.show_overlay(scene.menu, &mut host)?;
    log::info!(
        "Menu shown (chat suppressed: {}, HUD hidden: {})",
        host.chat_suppressed,
        ui.is_hud_hidden()
    );
    step(&mut ui, &mut input, &host, &mut backend);

    // Move onto the resume button and click it
    let (resume_x, resume_y) = ui
        .node(scene.resume)
        .map_or((0.0, 0.0), |node| (node.render_location().x, node.render_location().y));
    input.update_mouse_position((resume_x + 10.0) * GUI_SCALE, (resume_y + 10.0) * GUI_SCALE);
    step(&mut ui, &mut input, &host, &mut backend);
    input.update_mouse_button(MouseButton::Left, true);
    step(&mut ui, &mut input, &host, &mut backend);
    input.update_mouse_button(MouseButton::Left, false);
    if input.left_released() {
        ui.end_drag();
    }
    log::info!("Resume clicked: {}", scene.resume_clicked.get());

    // Scroll and keyboard while the menu is up
    let (mouse_x, mouse_y) = input.mouse_position();
    ui.handle_scroll(mouse_x, mouse_y, 1.0);
    ui.handle_key_pressed(83, 0x02, &mut host);
    step(&mut ui, &mut input, &host, &mut backend);

    // Escape closes the menu
    ui.handle_key_pressed(KEY_ESCAPE, 0, &mut host);
    step(&mut ui, &mut input, &host, &mut backend);
    log::info!(
        "Menu closed (chat suppressed: {}, HUD hidden: {}, HUD enabled: {})",
        host.chat_suppressed,
        ui.is_hud_hidden(),
        ui.node(scene.hud).is_some_and(Node::is_enabled),
    );

    log::info!(
        "Rendered {} frames; quit requested: {}",
        ui.frame_count(),
        scene.quit_requested.get()
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => UiConfig::load_from_file(path)?,
        None => UiConfig::default(),
    };
    config.validate()?;

    logging::init_with_filter(&config.engine.log_level);
    log::info!("Starting overlay demo");

    run(config)?;

    log::info!("Overlay demo finished");
    Ok(())
}
