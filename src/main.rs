//! mapedit viewport sandbox
//!
//! A window with a few boxes, a free camera and the move tool:
//! - Left click selects, left drag moves the selection (hold Alt for Z)
//! - Right drag looks around, WASD/QE flies
//! - Ctrl+Z / Ctrl+Shift+Z undo and redo, [ ] change the grid, G toggles snapping
//! - Ctrl+N reloads the sample scene and forgets the undo history

use macroquad::prelude as mq;
use macroquad::prelude::{KeyCode, MouseButton};

use mapedit::camera::Camera;
use mapedit::config::EditorConfig;
use mapedit::document::Document;
use mapedit::geometry::{BBox, Vec3};
use mapedit::input::{self, ModifierKeys};
use mapedit::render::{Color, LineBatch, RenderContext, RenderSurface};
use mapedit::scene::{Picker, Scene};
use mapedit::tools::{InputController, MoveObjectsTool, MOVE_OBJECTS_ID};
use mapedit::VERSION;

const LOOK_SPEED: f32 = 0.005;
const FLY_SPEED: f32 = 512.0;
/// Grid lines drawn on each side of the origin
const GRID_LINES: i32 = 32;

fn window_conf() -> mq::Conf {
    mq::Conf {
        window_title: format!("mapedit v{}", VERSION),
        window_width: 1280,
        window_height: 720,
        window_resizable: true,
        ..Default::default()
    }
}

fn to_mq(v: Vec3) -> mq::Vec3 {
    mq::vec3(v.x, v.y, v.z)
}

fn to_mq_color(c: Color) -> mq::Color {
    mq::Color::new(c.r, c.g, c.b, c.a)
}

fn sample_scene() -> Scene {
    let mut scene = Scene::new();
    scene.add_entity("info_player_start", BBox::new(Vec3::new(-16.0, -16.0, 0.0), Vec3::new(16.0, 16.0, 56.0)));
    scene.add_entity("light", BBox::around(Vec3::new(128.0, 64.0, 96.0), 8.0));
    scene.add_entity("func_box", BBox::new(Vec3::new(-192.0, 64.0, 0.0), Vec3::new(-96.0, 160.0, 64.0)));
    scene.add_entity("func_box", BBox::new(Vec3::new(64.0, -224.0, 0.0), Vec3::new(192.0, -160.0, 32.0)));
    scene
}

/// Select what's under the cursor, or clear the selection on empty space
fn click_select(doc: &mut Document, picker: &Picker, input: &input::InputState) {
    match picker.pick(&doc.scene, &input.pick_ray) {
        Some(hit) => {
            let already = doc.scene.entity(hit.entity).is_some_and(|e| e.selected);
            if !already {
                doc.scene.deselect_all();
                doc.scene.select(hit.entity);
                log::debug!("Selected {}", hit.entity);
            }
        }
        None => doc.scene.deselect_all(),
    }
}

fn draw_grid(surface: &mut dyn RenderSurface, spacing: f32, color: Color) {
    let extent = spacing * GRID_LINES as f32;
    for i in -GRID_LINES..=GRID_LINES {
        let d = i as f32 * spacing;
        surface.draw_line(Vec3::new(d, -extent, 0.0), Vec3::new(d, extent, 0.0), color);
        surface.draw_line(Vec3::new(-extent, d, 0.0), Vec3::new(extent, d, 0.0), color);
    }
}

fn draw_box(surface: &mut dyn RenderSurface, bounds: &BBox, color: Color) {
    let (a, b) = (bounds.min, bounds.max);
    let corner = |x: bool, y: bool, z: bool| {
        Vec3::new(if x { b.x } else { a.x }, if y { b.y } else { a.y }, if z { b.z } else { a.z })
    };
    for &(x, y) in &[(false, false), (true, false), (true, true), (false, true)] {
        // Vertical edge, then bottom and top edges to the next corner
        surface.draw_line(corner(x, y, false), corner(x, y, true), color);
        let (nx, ny) = match (x, y) {
            (false, false) => (true, false),
            (true, false) => (true, true),
            (true, true) => (false, true),
            (false, true) => (false, false),
        };
        surface.draw_line(corner(x, y, false), corner(nx, ny, false), color);
        surface.draw_line(corner(x, y, true), corner(nx, ny, true), color);
    }
}

fn flush(batch: &mut LineBatch) {
    for line in batch.lines() {
        mq::draw_line_3d(to_mq(line.start), to_mq(line.end), to_mq_color(line.color));
    }
    batch.clear();
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);
    env_logger::init();

    let config = EditorConfig::load_or_default();
    let mut doc = Document::from_config(sample_scene(), &config);
    let picker = Picker::new();

    let mut camera = Camera::from_config(&config.camera);
    camera.position = Vec3::new(-384.0, -384.0, 320.0);
    camera.rotate(std::f32::consts::FRAC_PI_4, -0.5);

    let mut controller: InputController<Document> = InputController::new();
    controller.add_tool(Box::new(MoveObjectsTool::tool(config.move_tool.clone())));
    controller.set_tool_active(MOVE_OBJECTS_ID, true, &mut doc);

    let mut batch = LineBatch::new();
    let mut last_mouse = mq::mouse_position();
    let mut last_modifiers = ModifierKeys::NONE;

    loop {
        camera.set_viewport(mq::screen_width(), mq::screen_height());
        let dt = mq::get_frame_time();
        let mouse = mq::mouse_position();

        // Camera: right drag looks, WASD/QE flies
        if mq::is_mouse_button_down(MouseButton::Right) {
            camera.rotate(-(mouse.0 - last_mouse.0) * LOOK_SPEED, -(mouse.1 - last_mouse.1) * LOOK_SPEED);
        }
        let mut fly = Vec3::ZERO;
        if mq::is_key_down(KeyCode::W) { fly.z += 1.0; }
        if mq::is_key_down(KeyCode::S) { fly.z -= 1.0; }
        if mq::is_key_down(KeyCode::D) { fly.x += 1.0; }
        if mq::is_key_down(KeyCode::A) { fly.x -= 1.0; }
        if mq::is_key_down(KeyCode::E) { fly.y += 1.0; }
        if mq::is_key_down(KeyCode::Q) { fly.y -= 1.0; }
        if !fly.is_null() {
            camera.move_by(fly * (FLY_SPEED * dt));
        }

        // Tool input
        let state = input::capture(&camera);
        if state.modifier_keys != last_modifiers {
            controller.modifier_keys_changed(state.clone(), &mut doc);
            last_modifiers = state.modifier_keys;
        }
        if mq::is_mouse_button_pressed(MouseButton::Left) {
            if state.modifier_keys == ModifierKeys::NONE {
                click_select(&mut doc, &picker, &state);
            }
            controller.mouse_down(state.clone(), &mut doc);
        }
        if mouse != last_mouse {
            controller.mouse_moved(state.clone(), &mut doc);
        }
        if mq::is_mouse_button_released(MouseButton::Left) {
            controller.mouse_up(state.clone(), &mut doc);
        }
        last_mouse = mouse;

        // Editing keys
        let ctrl = state.modifier_keys.contains(ModifierKeys::CTRL);
        if ctrl && mq::is_key_pressed(KeyCode::Z) && !controller.is_dragging() {
            let result = if state.modifier_keys.contains(ModifierKeys::SHIFT) { doc.redo() } else { doc.undo() };
            if let Err(e) = result {
                log::info!("{}", e);
            }
        }
        if ctrl && mq::is_key_pressed(KeyCode::N) && !controller.is_dragging() {
            doc.clear_history();
            doc.scene = sample_scene();
            log::info!("Sample scene reloaded");
        }
        if mq::is_key_pressed(KeyCode::LeftBracket) {
            doc.grid.dec_size();
        }
        if mq::is_key_pressed(KeyCode::RightBracket) {
            doc.grid.inc_size();
        }
        if mq::is_key_pressed(KeyCode::G) {
            doc.grid.toggle_snap();
        }

        // Scene
        let colors = &config.colors;
        mq::clear_background(to_mq_color(colors.background));
        mq::set_camera(&mq::Camera3D {
            position: to_mq(camera.position),
            target: to_mq(camera.position + camera.direction()),
            up: mq::vec3(0.0, 0.0, 1.0),
            fovy: camera.fov.to_radians(),
            ..Default::default()
        });

        let grid_color = Color::new(1.0, 1.0, 1.0, colors.grid_alpha);
        draw_grid(&mut batch, doc.grid.actual_size(), grid_color);
        for entity in doc.scene.entities().iter().filter(|e| !e.hidden) {
            let color = if entity.selected { colors.selected_entity_bounds } else { colors.entity_bounds };
            draw_box(&mut batch, &entity.bounds, color);
        }

        let context = RenderContext::new(camera.clone(), colors.clone());
        controller.render(&mut batch, &context, &doc);
        flush(&mut batch);

        // Status line
        mq::set_default_camera();
        let status = format!(
            "grid {} ({}) | undo: {} | redo: {}",
            doc.grid.actual_size(),
            if doc.grid.snap_enabled() { "snap" } else { "free" },
            doc.history.undo_description().unwrap_or("-"),
            doc.history.redo_description().unwrap_or("-"),
        );
        mq::draw_text(&status, 10.0, 20.0, 20.0, mq::WHITE);

        mq::next_frame().await
    }
}
