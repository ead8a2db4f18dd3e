//! Polls macroquad into input snapshots

use macroquad::input::{is_key_down, is_mouse_button_down, mouse_position, KeyCode, MouseButton};

use crate::camera::Camera;
use super::state::{InputState, ModifierKeys, MouseButtons};

/// Current mouse buttons
pub fn mouse_buttons() -> MouseButtons {
    let mut buttons = MouseButtons::NONE;
    if is_mouse_button_down(MouseButton::Left) { buttons = buttons.with(MouseButtons::LEFT); }
    if is_mouse_button_down(MouseButton::Right) { buttons = buttons.with(MouseButtons::RIGHT); }
    if is_mouse_button_down(MouseButton::Middle) { buttons = buttons.with(MouseButtons::MIDDLE); }
    buttons
}

/// Current modifier keys (left and right variants are not distinguished)
pub fn modifier_keys() -> ModifierKeys {
    let mut keys = ModifierKeys::NONE;
    if is_key_down(KeyCode::LeftShift) || is_key_down(KeyCode::RightShift) {
        keys = keys.with(ModifierKeys::SHIFT);
    }
    if is_key_down(KeyCode::LeftControl) || is_key_down(KeyCode::RightControl) {
        keys = keys.with(ModifierKeys::CTRL);
    }
    if is_key_down(KeyCode::LeftAlt) || is_key_down(KeyCode::RightAlt) {
        keys = keys.with(ModifierKeys::ALT);
    }
    keys
}

/// Snapshot of the current frame's input as seen through `camera`
pub fn capture(camera: &Camera) -> InputState {
    let (x, y) = mouse_position();
    InputState::at(camera, x, y)
        .with_buttons(mouse_buttons())
        .with_modifiers(modifier_keys())
}
