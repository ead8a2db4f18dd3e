//! Input snapshots handed to tools

use crate::camera::Camera;
use crate::geometry::Ray;

/// Mouse button bitmask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MouseButtons(u8);

impl MouseButtons {
    pub const NONE: MouseButtons = MouseButtons(0);
    pub const LEFT: MouseButtons = MouseButtons(1 << 0);
    pub const RIGHT: MouseButtons = MouseButtons(1 << 1);
    pub const MIDDLE: MouseButtons = MouseButtons(1 << 2);

    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, other: MouseButtons) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn with(self, other: MouseButtons) -> MouseButtons {
        MouseButtons(self.0 | other.0)
    }
}

/// Modifier key bitmask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ModifierKeys(u8);

impl ModifierKeys {
    pub const NONE: ModifierKeys = ModifierKeys(0);
    pub const SHIFT: ModifierKeys = ModifierKeys(1 << 0);
    pub const CTRL: ModifierKeys = ModifierKeys(1 << 1);
    pub const ALT: ModifierKeys = ModifierKeys(1 << 2);

    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, other: ModifierKeys) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn with(self, other: ModifierKeys) -> ModifierKeys {
        ModifierKeys(self.0 | other.0)
    }
}

/// Snapshot of the input at the time of one event
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub mouse_buttons: MouseButtons,
    pub modifier_keys: ModifierKeys,
    /// Ray from the eye through the cursor
    pub pick_ray: Ray,
    /// Cursor position in screen coordinates
    pub x: f32,
    pub y: f32,
    pub camera: Camera,
}

impl InputState {
    /// Snapshot with the cursor at (x, y) and nothing pressed
    pub fn at(camera: &Camera, x: f32, y: f32) -> Self {
        Self {
            mouse_buttons: MouseButtons::NONE,
            modifier_keys: ModifierKeys::NONE,
            pick_ray: camera.pick_ray(x, y),
            x,
            y,
            camera: camera.clone(),
        }
    }

    pub fn with_buttons(mut self, buttons: MouseButtons) -> Self {
        self.mouse_buttons = buttons;
        self
    }

    pub fn with_modifiers(mut self, modifiers: ModifierKeys) -> Self {
        self.modifier_keys = modifiers;
        self
    }

    /// Get mouse position as tuple
    pub fn mouse_pos(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}
