//! Input snapshots
//!
//! Tools never poll input themselves; they receive an `InputState` per
//! event. `capture` builds one from macroquad.

mod capture;
mod state;

pub use capture::{capture, modifier_keys, mouse_buttons};
pub use state::{InputState, ModifierKeys, MouseButtons};
