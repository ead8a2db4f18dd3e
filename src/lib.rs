//! mapedit: interactive manipulation tools for a 3D level editor
//!
//! The core turns input snapshots into undoable edits:
//! - Plane drags constrained by camera orientation and modifier keys
//! - Grid snapping of every movement step
//! - Command groups so one drag undoes as one unit
//! - Movement indicator feedback drawn into a line surface

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod camera;
pub mod commands;
pub mod config;
pub mod document;
pub mod geometry;
pub mod grid;
pub mod input;
pub mod render;
pub mod scene;
pub mod tools;
