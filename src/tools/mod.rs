//! Interactive manipulation tools
//!
//! Tools turn input snapshots into edits on a document:
//! - `InputController` routes mouse and keyboard events to tools
//! - `PlaneDragTool` turns a drag into points on a constraint plane
//! - `MoveTool` snaps plane movement to the grid and records it as one
//!   undoable command group
//!
//! Inspired by TrenchBroom's tool architecture.

mod controller;
mod move_objects_tool;
mod move_tool;
mod plane_drag;
mod tool;

pub use controller::{InputController, ToolController};
pub use move_objects_tool::{MoveObjectsTool, MOVE_OBJECTS_ID};
pub use move_tool::{
    constrain_delta, hover_direction, select_constraint, MoveDirection, MoveResult, MoveTarget, MoveTool,
    AXIS_OVERRIDE,
};
pub use plane_drag::{DragStatus, PlaneDragHandler, PlaneDragTool};
pub use tool::Tool;
