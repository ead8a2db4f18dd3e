//! Move Objects Tool
//!
//! Moves the selected entities. A drag has to start on a selected entity;
//! steps that would push any selected entity out of the world are refused.

use crate::commands::MoveObjectsCommand;
use crate::config::MoveToolConfig;
use crate::document::Document;
use crate::geometry::Vec3;
use crate::input::InputState;
use crate::scene::Picker;
use super::move_tool::{MoveResult, MoveTarget, MoveTool};
use super::plane_drag::PlaneDragTool;

pub const MOVE_OBJECTS_ID: &str = "move_objects";

#[derive(Debug, Clone, Copy, Default)]
pub struct MoveObjectsTool {
    picker: Picker,
}

impl MoveObjectsTool {
    pub fn new() -> Self {
        Self { picker: Picker::new() }
    }

    /// Move tool for selected entities, ready to hand to an `InputController`
    pub fn tool(config: MoveToolConfig) -> PlaneDragTool<MoveTool<MoveObjectsTool>> {
        PlaneDragTool::new(MoveTool::new(MOVE_OBJECTS_ID, "Move Objects", Self::new(), config))
    }
}

impl MoveTarget<Document> for MoveObjectsTool {
    fn action_name(&self) -> &str {
        "Move Objects"
    }

    fn is_applicable(&self, input: &InputState, document: &Document) -> Option<Vec3> {
        let hit = self.picker.pick(&document.scene, &input.pick_ray)?;
        let entity = document.scene.entity(hit.entity)?;
        entity.selected.then_some(hit.point)
    }

    fn perform_move(&mut self, delta: Vec3, document: &mut Document) -> MoveResult {
        let ids = document.scene.selected_ids();
        if ids.is_empty() {
            return MoveResult::Conclude;
        }

        let world = *document.scene.world_bounds();
        let leaves_world = ids
            .iter()
            .filter_map(|id| document.scene.entity(*id))
            .any(|e| !world.contains_box(&e.bounds.translated(delta)));
        if leaves_world {
            return MoveResult::Deny;
        }

        match document.submit(Box::new(MoveObjectsCommand::new(ids, delta))) {
            Ok(()) => MoveResult::Continue,
            Err(e) => {
                log::warn!("Move Objects failed: {}", e);
                MoveResult::Conclude
            }
        }
    }
}
