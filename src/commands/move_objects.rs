//! Translate a set of entities

use crate::geometry::Vec3;
use crate::scene::{EntityId, Scene};
use super::command::{Command, CommandError, CommandResult};

#[derive(Debug, Clone)]
pub struct MoveObjectsCommand {
    /// Entities being moved
    pub ids: Vec<EntityId>,
    pub delta: Vec3,
}

impl MoveObjectsCommand {
    pub fn new(ids: Vec<EntityId>, delta: Vec3) -> Self {
        Self { ids, delta }
    }

    fn translate_all(&self, scene: &mut Scene, delta: Vec3) -> CommandResult {
        // Check first so a missing entity leaves the scene untouched
        if let Some(missing) = self.ids.iter().find(|id| scene.entity(**id).is_none()) {
            return Err(CommandError::EntityNotFound(*missing));
        }
        for id in &self.ids {
            scene.translate_entity(*id, delta);
        }
        Ok(())
    }
}

impl Command for MoveObjectsCommand {
    fn description(&self) -> &str {
        "Move Objects"
    }

    fn execute(&mut self, scene: &mut Scene) -> CommandResult {
        self.translate_all(scene, self.delta)
    }

    fn undo(&mut self, scene: &mut Scene) -> CommandResult {
        self.translate_all(scene, -self.delta)
    }
}
