//! Editable scene
//!
//! A flat list of entities with bounds and selection state. This is all the
//! scene the manipulation tools need; brush geometry and entity properties
//! live elsewhere.

mod picker;

pub use picker::{Hit, Picker};

use std::fmt;
use crate::geometry::{BBox, Vec3};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Entity {
    pub id: EntityId,
    pub classname: String,
    pub bounds: BBox,
    pub selected: bool,
    pub hidden: bool,
}

#[derive(Debug, Clone)]
pub struct Scene {
    entities: Vec<Entity>,
    next_id: u32,
    world_bounds: BBox,
}

impl Scene {
    /// Half extent of the default world bounds
    pub const DEFAULT_WORLD_HALF_SIZE: f32 = 16384.0;

    pub fn new() -> Self {
        Self::with_world_bounds(BBox::around(Vec3::ZERO, Self::DEFAULT_WORLD_HALF_SIZE))
    }

    pub fn with_world_bounds(world_bounds: BBox) -> Self {
        Self {
            entities: Vec::new(),
            next_id: 1,
            world_bounds,
        }
    }

    pub fn world_bounds(&self) -> &BBox {
        &self.world_bounds
    }

    pub fn add_entity(&mut self, classname: impl Into<String>, bounds: BBox) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.entities.push(Entity {
            id,
            classname: classname.into(),
            bounds,
            selected: false,
            hidden: false,
        });
        id
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// Select an entity. Returns false if it doesn't exist.
    pub fn select(&mut self, id: EntityId) -> bool {
        match self.entity_mut(id) {
            Some(entity) => {
                entity.selected = true;
                true
            }
            None => false,
        }
    }

    pub fn deselect_all(&mut self) {
        for entity in &mut self.entities {
            entity.selected = false;
        }
    }

    pub fn selected_ids(&self) -> Vec<EntityId> {
        self.entities
            .iter()
            .filter(|e| e.selected)
            .map(|e| e.id)
            .collect()
    }

    pub fn has_selection(&self) -> bool {
        self.entities.iter().any(|e| e.selected)
    }

    /// Move an entity's bounds by `delta`. Returns false if it doesn't exist.
    pub fn translate_entity(&mut self, id: EntityId, delta: Vec3) -> bool {
        match self.entity_mut(id) {
            Some(entity) => {
                entity.bounds = entity.bounds.translated(delta);
                true
            }
            None => false,
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_select_translate() {
        let mut scene = Scene::new();
        let a = scene.add_entity("light", BBox::around(Vec3::ZERO, 8.0));
        let b = scene.add_entity("info_player_start", BBox::around(Vec3::new(64.0, 0.0, 0.0), 16.0));
        assert_ne!(a, b);
        assert!(!scene.has_selection());

        assert!(scene.select(b));
        assert_eq!(scene.selected_ids(), vec![b]);

        assert!(scene.translate_entity(b, Vec3::new(0.0, 0.0, 32.0)));
        assert_eq!(scene.entity(b).unwrap().bounds.center(), Vec3::new(64.0, 0.0, 32.0));

        scene.deselect_all();
        assert!(scene.selected_ids().is_empty());
        assert!(!scene.select(EntityId(99)));
        assert!(!scene.translate_entity(EntityId(99), Vec3::POS_X));
    }
}
