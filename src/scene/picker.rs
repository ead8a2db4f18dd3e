//! Ray casting against scene entities

use crate::geometry::{Ray, Vec3};
use super::{EntityId, Scene};

/// Nearest entity under a ray
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub entity: EntityId,
    pub point: Vec3,
    pub distance: f32,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Picker;

impl Picker {
    pub fn new() -> Self {
        Self
    }

    /// Nearest visible entity hit by `ray`
    pub fn pick(&self, scene: &Scene, ray: &Ray) -> Option<Hit> {
        scene
            .entities()
            .iter()
            .filter(|e| !e.hidden)
            .filter_map(|e| {
                e.bounds.intersect_with_ray(ray).map(|distance| Hit {
                    entity: e.id,
                    point: ray.at(distance),
                    distance,
                })
            })
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::BBox;

    fn down_ray() -> Ray {
        Ray::new(Vec3::new(0.0, 0.0, 500.0), Vec3::new(0.0, 0.0, -1.0))
    }

    #[test]
    fn test_pick_nearest() {
        let mut scene = Scene::new();
        let low = scene.add_entity("low", BBox::around(Vec3::ZERO, 8.0));
        let high = scene.add_entity("high", BBox::around(Vec3::new(0.0, 0.0, 100.0), 8.0));

        let hit = Picker::new().pick(&scene, &down_ray()).expect("should hit");
        assert_eq!(hit.entity, high);
        assert!((hit.point.z - 108.0).abs() < 0.001);
        assert!((hit.distance - 392.0).abs() < 0.001);

        scene.entity_mut(high).unwrap().hidden = true;
        let hit = Picker::new().pick(&scene, &down_ray()).expect("should hit");
        assert_eq!(hit.entity, low);
    }

    #[test]
    fn test_pick_miss() {
        let mut scene = Scene::new();
        scene.add_entity("far", BBox::around(Vec3::new(200.0, 0.0, 0.0), 8.0));
        assert!(Picker::new().pick(&scene, &down_ray()).is_none());
    }
}
