//! Axis-aligned bounding boxes

use super::math::Vec3;
use super::ray::Ray;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BBox {
    /// Box spanning the two corners, in any order
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Cube of half-extent `half` around `center`
    pub fn around(center: Vec3, half: f32) -> Self {
        let h = Vec3::new(half, half, half);
        Self::new(center - h, center + h)
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn translated(&self, delta: Vec3) -> Self {
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }

    pub fn contains_box(&self, other: &BBox) -> bool {
        other.min.x >= self.min.x && other.max.x <= self.max.x
            && other.min.y >= self.min.y && other.max.y <= self.max.y
            && other.min.z >= self.min.z && other.max.z <= self.max.z
    }

    /// Slab test. Returns the distance to the nearest hit in front of the
    /// ray origin (0 if the origin is inside the box).
    pub fn intersect_with_ray(&self, ray: &Ray) -> Option<f32> {
        let origin = [ray.origin.x, ray.origin.y, ray.origin.z];
        let dir = [ray.direction.x, ray.direction.y, ray.direction.z];
        let min = [self.min.x, self.min.y, self.min.z];
        let max = [self.max.x, self.max.y, self.max.z];

        let mut t_near = f32::NEG_INFINITY;
        let mut t_far = f32::INFINITY;

        for i in 0..3 {
            if dir[i] == 0.0 {
                if origin[i] < min[i] || origin[i] > max[i] {
                    return None;
                }
                continue;
            }
            let t1 = (min[i] - origin[i]) / dir[i];
            let t2 = (max[i] - origin[i]) / dir[i];
            t_near = t_near.max(t1.min(t2));
            t_far = t_far.min(t1.max(t2));
            if t_near > t_far {
                return None;
            }
        }

        if t_far < 0.0 {
            return None;
        }
        Some(t_near.max(0.0))
    }
}
