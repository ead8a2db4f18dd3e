//! Planes and the drag-plane factories used by plane drags

use super::math::Vec3;
use super::ray::Ray;

/// Below this `|direction . normal|` a ray counts as parallel to a plane
const PARALLEL_EPSILON: f32 = 0.0001;

/// Plane in Hessian normal form: points `p` with `p . normal == distance`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub distance: f32,
}

impl Plane {
    /// Plane with the given normal passing through `anchor`
    pub fn new(normal: Vec3, anchor: Vec3) -> Self {
        Self {
            normal,
            distance: anchor.dot(normal),
        }
    }

    /// Vertical plane facing the viewer.
    ///
    /// The normal is the dominant horizontal axis of `view_direction`, so the
    /// plane is always axis aligned and contains the Z axis.
    pub fn vertical_drag_plane(point: Vec3, view_direction: Vec3) -> Self {
        let horizontal = view_direction.horizontal();
        let normal = if horizontal.is_null() {
            Vec3::POS_X
        } else {
            horizontal.first_axis()
        };
        Self::new(normal, point)
    }

    /// Horizontal plane through `point`
    pub fn horizontal_drag_plane(point: Vec3) -> Self {
        Self::new(Vec3::POS_Z, point)
    }

    /// Point on the plane closest to the origin
    pub fn anchor(&self) -> Vec3 {
        self.normal * self.distance
    }

    /// Distance along `ray` to the plane.
    ///
    /// Returns None if the ray is parallel to the plane or the plane lies
    /// behind the ray origin.
    pub fn intersect_with_ray(&self, ray: &Ray) -> Option<f32> {
        let denom = ray.direction.dot(self.normal);
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = (self.anchor() - ray.origin).dot(self.normal) / denom;
        if t < 0.0 {
            return None;
        }

        Some(t)
    }

    /// Signed distance of `point` from the plane
    pub fn point_distance(&self, point: Vec3) -> f32 {
        point.dot(self.normal) - self.distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersect_with_ray() {
        // Ray pointing down at the XY plane from z=10
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
        let plane = Plane::horizontal_drag_plane(Vec3::ZERO);
        let t = plane.intersect_with_ray(&ray);
        assert!(t.is_some());
        assert!((t.unwrap() - 10.0).abs() < 0.001);
    }

    #[test]
    fn test_intersect_parallel_ray() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(1.0, 0.0, 0.0));
        let plane = Plane::horizontal_drag_plane(Vec3::ZERO);
        assert!(plane.intersect_with_ray(&ray).is_none());
    }

    #[test]
    fn test_intersect_behind_origin() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, 1.0));
        let plane = Plane::horizontal_drag_plane(Vec3::ZERO);
        assert!(plane.intersect_with_ray(&ray).is_none());
    }

    #[test]
    fn test_vertical_drag_plane_uses_dominant_horizontal_axis() {
        let point = Vec3::new(8.0, 16.0, 32.0);
        let plane = Plane::vertical_drag_plane(point, Vec3::new(0.2, -0.9, -0.1));
        assert_eq!(plane.normal, -Vec3::POS_Y);
        assert!(plane.point_distance(point).abs() < 0.001);

        let plane = Plane::vertical_drag_plane(point, Vec3::new(0.9, 0.1, -0.95));
        assert_eq!(plane.normal, Vec3::POS_X);
        assert_eq!(plane.normal.z, 0.0);
    }

    #[test]
    fn test_horizontal_drag_plane_passes_through_point() {
        let point = Vec3::new(1.0, 2.0, 3.0);
        let plane = Plane::horizontal_drag_plane(point);
        assert_eq!(plane.normal, Vec3::POS_Z);
        assert!((plane.distance - 3.0).abs() < 0.001);
    }
}
