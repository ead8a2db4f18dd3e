//! Perspective camera for the editor viewport
//!
//! Z-up world. Screen coordinates have their origin in the top left corner
//! and grow right/down, matching macroquad's mouse coordinates.

use crate::config::CameraConfig;
use crate::geometry::{Ray, Vec3};

/// Pitch limit; at the poles the right vector degenerates
const MAX_PITCH: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

/// Camera state for picking and overlay placement
#[derive(Clone, Debug)]
pub struct Camera {
    pub position: Vec3,
    pub rotation_x: f32, // Pitch
    pub rotation_y: f32, // Yaw

    /// Vertical field of view in degrees
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    /// Distance at which `default_point` places screen-anchored points
    pub default_point_distance: f32,
    /// Viewport size in screen units
    pub viewport: (f32, f32),

    // Computed basis vectors
    pub basis_x: Vec3, // Right
    pub basis_y: Vec3, // Up
    pub basis_z: Vec3, // Forward
}

impl Camera {
    pub fn new() -> Self {
        Self::from_config(&CameraConfig::default())
    }

    pub fn from_config(config: &CameraConfig) -> Self {
        let mut cam = Self {
            position: Vec3::ZERO,
            rotation_x: 0.0,
            rotation_y: 0.0,
            fov: config.fov,
            near: config.near,
            far: config.far,
            default_point_distance: config.default_point_distance,
            viewport: (800.0, 600.0),
            basis_x: Vec3::new(0.0, -1.0, 0.0),
            basis_y: Vec3::POS_Z,
            basis_z: Vec3::POS_X,
        };
        cam.update_basis();
        cam
    }

    /// Camera at `position` looking towards `target`
    pub fn looking_at(position: Vec3, target: Vec3) -> Self {
        let mut cam = Self::new();
        cam.position = position;
        let dir = (target - position).normalize();
        if !dir.is_null() {
            cam.rotation_x = dir.z.clamp(-1.0, 1.0).asin().clamp(-MAX_PITCH, MAX_PITCH);
            cam.rotation_y = dir.y.atan2(dir.x);
        }
        cam.update_basis();
        cam
    }

    pub fn update_basis(&mut self) {
        // Forward vector based on rotation (yaw around Z, pitch towards +Z)
        self.basis_z = Vec3 {
            x: self.rotation_x.cos() * self.rotation_y.cos(),
            y: self.rotation_x.cos() * self.rotation_y.sin(),
            z: self.rotation_x.sin(),
        };

        // Right vector
        self.basis_x = self.basis_z.cross(Vec3::POS_Z).normalize();

        // Up vector
        self.basis_y = self.basis_x.cross(self.basis_z);
    }

    /// Yaw by `dyaw`, pitch by `dpitch` (radians). Pitch stops short of the poles.
    pub fn rotate(&mut self, dyaw: f32, dpitch: f32) {
        self.rotation_y += dyaw;
        self.rotation_x = (self.rotation_x + dpitch).clamp(-MAX_PITCH, MAX_PITCH);
        self.update_basis();
    }

    /// Move in camera space: x = right, y = up, z = forward
    pub fn move_by(&mut self, local: Vec3) {
        self.position += self.basis_x * local.x + self.basis_y * local.y + self.basis_z * local.z;
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = (width.max(1.0), height.max(1.0));
    }

    /// View direction
    pub fn direction(&self) -> Vec3 {
        self.basis_z
    }

    /// Ray from the eye through the screen point (x, y)
    pub fn pick_ray(&self, x: f32, y: f32) -> Ray {
        let (width, height) = self.viewport;
        let ndc_x = 2.0 * x / width - 1.0;
        let ndc_y = 1.0 - 2.0 * y / height;

        let half_h = (self.fov.to_radians() * 0.5).tan();
        let half_w = half_h * width / height;

        let direction = self.basis_z
            + self.basis_x * (ndc_x * half_w)
            + self.basis_y * (ndc_y * half_h);

        Ray::new(self.position, direction)
    }

    /// World point under the screen point (x, y) at the default distance
    pub fn default_point(&self, x: f32, y: f32) -> Vec3 {
        self.pick_ray(x, y).at(self.default_point_distance)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basis_is_orthonormal() {
        let mut camera = Camera::new();
        camera.rotate(0.7, -0.4);
        assert!(camera.basis_x.dot(camera.basis_y).abs() < 0.001);
        assert!(camera.basis_x.dot(camera.basis_z).abs() < 0.001);
        assert!(camera.basis_y.dot(camera.basis_z).abs() < 0.001);
        assert!(camera.basis_x.z.abs() < 0.001, "right vector stays horizontal");
        assert!(camera.basis_y.z > 0.0, "up vector points up");
    }

    #[test]
    fn test_center_ray_follows_view_direction() {
        let camera = Camera::looking_at(Vec3::new(0.0, 0.0, 100.0), Vec3::new(100.0, 0.0, 0.0));
        let ray = camera.pick_ray(camera.viewport.0 / 2.0, camera.viewport.1 / 2.0);
        let dot = ray.direction.dot(camera.direction());
        assert!(dot > 0.999, "center ray should be aligned with camera forward, got dot={}", dot);
        assert!(ray.direction.z < 0.0);
    }

    #[test]
    fn test_screen_y_grows_downward() {
        let camera = Camera::new();
        let top = camera.pick_ray(camera.viewport.0 / 2.0, 0.0);
        let bottom = camera.pick_ray(camera.viewport.0 / 2.0, camera.viewport.1);
        assert!(top.direction.z > 0.0);
        assert!(bottom.direction.z < 0.0);

        let right = camera.pick_ray(camera.viewport.0, camera.viewport.1 / 2.0);
        assert!(right.direction.dot(camera.basis_x) > 0.0);
    }

    #[test]
    fn test_default_point_distance() {
        let camera = Camera::new();
        let p = camera.default_point(10.0, 20.0);
        assert!(((p - camera.position).len() - camera.default_point_distance).abs() < 0.01);
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut camera = Camera::new();
        camera.rotate(0.0, 10.0);
        assert!(camera.rotation_x < std::f32::consts::FRAC_PI_2);
        assert!(!camera.basis_x.is_null());
    }

    #[test]
    fn test_looking_straight_down_keeps_basis() {
        let camera = Camera::looking_at(Vec3::new(0.0, 0.0, 256.0), Vec3::ZERO);
        assert!(camera.rotation_x >= -MAX_PITCH);
        assert!(camera.direction().z < -0.99);
        assert!((camera.basis_x.len() - 1.0).abs() < 0.001);
        assert!(camera.basis_y.z > 0.0, "up vector points up");
        assert!(camera.basis_x.dot(camera.basis_y).abs() < 0.001);

        let right = camera.pick_ray(camera.viewport.0, camera.viewport.1 / 2.0);
        assert!(right.direction.dot(camera.basis_x) > 0.1);
    }
}
