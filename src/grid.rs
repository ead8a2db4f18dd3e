//! Editing grid
//!
//! Grid spacing is always a power of two (1, 2, 4, ... 256 units). Snapping
//! rounds each component to the nearest grid multiple, which makes `snap`
//! idempotent.

use crate::config::GridConfig;
use crate::geometry::Vec3;

/// Largest grid size exponent (2^8 = 256 units)
pub const MAX_SIZE: u8 = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    size: u8,
    snap: bool,
}

impl Grid {
    pub fn new(size: u8) -> Self {
        Self {
            size: size.min(MAX_SIZE),
            snap: true,
        }
    }

    pub fn from_config(config: &GridConfig) -> Self {
        Self {
            size: config.size.min(MAX_SIZE),
            snap: config.snap,
        }
    }

    /// Size exponent
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Spacing between grid lines in world units
    pub fn actual_size(&self) -> f32 {
        (1u32 << self.size) as f32
    }

    pub fn set_size(&mut self, size: u8) {
        self.size = size.min(MAX_SIZE);
    }

    pub fn inc_size(&mut self) {
        self.set_size(self.size.saturating_add(1));
    }

    pub fn dec_size(&mut self) {
        self.size = self.size.saturating_sub(1);
    }

    pub fn snap_enabled(&self) -> bool {
        self.snap
    }

    pub fn toggle_snap(&mut self) {
        self.snap = !self.snap;
    }

    /// Snap a single value to the nearest grid multiple
    pub fn snap_value(&self, value: f32) -> f32 {
        if !self.snap {
            return value;
        }
        let grid_size = self.actual_size();
        (value / grid_size).round() * grid_size
    }

    /// Snap a position or displacement component-wise
    pub fn snap(&self, v: Vec3) -> Vec3 {
        Vec3::new(
            self.snap_value(v.x),
            self.snap_value(v.y),
            self.snap_value(v.z),
        )
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::from_config(&GridConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_value() {
        let grid = Grid::new(0);
        assert!((grid.snap_value(1.3) - 1.0).abs() < 0.001);
        assert!((grid.snap_value(1.6) - 2.0).abs() < 0.001);
        assert!((grid.snap_value(2.5) - 3.0).abs() < 0.001); // Round half away from zero
        assert!((grid.snap_value(-1.3) - -1.0).abs() < 0.001);
    }

    #[test]
    fn test_snap_vector() {
        let grid = Grid::new(4);
        let snapped = grid.snap(Vec3::new(7.0, 9.0, -25.0));
        assert_eq!(snapped, Vec3::new(0.0, 16.0, -32.0));
    }

    #[test]
    fn test_snap_is_idempotent() {
        for size in 0..=MAX_SIZE {
            let grid = Grid::new(size);
            for v in [
                Vec3::new(3.3, -17.9, 100.1),
                Vec3::new(0.49, 1000.0, -0.51),
                Vec3::new(-513.0, 255.5, 64.0),
            ] {
                let once = grid.snap(v);
                assert_eq!(grid.snap(once), once, "size {} vector {:?}", size, v);
            }
        }
    }

    #[test]
    fn test_snap_disabled_passes_through() {
        let mut grid = Grid::new(4);
        grid.toggle_snap();
        let v = Vec3::new(3.3, -1.7, 0.2);
        assert_eq!(grid.snap(v), v);
    }

    #[test]
    fn test_size_is_clamped() {
        let mut grid = Grid::new(20);
        assert_eq!(grid.size(), MAX_SIZE);
        assert_eq!(grid.actual_size(), 256.0);
        grid.inc_size();
        assert_eq!(grid.size(), MAX_SIZE);

        grid.set_size(0);
        grid.dec_size();
        assert_eq!(grid.size(), 0);
        assert_eq!(grid.actual_size(), 1.0);
    }
}
