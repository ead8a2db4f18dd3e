//! Vector math for editor geometry
//!
//! The world is Z-up: the horizontal plane is XY.

use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use serde::{Serialize, Deserialize};

/// Components closer to zero than this count as zero
pub const ALMOST_ZERO: f32 = 0.001;

/// 3D Vector
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };
    pub const POS_X: Vec3 = Vec3 { x: 1.0, y: 0.0, z: 0.0 };
    pub const POS_Y: Vec3 = Vec3 { x: 0.0, y: 1.0, z: 0.0 };
    pub const POS_Z: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 1.0 };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn dot(self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    pub fn len(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction, or the null vector if `self` is null
    pub fn normalize(self) -> Vec3 {
        let l = self.len();
        if l == 0.0 {
            return Vec3::ZERO;
        }
        Vec3 {
            x: self.x / l,
            y: self.y / l,
            z: self.z / l,
        }
    }

    pub fn scale(self, s: f32) -> Vec3 {
        Vec3 {
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
        }
    }

    /// True when every component is within `ALMOST_ZERO` of zero
    pub fn is_null(self) -> bool {
        self.x.abs() < ALMOST_ZERO && self.y.abs() < ALMOST_ZERO && self.z.abs() < ALMOST_ZERO
    }

    /// Same vector with the vertical component dropped
    pub fn horizontal(self) -> Vec3 {
        Vec3::new(self.x, self.y, 0.0)
    }

    /// The signed coordinate axis this vector points along the most.
    /// Ties prefer X over Y over Z.
    pub fn first_axis(self) -> Vec3 {
        let (ax, ay, az) = (self.x.abs(), self.y.abs(), self.z.abs());
        if ax >= ay && ax >= az {
            Vec3::POS_X * self.x.signum()
        } else if ay >= az {
            Vec3::POS_Y * self.y.signum()
        } else {
            Vec3::POS_Z * self.z.signum()
        }
    }

    pub fn min(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    pub fn max(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, other: Vec3) {
        *self = *self + other;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, other: Vec3) {
        *self = *self - other;
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    fn mul(self, s: f32) -> Vec3 {
        self.scale(s)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        self.scale(-1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cross_of_axes() {
        let z = Vec3::POS_X.cross(Vec3::POS_Y);
        assert_eq!(z, Vec3::POS_Z);
        let y = Vec3::POS_Z.cross(Vec3::POS_X);
        assert_eq!(y, Vec3::POS_Y);
    }

    #[test]
    fn test_normalize_null_stays_null() {
        assert!(Vec3::ZERO.normalize().is_null());
        let n = Vec3::new(3.0, 0.0, 4.0).normalize();
        assert!((n.len() - 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_is_null_tolerance() {
        assert!(Vec3::new(0.0005, -0.0005, 0.0).is_null());
        assert!(!Vec3::new(0.01, 0.0, 0.0).is_null());
    }

    #[test]
    fn test_first_axis_keeps_sign() {
        assert_eq!(Vec3::new(-5.0, 2.0, 1.0).first_axis(), -Vec3::POS_X);
        assert_eq!(Vec3::new(0.5, 2.0, -1.0).first_axis(), Vec3::POS_Y);
        assert_eq!(Vec3::new(0.1, 0.2, -3.0).first_axis(), -Vec3::POS_Z);
    }

    #[test]
    fn test_assign_ops() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        v += Vec3::new(1.0, 1.0, 1.0);
        assert_eq!(v, Vec3::new(2.0, 3.0, 4.0));
        v -= Vec3::new(2.0, 3.0, 4.0);
        assert!(v.is_null());
    }
}
