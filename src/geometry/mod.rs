//! Geometry primitives for picking and plane drags
//!
//! - `math` - Vec3 and vector helpers
//! - `ray` - Rays cast from the cursor
//! - `plane` - Planes, ray intersection, drag-plane factories
//! - `bbox` - Axis-aligned boxes for entity bounds

pub mod bbox;
pub mod math;
pub mod plane;
pub mod ray;

pub use bbox::BBox;
pub use math::{Vec3, ALMOST_ZERO};
pub use plane::Plane;
pub use ray::Ray;
