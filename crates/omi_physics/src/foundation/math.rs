//! Math utilities and types
//!
//! Dimensions coming from the host are double precision so values pass into
//! the JSON output without an `f32` round trip.

pub use nalgebra::Vector3;

/// 3D vector type
pub type Vec3 = Vector3<f64>;

/// Largest component of a vector
pub fn max_component(v: &Vec3) -> f64 {
    v.x.max(v.y).max(v.z)
}

/// Largest component in the XY plane
pub fn max_planar_component(v: &Vec3) -> f64 {
    v.x.max(v.y)
}
