//! Coordinate system conversion utilities
//!
//! The authoring tool works in a Z-up right-handed system while glTF is Y-up
//! right-handed. Physics shapes only carry extents, never positions, so the
//! conversion reduces to an axis permutation without sign flips.

use super::math::Vec3;

/// Coordinate system conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateSystem {
    /// Z-up, right-handed (authoring tool)
    ZUpRightHanded,
    /// Y-up, right-handed (glTF)
    YUpRightHanded,
}

/// Converts extents between coordinate systems
#[derive(Debug, Clone, Copy)]
pub struct CoordinateConverter {
    from: CoordinateSystem,
    to: CoordinateSystem,
}

impl CoordinateConverter {
    /// Create a new coordinate converter
    pub fn new(from: CoordinateSystem, to: CoordinateSystem) -> Self {
        Self { from, to }
    }

    /// Convert a size/extent vector into the target system
    pub fn convert_extent(&self, extent: &Vec3) -> [f64; 3] {
        if self.from == self.to {
            return [extent.x, extent.y, extent.z];
        }
        // Both directions are the same Y/Z swap
        [extent.x, extent.z, extent.y]
    }
}

impl Default for CoordinateConverter {
    /// Authoring tool to glTF
    fn default() -> Self {
        Self::new(CoordinateSystem::ZUpRightHanded, CoordinateSystem::YUpRightHanded)
    }
}
