use nalgebra::{Point3, Vector3};

/// A site on the simple cubic lattice.
///
/// Coordinates are plain values: they are copied into moves and monomers and never
/// shared by reference.
pub type Coordinate = Point3<i32>;

/// A displacement between two lattice sites.
pub type LatticeVector = Vector3<i32>;

/// Convenience constructor mirroring `Point3::new` for lattice sites.
#[inline]
pub fn coordinate(x: i32, y: i32, z: i32) -> Coordinate {
    Point3::new(x, y, z)
}
