use super::coordinate::{Coordinate, coordinate};

/// Extents and per-axis periodicity of the simulation box.
///
/// Along a periodic axis every integer coordinate is legal and is folded into
/// `0..size` for occupancy purposes. Along a non-periodic axis only `0..size` lies
/// inside the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatticeBox {
    size: [i32; 3],
    periodic: [bool; 3],
}

impl LatticeBox {
    /// Creates a box. Every extent must be positive; this is checked by the
    /// configuration layer before a box is constructed from user input.
    pub fn new(size: [u32; 3], periodic: [bool; 3]) -> Self {
        debug_assert!(size.iter().all(|&s| s > 0), "box extents must be positive");
        Self {
            size: size.map(|s| i32::try_from(s).unwrap_or(i32::MAX)),
            periodic,
        }
    }

    /// A fully periodic cube of edge `edge`.
    pub fn periodic_cube(edge: u32) -> Self {
        Self::new([edge; 3], [true; 3])
    }

    pub fn size(&self) -> [i32; 3] {
        self.size
    }

    pub fn periodic(&self) -> [bool; 3] {
        self.periodic
    }

    /// Maps `c` onto its image inside the primary cell along periodic axes.
    /// Non-periodic components are returned unchanged.
    pub fn fold(&self, c: Coordinate) -> Coordinate {
        let fold_axis = |value: i32, axis: usize| {
            if self.periodic[axis] {
                value.rem_euclid(self.size[axis])
            } else {
                value
            }
        };
        coordinate(fold_axis(c.x, 0), fold_axis(c.y, 1), fold_axis(c.z, 2))
    }

    /// Whether `c` is a legal site, i.e. within `0..size` on every non-periodic axis.
    pub fn contains(&self, c: Coordinate) -> bool {
        [c.x, c.y, c.z]
            .iter()
            .enumerate()
            .all(|(axis, &value)| self.periodic[axis] || (0..self.size[axis]).contains(&value))
    }
}
