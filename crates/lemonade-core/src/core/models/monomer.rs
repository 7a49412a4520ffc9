use super::coordinate::Coordinate;
use std::fmt;

/// Bound for the opaque type/tag value a move carries and a monomer stores.
///
/// The move never interprets the tag; features such as attribute tagging copy it onto
/// the monomer once it exists.
pub trait MonomerTag: Copy + Default + fmt::Debug + PartialEq + 'static {}

impl<T> MonomerTag for T where T: Copy + Default + fmt::Debug + PartialEq + 'static {}

/// A single lattice monomer: its site and its attribute tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Monomer<T: MonomerTag = i32> {
    /// The lattice site occupied by the monomer.
    pub position: Coordinate,
    /// Attribute assigned by features; defaults to `T::default()` on insertion.
    pub attribute: T,
}

impl<T: MonomerTag> Monomer<T> {
    pub fn new(position: Coordinate) -> Self {
        Self {
            position,
            attribute: T::default(),
        }
    }
}
