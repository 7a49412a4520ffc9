use crate::core::models::coordinate::{Coordinate, coordinate};
use crate::core::models::monomer::MonomerTag;

/// The neutral element of the probability product.
pub const NEUTRAL_PROBABILITY: f64 = 1.0;

/// State shared by every lattice move: acceptance-probability modifier, target monomer
/// index, site payload and an opaque tag.
///
/// The probability is reset once per proposal and only ever multiplied afterwards, so it
/// is always the product of the factors contributed by the features that inspected the
/// move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveBase<T: MonomerTag = i32> {
    probability: f64,
    monomer_index: usize,
    position: Coordinate,
    tag: T,
}

impl<T: MonomerTag> Default for MoveBase<T> {
    fn default() -> Self {
        Self {
            probability: NEUTRAL_PROBABILITY,
            monomer_index: 0,
            position: coordinate(0, 0, 0),
            tag: T::default(),
        }
    }
}

impl<T: MonomerTag> MoveBase<T> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn reset_probability(&mut self) {
        self.probability = NEUTRAL_PROBABILITY;
    }

    #[inline]
    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Scales the probability by `factor`. This is the only way features bias a move.
    #[inline]
    pub fn multiply_probability(&mut self, factor: f64) {
        self.probability *= factor;
    }

    #[inline]
    pub fn set_monomer_index(&mut self, index: usize) {
        self.monomer_index = index;
    }

    #[inline]
    pub fn monomer_index(&self) -> usize {
        self.monomer_index
    }

    #[inline]
    pub fn set_position(&mut self, position: Coordinate) {
        self.position = position;
    }

    #[inline]
    pub fn position(&self) -> Coordinate {
        self.position
    }

    #[inline]
    pub fn set_tag(&mut self, tag: T) {
        self.tag = tag;
    }

    #[inline]
    pub fn tag(&self) -> T {
        self.tag
    }
}
