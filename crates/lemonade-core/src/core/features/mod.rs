//! # Features Module
//!
//! Pluggable constraint and property modules consulted by every move.
//!
//! A feature sees each move twice: during `check`, where it may veto the move or scale
//! its probability, and during `apply`, after the move's structural change has been
//! made, where it updates whatever auxiliary state it keeps. Features never fail at
//! apply time; anything illegal must be vetoed during check.
//!
//! - [`boundary`] - Confines monomers to the non-periodic extent of the box
//! - [`excluded_volume`] - One monomer per lattice site
//! - [`attributes`] - Copies a move's tag onto the monomer it creates
//! - [`fugacity`] - Per-tag probability weights for insertions

pub mod attributes;
pub mod boundary;
pub mod excluded_volume;
pub mod fugacity;

use crate::core::models::coordinate::Coordinate;
use crate::core::models::molecules::Molecules;
use crate::core::models::monomer::MonomerTag;
use crate::core::moves::add_monomer::MoveAddMonomerSc;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FeatureError {
    #[error("Monomer {index} at {position:?} overlaps an occupied lattice site")]
    Overlap { index: usize, position: Coordinate },

    #[error("Monomer {index} at {position:?} lies outside the simulation box")]
    OutsideBox { index: usize, position: Coordinate },
}

/// A constraint or property module.
///
/// Every hook has a permissive default, so a feature only implements the moves it cares
/// about.
pub trait Feature<T: MonomerTag>: fmt::Debug {
    /// Short identifier used in logs and errors.
    fn name(&self) -> &'static str;

    /// Returns `false` to veto the insertion. May call
    /// [`MoveAddMonomerSc::multiply_probability`] to bias acceptance.
    fn check_add_monomer(&self, _molecules: &Molecules<T>, _mv: &mut MoveAddMonomerSc<T>) -> bool {
        true
    }

    /// Called after the monomer has been appended at `mv.monomer_index()`.
    fn apply_add_monomer(&mut self, _molecules: &mut Molecules<T>, _mv: &MoveAddMonomerSc<T>) {}

    /// Rebuilds auxiliary state from scratch and validates the current configuration.
    fn synchronize(&mut self, _molecules: &Molecules<T>) -> Result<(), FeatureError> {
        Ok(())
    }
}
