//! # Core Models Module
//!
//! Plain data types describing the state a lattice move operates on.
//!
//! - [`coordinate`] - Integer sites on the simple cubic lattice
//! - [`monomer`] - A monomer (site plus attribute tag) and the tag bound
//! - [`molecules`] - The ordered, append-only monomer collection
//! - [`lattice_box`] - Box extents and periodic boundary handling

pub mod coordinate;
pub mod lattice_box;
pub mod molecules;
pub mod monomer;
