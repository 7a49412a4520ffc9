//! # Core Module
//!
//! Building blocks of a lattice Monte-Carlo simulation that carry no system-level state
//! of their own.
//!
//! - **Data Models** ([`models`]) - Lattice coordinates, monomers, the monomer collection
//!   and box geometry
//! - **Moves** ([`moves`]) - The init/check/apply protocol and the insertion move
//! - **Features** ([`features`]) - Constraint and property modules that veto, bias, or
//!   record moves

pub mod features;
pub mod models;
pub mod moves;
