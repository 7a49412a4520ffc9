//! # Engine Module
//!
//! The stateful layer that hosts moves: a concrete system owning monomers and features,
//! its configuration, and the errors raised while setting it up.
//!
//! - **System** ([`ingredients`]) - `Ingredients`, which implements the move boundary
//!   traits and fans each move out to its features in registration order
//! - **Configuration** ([`config`]) - Box geometry and feature selection, from TOML or a builder
//! - **Error Handling** ([`error`]) - Engine-level error type
//!
//! Move rejection is not an error: `check` simply returns `false`.

pub mod config;
pub mod error;
pub mod ingredients;
