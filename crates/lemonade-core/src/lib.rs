//! # LeMonADE Core Library
//!
//! Moves and feature dispatch for lattice-based Monte-Carlo simulations of polymers on
//! the simple cubic lattice.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Plain data (`Molecules`, `LatticeBox`), the move
//!   protocol (`MoveBase`, `MoveAddMonomerSc`, the `Move` union), and the `Feature` trait
//!   with a handful of reference features.
//!
//! - **[`engine`]: The System.** `Ingredients` owns the monomers and an ordered list of
//!   features and performs the double dispatch between moves and features. It is built
//!   from a `SystemConfig`.
//!
//! A proposal runs `init`, then `check`, and only if `check` returned `true`, `apply`:
//!
//! ```
//! use lemonade::core::models::coordinate::coordinate;
//! use lemonade::core::moves::add_monomer::MoveAddMonomerSc;
//! use lemonade::engine::config::SystemConfigBuilder;
//! use lemonade::engine::ingredients::Ingredients;
//!
//! let config = SystemConfigBuilder::new()
//!     .box_size(16, 16, 16)
//!     .periodic(true, true, true)
//!     .excluded_volume(true)
//!     .build()
//!     .unwrap();
//! let mut ingredients: Ingredients = Ingredients::from_config(&config);
//!
//! let mut mv = MoveAddMonomerSc::at(coordinate(1, 2, 3), 0);
//! mv.init(&ingredients);
//! if mv.check(&ingredients) {
//!     mv.apply(&mut ingredients);
//! }
//! assert_eq!(ingredients.molecules().size(), 1);
//! ```
//!
//! Selecting moves, drawing random numbers and the Metropolis decision belong to the
//! driver and are not part of this crate.

pub mod core;
pub mod engine;
