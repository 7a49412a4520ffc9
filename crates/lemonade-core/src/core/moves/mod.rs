//! # Moves Module
//!
//! Elementary Monte-Carlo moves and the protocol every move follows:
//!
//! 1. `init` resets per-proposal state against the current system.
//! 2. `check` hands the move to the system's features, which may veto it or scale its
//!    probability. A veto is a normal negative result, not an error.
//! 3. `apply` commits the move and notifies the features. It must only follow a `check`
//!    that returned `true`; debug builds assert this, release builds do not.
//!
//! Moves never know which features are active. The system hosting them implements
//! [`traits::MoleculeStore`] and [`traits::MoveDispatch`], which is the whole boundary.

pub mod add_monomer;
pub mod base;
pub mod traits;

use crate::core::models::monomer::MonomerTag;
use add_monomer::MoveAddMonomerSc;
use base::MoveBase;
use traits::{MoleculeStore, MoveDispatch};

/// Where a move is in its proposal lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveStage {
    #[default]
    Created,
    Initialized,
    Checked {
        accepted: bool,
    },
    Applied,
}

/// Every move kind, dispatched on its tag.
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum Move<T: MonomerTag = i32> {
    AddMonomerSc(MoveAddMonomerSc<T>),
}

impl<T: MonomerTag> Move<T> {
    pub fn base(&self) -> &MoveBase<T> {
        match self {
            Move::AddMonomerSc(mv) => mv.base(),
        }
    }

    pub fn probability(&self) -> f64 {
        self.base().probability()
    }

    pub fn stage(&self) -> MoveStage {
        match self {
            Move::AddMonomerSc(mv) => mv.stage(),
        }
    }

    pub fn init<I>(&mut self, ing: &I)
    where
        I: MoleculeStore + ?Sized,
    {
        match self {
            Move::AddMonomerSc(mv) => mv.init(ing),
        }
    }

    pub fn check<I>(&mut self, ing: &I) -> bool
    where
        I: MoveDispatch<MoveAddMonomerSc<T>> + ?Sized,
    {
        match self {
            Move::AddMonomerSc(mv) => mv.check(ing),
        }
    }

    pub fn apply<I>(&mut self, ing: &mut I)
    where
        I: MoleculeStore + MoveDispatch<MoveAddMonomerSc<T>> + ?Sized,
    {
        match self {
            Move::AddMonomerSc(mv) => mv.apply(ing),
        }
    }
}

impl<T: MonomerTag> From<MoveAddMonomerSc<T>> for Move<T> {
    fn from(mv: MoveAddMonomerSc<T>) -> Self {
        Move::AddMonomerSc(mv)
    }
}
