use crate::core::models::coordinate::Coordinate;

/// Structural access a move needs to the system it is applied to.
pub trait MoleculeStore {
    /// Current number of monomers.
    fn molecule_count(&self) -> usize;

    /// Appends one monomer at `position`. The count grows by exactly one; the new
    /// monomer's index is recovered through [`MoleculeStore::molecule_count`].
    fn add_monomer(&mut self, position: Coordinate);
}

/// Fan-out of a move of kind `M` to the active features of a system.
///
/// Any type providing these two entry points together with [`MoleculeStore`] can host
/// moves, whatever its internal feature architecture.
pub trait MoveDispatch<M> {
    /// Asks every active feature whether `mv` is legal. Returns `false` on the first
    /// veto. Features may scale the move's probability but must not change structure.
    fn check_move(&self, mv: &mut M) -> bool;

    /// Notifies every active feature that `mv` has been committed.
    fn apply_move(&mut self, mv: &M);
}
