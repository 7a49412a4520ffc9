use super::{Feature, FeatureError};
use crate::core::models::coordinate::Coordinate;
use crate::core::models::lattice_box::LatticeBox;
use crate::core::models::molecules::Molecules;
use crate::core::models::monomer::MonomerTag;
use crate::core::moves::add_monomer::MoveAddMonomerSc;
use std::collections::HashSet;

/// Excluded volume on the simple cubic lattice: every site holds at most one monomer.
///
/// Occupancy is tracked on folded coordinates, so two images of the same site across a
/// periodic boundary collide.
#[derive(Debug, Clone)]
pub struct FeatureExcludedVolumeSc {
    lattice: LatticeBox,
    occupied: HashSet<Coordinate>,
}

impl FeatureExcludedVolumeSc {
    pub fn new(lattice: LatticeBox) -> Self {
        Self {
            lattice,
            occupied: HashSet::new(),
        }
    }

    pub fn is_occupied(&self, site: Coordinate) -> bool {
        self.occupied.contains(&self.lattice.fold(site))
    }

    pub fn occupied_sites(&self) -> usize {
        self.occupied.len()
    }
}

impl<T: MonomerTag> Feature<T> for FeatureExcludedVolumeSc {
    fn name(&self) -> &'static str {
        "excluded_volume_sc"
    }

    fn check_add_monomer(&self, _molecules: &Molecules<T>, mv: &mut MoveAddMonomerSc<T>) -> bool {
        !self.is_occupied(mv.position())
    }

    fn apply_add_monomer(&mut self, _molecules: &mut Molecules<T>, mv: &MoveAddMonomerSc<T>) {
        self.occupied.insert(self.lattice.fold(mv.position()));
    }

    fn synchronize(&mut self, molecules: &Molecules<T>) -> Result<(), FeatureError> {
        self.occupied.clear();
        self.occupied.reserve(molecules.size());
        for (index, position) in molecules.positions().enumerate() {
            if !self.occupied.insert(self.lattice.fold(position)) {
                return Err(FeatureError::Overlap { index, position });
            }
        }
        Ok(())
    }
}
