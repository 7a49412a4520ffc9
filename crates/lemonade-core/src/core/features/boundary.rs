use super::{Feature, FeatureError};
use crate::core::models::lattice_box::LatticeBox;
use crate::core::models::molecules::Molecules;
use crate::core::models::monomer::MonomerTag;
use crate::core::moves::add_monomer::MoveAddMonomerSc;

/// Vetoes insertions that fall outside the box along a non-periodic axis.
#[derive(Debug, Clone)]
pub struct FeatureBox {
    lattice: LatticeBox,
}

impl FeatureBox {
    pub fn new(lattice: LatticeBox) -> Self {
        Self { lattice }
    }

    pub fn lattice(&self) -> &LatticeBox {
        &self.lattice
    }
}

impl<T: MonomerTag> Feature<T> for FeatureBox {
    fn name(&self) -> &'static str {
        "box"
    }

    fn check_add_monomer(&self, _molecules: &Molecules<T>, mv: &mut MoveAddMonomerSc<T>) -> bool {
        self.lattice.contains(mv.position())
    }

    fn synchronize(&mut self, molecules: &Molecules<T>) -> Result<(), FeatureError> {
        match molecules
            .positions()
            .enumerate()
            .find(|(_, position)| !self.lattice.contains(*position))
        {
            Some((index, position)) => Err(FeatureError::OutsideBox { index, position }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::coordinate::coordinate;

    fn walled_box() -> FeatureBox {
        FeatureBox::new(LatticeBox::new([8, 8, 8], [true, true, false]))
    }

    #[test]
    fn check_accepts_sites_inside_and_across_periodic_axes() {
        let feature = walled_box();
        let molecules: Molecules = Molecules::new();
        let mut mv = MoveAddMonomerSc::at(coordinate(-3, 20, 7), 0);
        assert!(feature.check_add_monomer(&molecules, &mut mv));
        assert_eq!(mv.probability(), 1.0);
    }

    #[test]
    fn check_vetoes_sites_beyond_walls() {
        let feature = walled_box();
        let molecules: Molecules = Molecules::new();
        let mut above = MoveAddMonomerSc::at(coordinate(0, 0, 8), 0);
        let mut below = MoveAddMonomerSc::at(coordinate(0, 0, -1), 0);
        assert!(!feature.check_add_monomer(&molecules, &mut above));
        assert!(!feature.check_add_monomer(&molecules, &mut below));
    }

    #[test]
    fn synchronize_reports_first_monomer_outside() {
        let mut feature = walled_box();
        let mut molecules: Molecules = Molecules::new();
        molecules.add_monomer(0, 0, 0);
        molecules.add_monomer(1, 1, 9);
        assert_eq!(
            Feature::<i32>::synchronize(&mut feature, &molecules),
            Err(FeatureError::OutsideBox {
                index: 1,
                position: coordinate(1, 1, 9)
            })
        );
    }
}
