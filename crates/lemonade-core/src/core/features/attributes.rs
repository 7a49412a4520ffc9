use super::Feature;
use crate::core::models::molecules::Molecules;
use crate::core::models::monomer::MonomerTag;
use crate::core::moves::add_monomer::MoveAddMonomerSc;

/// Stamps the tag carried by an insertion move onto the monomer it created.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureAttributes;

impl FeatureAttributes {
    pub fn new() -> Self {
        Self
    }
}

impl<T: MonomerTag> Feature<T> for FeatureAttributes {
    fn name(&self) -> &'static str {
        "attributes"
    }

    fn apply_add_monomer(&mut self, molecules: &mut Molecules<T>, mv: &MoveAddMonomerSc<T>) {
        if let Some(monomer) = molecules.get_mut(mv.monomer_index()) {
            monomer.attribute = mv.tag();
        }
    }
}
