use super::Feature;
use crate::core::models::molecules::Molecules;
use crate::core::models::monomer::MonomerTag;
use crate::core::moves::add_monomer::MoveAddMonomerSc;
use crate::core::moves::base::NEUTRAL_PROBABILITY;
use std::collections::HashMap;
use std::hash::Hash;

/// Biases insertions by the tag they carry.
///
/// The move's probability is multiplied by the weight registered for its tag; tags
/// without a weight are neutral. This feature never vetoes.
#[derive(Debug, Clone)]
pub struct FeatureFugacity<T> {
    weights: HashMap<T, f64>,
}

impl<T: MonomerTag + Eq + Hash> Default for FeatureFugacity<T> {
    fn default() -> Self {
        Self {
            weights: HashMap::new(),
        }
    }
}

impl<T: MonomerTag + Eq + Hash> FeatureFugacity<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weight(mut self, tag: T, weight: f64) -> Self {
        self.set_weight(tag, weight);
        self
    }

    pub fn set_weight(&mut self, tag: T, weight: f64) {
        self.weights.insert(tag, weight);
    }

    pub fn weight(&self, tag: T) -> f64 {
        self.weights
            .get(&tag)
            .copied()
            .unwrap_or(NEUTRAL_PROBABILITY)
    }
}

impl<T: MonomerTag + Eq + Hash> Feature<T> for FeatureFugacity<T> {
    fn name(&self) -> &'static str {
        "fugacity"
    }

    fn check_add_monomer(&self, _molecules: &Molecules<T>, mv: &mut MoveAddMonomerSc<T>) -> bool {
        mv.multiply_probability(self.weight(mv.tag()));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::coordinate::coordinate;

    #[test]
    fn registered_tag_scales_probability() {
        let feature = FeatureFugacity::new().with_weight(2, 0.25);
        let molecules: Molecules = Molecules::new();
        let mut mv = MoveAddMonomerSc::at(coordinate(0, 0, 0), 2);

        assert!(feature.check_add_monomer(&molecules, &mut mv));
        assert_eq!(mv.probability(), 0.25);
    }

    #[test]
    fn unknown_tag_is_neutral() {
        let feature = FeatureFugacity::new().with_weight(2, 0.25);
        let molecules: Molecules = Molecules::new();
        let mut mv = MoveAddMonomerSc::at(coordinate(0, 0, 0), 1);

        assert!(feature.check_add_monomer(&molecules, &mut mv));
        assert_eq!(mv.probability(), 1.0);
        assert_eq!(feature.weight(7), 1.0);
    }

    #[test]
    fn zero_weight_still_does_not_veto() {
        let mut feature = FeatureFugacity::new();
        feature.set_weight(3, 0.0);
        let molecules: Molecules = Molecules::new();
        let mut mv = MoveAddMonomerSc::at(coordinate(0, 0, 0), 3);

        assert!(feature.check_add_monomer(&molecules, &mut mv));
        assert_eq!(mv.probability(), 0.0);
    }
}
