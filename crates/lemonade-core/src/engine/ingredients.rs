use super::config::SystemConfig;
use super::error::EngineError;
use crate::core::features::Feature;
use crate::core::features::attributes::FeatureAttributes;
use crate::core::features::boundary::FeatureBox;
use crate::core::features::excluded_volume::FeatureExcludedVolumeSc;
use crate::core::models::coordinate::Coordinate;
use crate::core::models::molecules::Molecules;
use crate::core::models::monomer::MonomerTag;
use crate::core::moves::add_monomer::MoveAddMonomerSc;
use crate::core::moves::traits::{MoleculeStore, MoveDispatch};
use std::path::Path;
use tracing::{debug, instrument, trace};

/// The simulated system: the monomer collection plus the ordered list of active features.
///
/// Features are consulted in registration order. A check stops at the first veto; an
/// apply notifies every feature.
#[derive(Debug)]
pub struct Ingredients<T: MonomerTag = i32> {
    molecules: Molecules<T>,
    features: Vec<Box<dyn Feature<T>>>,
}

impl<T: MonomerTag> Default for Ingredients<T> {
    fn default() -> Self {
        Self {
            molecules: Molecules::default(),
            features: Vec::new(),
        }
    }
}

impl<T: MonomerTag> Ingredients<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an empty system with the features enabled in `config`, in the fixed order
    /// box, excluded volume, attributes.
    pub fn from_config(config: &SystemConfig) -> Self {
        let lattice = config.lattice.lattice_box();
        let mut ingredients = Self::new();
        if config.features.confine_to_box {
            ingredients.add_feature(FeatureBox::new(lattice));
        }
        if config.features.excluded_volume {
            ingredients.add_feature(FeatureExcludedVolumeSc::new(lattice));
        }
        if config.features.attributes {
            ingredients.add_feature(FeatureAttributes::new());
        }
        ingredients
    }

    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        let config = SystemConfig::load(path)?;
        Ok(Self::from_config(&config))
    }

    pub fn add_feature<F>(&mut self, feature: F) -> &mut Self
    where
        F: Feature<T> + 'static,
    {
        debug!(feature = feature.name(), "Registering feature.");
        self.features.push(Box::new(feature));
        self
    }

    pub fn with_feature<F>(mut self, feature: F) -> Self
    where
        F: Feature<T> + 'static,
    {
        self.add_feature(feature);
        self
    }

    pub fn feature_names(&self) -> Vec<&'static str> {
        self.features.iter().map(|f| f.name()).collect()
    }

    pub fn molecules(&self) -> &Molecules<T> {
        &self.molecules
    }

    /// Direct mutable access to the monomers. Call [`Ingredients::synchronize`]
    /// afterwards so that features can rebuild their state.
    pub fn modify_molecules(&mut self) -> &mut Molecules<T> {
        &mut self.molecules
    }

    #[instrument(skip_all, fields(monomers = self.molecules.size()))]
    pub fn synchronize(&mut self) -> Result<(), EngineError> {
        for feature in &mut self.features {
            debug!(feature = feature.name(), "Synchronizing feature.");
            feature
                .synchronize(&self.molecules)
                .map_err(|source| EngineError::Feature {
                    feature: feature.name(),
                    source,
                })?;
        }
        Ok(())
    }
}

impl<T: MonomerTag> MoleculeStore for Ingredients<T> {
    #[inline]
    fn molecule_count(&self) -> usize {
        self.molecules.size()
    }

    #[inline]
    fn add_monomer(&mut self, position: Coordinate) {
        self.molecules.add_monomer(position.x, position.y, position.z);
    }
}

impl<T: MonomerTag> MoveDispatch<MoveAddMonomerSc<T>> for Ingredients<T> {
    fn check_move(&self, mv: &mut MoveAddMonomerSc<T>) -> bool {
        for feature in &self.features {
            if !feature.check_add_monomer(&self.molecules, mv) {
                trace!(
                    feature = feature.name(),
                    index = mv.monomer_index(),
                    "Move vetoed."
                );
                return false;
            }
        }
        true
    }

    fn apply_move(&mut self, mv: &MoveAddMonomerSc<T>) {
        for feature in &mut self.features {
            feature.apply_add_monomer(&mut self.molecules, mv);
        }
    }
}
