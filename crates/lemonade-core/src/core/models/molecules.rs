use super::coordinate::{Coordinate, coordinate};
use super::monomer::{Monomer, MonomerTag};
use std::ops::{Index, IndexMut};

/// The ordered collection of monomers in a simulated system.
///
/// Monomers are addressed by their insertion index. The collection only ever grows
/// through [`Molecules::add_monomer`], so an index handed out once stays valid.
#[derive(Debug, Clone, PartialEq)]
pub struct Molecules<T: MonomerTag = i32> {
    monomers: Vec<Monomer<T>>,
}

impl<T: MonomerTag> Default for Molecules<T> {
    fn default() -> Self {
        Self {
            monomers: Vec::new(),
        }
    }
}

impl<T: MonomerTag> Molecules<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            monomers: Vec::with_capacity(capacity),
        }
    }

    /// Number of monomers currently in the collection.
    #[inline]
    pub fn size(&self) -> usize {
        self.monomers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.monomers.is_empty()
    }

    /// Appends a monomer at `(x, y, z)` with a default attribute.
    ///
    /// The new monomer's index is `size() - 1` afterwards.
    pub fn add_monomer(&mut self, x: i32, y: i32, z: i32) {
        self.monomers.push(Monomer::new(coordinate(x, y, z)));
    }

    pub fn get(&self, index: usize) -> Option<&Monomer<T>> {
        self.monomers.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Monomer<T>> {
        self.monomers.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Monomer<T>> {
        self.monomers.iter()
    }

    pub fn positions(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.monomers.iter().map(|m| m.position)
    }
}

impl<T: MonomerTag> Index<usize> for Molecules<T> {
    type Output = Monomer<T>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.monomers[index]
    }
}

impl<T: MonomerTag> IndexMut<usize> for Molecules<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.monomers[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_collection_is_empty() {
        let molecules: Molecules = Molecules::new();
        assert!(molecules.is_empty());
        assert_eq!(molecules.size(), 0);
        assert!(molecules.get(0).is_none());
    }

    #[test]
    fn add_monomer_appends_in_order() {
        let mut molecules: Molecules = Molecules::new();
        molecules.add_monomer(1, 2, 3);
        molecules.add_monomer(-4, 5, -6);

        assert_eq!(molecules.size(), 2);
        assert_eq!(molecules[0].position, coordinate(1, 2, 3));
        assert_eq!(molecules[1].position, coordinate(-4, 5, -6));
        assert_eq!(molecules[1].attribute, 0);
    }

    #[test]
    fn index_mut_updates_attribute() {
        let mut molecules: Molecules = Molecules::new();
        molecules.add_monomer(0, 0, 0);
        molecules[0].attribute = 7;
        assert_eq!(molecules.get(0).map(|m| m.attribute), Some(7));
    }

    #[test]
    fn positions_yields_every_site() {
        let mut molecules: Molecules = Molecules::with_capacity(3);
        for i in 0..3 {
            molecules.add_monomer(i, 0, 0);
        }
        let sites: Vec<_> = molecules.positions().collect();
        assert_eq!(
            sites,
            vec![coordinate(0, 0, 0), coordinate(1, 0, 0), coordinate(2, 0, 0)]
        );
    }
}
