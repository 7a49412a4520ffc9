use super::base::MoveBase;
use super::traits::{MoleculeStore, MoveDispatch};
use super::MoveStage;
use crate::core::models::coordinate::Coordinate;
use crate::core::models::monomer::MonomerTag;

/// Inserts one new monomer at a given site of the simple cubic lattice.
///
/// Lifecycle per proposal: [`init`](Self::init), [`check`](Self::check), and, only if
/// the check accepted, [`apply`](Self::apply). The move holds plain values only and is
/// meant to be discarded (or re-initialized) after a proposal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveAddMonomerSc<T: MonomerTag = i32> {
    base: MoveBase<T>,
    stage: MoveStage,
}

impl<T: MonomerTag> Default for MoveAddMonomerSc<T> {
    fn default() -> Self {
        Self {
            base: MoveBase::default(),
            stage: MoveStage::Created,
        }
    }
}

impl<T: MonomerTag> MoveAddMonomerSc<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A move targeting `position` and carrying `tag`.
    pub fn at(position: Coordinate, tag: T) -> Self {
        let mut mv = Self::default();
        mv.base.set_position(position);
        mv.base.set_tag(tag);
        mv
    }

    pub fn base(&self) -> &MoveBase<T> {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut MoveBase<T> {
        &mut self.base
    }

    pub fn stage(&self) -> MoveStage {
        self.stage
    }

    #[inline]
    pub fn probability(&self) -> f64 {
        self.base.probability()
    }

    #[inline]
    pub fn multiply_probability(&mut self, factor: f64) {
        self.base.multiply_probability(factor);
    }

    #[inline]
    pub fn monomer_index(&self) -> usize {
        self.base.monomer_index()
    }

    #[inline]
    pub fn position(&self) -> Coordinate {
        self.base.position()
    }

    #[inline]
    pub fn set_position(&mut self, position: Coordinate) {
        self.base.set_position(position);
    }

    #[inline]
    pub fn tag(&self) -> T {
        self.base.tag()
    }

    #[inline]
    pub fn set_tag(&mut self, tag: T) {
        self.base.set_tag(tag);
    }

    /// Resets the probability and targets the index the new monomer will occupy.
    pub fn init<I>(&mut self, ing: &I)
    where
        I: MoleculeStore + ?Sized,
    {
        self.base.reset_probability();
        self.base.set_monomer_index(ing.molecule_count());
        self.stage = MoveStage::Initialized;
    }

    /// Hands the move to the system's features and returns their joint verdict.
    pub fn check<I>(&mut self, ing: &I) -> bool
    where
        I: MoveDispatch<Self> + ?Sized,
    {
        let accepted = ing.check_move(self);
        self.stage = MoveStage::Checked { accepted };
        accepted
    }

    /// Commits the move: appends the monomer, then notifies the features.
    ///
    /// The monomer is appended first so that features can attach data to it by index.
    /// The target index is recomputed from the post-append count and always wins over
    /// the value set by `init`.
    pub fn apply<I>(&mut self, ing: &mut I)
    where
        I: MoleculeStore + MoveDispatch<Self> + ?Sized,
    {
        debug_assert!(
            self.stage == MoveStage::Checked { accepted: true },
            "apply called on a move in stage {:?}",
            self.stage
        );
        ing.add_monomer(self.base.position());
        self.base.set_monomer_index(ing.molecule_count() - 1);

        ing.apply_move(&*self);
        self.stage = MoveStage::Applied;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::coordinate::coordinate;

    /// Records the order of calls and what the move looked like at each of them.
    #[derive(Default)]
    struct RecordingHost {
        sites: Vec<Coordinate>,
        verdict: bool,
        factor: f64,
        log: Vec<String>,
        seen_index_at_apply: Option<usize>,
        count_at_apply: Option<usize>,
    }

    impl RecordingHost {
        fn accepting(factor: f64) -> Self {
            Self {
                verdict: true,
                factor,
                ..Self::default()
            }
        }
    }

    impl MoleculeStore for RecordingHost {
        fn molecule_count(&self) -> usize {
            self.sites.len()
        }

        fn add_monomer(&mut self, position: Coordinate) {
            self.log.push("add".into());
            self.sites.push(position);
        }
    }

    impl MoveDispatch<MoveAddMonomerSc> for RecordingHost {
        fn check_move(&self, mv: &mut MoveAddMonomerSc) -> bool {
            mv.multiply_probability(self.factor);
            self.verdict
        }

        fn apply_move(&mut self, mv: &MoveAddMonomerSc) {
            self.log.push("notify".into());
            self.seen_index_at_apply = Some(mv.monomer_index());
            self.count_at_apply = Some(self.sites.len());
        }
    }

    #[test]
    fn init_resets_probability_and_speculates_index() {
        let mut host = RecordingHost::accepting(1.0);
        host.sites = vec![coordinate(0, 0, 0); 3];
        let mut mv = MoveAddMonomerSc::at(coordinate(1, 1, 1), 0);
        mv.multiply_probability(0.1);

        mv.init(&host);

        assert_eq!(mv.probability(), 1.0);
        assert_eq!(mv.monomer_index(), 3);
        assert_eq!(mv.stage(), MoveStage::Initialized);
    }

    #[test]
    fn check_returns_dispatch_verdict_and_keeps_probability_factor() {
        let mut host = RecordingHost::accepting(0.5);
        let mut mv = MoveAddMonomerSc::at(coordinate(0, 0, 0), 0);
        mv.init(&host);

        assert!(mv.check(&host));
        assert_eq!(mv.probability(), 0.5);
        assert_eq!(mv.stage(), MoveStage::Checked { accepted: true });
        assert!(host.sites.is_empty());

        host.verdict = false;
        mv.init(&host);
        assert!(!mv.check(&host));
        assert_eq!(mv.stage(), MoveStage::Checked { accepted: false });
    }

    #[test]
    fn apply_appends_before_notifying_features() {
        let mut host = RecordingHost::accepting(1.0);
        let mut mv = MoveAddMonomerSc::at(coordinate(2, 3, 4), 0);
        mv.init(&host);
        assert!(mv.check(&host));

        mv.apply(&mut host);

        assert_eq!(host.log, vec!["add".to_string(), "notify".to_string()]);
        assert_eq!(host.count_at_apply, Some(1));
        assert_eq!(host.seen_index_at_apply, Some(0));
        assert_eq!(host.sites, vec![coordinate(2, 3, 4)]);
        assert_eq!(mv.stage(), MoveStage::Applied);
    }

    #[test]
    fn apply_trusts_post_append_count_over_speculative_index() {
        let mut host = RecordingHost::accepting(1.0);
        let mut mv = MoveAddMonomerSc::at(coordinate(0, 0, 0), 0);
        mv.init(&host);
        assert!(mv.check(&host));

        // Another monomer sneaks in between init and apply.
        host.sites.push(coordinate(9, 9, 9));
        assert_eq!(mv.monomer_index(), 0);

        mv.apply(&mut host);
        assert_eq!(mv.monomer_index(), 1);
        assert_eq!(host.seen_index_at_apply, Some(1));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "apply called on a move in stage")]
    fn apply_after_rejected_check_trips_debug_assertion() {
        let mut host = RecordingHost::default();
        let mut mv = MoveAddMonomerSc::at(coordinate(0, 0, 0), 0);
        mv.init(&host);
        assert!(!mv.check(&host));
        mv.apply(&mut host);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "apply called on a move in stage")]
    fn apply_without_check_trips_debug_assertion() {
        let mut host = RecordingHost::accepting(1.0);
        let mut mv = MoveAddMonomerSc::at(coordinate(0, 0, 0), 0);
        mv.init(&host);
        mv.apply(&mut host);
    }
}
