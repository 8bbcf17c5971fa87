use crate::catalog::Catalog;
use crate::models::{Selection, Snapshot};
use crate::state::store::SelectionStore;

/// Two-slot comparison workflow around a [`SelectionStore`].
///
/// Single state: no snapshot, one live selection. Locking captures the live
/// selection and its totals into a frozen snapshot and clears the builder;
/// clearing the comparison discards the snapshot and keeps the live
/// selection. There is no deeper nesting.
pub struct CompareController<'a> {
    store: SelectionStore<'a>,
    snapshot: Option<Snapshot>,
}

impl<'a> CompareController<'a> {
    pub fn new(catalog: &'a Catalog, selection: Selection) -> Self {
        Self {
            store: SelectionStore::with_selection(catalog, selection),
            snapshot: None,
        }
    }

    pub fn store(&self) -> &SelectionStore<'a> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut SelectionStore<'a> {
        &mut self.store
    }

    pub fn is_comparing(&self) -> bool {
        self.snapshot.is_some()
    }

    /// The frozen snapshot, when in comparing state.
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    /// Capture the live selection and its totals into the snapshot slot and
    /// reset the builder for the second smoothie. No-op while already
    /// comparing.
    pub fn lock_and_compare(&mut self) {
        if self.snapshot.is_some() {
            return;
        }
        self.snapshot = Some(Snapshot {
            selection: self.store.selection().clone(),
            totals: self.store.totals(),
        });
        self.store.reset_all();
    }

    /// Discard the snapshot and return to single mode; the live selection
    /// carries over as the active one.
    pub fn clear_compare(&mut self) {
        self.snapshot = None;
    }

    /// Absolute, rounded kcal delta between the live selection and the
    /// snapshot. Recomputed live as the selection changes; the snapshot side
    /// never moves.
    pub fn kcal_difference(&self) -> Option<f64> {
        self.snapshot
            .as_ref()
            .map(|snap| self.store.totals().kcal_difference(&snap.totals))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_lock_freezes_snapshot_and_clears_builder() {
        let catalog = Catalog::standard();
        let mut controller = CompareController::new(&catalog, Selection::default());

        controller.store_mut().set_base("almond-milk");
        controller.store_mut().set_protein("platinum-isolate");
        let locked_kcal = controller.store().totals().kcal;

        controller.lock_and_compare();
        assert!(controller.is_comparing());
        assert!(controller.store().selection().is_empty());

        let snap = controller.snapshot().unwrap();
        assert_eq!(snap.selection.base.as_deref(), Some("almond-milk"));
        assert!((snap.totals.kcal - locked_kcal).abs() < 1e-9);
    }

    #[test]
    fn test_snapshot_immutable_under_live_edits() {
        let catalog = Catalog::standard();
        let mut controller = CompareController::new(&catalog, Selection::default());

        controller.store_mut().set_base("almond-milk");
        controller.lock_and_compare();
        let frozen = controller.snapshot().unwrap().totals;

        controller.store_mut().toggle_pack("king-kong");
        controller.store_mut().toggle_add_on("pb-60");

        assert_eq!(controller.snapshot().unwrap().totals, frozen);
    }

    #[test]
    fn test_kcal_difference_tracks_live_side() {
        let catalog = Catalog::standard();
        let mut controller = CompareController::new(&catalog, Selection::default());

        controller.store_mut().set_base("almond-milk");
        controller.store_mut().set_protein("platinum-isolate"); // 137.2 kcal
        controller.lock_and_compare();

        controller.store_mut().toggle_pack("gorilla"); // 243.2 kcal
        assert_eq!(controller.kcal_difference(), Some(106.0));

        controller.store_mut().toggle_pack("gorilla");
        assert_eq!(controller.kcal_difference(), Some(137.0));
    }

    #[test]
    fn test_clear_compare_keeps_live_selection() {
        let catalog = Catalog::standard();
        let mut controller = CompareController::new(&catalog, Selection::default());

        controller.store_mut().set_base("oat-milk");
        controller.lock_and_compare();
        controller.store_mut().toggle_pack("bpm");

        controller.clear_compare();
        assert!(!controller.is_comparing());
        assert_eq!(controller.kcal_difference(), None);
        assert_eq!(
            controller.store().selection().fruit_pack_id.as_deref(),
            Some("bpm")
        );
    }

    #[test]
    fn test_lock_is_noop_while_comparing() {
        let catalog = Catalog::standard();
        let mut controller = CompareController::new(&catalog, Selection::default());

        controller.store_mut().set_base("fresh-milk");
        controller.lock_and_compare();
        let frozen = controller.snapshot().unwrap().totals;

        controller.store_mut().set_base("skim-milk");
        controller.lock_and_compare();

        // Still the original snapshot; no three-way compare.
        assert_eq!(controller.snapshot().unwrap().totals, frozen);
        assert_eq!(
            controller.store().selection().base.as_deref(),
            Some("skim-milk")
        );
    }
}
