use crate::catalog::Catalog;
use crate::models::{NutritionTotals, Selection};
use crate::nutrition::calculate_nutrition;

/// Holds the live selection and derives totals on every read.
///
/// All operations are total and synchronous; toggle semantics follow the
/// builder UI: re-selecting a selected option deselects it, and only one
/// fruit pack can be active at a time.
pub struct SelectionStore<'a> {
    catalog: &'a Catalog,
    selection: Selection,
}

impl<'a> SelectionStore<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            selection: Selection::default(),
        }
    }

    /// Start from an existing (e.g. persisted) selection.
    pub fn with_selection(catalog: &'a Catalog, mut selection: Selection) -> Self {
        selection.dedup_add_ons();
        Self { catalog, selection }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Replace the whole selection, e.g. after clearing a comparison.
    pub fn replace(&mut self, mut selection: Selection) {
        selection.dedup_add_ons();
        self.selection = selection;
    }

    /// Derive totals via the aggregator. Recomputed on every call.
    pub fn totals(&self) -> NutritionTotals {
        calculate_nutrition(&self.selection, self.catalog)
    }

    /// Select a base, or deselect it if `id` is already the selected base.
    pub fn set_base(&mut self, id: &str) {
        toggle_slot(&mut self.selection.base, id);
    }

    /// Select a protein, or deselect it if already selected.
    pub fn set_protein(&mut self, id: &str) {
        toggle_slot(&mut self.selection.protein, id);
    }

    /// Select a fruit pack; packs are mutually exclusive and re-selecting
    /// the active pack unsets it.
    pub fn toggle_pack(&mut self, id: &str) {
        toggle_slot(&mut self.selection.fruit_pack_id, id);
    }

    /// Add the add-on if absent, remove it if present.
    pub fn toggle_add_on(&mut self, id: &str) {
        if self.selection.has_add_on(id) {
            self.selection.selected_add_ons.retain(|a| a != id);
        } else {
            self.selection.selected_add_ons.push(id.to_string());
        }
    }

    /// Clear the add-on set only, leaving base/pack/protein untouched.
    pub fn reset_add_ons(&mut self) {
        self.selection.selected_add_ons.clear();
    }

    /// Clear every field to unset.
    pub fn reset_all(&mut self) {
        self.selection = Selection::default();
    }

    /// Whether the selected pack carries the 2x-protein flag.
    ///
    /// Purely informational for the presentation layer; totals are not
    /// affected.
    pub fn double_protein_active(&self) -> bool {
        self.selection
            .fruit_pack_id
            .as_deref()
            .and_then(|id| self.catalog.pack(id))
            .is_some_and(|p| p.double_protein())
    }
}

fn toggle_slot(slot: &mut Option<String>, id: &str) {
    if slot.as_deref() == Some(id) {
        *slot = None;
    } else {
        *slot = Some(id.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_set_base_reselect_deselects() {
        let catalog = Catalog::standard();
        let mut store = SelectionStore::new(&catalog);

        store.set_base("almond-milk");
        assert_eq!(store.selection().base.as_deref(), Some("almond-milk"));

        store.set_base("almond-milk");
        assert_eq!(store.selection().base, None);
    }

    #[test]
    fn test_packs_mutually_exclusive() {
        let catalog = Catalog::standard();
        let mut store = SelectionStore::new(&catalog);

        store.toggle_pack("gorilla");
        store.toggle_pack("king-kong");
        assert_eq!(store.selection().fruit_pack_id.as_deref(), Some("king-kong"));
    }

    #[test]
    fn test_toggle_add_on_idempotent_pair() {
        let catalog = Catalog::standard();
        let mut store = SelectionStore::new(&catalog);

        store.toggle_add_on("chia");
        assert!(store.selection().has_add_on("chia"));

        store.toggle_add_on("chia");
        assert!(!store.selection().has_add_on("chia"));
        assert!(store.selection().selected_add_ons.is_empty());
    }

    #[test]
    fn test_reset_add_ons_leaves_slots() {
        let catalog = Catalog::standard();
        let mut store = SelectionStore::new(&catalog);

        store.set_base("oat-milk");
        store.toggle_pack("bpm");
        store.toggle_add_on("honey");
        store.toggle_add_on("mct");

        store.reset_add_ons();
        assert!(store.selection().selected_add_ons.is_empty());
        assert_eq!(store.selection().base.as_deref(), Some("oat-milk"));
        assert_eq!(store.selection().fruit_pack_id.as_deref(), Some("bpm"));
    }

    #[test]
    fn test_reset_all() {
        let catalog = Catalog::standard();
        let mut store = SelectionStore::new(&catalog);

        store.set_base("skim-milk");
        store.set_protein("gold-vanilla");
        store.toggle_add_on("flax");

        store.reset_all();
        assert!(store.selection().is_empty());
        assert!(store.totals().is_zero());
    }

    #[test]
    fn test_double_protein_label_flag() {
        let catalog = Catalog::standard();
        let mut store = SelectionStore::new(&catalog);
        assert!(!store.double_protein_active());

        store.toggle_pack("gorilla");
        assert!(!store.double_protein_active());

        store.toggle_pack("king-kong");
        assert!(store.double_protein_active());
    }

    #[test]
    fn test_with_selection_dedups_persisted_add_ons() {
        let catalog = Catalog::standard();
        let store = SelectionStore::with_selection(
            &catalog,
            Selection {
                selected_add_ons: vec!["chia".into(), "chia".into()],
                ..Default::default()
            },
        );
        assert_eq!(store.selection().selected_add_ons, vec!["chia"]);
    }
}
