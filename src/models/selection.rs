use serde::{Deserialize, Serialize};

/// The user's current smoothie configuration.
///
/// Field names match the persisted layout round-tripped by the original
/// presentation layer; any subset of fields may be absent or null and is
/// treated as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    #[serde(rename = "base", default)]
    pub base: Option<String>,

    #[serde(rename = "fruitPackId", default)]
    pub fruit_pack_id: Option<String>,

    #[serde(rename = "protein", default)]
    pub protein: Option<String>,

    /// Set semantics: no duplicates; insertion order preserved for display.
    #[serde(rename = "selectedAddOns", default)]
    pub selected_add_ons: Vec<String>,
}

impl Selection {
    /// True when no slot is set and no add-ons are selected.
    pub fn is_empty(&self) -> bool {
        self.base.is_none()
            && self.fruit_pack_id.is_none()
            && self.protein.is_none()
            && self.selected_add_ons.is_empty()
    }

    pub fn has_add_on(&self, id: &str) -> bool {
        self.selected_add_ons.iter().any(|a| a == id)
    }

    /// Drop duplicate add-on ids, keeping the first occurrence.
    ///
    /// Persisted state written by older versions may contain duplicates.
    pub fn dedup_add_ons(&mut self) {
        let mut seen = std::collections::HashSet::new();
        self.selected_add_ons.retain(|id| seen.insert(id.clone()));
    }
}

/// The four-nutrient aggregate for a selection.
///
/// A derived value with no independent identity: recomputed on demand,
/// never persisted authoritatively.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NutritionTotals {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub kcal: f64,
}

impl NutritionTotals {
    pub fn is_zero(&self) -> bool {
        self.protein == 0.0 && self.carbs == 0.0 && self.fat == 0.0 && self.kcal == 0.0
    }

    /// Absolute kcal delta against another totals value, rounded to a whole
    /// number (display policy for the comparison view).
    pub fn kcal_difference(&self, other: &NutritionTotals) -> f64 {
        (self.kcal - other.kcal).round().abs()
    }
}

impl std::ops::AddAssign for NutritionTotals {
    fn add_assign(&mut self, rhs: Self) {
        self.protein += rhs.protein;
        self.carbs += rhs.carbs;
        self.fat += rhs.fat;
        self.kcal += rhs.kcal;
    }
}

/// A frozen copy of a past selection and its computed totals.
///
/// Captured once by the lock action; the totals are never recomputed
/// afterward, which keeps a side-by-side comparison valid against a moving
/// live selection.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub selection: Selection,
    pub totals: NutritionTotals,
}
