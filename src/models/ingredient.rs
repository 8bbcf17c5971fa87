/// A fruit, milk base, or protein with nutrition per 100 g/ml.
///
/// Catalog entries are defined once at startup and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub id: &'static str,
    pub name: &'static str,

    /// Grams of protein per 100 g/ml.
    pub protein: f64,
    /// Grams of carbohydrate per 100 g/ml.
    pub carbs: f64,
    /// Grams of fat per 100 g/ml.
    pub fat: f64,
    /// Kilocalories per 100 g/ml.
    pub kcal: f64,

    /// Display color (hex) used by the presentation layer.
    pub color: &'static str,
    pub emoji: Option<&'static str>,
}

impl Ingredient {
    /// Basic validation: all nutrition values non-negative.
    pub fn is_valid(&self) -> bool {
        self.protein >= 0.0 && self.carbs >= 0.0 && self.fat >= 0.0 && self.kcal >= 0.0
    }
}

/// An optional booster with nutrition already scaled to its fixed serving.
///
/// Unlike [`Ingredient`], these values are absolute per serving, not per-100.
#[derive(Debug, Clone, PartialEq)]
pub struct AddOn {
    pub id: &'static str,
    pub name: &'static str,

    /// Human-readable serving size, e.g. "4 g" or "0.5 ml".
    pub weight_label: &'static str,

    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub kcal: f64,

    pub color: &'static str,
}

impl AddOn {
    pub fn is_valid(&self) -> bool {
        self.protein >= 0.0 && self.carbs >= 0.0 && self.fat >= 0.0 && self.kcal >= 0.0
    }
}

/// One fruit component of a pack at a fixed serving weight.
#[derive(Debug, Clone, PartialEq)]
pub struct PackItem {
    pub fruit_id: &'static str,
    pub weight_g: f64,
}

/// A mandatory, non-removable bonus ingredient bundled with a pack.
///
/// Contributes in absolute (pre-scaled) units like an [`AddOn`].
#[derive(Debug, Clone, PartialEq)]
pub struct ExtraIngredient {
    pub name: &'static str,
    pub weight_g: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub kcal: f64,
}

impl ExtraIngredient {
    pub fn is_valid(&self) -> bool {
        self.protein >= 0.0 && self.carbs >= 0.0 && self.fat >= 0.0 && self.kcal >= 0.0
    }
}

/// A preset bundle of fruit components plus mandatory extras.
#[derive(Debug, Clone, PartialEq)]
pub struct FruitPack {
    pub id: &'static str,
    pub name: &'static str,

    /// Badge shown next to the pack name, e.g. "2x Protein".
    pub tag: Option<&'static str>,

    /// 1 for normal packs, 2 for double-scoop packs. Informational: the
    /// aggregation path does not scale the chosen protein by it (see
    /// DESIGN.md), it only drives the "2x ACTIVE" label.
    pub protein_multiplier: u8,

    pub description: &'static str,
    pub items: Vec<PackItem>,

    /// Mandatory bundled ingredients, empty for most packs.
    pub extras: Vec<ExtraIngredient>,
}

impl FruitPack {
    pub fn double_protein(&self) -> bool {
        self.protein_multiplier == 2
    }
}
