mod ingredient;
mod selection;

pub use ingredient::{AddOn, ExtraIngredient, FruitPack, Ingredient, PackItem};
pub use selection::{NutritionTotals, Selection, Snapshot};
