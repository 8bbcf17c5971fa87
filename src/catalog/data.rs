//! Static catalog definitions: bases, fruits, packs (with their mandatory
//! extras), proteins, and add-on boosters.

use crate::models::{AddOn, ExtraIngredient, FruitPack, Ingredient, PackItem};

/// Reference serving volume for the liquid base, in ml.
pub const BASE_VOLUME_ML: f64 = 100.0;

fn ingredient(
    id: &'static str,
    name: &'static str,
    protein: f64,
    carbs: f64,
    fat: f64,
    kcal: f64,
    color: &'static str,
    emoji: Option<&'static str>,
) -> Ingredient {
    Ingredient {
        id,
        name,
        protein,
        carbs,
        fat,
        kcal,
        color,
        emoji,
    }
}

fn item(fruit_id: &'static str, weight_g: f64) -> PackItem {
    PackItem { fruit_id, weight_g }
}

fn extra(
    name: &'static str,
    weight_g: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    kcal: f64,
) -> ExtraIngredient {
    ExtraIngredient {
        name,
        weight_g,
        protein,
        carbs,
        fat,
        kcal,
    }
}

fn add_on(
    id: &'static str,
    name: &'static str,
    weight_label: &'static str,
    protein: f64,
    carbs: f64,
    fat: f64,
    kcal: f64,
    color: &'static str,
) -> AddOn {
    AddOn {
        id,
        name,
        weight_label,
        protein,
        carbs,
        fat,
        kcal,
        color,
    }
}

/// Hydration bases, nutrition per 100 ml.
pub fn bases() -> Vec<Ingredient> {
    vec![
        ingredient("almond-milk", "Almond Milk", 0.6, 1.0, 1.1, 15.0, "#EFEBE9", None),
        ingredient("coconut-water", "Coconut Water", 0.7, 3.7, 0.2, 19.0, "#E0F7FA", None),
        ingredient("oat-milk", "Oat Milk", 1.0, 6.5, 1.5, 45.0, "#FFF8E1", None),
        ingredient("almond-oat-soy", "Almond-Oat-Soy Blend", 2.5, 4.0, 2.0, 40.0, "#F9FBE7", None),
        ingredient("fresh-milk", "Fresh Milk", 3.3, 4.8, 3.3, 66.0, "#F5F5F5", None),
        ingredient("skim-milk", "Skim Milk", 3.4, 5.0, 0.3, 37.0, "#FAFAFA", None),
    ]
}

/// Master fruit data, nutrition per 100 g.
pub fn fruits() -> Vec<Ingredient> {
    vec![
        ingredient("pineapple", "Pineapple", 0.5, 13.1, 0.1, 50.0, "#FFEB3B", Some("🍍")),
        ingredient("mango", "Mango", 0.8, 15.0, 0.4, 60.0, "#FFC107", Some("🥭")),
        ingredient("soursop", "Soursop", 1.0, 16.8, 0.3, 66.0, "#C5E1A5", Some("🍈")),
        ingredient("blueberry", "Blueberry", 0.7, 14.5, 0.3, 57.0, "#3F51B5", Some("🫐")),
        ingredient("strawberry", "Strawberry", 0.7, 7.7, 0.3, 32.0, "#E91E63", Some("🍓")),
        ingredient("blackberry", "Blackberry", 1.4, 9.6, 0.5, 43.0, "#4A148C", Some("🍇")),
        ingredient("peach", "Peach", 0.9, 9.5, 0.3, 39.0, "#FFAB91", Some("🍑")),
        ingredient("beetroot", "Beetroot", 1.6, 9.6, 0.2, 43.0, "#880E4F", Some("🍠")),
        ingredient("banana", "Banana", 1.1, 23.0, 0.3, 89.0, "#FFF176", Some("🍌")),
    ]
}

// Extras shared between multiple packs.
fn dates() -> ExtraIngredient {
    extra("Dates", 12.0, 0.2, 9.0, 0.0, 34.0)
}

fn chia() -> ExtraIngredient {
    extra("Chia Seed", 4.0, 0.6, 2.3, 1.9, 20.0)
}

fn honey() -> ExtraIngredient {
    extra("Honey", 0.5, 0.0, 0.6, 0.0, 2.0)
}

fn goji() -> ExtraIngredient {
    extra("Goji Berry", 5.0, 0.1, 3.9, 0.1, 19.0)
}

fn flax() -> ExtraIngredient {
    extra("Flax Seed", 4.0, 0.8, 1.6, 2.0, 22.0)
}

/// The "double scoop" power extras bundled into king-kong and godzilla.
fn power_stack() -> Vec<ExtraIngredient> {
    vec![
        extra("Collagen", 5.0, 4.5, 0.0, 0.0, 18.0),
        extra("Egg-White Powder", 5.0, 4.3, 0.0, 0.0, 17.0),
        extra("Creatine", 5.0, 0.0, 0.0, 0.0, 0.0),
        extra("Rolled Oats", 25.0, 3.4, 15.9, 2.7, 97.0),
        extra("Peanut Butter", 30.0, 7.7, 4.8, 16.3, 188.0),
    ]
}

/// Preset fruit packs with their mandatory, non-removable extras.
pub fn fruit_packs() -> Vec<FruitPack> {
    vec![
        FruitPack {
            id: "green-grenade",
            name: "Green Grenade",
            tag: Some("2x Protein"),
            protein_multiplier: 2,
            description: "Peach, Mango, Banana (High Carb Fuel)",
            items: vec![item("peach", 50.0), item("mango", 70.0), item("banana", 90.0)],
            extras: vec![
                chia(),
                honey(),
                dates(),
                extra("Spirulina", 3.5, 2.3, 1.0, 0.5, 14.0),
                extra("Creatine", 5.0, 0.0, 0.0, 0.0, 0.0),
            ],
        },
        FruitPack {
            id: "tropic-thunder",
            name: "Tropic Thunder",
            tag: Some("2x Protein"),
            protein_multiplier: 2,
            description: "Pineapple, Soursop, Mango (Tropical Mix)",
            items: vec![item("pineapple", 100.0), item("soursop", 80.0), item("mango", 70.0)],
            extras: vec![
                chia(),
                honey(),
                extra("Turmeric", 1.5, 0.0, 0.3, 0.0, 4.0),
                goji(),
            ],
        },
        FruitPack {
            id: "tropical-dawn",
            name: "Tropical Dawn",
            tag: None,
            protein_multiplier: 1,
            description: "Pineapple, Mango, Soursop",
            items: vec![item("pineapple", 100.0), item("mango", 70.0), item("soursop", 80.0)],
            extras: vec![chia(), honey()],
        },
        FruitPack {
            id: "super-berries",
            name: "Super Berries",
            tag: None,
            protein_multiplier: 1,
            description: "Blueberry, Strawberry, Blackberry + Banana",
            items: vec![
                item("blueberry", 35.0),
                item("strawberry", 30.0),
                item("blackberry", 20.0),
                item("banana", 90.0),
            ],
            extras: vec![dates(), chia()],
        },
        FruitPack {
            id: "super-berries-no-banana",
            name: "Super Berries (No Banana)",
            tag: None,
            protein_multiplier: 1,
            description: "Blueberry, Strawberry, Blackberry",
            items: vec![
                item("blueberry", 35.0),
                item("strawberry", 30.0),
                item("blackberry", 20.0),
            ],
            extras: vec![dates(), chia()],
        },
        FruitPack {
            id: "bpm",
            name: "BPM",
            tag: None,
            protein_multiplier: 1,
            description: "Peach, Mango + Banana",
            items: vec![item("peach", 50.0), item("mango", 70.0), item("banana", 90.0)],
            extras: vec![chia(), honey(), dates()],
        },
        FruitPack {
            id: "bpm-no-banana",
            name: "BPM (No Banana)",
            tag: None,
            protein_multiplier: 1,
            description: "Peach, Mango",
            items: vec![item("peach", 50.0), item("mango", 70.0)],
            extras: vec![chia(), honey(), dates()],
        },
        FruitPack {
            id: "triple-b",
            name: "Triple B",
            tag: None,
            protein_multiplier: 1,
            description: "Blueberry, Beetroot + Banana",
            items: vec![item("blueberry", 50.0), item("beetroot", 50.0), item("banana", 90.0)],
            extras: vec![flax()],
        },
        FruitPack {
            id: "triple-b-no-banana",
            name: "Triple B (No Banana)",
            tag: None,
            protein_multiplier: 1,
            description: "Blueberry, Beetroot",
            items: vec![item("blueberry", 50.0), item("beetroot", 50.0)],
            extras: vec![flax()],
        },
        FruitPack {
            id: "red-rooter",
            name: "Red Rooter",
            tag: None,
            protein_multiplier: 1,
            description: "Strawberry, Beetroot + Banana",
            items: vec![item("strawberry", 70.0), item("beetroot", 50.0), item("banana", 90.0)],
            extras: vec![goji(), dates()],
        },
        FruitPack {
            id: "red-rooter-no-banana",
            name: "Red Rooter (No Banana)",
            tag: None,
            protein_multiplier: 1,
            description: "Strawberry, Beetroot",
            items: vec![item("strawberry", 70.0), item("beetroot", 50.0)],
            extras: vec![goji(), dates()],
        },
        FruitPack {
            id: "gorilla",
            name: "Gorilla",
            tag: None,
            protein_multiplier: 1,
            description: "Double Banana",
            items: vec![item("banana", 180.0)],
            extras: vec![dates(), chia(), extra("Almonds", 5.0, 1.0, 1.1, 2.2, 29.0)],
        },
        FruitPack {
            id: "king-kong",
            name: "King Kong",
            tag: Some("2x Protein"),
            protein_multiplier: 2,
            description: "Double Banana - Double Scoop Active",
            items: vec![item("banana", 180.0)],
            extras: {
                let mut ex = vec![dates(), chia(), extra("Almonds", 5.0, 1.0, 1.1, 2.2, 29.0)];
                ex.extend(power_stack());
                ex
            },
        },
        FruitPack {
            id: "godzilla",
            name: "Godzilla",
            tag: Some("2x Protein"),
            protein_multiplier: 2,
            description: "Super Berries Mix - Double Scoop Active",
            items: vec![
                item("blueberry", 35.0),
                item("strawberry", 30.0),
                item("blackberry", 20.0),
                item("banana", 90.0),
            ],
            extras: {
                let mut ex = vec![dates(), chia()];
                ex.extend(power_stack());
                ex
            },
        },
    ]
}

/// Protein powders, nutrition per reference scoop (declared per-100 like
/// bases; one scoop assumed in aggregation).
pub fn proteins() -> Vec<Ingredient> {
    vec![
        ingredient("platinum-isolate", "Platinum Isolate Synta", 30.0, 0.6, 0.3, 122.2, "#E0E0E0", None),
        ingredient("vegan-vanilla", "Vegan Vanilla (Pea)", 30.0, 2.4, 1.2, 138.0, "#FDF5E6", None),
        ingredient("vegan-chocolate", "Vegan Chocolate (Pea)", 30.0, 4.4, 1.9, 150.0, "#5D4037", None),
        ingredient("unflavored-vegan", "Unflavored Vegan (Pea)", 30.0, 1.2, 1.2, 132.0, "#F5F5F5", None),
        ingredient("gold-vanilla", "Gold Std Vanilla", 30.0, 3.8, 1.9, 150.0, "#FFF9C4", None),
        ingredient("gold-chocolate", "Gold Std Chocolate", 30.0, 3.8, 1.3, 150.0, "#795548", None),
    ]
}

/// Optional add-on boosters, nutrition pre-scaled to the labelled serving.
pub fn add_ons() -> Vec<AddOn> {
    vec![
        add_on("goji", "Goji Berry", "5 g", 0.1, 3.9, 0.1, 19.0, "#E91E63"),
        add_on("chia", "Chia Seed", "4 g", 0.6, 2.3, 1.9, 20.0, "#2D2D2D"),
        add_on("flax", "Flax Seed", "4 g", 0.8, 1.6, 2.0, 22.0, "#A67C52"),
        add_on("oat", "Rolled Oat", "25 g", 3.4, 15.9, 2.7, 97.0, "#F5F5DC"),
        add_on("dates", "Dates", "12 g", 0.2, 9.0, 0.0, 34.0, "#4E2728"),
        add_on("honey", "Honey", "0.5 ml", 0.0, 0.6, 0.0, 2.0, "#FFD700"),
        add_on("turmeric", "Turmeric", "1.5 g", 0.0, 0.3, 0.0, 4.0, "#FFC30B"),
        add_on("spirulina", "Spirulina", "3.5 g", 2.3, 1.0, 0.5, 14.0, "#006400"),
        add_on("almonds", "Almonds", "5 g", 1.0, 1.1, 2.2, 29.0, "#DEB887"),
        add_on("cacao", "Cacao Nibs", "4.5 g", 0.9, 2.2, 2.3, 25.0, "#3D1F1F"),
        add_on("walnut", "Walnut", "5 g", 0.8, 1.0, 3.3, 33.0, "#8B4513"),
        add_on("egg-powder", "Egg-White Powder", "5 g", 4.3, 0.0, 0.0, 17.0, "#FFFFFF"),
        add_on("creatine", "Creatine", "5 g", 0.0, 0.0, 0.0, 0.0, "#E5E5E5"),
        add_on("mct", "MCT Oil", "0.5 ml", 0.0, 0.0, 0.5, 4.0, "#FFFFFF"),
        add_on("pb-30", "Peanut Butter", "30 g", 7.7, 4.8, 16.3, 188.0, "#CD853F"),
        add_on("pb-60", "Double Peanut Butter", "60 g", 15.4, 9.6, 32.6, 376.0, "#8B4513"),
        add_on("collagen", "Collagen", "5 g", 4.5, 0.0, 0.0, 18.0, "#FFF0F5"),
    ]
}
