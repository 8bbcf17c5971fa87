use crate::catalog::Catalog;
use crate::models::{NutritionTotals, Selection};

/// Compute the four-nutrient totals for a selection.
///
/// Pure and referentially transparent: identical selection + catalog always
/// yields identical totals. Unset slots contribute zero. A selection id that
/// does not resolve in the catalog also contributes zero; that indicates
/// stale persisted state against a newer catalog, so it is surfaced through
/// `tracing::warn!` rather than failing.
pub fn calculate_nutrition(selection: &Selection, catalog: &Catalog) -> NutritionTotals {
    let mut totals = NutritionTotals::default();

    // Base and protein are declared per 100 g/ml; one reference serving is
    // assumed, so their values are added unscaled.
    if let Some(id) = &selection.base {
        match catalog.base(id) {
            Some(base) => {
                totals += NutritionTotals {
                    protein: base.protein,
                    carbs: base.carbs,
                    fat: base.fat,
                    kcal: base.kcal,
                };
            }
            None => tracing::warn!(id = %id, "unknown base id in selection"),
        }
    }

    if let Some(id) = &selection.protein {
        match catalog.protein(id) {
            Some(protein) => {
                totals += NutritionTotals {
                    protein: protein.protein,
                    carbs: protein.carbs,
                    fat: protein.fat,
                    kcal: protein.kcal,
                };
            }
            None => tracing::warn!(id = %id, "unknown protein id in selection"),
        }
    }

    if let Some(id) = &selection.fruit_pack_id {
        match catalog.pack(id) {
            Some(pack) => totals += pack_nutrition_inner(pack, catalog),
            None => tracing::warn!(id = %id, "unknown fruit pack id in selection"),
        }
    }

    for id in &selection.selected_add_ons {
        match catalog.add_on(id) {
            Some(add_on) => {
                // Add-on values are already scaled to their fixed serving.
                totals += NutritionTotals {
                    protein: add_on.protein,
                    carbs: add_on.carbs,
                    fat: add_on.fat,
                    kcal: add_on.kcal,
                };
            }
            None => tracing::warn!(id = %id, "unknown add-on id in selection"),
        }
    }

    totals
}

/// Standalone totals for a single pack (fruits plus mandatory extras).
///
/// Used by the nutritional-archive view.
pub fn pack_nutrition(pack_id: &str, catalog: &Catalog) -> NutritionTotals {
    match catalog.pack(pack_id) {
        Some(pack) => pack_nutrition_inner(pack, catalog),
        None => {
            tracing::warn!(id = %pack_id, "unknown fruit pack id");
            NutritionTotals::default()
        }
    }
}

fn pack_nutrition_inner(
    pack: &crate::models::FruitPack,
    catalog: &Catalog,
) -> NutritionTotals {
    let mut totals = NutritionTotals::default();

    for item in &pack.items {
        match catalog.fruit(item.fruit_id) {
            Some(fruit) => {
                let factor = item.weight_g / 100.0;
                totals += NutritionTotals {
                    protein: fruit.protein * factor,
                    carbs: fruit.carbs * factor,
                    fat: fruit.fat * factor,
                    kcal: fruit.kcal * factor,
                };
            }
            None => {
                tracing::warn!(pack = %pack.id, fruit = %item.fruit_id, "pack references unknown fruit")
            }
        }
    }

    // Extras contribute in absolute units, no scaling.
    for extra in &pack.extras {
        totals += NutritionTotals {
            protein: extra.protein,
            carbs: extra.carbs,
            fat: extra.fat,
            kcal: extra.kcal,
        };
    }

    totals
}

/// Format a nutrient value for display, one decimal place.
pub fn format_value(value: f64) -> String {
    format!("{:.1}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn catalog() -> Catalog {
        Catalog::standard()
    }

    fn assert_totals(totals: NutritionTotals, p: f64, c: f64, f: f64, k: f64) {
        assert!((totals.protein - p).abs() < EPS, "protein {} != {}", totals.protein, p);
        assert!((totals.carbs - c).abs() < EPS, "carbs {} != {}", totals.carbs, c);
        assert!((totals.fat - f).abs() < EPS, "fat {} != {}", totals.fat, f);
        assert!((totals.kcal - k).abs() < EPS, "kcal {} != {}", totals.kcal, k);
    }

    #[test]
    fn test_empty_selection_is_zero() {
        let totals = calculate_nutrition(&Selection::default(), &catalog());
        assert!(totals.is_zero());
    }

    #[test]
    fn test_base_plus_protein() {
        let selection = Selection {
            base: Some("almond-milk".into()),
            protein: Some("platinum-isolate".into()),
            ..Default::default()
        };
        let totals = calculate_nutrition(&selection, &catalog());
        assert_totals(totals, 30.6, 1.6, 1.4, 137.2);
    }

    #[test]
    fn test_gorilla_pack_with_extras() {
        let selection = Selection {
            fruit_pack_id: Some("gorilla".into()),
            ..Default::default()
        };
        // Banana 180 g scaled by 1.8 plus Dates/Chia/Almonds in absolute units.
        let totals = calculate_nutrition(&selection, &catalog());
        assert_totals(totals, 3.78, 53.8, 4.64, 243.2);
    }

    #[test]
    fn test_single_add_on_unscaled() {
        let selection = Selection {
            selected_add_ons: vec!["chia".into()],
            ..Default::default()
        };
        let totals = calculate_nutrition(&selection, &catalog());
        assert_totals(totals, 0.6, 2.3, 1.9, 20.0);
    }

    #[test]
    fn test_add_on_order_irrelevant() {
        let catalog = catalog();
        let a = Selection {
            selected_add_ons: vec!["chia".into(), "goji".into(), "pb-30".into()],
            ..Default::default()
        };
        let b = Selection {
            selected_add_ons: vec!["pb-30".into(), "goji".into(), "chia".into()],
            ..Default::default()
        };
        // Summation order may differ, so compare within epsilon.
        let ta = calculate_nutrition(&a, &catalog);
        let tb = calculate_nutrition(&b, &catalog);
        assert!((ta.protein - tb.protein).abs() < EPS);
        assert!((ta.carbs - tb.carbs).abs() < EPS);
        assert!((ta.fat - tb.fat).abs() < EPS);
        assert!((ta.kcal - tb.kcal).abs() < EPS);
    }

    #[test]
    fn test_deterministic() {
        let catalog = catalog();
        let selection = Selection {
            base: Some("oat-milk".into()),
            fruit_pack_id: Some("king-kong".into()),
            protein: Some("vegan-chocolate".into()),
            selected_add_ons: vec!["mct".into(), "walnut".into()],
        };
        let first = calculate_nutrition(&selection, &catalog);
        let second = calculate_nutrition(&selection, &catalog);
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_ids_contribute_zero() {
        let catalog = catalog();
        let selection = Selection {
            base: Some("unicorn-milk".into()),
            fruit_pack_id: Some("no-such-pack".into()),
            protein: Some("mystery-powder".into()),
            selected_add_ons: vec!["chia".into(), "not-a-thing".into()],
        };
        // Only the valid add-on contributes.
        let totals = calculate_nutrition(&selection, &catalog);
        assert_totals(totals, 0.6, 2.3, 1.9, 20.0);
    }

    #[test]
    fn test_multiplier_does_not_scale_protein() {
        let catalog = catalog();

        // King Kong carries protein_multiplier = 2 but the aggregation path
        // counts the chosen protein once; the flag only drives the UI label.
        let with_pack = Selection {
            fruit_pack_id: Some("king-kong".into()),
            protein: Some("platinum-isolate".into()),
            ..Default::default()
        };
        let pack_only = Selection {
            fruit_pack_id: Some("king-kong".into()),
            ..Default::default()
        };

        let delta = calculate_nutrition(&with_pack, &catalog).protein
            - calculate_nutrition(&pack_only, &catalog).protein;
        assert!((delta - 30.0).abs() < EPS);
    }

    #[test]
    fn test_pack_nutrition_matches_selection_contribution() {
        let catalog = catalog();
        let standalone = pack_nutrition("godzilla", &catalog);
        let via_selection = calculate_nutrition(
            &Selection {
                fruit_pack_id: Some("godzilla".into()),
                ..Default::default()
            },
            &catalog,
        );
        assert_eq!(standalone, via_selection);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(30.6), "30.6");
        assert_eq!(format_value(243.2), "243.2");
        assert_eq!(format_value(0.0), "0.0");
    }
}
