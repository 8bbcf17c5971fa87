use crate::catalog::data::BASE_VOLUME_ML;
use crate::catalog::Catalog;
use crate::models::{NutritionTotals, Selection, Snapshot};
use crate::nutrition::{format_value, pack_nutrition};

/// Display a summary card: total energy, macro grid, and chosen components.
pub fn display_summary(
    title: &str,
    selection: &Selection,
    totals: &NutritionTotals,
    catalog: &Catalog,
) {
    let pack_name = selection
        .fruit_pack_id
        .as_deref()
        .and_then(|id| catalog.pack(id))
        .map(|p| p.name)
        .unwrap_or("None Selected");
    let base_name = selection
        .base
        .as_deref()
        .and_then(|id| catalog.base(id))
        .map(|b| b.name)
        .unwrap_or("None Selected");
    let protein_name = selection
        .protein
        .as_deref()
        .and_then(|id| catalog.protein(id))
        .map(|p| p.name)
        .unwrap_or("None Selected");

    println!();
    println!("=== {} ===", title);
    println!();
    println!("  TOTAL ENERGY: {} kcal", format_value(totals.kcal));
    println!(
        "  PRO {} g | CARB {} g | FAT {} g",
        format_value(totals.protein),
        format_value(totals.carbs),
        format_value(totals.fat)
    );
    println!();
    println!("  Fruit pack: {}", pack_name);
    println!("  Base:       {}", base_name);
    println!("  Protein:    {}", protein_name);

    let booster_names: Vec<&str> = selection
        .selected_add_ons
        .iter()
        .filter_map(|id| catalog.add_on(id).map(|a| a.name))
        .collect();
    if !booster_names.is_empty() {
        println!("  Boosters:   {}", booster_names.join(", "));
    }
    println!();
}

/// Display the side-by-side comparison: frozen snapshot vs. live selection.
pub fn display_comparison(
    snapshot: &Snapshot,
    live_selection: &Selection,
    live_totals: &NutritionTotals,
    catalog: &Catalog,
) {
    display_summary("SMOOTHIE 1 (locked)", &snapshot.selection, &snapshot.totals, catalog);
    display_summary("SMOOTHIE 2 (live)", live_selection, live_totals, catalog);

    let diff = live_totals.kcal_difference(&snapshot.totals);
    println!("  DIFFERENCE: {:.0} kcal", diff);
    println!();
}

/// Print the nutritional archive: raw component data per category, with
/// pack totals including their mandatory extras.
pub fn display_archive(catalog: &Catalog) {
    println!();
    println!("=== NUTRITIONAL ARCHIVE ===");

    println!();
    println!("--- Fruit Packs (main + extras) ---");
    for pack in catalog.packs() {
        let stats = pack_nutrition(pack.id, catalog);
        let tag = pack.tag.map(|t| format!(" [{}]", t)).unwrap_or_default();
        println!("  {}{}", pack.name, tag);
        println!("      {}", pack.description);
        if !pack.extras.is_empty() {
            let locked: Vec<&str> = pack.extras.iter().map(|e| e.name).collect();
            println!("      locked extras: {}", locked.join(", "));
        }
        println!(
            "      PRO {} | CARB {} | FAT {} | KCAL {}",
            format_value(stats.protein),
            format_value(stats.carbs),
            format_value(stats.fat),
            format_value(stats.kcal)
        );
    }

    println!();
    println!("--- Milk Bases (per {:.0} ml) ---", BASE_VOLUME_ML);
    for base in catalog.bases() {
        println!(
            "  {:<22} PRO {} | CARB {} | FAT {} | KCAL {}",
            base.name,
            format_value(base.protein),
            format_value(base.carbs),
            format_value(base.fat),
            format_value(base.kcal)
        );
    }

    println!();
    println!("--- Proteins (per scoop) ---");
    for protein in catalog.proteins() {
        println!(
            "  {:<22} PRO {} | CARB {} | FAT {} | KCAL {}",
            protein.name,
            format_value(protein.protein),
            format_value(protein.carbs),
            format_value(protein.fat),
            format_value(protein.kcal)
        );
    }

    println!();
    println!("--- Add-On Boosters ---");
    for add_on in catalog.add_ons() {
        println!(
            "  {:<22} ({:>6}) PRO {} | CARB {} | FAT {} | KCAL {}",
            add_on.name,
            add_on.weight_label,
            format_value(add_on.protein),
            format_value(add_on.carbs),
            format_value(add_on.fat),
            format_value(add_on.kcal)
        );
    }
    println!();
}
