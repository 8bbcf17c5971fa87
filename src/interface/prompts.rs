use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::Selection;

/// Top-level builder menu actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderAction {
    PickPack,
    PickBase,
    PickProtein,
    ToggleAddOns,
    ResetAddOns,
    ResetAll,
    LockAndCompare,
    ClearCompare,
    ShowSummary,
    Quit,
}

/// Prompt for the next builder action.
pub fn prompt_builder_action(comparing: bool) -> Result<BuilderAction> {
    let mut options = vec![
        ("Pick fruit pack", BuilderAction::PickPack),
        ("Pick milk base", BuilderAction::PickBase),
        ("Pick protein", BuilderAction::PickProtein),
        ("Toggle add-ons", BuilderAction::ToggleAddOns),
        ("Reset add-ons", BuilderAction::ResetAddOns),
        ("Reset everything", BuilderAction::ResetAll),
    ];

    if comparing {
        options.push(("Clear comparison", BuilderAction::ClearCompare));
    } else {
        options.push(("Lock & compare", BuilderAction::LockAndCompare));
    }
    options.push(("Show summary", BuilderAction::ShowSummary));
    options.push(("Quit", BuilderAction::Quit));

    let labels: Vec<&str> = options.iter().map(|(l, _)| *l).collect();
    let selection = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(options[selection].1)
}

/// Pick a fruit pack, or none. Re-selecting the active pack deselects it,
/// so the current pack is marked in the listing.
pub fn prompt_pack(catalog: &Catalog, current: Option<&str>) -> Result<Option<String>> {
    let mut labels = vec!["(none)".to_string()];
    for pack in catalog.packs() {
        let marker = if current == Some(pack.id) { "* " } else { "  " };
        let tag = pack.tag.map(|t| format!(" [{}]", t)).unwrap_or_default();
        let fruits: Vec<String> = pack
            .items
            .iter()
            .filter_map(|item| catalog.fruit(item.fruit_id))
            .map(|f| match f.emoji {
                Some(emoji) => format!("{} {}", emoji, f.name),
                None => f.name.to_string(),
            })
            .collect();
        let extras = if pack.extras.is_empty() {
            String::new()
        } else {
            let names: Vec<&str> = pack.extras.iter().map(|e| e.name).collect();
            format!(" (+ {})", names.join(", "))
        };
        labels.push(format!(
            "{}{}{}: {}{}",
            marker,
            pack.name,
            tag,
            fruits.join(", "),
            extras
        ));
    }

    let selection = Select::new()
        .with_prompt("Pick a fruit pack")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(if selection == 0 {
        None
    } else {
        Some(catalog.packs()[selection - 1].id.to_string())
    })
}

/// Pick a milk base, or none.
pub fn prompt_base(catalog: &Catalog, current: Option<&str>) -> Result<Option<String>> {
    prompt_ingredient("Pick a milk base", catalog.bases(), current)
}

/// Pick a protein, or none. The double-scoop label is the caller's concern.
pub fn prompt_protein(catalog: &Catalog, current: Option<&str>) -> Result<Option<String>> {
    prompt_ingredient("Pick a protein", catalog.proteins(), current)
}

fn prompt_ingredient(
    prompt: &str,
    items: &[crate::models::Ingredient],
    current: Option<&str>,
) -> Result<Option<String>> {
    let mut labels = vec!["(none)".to_string()];
    for ing in items {
        let marker = if current == Some(ing.id) { "* " } else { "  " };
        labels.push(format!("{}{}", marker, ing.name));
    }

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(if selection == 0 {
        None
    } else {
        Some(items[selection - 1].id.to_string())
    })
}

/// Toggle add-ons by name until the user enters an empty line.
///
/// Exact match first, then fuzzy matching on the catalog names. Returns the
/// ids to toggle, in entry order.
pub fn prompt_add_on_toggles(catalog: &Catalog, selection: &Selection) -> Result<Vec<String>> {
    let mut toggles = Vec::new();

    println!("Currently selected: {}", selected_add_on_names(catalog, selection));

    loop {
        let input: String = Input::new()
            .with_prompt("Add-on to toggle (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        let exact = catalog
            .add_ons()
            .iter()
            .find(|a| a.name.to_lowercase() == input.to_lowercase() || a.id == input.to_lowercase());

        if let Some(add_on) = exact {
            println!("Toggled: {}", add_on.name);
            toggles.push(add_on.id.to_string());
            continue;
        }

        // Fuzzy fallback: best jaro_winkler candidates above 0.7.
        let mut candidates: Vec<(&crate::models::AddOn, f64)> = catalog
            .add_ons()
            .iter()
            .map(|a| (a, jaro_winkler(&a.name.to_lowercase(), &input.to_lowercase())))
            .filter(|(_, score)| *score > 0.7)
            .collect();
        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        if candidates.is_empty() {
            println!("No matching add-on found for '{}'", input);
            continue;
        }

        if candidates.len() == 1 {
            let add_on = candidates[0].0;
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", add_on.name))
                .default(true)
                .interact()?;
            if confirm {
                println!("Toggled: {}", add_on.name);
                toggles.push(add_on.id.to_string());
            }
        } else {
            let mut options: Vec<String> = candidates
                .iter()
                .take(5)
                .map(|(a, _)| a.name.to_string())
                .collect();
            let real_count = options.len();
            options.push("None of these".to_string());

            let picked = Select::new()
                .with_prompt("Which did you mean?")
                .items(&options)
                .default(0)
                .interact()?;

            if picked < real_count {
                let add_on = candidates[picked].0;
                println!("Toggled: {}", add_on.name);
                toggles.push(add_on.id.to_string());
            }
        }
    }

    Ok(toggles)
}

fn selected_add_on_names(catalog: &Catalog, selection: &Selection) -> String {
    if selection.selected_add_ons.is_empty() {
        return "(none)".to_string();
    }
    selection
        .selected_add_ons
        .iter()
        .filter_map(|id| catalog.add_on(id).map(|a| a.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
