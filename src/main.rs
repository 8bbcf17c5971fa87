use clap::Parser;
use tracing_subscriber::EnvFilter;

use smoothie_maker_rs::catalog::CATALOG;
use smoothie_maker_rs::cli::{Cli, Command};
use smoothie_maker_rs::error::Result;
use smoothie_maker_rs::interface::{
    display_archive, display_comparison, display_summary, prompt_add_on_toggles, prompt_base,
    prompt_builder_action, prompt_pack, prompt_protein, prompt_yes_no, BuilderAction,
};
use smoothie_maker_rs::nutrition::format_value;
use smoothie_maker_rs::state::{load_selection, save_selection, CompareController};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("smoothie_maker_rs=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    // Catalog data bugs are fatal at startup, never a runtime error path.
    CATALOG.validate()?;

    match command {
        Command::Build => cmd_build(&cli.file),
        Command::Archive => {
            display_archive(&CATALOG);
            Ok(())
        }
        Command::Summary => cmd_summary(&cli.file),
        Command::Reset { add_ons, all } => cmd_reset(&cli.file, add_ons, all),
    }
}

/// Interactive builder loop with live totals and two-slot comparison.
fn cmd_build(file_path: &str) -> Result<()> {
    let saved = load_selection(file_path);
    let mut controller = CompareController::new(&CATALOG, saved);

    println!("MAKE YOUR OWN SMOOTHIE");
    println!("  1. choose your fruit pack");
    println!("  2. choose your milk");
    println!("  3. choose your protein");
    println!("  4. choose your add-ons");

    loop {
        let totals = controller.store().totals();
        let double = if controller.store().double_protein_active() {
            "  [2x Protein ACTIVE]"
        } else {
            ""
        };
        println!();
        println!(
            "Current: {} kcal | PRO {} | CARB {} | FAT {}{}",
            format_value(totals.kcal),
            format_value(totals.protein),
            format_value(totals.carbs),
            format_value(totals.fat),
            double
        );
        if let Some(diff) = controller.kcal_difference() {
            println!("Comparing - difference vs Smoothie 1: {:.0} kcal", diff);
        }

        match prompt_builder_action(controller.is_comparing())? {
            BuilderAction::PickPack => {
                let current = controller.store().selection().fruit_pack_id.clone();
                if let Some(id) = prompt_pack(&CATALOG, current.as_deref())? {
                    controller.store_mut().toggle_pack(&id);
                } else if let Some(id) = current {
                    controller.store_mut().toggle_pack(&id);
                }
            }
            BuilderAction::PickBase => {
                let current = controller.store().selection().base.clone();
                if let Some(id) = prompt_base(&CATALOG, current.as_deref())? {
                    controller.store_mut().set_base(&id);
                } else if let Some(id) = current {
                    controller.store_mut().set_base(&id);
                }
            }
            BuilderAction::PickProtein => {
                let current = controller.store().selection().protein.clone();
                if let Some(id) = prompt_protein(&CATALOG, current.as_deref())? {
                    controller.store_mut().set_protein(&id);
                } else if let Some(id) = current {
                    controller.store_mut().set_protein(&id);
                }
            }
            BuilderAction::ToggleAddOns => {
                let toggles =
                    prompt_add_on_toggles(&CATALOG, controller.store().selection())?;
                for id in toggles {
                    controller.store_mut().toggle_add_on(&id);
                }
            }
            BuilderAction::ResetAddOns => {
                controller.store_mut().reset_add_ons();
                println!("Add-ons cleared");
            }
            BuilderAction::ResetAll => {
                controller.store_mut().reset_all();
                println!("Smoothie reset");
            }
            BuilderAction::LockAndCompare => {
                controller.lock_and_compare();
                println!("Smoothie 1 locked. Build Smoothie 2!");
            }
            BuilderAction::ClearCompare => {
                controller.clear_compare();
                println!("Comparison cleared");
            }
            BuilderAction::ShowSummary => {
                let live_totals = controller.store().totals();
                match controller.snapshot() {
                    Some(snapshot) => display_comparison(
                        snapshot,
                        controller.store().selection(),
                        &live_totals,
                        &CATALOG,
                    ),
                    None => display_summary(
                        "CURRENT SELECTION",
                        controller.store().selection(),
                        &live_totals,
                        &CATALOG,
                    ),
                }
            }
            BuilderAction::Quit => break,
        }
    }

    if prompt_yes_no("Save current selection?", true)? {
        save_selection(file_path, controller.store().selection())?;
        println!("Selection saved.");
    }

    Ok(())
}

/// Print the summary card for the saved selection without entering the loop.
fn cmd_summary(file_path: &str) -> Result<()> {
    let selection = load_selection(file_path);
    let totals = smoothie_maker_rs::nutrition::calculate_nutrition(&selection, &CATALOG);
    display_summary("SAVED SELECTION", &selection, &totals, &CATALOG);
    Ok(())
}

/// Clear persisted selection state.
fn cmd_reset(file_path: &str, add_ons: bool, all: bool) -> Result<()> {
    if !add_ons && !all {
        println!("Please specify at least one reset option:");
        println!("  --add-ons  Clear the add-on set only");
        println!("  --all      Clear the entire selection");
        return Ok(());
    }

    let mut selection = load_selection(file_path);

    if all {
        selection = Default::default();
        println!("Selection cleared.");
    } else if add_ons {
        selection.selected_add_ons.clear();
        println!("Add-ons cleared.");
    }

    save_selection(file_path, &selection)?;
    println!("Selection saved.");

    Ok(())
}
