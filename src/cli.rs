use clap::{Parser, Subcommand};

/// SmoothieMaker — assemble a smoothie, see its nutrition live, and compare
/// two blends side-by-side.
#[derive(Parser, Debug)]
#[command(name = "smoothie_maker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the persisted selection JSON file.
    #[arg(short, long, default_value = "smoothie_state.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactively build a smoothie (default).
    Build,

    /// Print the nutritional archive: raw component data per category.
    Archive,

    /// Print the summary card for the saved selection.
    Summary,

    /// Reset the persisted selection.
    Reset {
        /// Clear the add-on set only.
        #[arg(long)]
        add_ons: bool,

        /// Clear the entire selection.
        #[arg(long)]
        all: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Build
    }
}
