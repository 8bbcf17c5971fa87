pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_add_on_toggles, prompt_base, prompt_builder_action, prompt_pack, prompt_protein,
    prompt_yes_no, BuilderAction,
};
pub use render::{display_archive, display_comparison, display_summary};
