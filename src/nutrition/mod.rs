pub mod aggregate;

pub use aggregate::{calculate_nutrition, format_value, pack_nutrition};
