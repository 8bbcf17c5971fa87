mod compare;
mod persistence;
mod store;

pub use compare::CompareController;
pub use persistence::{load_selection, save_selection};
pub use store::SelectionStore;
