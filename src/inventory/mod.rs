//! Client tool inventory: the CSV loader and the Tool Record model.

mod loader;
mod types;

pub use loader::{load_inventory, InventoryError, REQUIRED_COLUMNS};
pub use types::{Criticality, ToolKind, ToolRecord};
