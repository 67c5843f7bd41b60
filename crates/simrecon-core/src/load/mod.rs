pub mod billing;
pub mod inventory;

pub use billing::{load_billing, BillingLoad, BillingStats};
pub use inventory::{load_inventory, InventoryLoad, InventoryStats};
