pub mod compare;
pub mod domain;
pub mod dto;
pub mod error;
pub mod load;
pub mod rules;

pub use compare::{compare, BillingSource, Comparison, REQUIRED_BILLING_SOURCES};
pub use domain::*;
pub use dto::*;
pub use error::{CoreError, CoreErrorKind};
pub use load::{
    load_billing, load_inventory, BillingLoad, BillingStats, InventoryLoad, InventoryStats,
};
pub use rules::{reconcile, Direction, MismatchResult};
