pub mod billing;
pub mod frame;
pub mod msisdn;
pub mod region;
pub mod table;

pub use billing::{
    normalize_status, parse_price, BillingRecord, CANCELLED_STATUS, MISSING_STATUS,
};
pub use frame::{BillingFrame, TrackedSet};
pub use msisdn::{normalize_msisdn, CanonicalId};
pub use region::Region;
pub use table::{Cell, ColumnNames, RawTable};
