pub mod directory;
pub mod error;
pub mod models;
pub mod qr_payload;
pub mod route;

#[cfg(test)]
mod tests;

pub use directory::{
    DEFAULT_PAGE_SIZE, Directory, DirectoryPage, PAGE_SIZE_OPTIONS, SortState, paginate, search,
    sort_customers,
};
pub use error::{CoreError, Result};
pub use models::credentials::Credentials;
pub use models::customer::Customer;
pub use models::ledger_adjustment::{LedgerAdjustment, LedgerBalance, LedgerRequest};
pub use models::new_customer::NewCustomer;
pub use models::sort_key::{SortDirection, SortKey};
pub use models::status_message::{StatusKind, StatusMessage};
pub use qr_payload::{customer_url, extract_customer_id};
pub use route::{Route, guard};
