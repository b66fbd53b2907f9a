pub mod credentials;
pub mod customer;
pub mod ledger_adjustment;
pub mod new_customer;
pub mod sort_key;
pub mod status_message;
