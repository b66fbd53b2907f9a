mod customer;
mod ledger_adjustment;
mod new_customer;
mod sort_key;
