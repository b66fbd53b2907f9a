//! Headless screen controllers.
//!
//! Each screen owns its form state and the tagged status line the operator sees.
//! Navigation is reported as a [`cc_core::Route`] instead of being performed.

pub(crate) mod customer_page;
pub(crate) mod dashboard;
pub(crate) mod login;
pub(crate) mod register;

pub use customer_page::{CustomerCard, CustomerPage};
pub use dashboard::AdminDashboard;
pub use login::LoginForm;
pub use register::RegistrationForm;
