use crate::Client;

use cc_core::{Customer, NewCustomer, StatusMessage};
use log::info;

const SUCCESS_MESSAGE: &str = "Registration successful! Check your SMS.";
const FAILURE_FALLBACK: &str = "Error registering customer";

/// Public self-registration form (`/`).
#[derive(Debug, Default, Clone)]
pub struct RegistrationForm {
    pub name: String,
    pub phone_number: String,
    status: Option<StatusMessage>,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fields(name: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone_number: phone_number.into(),
            status: None,
        }
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Submit the form. On success the fields are cleared; on failure they are kept
    /// so the customer can correct them.
    pub async fn submit(&mut self, client: &Client) -> Option<Customer> {
        let new_customer = NewCustomer::new(self.name.trim(), self.phone_number.trim());

        match client.register_customer(&new_customer).await {
            Ok(customer) => {
                info!("Registered customer {}", customer.id);
                self.name.clear();
                self.phone_number.clear();
                self.status = Some(StatusMessage::success(SUCCESS_MESSAGE));
                Some(customer)
            }
            Err(e) => {
                self.status = Some(StatusMessage::failure(e.message_or(FAILURE_FALLBACK)));
                None
            }
        }
    }
}
