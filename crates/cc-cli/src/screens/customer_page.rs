use crate::Client;

use cc_core::{Customer, StatusMessage, customer_url};
use serde::Serialize;

const FAILURE_MESSAGE: &str = "Error fetching customer data";

/// What the customer page shows once loaded.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerCard {
    pub welcome: String,
    pub customer: Customer,
    /// Payload of the customer's QR code.
    pub qr_url: String,
}

impl CustomerCard {
    pub fn new(customer: Customer, public_origin: &str) -> Self {
        Self {
            welcome: format!("Welcome, {}!", customer.name),
            qr_url: customer_url(public_origin, &customer.id),
            customer,
        }
    }
}

/// Customer QR page (`/customer/:id`).
#[derive(Debug, Clone)]
pub struct CustomerPage {
    customer_id: String,
    public_origin: String,
    card: Option<CustomerCard>,
    status: Option<StatusMessage>,
}

impl CustomerPage {
    pub fn new(customer_id: impl Into<String>, public_origin: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            public_origin: public_origin.into(),
            card: None,
            status: None,
        }
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn card(&self) -> Option<&CustomerCard> {
        self.card.as_ref()
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub async fn load(&mut self, client: &Client) -> Option<&CustomerCard> {
        match client.get_customer(&self.customer_id).await {
            Ok(customer) => {
                self.status = None;
                self.card = Some(CustomerCard::new(customer, &self.public_origin));
            }
            Err(e) => {
                log::warn!("Failed to load customer {}: {e}", self.customer_id);
                self.card = None;
                self.status = Some(StatusMessage::failure(FAILURE_MESSAGE));
            }
        }
        self.card.as_ref()
    }
}
