use crate::{LedgerError, LedgerResult};

use std::collections::HashSet;
use std::sync::Mutex;

/// Customers with an adjustment currently on the wire.
#[derive(Debug, Default)]
pub(crate) struct InFlight {
    customers: Mutex<HashSet<String>>,
}

impl InFlight {
    /// Claim `customer_id` until the returned guard drops.
    #[track_caller]
    pub(crate) fn claim<'a>(&'a self, customer_id: &str) -> LedgerResult<InFlightGuard<'a>> {
        let mut customers = self.customers.lock().unwrap_or_else(|p| p.into_inner());
        if !customers.insert(customer_id.to_string()) {
            return Err(LedgerError::already_in_flight(customer_id));
        }
        Ok(InFlightGuard {
            owner: self,
            customer_id: customer_id.to_string(),
        })
    }

    pub(crate) fn contains(&self, customer_id: &str) -> bool {
        self.customers
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .contains(customer_id)
    }
}

pub(crate) struct InFlightGuard<'a> {
    owner: &'a InFlight,
    customer_id: String,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.owner
            .customers
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .remove(&self.customer_id);
    }
}
