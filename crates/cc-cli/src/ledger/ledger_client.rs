use crate::ledger::in_flight::InFlight;
use crate::{CreditLedger, LedgerError, LedgerResult};

use cc_core::{LedgerAdjustment, LedgerBalance};
use log::warn;

/// Ledger front door used by the dashboard and the scanner.
///
/// A second adjustment for a customer whose previous one is still pending is refused
/// instead of being sent, so a double scan or double click applies once.
pub struct LedgerClient<L> {
    ledger: L,
    in_flight: InFlight,
}

impl<L: CreditLedger> LedgerClient<L> {
    pub fn new(ledger: L) -> Self {
        Self {
            ledger,
            in_flight: InFlight::default(),
        }
    }

    pub fn inner(&self) -> &L {
        &self.ledger
    }

    pub fn is_in_flight(&self, customer_id: &str) -> bool {
        self.in_flight.contains(customer_id)
    }

    /// Remove one cut (the scanner's default).
    pub async fn deduct_one(&self, customer_id: &str) -> LedgerResult<LedgerBalance> {
        self.apply(customer_id, LedgerAdjustment::DeductOne).await
    }

    /// Remove `count` cuts.
    pub async fn deduct(&self, customer_id: &str, count: u32) -> LedgerResult<LedgerBalance> {
        if count == 0 {
            return Err(LedgerError::invalid_adjustment(
                "Number of cuts to deduct must be at least 1",
            ));
        }
        self.apply(customer_id, LedgerAdjustment::Deduct(count))
            .await
    }

    /// Add `count` cuts.
    pub async fn credit(&self, customer_id: &str, count: u32) -> LedgerResult<LedgerBalance> {
        if count == 0 {
            return Err(LedgerError::invalid_adjustment(
                "Number of cuts to add must be at least 1",
            ));
        }
        self.apply(customer_id, LedgerAdjustment::Credit(count))
            .await
    }

    /// Raw signed contract: `None` deducts one, positive deducts, negative credits.
    pub async fn adjust_credits(
        &self,
        customer_id: &str,
        delta: Option<i64>,
    ) -> LedgerResult<LedgerBalance> {
        let adjustment = match delta {
            None => LedgerAdjustment::DeductOne,
            Some(delta) => LedgerAdjustment::from_delta(delta)?,
        };
        self.apply(customer_id, adjustment).await
    }

    async fn apply(
        &self,
        customer_id: &str,
        adjustment: LedgerAdjustment,
    ) -> LedgerResult<LedgerBalance> {
        let _guard = self.in_flight.claim(customer_id).inspect_err(|_| {
            warn!("Ignoring duplicate adjustment for {customer_id} while one is pending");
        })?;

        Ok(self.ledger.apply(customer_id, adjustment).await?)
    }
}
