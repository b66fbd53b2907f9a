use crate::{Client, ClientResult};

use std::sync::Arc;

use async_trait::async_trait;
use cc_core::{LedgerAdjustment, LedgerBalance};

/// Anything that can apply an adjustment and report the authoritative balance.
#[async_trait]
pub trait CreditLedger: Send + Sync {
    async fn apply(
        &self,
        customer_id: &str,
        adjustment: LedgerAdjustment,
    ) -> ClientResult<LedgerBalance>;
}

#[async_trait]
impl CreditLedger for Client {
    async fn apply(
        &self,
        customer_id: &str,
        adjustment: LedgerAdjustment,
    ) -> ClientResult<LedgerBalance> {
        self.adjust_credits(customer_id, adjustment).await
    }
}

#[async_trait]
impl<T: CreditLedger + ?Sized> CreditLedger for Arc<T> {
    async fn apply(
        &self,
        customer_id: &str,
        adjustment: LedgerAdjustment,
    ) -> ClientResult<LedgerBalance> {
        (**self).apply(customer_id, adjustment).await
    }
}
