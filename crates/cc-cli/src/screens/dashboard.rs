use crate::scanner::{Camera, FrameSource, QrDecoder, QrScanner, ScanOutcome};
use crate::{Client, LedgerClient, LedgerResult};

use std::sync::Arc;

use cc_core::{Directory, LedgerBalance, Result as CoreErrorResult, Route, StatusMessage};
use log::{info, warn};
use tokio::sync::watch;

const FETCH_FAILURE: &str = "Error fetching customers";
const DEDUCT_FALLBACK: &str = "Error deducting cut";
const ADD_FALLBACK: &str = "Error adding cuts";

/// Admin dashboard (`/admin/dashboard`): the customer directory plus ledger actions.
///
/// Any unauthorized response leaves a redirect to the login screen in [`Self::redirect`].
pub struct AdminDashboard {
    client: Arc<Client>,
    ledger: Arc<LedgerClient<Arc<Client>>>,
    directory: Directory,
    status: Option<StatusMessage>,
    redirect: Option<Route>,
    loaded: bool,
}

impl AdminDashboard {
    pub fn new(client: Arc<Client>) -> Self {
        let ledger = Arc::new(LedgerClient::new(Arc::clone(&client)));
        Self::with_ledger(client, ledger)
    }

    /// Share one ledger (and its in-flight set) between several front ends.
    pub fn with_ledger(client: Arc<Client>, ledger: Arc<LedgerClient<Arc<Client>>>) -> Self {
        Self {
            client,
            ledger,
            directory: Directory::default(),
            status: None,
            redirect: None,
            loaded: false,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> CoreErrorResult<Self> {
        self.directory.set_page_size(page_size)?;
        Ok(self)
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn directory_mut(&mut self) -> &mut Directory {
        &mut self.directory
    }

    pub fn ledger(&self) -> &Arc<LedgerClient<Arc<Client>>> {
        &self.ledger
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn redirect(&self) -> Option<&Route> {
        self.redirect.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Load the directory. Returns the screen actually shown.
    ///
    /// Without a session no request is made.
    pub async fn mount(&mut self) -> Route {
        if !self.client.is_authenticated() {
            info!("No admin session; redirecting to login");
            return self.send_to_login();
        }

        match self.client.list_customers().await {
            Ok(customers) => {
                info!("Loaded {} customers", customers.len());
                self.directory.replace_all(customers);
                self.loaded = true;
                Route::AdminDashboard
            }
            Err(e) if e.is_unauthorized() => {
                self.status = Some(StatusMessage::failure(FETCH_FAILURE));
                self.send_to_login()
            }
            Err(e) => {
                warn!("Failed to fetch customers: {e}");
                self.status = Some(StatusMessage::failure(FETCH_FAILURE));
                Route::AdminDashboard
            }
        }
    }

    /// Remove one cut and fold the returned balance into the directory.
    pub async fn deduct_cut(&mut self, customer_id: &str) -> Option<LedgerBalance> {
        let name = self.display_name(customer_id);
        let result = self.ledger.deduct_one(customer_id).await;
        self.settle(customer_id, result, format!("Cut deducted for {name}"), DEDUCT_FALLBACK)
    }

    /// Add `count` cuts; anything below one counts as one. Counts beyond the
    /// ledger's range are refused without a request.
    pub async fn add_cuts(&mut self, customer_id: &str, count: i64) -> Option<LedgerBalance> {
        let Ok(count) = u32::try_from(count.max(1)) else {
            warn!("Refusing to add {count} cuts to {customer_id}");
            self.status = Some(StatusMessage::failure(format!(
                "{ADD_FALLBACK}: {count} is too many cuts"
            )));
            return None;
        };
        let name = self.display_name(customer_id);
        let result = self.ledger.credit(customer_id, count).await;
        self.settle(
            customer_id,
            result,
            format!("Added {count} cut(s) to {name}"),
            ADD_FALLBACK,
        )
    }

    /// Scan one customer code and deduct a cut for it.
    pub async fn scan_and_deduct<C, D>(
        &mut self,
        scanner: &mut QrScanner<C, D>,
        stop: watch::Receiver<bool>,
    ) -> ScanOutcome
    where
        C: Camera,
        D: QrDecoder<<C::Stream as FrameSource>::Frame>,
    {
        let outcome = scanner.scan(stop).await;
        match outcome {
            ScanOutcome::Decoded { ref customer_id } => {
                self.deduct_cut(customer_id).await;
            }
            ScanOutcome::Failed(ref e) => {
                self.status = Some(StatusMessage::failure(e.operator_message()));
            }
            ScanOutcome::Stopped => {}
        }
        outcome
    }

    pub fn logout(&mut self) -> Route {
        if let Err(e) = self.client.logout() {
            warn!("Failed to clear session: {e}");
            self.status = Some(StatusMessage::failure(e.message_or("Error logging out")));
        }
        self.send_to_login()
    }

    fn settle(
        &mut self,
        customer_id: &str,
        result: LedgerResult<LedgerBalance>,
        success: String,
        fallback: &str,
    ) -> Option<LedgerBalance> {
        match result {
            Ok(balance) => {
                self.directory
                    .apply_balance(customer_id, balance.cuts_remaining);
                self.status = Some(StatusMessage::success(success));
                Some(balance)
            }
            Err(e) => {
                warn!("Ledger adjustment for {customer_id} failed: {e}");
                self.status = Some(StatusMessage::failure(e.message_or(fallback)));
                if e.is_unauthorized() {
                    self.send_to_login();
                }
                None
            }
        }
    }

    fn display_name(&self, customer_id: &str) -> String {
        self.directory
            .get(customer_id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| customer_id.to_string())
    }

    fn send_to_login(&mut self) -> Route {
        self.loaded = false;
        self.redirect = Some(Route::AdminLogin);
        Route::AdminLogin
    }
}
