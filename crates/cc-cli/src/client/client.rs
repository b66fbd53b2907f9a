use crate::session::SessionStore;
use crate::{ClientError, ClientResult};

use std::sync::Arc;
use std::time::Duration;

use cc_core::{Credentials, Customer, LedgerAdjustment, LedgerBalance, NewCustomer};
use log::{debug, info, warn};
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Error body the backend sends alongside non-2xx responses
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
}

/// HTTP client for the Cutcard REST backend
pub struct Client {
    pub base_url: String,
    session: Arc<dyn SessionStore>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Backend URL (e.g., "https://api.cutcard.example")
    /// * `session` - Where the admin bearer token lives
    pub fn new(base_url: &str, session: Arc<dyn SessionStore>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
            client: ReqwestClient::new(),
        }
    }

    /// Create a client whose requests give up after `timeout`
    pub fn with_timeout(
        base_url: &str,
        session: Arc<dyn SessionStore>,
        timeout: Duration,
    ) -> ClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
            client,
        })
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Build a request carrying the admin bearer token.
    ///
    /// Without a token no request is made and the caller is sent to login.
    #[track_caller]
    fn authorized(&self, method: Method, path: &str) -> ClientResult<reqwest::RequestBuilder> {
        match self.session.token() {
            Some(token) => Ok(self.request(method, path).bearer_auth(token)),
            None => Err(ClientError::unauthorized(None)),
        }
    }

    /// Execute request and handle errors.
    ///
    /// A 401 on an authenticated call clears the session before returning.
    async fn execute<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
        authenticated: bool,
    ) -> ClientResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ApiErrorBody>(&bytes)
                .ok()
                .and_then(|body| body.message);

            if status == StatusCode::UNAUTHORIZED && authenticated {
                warn!("Backend rejected the session token; logging out");
                if let Err(e) = self.session.clear() {
                    warn!("Failed to clear session after 401: {e}");
                }
                return Err(ClientError::unauthorized(message));
            }

            debug!("Backend returned {status}: {message:?}");
            return Err(ClientError::api_error(status.as_u16(), message));
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    // =========================================================================
    // Public Operations
    // =========================================================================

    /// Register a new customer
    pub async fn register_customer(&self, customer: &NewCustomer) -> ClientResult<Customer> {
        customer.validate()?;
        let req = self.request(Method::POST, "/api/customers").json(customer);
        self.execute(req, false).await
    }

    /// Get a customer by ID
    pub async fn get_customer(&self, id: &str) -> ClientResult<Customer> {
        let req = self.request(Method::GET, &format!("/api/customers/{}", id));
        self.execute(req, false).await
    }

    // =========================================================================
    // Session Operations
    // =========================================================================

    /// Authenticate as admin and persist the returned token.
    ///
    /// On any failure no token is stored.
    pub async fn login(&self, credentials: &Credentials) -> ClientResult<()> {
        credentials.validate()?;
        let req = self
            .request(Method::POST, "/api/admin/login")
            .json(credentials);

        let response: LoginResponse = match self.execute(req, false).await {
            Ok(response) => response,
            Err(ClientError::Api {
                status: 400 | 401 | 403,
                message,
                ..
            }) => return Err(ClientError::invalid_credentials(message)),
            Err(e) => return Err(e),
        };

        self.session.store(&response.token)?;
        info!("Admin '{}' logged in", credentials.username);
        Ok(())
    }

    /// Drop the local session. The backend is not contacted.
    pub fn logout(&self) -> ClientResult<()> {
        self.session.clear()?;
        info!("Admin logged out");
        Ok(())
    }

    // =========================================================================
    // Admin Operations
    // =========================================================================

    /// List every registered customer
    pub async fn list_customers(&self) -> ClientResult<Vec<Customer>> {
        let req = self.authorized(Method::GET, "/api/admin/customers")?;
        self.execute(req, true).await
    }

    /// Apply a signed adjustment through the ledger endpoint.
    ///
    /// Exactly one request per call; nothing is retried.
    pub async fn adjust_credits(
        &self,
        customer_id: &str,
        adjustment: LedgerAdjustment,
    ) -> ClientResult<LedgerBalance> {
        let req = self
            .authorized(
                Method::PUT,
                &format!("/api/admin/customers/deduct/{}", customer_id),
            )?
            .json(&adjustment.to_request());

        let balance: LedgerBalance = self.execute(req, true).await?;
        info!(
            "Ledger {customer_id}: delta {} -> {} cuts remaining",
            adjustment.delta(),
            balance.cuts_remaining
        );
        Ok(balance)
    }
}
