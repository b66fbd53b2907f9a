use crate::Client;

use cc_core::{Credentials, Route, StatusMessage};

const SUCCESS_MESSAGE: &str = "Login successful!";
const FAILURE_FALLBACK: &str = "Error logging in";

/// Admin login form (`/admin/login`).
#[derive(Default, Clone)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    status: Option<StatusMessage>,
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("status", &self.status)
            .finish()
    }
}

impl LoginForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            status: None,
        }
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Log in and return where to go next. `None` means stay on the form.
    pub async fn submit(&mut self, client: &Client) -> Option<Route> {
        let credentials = Credentials::new(self.username.trim(), self.password.as_str());
        let result = client.login(&credentials).await;
        self.password.clear();

        match result {
            Ok(()) => {
                self.status = Some(StatusMessage::success(SUCCESS_MESSAGE));
                Some(Route::AdminDashboard)
            }
            Err(e) => {
                self.status = Some(StatusMessage::failure(e.message_or(FAILURE_FALLBACK)));
                None
            }
        }
    }
}
