//! Screen routing and the admin redirect guard.

use crate::{CoreError, Result as CoreErrorResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;

const CUSTOMER_PREFIX: &str = "/customer/";

/// The four screens of the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/` - customer self-registration
    Register,
    /// `/admin/login`
    AdminLogin,
    /// `/admin/dashboard` - requires a session
    AdminDashboard,
    /// `/customer/:id` - QR display
    Customer(String),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Self::Register => "/".to_string(),
            Self::AdminLogin => "/admin/login".to_string(),
            Self::AdminDashboard => "/admin/dashboard".to_string(),
            Self::Customer(id) => format!("{CUSTOMER_PREFIX}{id}"),
        }
    }

    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::AdminDashboard)
    }
}

impl FromStr for Route {
    type Err = CoreError;

    #[track_caller]
    fn from_str(path: &str) -> CoreErrorResult<Self> {
        match path.trim_end_matches('/') {
            "" => Ok(Self::Register),
            "/admin/login" => Ok(Self::AdminLogin),
            "/admin/dashboard" => Ok(Self::AdminDashboard),
            other => match other.strip_prefix(CUSTOMER_PREFIX) {
                Some(id) if !id.is_empty() && !id.contains('/') => {
                    Ok(Self::Customer(id.to_string()))
                }
                _ => Err(CoreError::UnknownRoute {
                    path: path.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }),
            },
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Resolve the screen actually shown: guarded screens without a session land on login.
pub fn guard(route: Route, authenticated: bool) -> Route {
    if route.requires_auth() && !authenticated {
        Route::AdminLogin
    } else {
        route
    }
}
