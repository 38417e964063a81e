use std::sync::Arc;

use crate::error::Result;
use crate::services::TokenStore;

pub const LANDING_PATH: &str = "/";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Decides where a visitor belongs based on token presence alone.
#[derive(Clone)]
pub struct AuthGate {
    tokens: Arc<dyn TokenStore>,
}

impl AuthGate {
    pub fn new(tokens: Arc<dyn TokenStore>) -> Self {
        Self { tokens }
    }

    pub fn is_logged_in(&self) -> bool {
        self.tokens.is_authenticated()
    }

    /// Where to send a visitor currently at `path`, if anywhere.
    pub fn redirect_for(&self, path: &str) -> Option<&'static str> {
        let authenticated = self.is_logged_in();

        if !authenticated && path != LANDING_PATH && !path.contains("/_next") {
            return Some(LANDING_PATH);
        }
        if authenticated && path == LANDING_PATH {
            return Some(DASHBOARD_PATH);
        }
        None
    }

    /// Forget the token and return to the landing page.
    pub fn logout(&self) -> Result<&'static str> {
        self.tokens.clear()?;
        tracing::info!("Logged out");
        Ok(LANDING_PATH)
    }
}
