use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{OAuthError, OAuthLogin, OAuthLoginResult};

/// OAuth login backed by a provider token obtained out of band.
///
/// Hosts without an interactive provider prompt hand the token in through
/// configuration. No token reads as the user cancelling the prompt.
pub struct PresetOAuthLogin {
    token: Mutex<Option<String>>,
}

impl PresetOAuthLogin {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: Mutex::new(token.filter(|token| !token.trim().is_empty())),
        }
    }
}

#[async_trait]
impl OAuthLogin for PresetOAuthLogin {
    async fn log_in(&self, permissions: &[&str]) -> Result<OAuthLoginResult, OAuthError> {
        tracing::debug!(?permissions, "oauth login requested.");
        let guard = self
            .token
            .lock()
            .map_err(|_| OAuthError("token store poisoned".to_string()))?;

        Ok(match guard.as_ref() {
            Some(token) => OAuthLoginResult::Token(token.clone()),
            None => OAuthLoginResult::Cancelled,
        })
    }

    fn log_out(&self) {
        if let Ok(mut guard) = self.token.lock() {
            guard.take();
        }
        tracing::debug!("oauth session cleared.");
    }
}
