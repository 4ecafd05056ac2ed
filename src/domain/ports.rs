use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::contact_info::ContactInfo;
use crate::domain::driver_status::{DriverCommitment, ResponseCode};
use crate::domain::errors::{ApiError, OAuthError};
use crate::domain::session::SessionGrant;

// Strategies depend on these traits, not on the concrete reqwest clients.
// Dependencies point inwards to the domain layer.

// Port for the carpool session and profile endpoints.
#[async_trait]
pub trait SessionApi: Send + Sync {
    async fn create_session(
        &self,
        params: HashMap<String, String>,
    ) -> Result<SessionGrant, ApiError>;

    async fn register(&self, params: HashMap<String, String>) -> Result<SessionGrant, ApiError>;

    async fn fetch_profile(&self, token: &str) -> Result<ContactInfo, ApiError>;
}

// Port for submitting a driver's commitment to a carpool event.
#[async_trait]
pub trait CarpoolApi: Send + Sync {
    async fn submit_response(
        &self,
        token: &str,
        event_id: u64,
        commitment: DriverCommitment,
    ) -> Result<ResponseCode, ApiError>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OAuthLoginResult {
    Token(String),
    Cancelled,
}

// Port for the OAuth provider SDK login prompt.
#[async_trait]
pub trait OAuthLogin: Send + Sync {
    async fn log_in(&self, permissions: &[&str]) -> Result<OAuthLoginResult, OAuthError>;

    // Tears down any partial provider session.
    fn log_out(&self);
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GraphProfile {
    pub email: Option<String>,
    pub name: Option<String>,
}

// Port for the OAuth provider's graph API.
#[async_trait]
pub trait GraphApi: Send + Sync {
    async fn me(&self, access_token: &str) -> Result<GraphProfile, ApiError>;

    async fn profile_picture_url(&self, access_token: &str) -> Result<Option<String>, ApiError>;
}
