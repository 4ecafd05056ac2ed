use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::{read_json, transport};
use crate::domain::{
    ApiError, CarpoolApi, ContactInfo, DriverCommitment, ResponseCode, SessionApi, SessionGrant,
};
use crate::interface_adapters::protocol::{
    DataEnvelope, DriverResponseData, DriverResponseRequest, ProfileData, SessionData,
};

const SESSIONS_PATH: &str = "/api/v1/sessions";
const USERS_PATH: &str = "/api/v1/users";
const PROFILE_PATH: &str = "/api/v1/users/me";

// Thin wrapper around reqwest for carpool API calls.
#[derive(Clone)]
pub struct CarpoolClient {
    http: Client,
    pub base_url: String,
}

impl CarpoolClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn post_session(
        &self,
        path: &str,
        params: &HashMap<String, String>,
    ) -> Result<SessionGrant, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let res = self
            .http
            .post(url)
            .json(params)
            .send()
            .await
            .map_err(transport)?;

        let envelope: DataEnvelope<SessionData> = read_json(res).await?;
        Ok(envelope.data.into())
    }
}

#[async_trait]
impl SessionApi for CarpoolClient {
    #[tracing::instrument(name = "create_session", skip_all)]
    async fn create_session(
        &self,
        params: HashMap<String, String>,
    ) -> Result<SessionGrant, ApiError> {
        self.post_session(SESSIONS_PATH, &params).await
    }

    #[tracing::instrument(name = "register", skip_all)]
    async fn register(&self, params: HashMap<String, String>) -> Result<SessionGrant, ApiError> {
        self.post_session(USERS_PATH, &params).await
    }

    #[tracing::instrument(name = "fetch_profile", skip_all)]
    async fn fetch_profile(&self, token: &str) -> Result<ContactInfo, ApiError> {
        let url = format!("{}{}", self.base_url, PROFILE_PATH);
        let res = self
            .http
            .get(url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(transport)?;

        let envelope: DataEnvelope<ProfileData> = read_json(res).await?;
        Ok(envelope.data.into())
    }
}

#[async_trait]
impl CarpoolApi for CarpoolClient {
    #[tracing::instrument(name = "submit_response", skip(self, token))]
    async fn submit_response(
        &self,
        token: &str,
        event_id: u64,
        commitment: DriverCommitment,
    ) -> Result<ResponseCode, ApiError> {
        let url = format!("{}/api/v1/events/{}/responses", self.base_url, event_id);
        let res = self
            .http
            .post(url)
            .bearer_auth(token)
            .json(&DriverResponseRequest { commitment })
            .send()
            .await
            .map_err(transport)?;

        let envelope: DataEnvelope<DriverResponseData> = read_json(res).await?;
        Ok(envelope.data.status)
    }
}
