use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use super::{read_json, transport};
use crate::domain::{ApiError, GraphApi, GraphProfile};
use crate::interface_adapters::protocol::{DataEnvelope, GraphMeResponse, GraphPictureData};

// Thin reqwest client for the OAuth provider's graph API.
#[derive(Clone)]
pub struct GraphClient {
    http: Client,
    base_url: Url,
}

impl GraphClient {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url })
    }

    // Compose `<base>/<path>?<query>&access_token=<token>`.
    fn endpoint(
        &self,
        path: &str,
        query: &[(&str, &str)],
        access_token: &str,
    ) -> Result<Url, ApiError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|err| ApiError::Transport(format!("invalid graph url: {err}")))?;
        url.query_pairs_mut()
            .extend_pairs(query)
            .append_pair("access_token", access_token);
        Ok(url)
    }
}

#[async_trait]
impl GraphApi for GraphClient {
    #[tracing::instrument(name = "graph_me", skip_all)]
    async fn me(&self, access_token: &str) -> Result<GraphProfile, ApiError> {
        let url = self.endpoint("me", &[("fields", "email,name")], access_token)?;
        let res = self.http.get(url).send().await.map_err(transport)?;

        let body: GraphMeResponse = read_json(res).await?;
        Ok(GraphProfile {
            email: body.email,
            name: body.name,
        })
    }

    #[tracing::instrument(name = "graph_picture", skip_all)]
    async fn profile_picture_url(&self, access_token: &str) -> Result<Option<String>, ApiError> {
        let url = self.endpoint(
            "me/picture",
            &[("type", "large"), ("redirect", "false")],
            access_token,
        )?;
        let res = self.http.get(url).send().await.map_err(transport)?;

        let envelope: DataEnvelope<GraphPictureData> = read_json(res).await?;
        Ok(envelope.data.url)
    }
}
