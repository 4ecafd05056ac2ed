use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::{ContactInfo, GraphApi, SessionApi, SignInError};

#[async_trait]
pub trait ContactInfoStrategy: Send + Sync {
    async fn get_contact_info(&self) -> Result<ContactInfo, SignInError>;
}

// Contact info from the carpool profile endpoint, authorized by the session token.
pub struct ProfileContactInfo {
    pub api: Arc<dyn SessionApi>,
    pub token: String,
}

#[async_trait]
impl ContactInfoStrategy for ProfileContactInfo {
    #[tracing::instrument(name = "profile_contact_info", skip_all)]
    async fn get_contact_info(&self) -> Result<ContactInfo, SignInError> {
        let info = self.api.fetch_profile(&self.token).await.map_err(|err| {
            warn!(error = %err, "failed to fetch profile.");
            SignInError::from(err)
        })?;
        Ok(info)
    }
}

/// Contact info from the OAuth provider's graph API.
///
/// The profile and picture requests run concurrently and are joined before
/// the result is built. Either half may fail; its fields are then left empty
/// and the call still succeeds.
pub struct GraphContactInfo {
    pub graph: Arc<dyn GraphApi>,
    pub access_token: String,
}

#[async_trait]
impl ContactInfoStrategy for GraphContactInfo {
    #[tracing::instrument(name = "graph_contact_info", skip_all)]
    async fn get_contact_info(&self) -> Result<ContactInfo, SignInError> {
        let (profile, picture) = tokio::join!(
            self.graph.me(&self.access_token),
            self.graph.profile_picture_url(&self.access_token),
        );

        let mut info = ContactInfo::default();
        match profile {
            Ok(profile) => {
                info.email = profile.email;
                info.name = profile.name;
            }
            Err(err) => warn!(error = %err, "graph profile request failed."),
        }
        match picture {
            Ok(url) => info.avatar_url = url,
            Err(err) => warn!(error = %err, "graph picture request failed."),
        }

        debug!(
            has_email = info.email.is_some(),
            has_avatar = info.avatar_url.is_some(),
            "graph contact info joined."
        );
        Ok(info)
    }
}

pub enum ContactInfoSource {
    Profile(ProfileContactInfo),
    Graph(GraphContactInfo),
}

#[async_trait]
impl ContactInfoStrategy for ContactInfoSource {
    async fn get_contact_info(&self) -> Result<ContactInfo, SignInError> {
        match self {
            ContactInfoSource::Profile(source) => source.get_contact_info().await,
            ContactInfoSource::Graph(source) => source.get_contact_info().await,
        }
    }
}
