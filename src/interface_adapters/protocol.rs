use serde::{Deserialize, Serialize};

use crate::domain::{ContactInfo, DriverCommitment, ResponseCode, SessionGrant};

// The carpool API wraps every payload in a `data` envelope.
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

// Session and registration responses share this shape; registration also
// carries the created user, which is ignored here.
#[derive(Debug, Deserialize)]
pub struct SessionData {
    pub token: String,
    pub account_setup_complete: bool,
}

impl From<SessionData> for SessionGrant {
    fn from(data: SessionData) -> Self {
        SessionGrant {
            token: data.token,
            account_setup_complete: data.account_setup_complete,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ProfileData {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
}

impl From<ProfileData> for ContactInfo {
    fn from(data: ProfileData) -> Self {
        let name = [data.first_name.as_deref(), data.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        ContactInfo {
            avatar_url: data.avatar_url,
            email: data.email,
            name: (!name.is_empty()).then_some(name),
            phone: data.phone,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DriverResponseRequest {
    pub commitment: DriverCommitment,
}

#[derive(Debug, Deserialize)]
pub struct DriverResponseData {
    pub status: ResponseCode,
}

// Graph `me` payload; fields the user declined to share are simply missing.
#[derive(Debug, Default, Deserialize)]
pub struct GraphMeResponse {
    pub email: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GraphPictureData {
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}
