use thiserror::Error;

// Failures from the HTTP adapters, kept close to what the upstream returned.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("upstream error {status}{}", describe(.message))]
    Upstream {
        status: u16,
        message: Option<String>,
    },
    #[error("response decode error: {0}")]
    Decode(String),
}

// Raised by the OAuth provider SDK when login fails for a reason other than cancel.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct OAuthError(pub String);

/// Errors surfaced by a sign-in strategy.
///
/// The display string is what the user sees in the failure alert.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SignInError {
    #[error("{0}")]
    Validation(String),
    #[error("could not reach the carpool service: {0}")]
    Transport(String),
    #[error("carpool service rejected the request ({status}){}", describe(.message))]
    Upstream {
        status: u16,
        message: Option<String>,
    },
    #[error("unexpected response from the carpool service: {0}")]
    Decode(String),
    #[error("facebook login failed: {0}")]
    OAuth(String),
}

impl From<ApiError> for SignInError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Transport(message) => SignInError::Transport(message),
            ApiError::Upstream { status, message } => SignInError::Upstream { status, message },
            ApiError::Decode(message) => SignInError::Decode(message),
        }
    }
}

impl From<OAuthError> for SignInError {
    fn from(err: OAuthError) -> Self {
        SignInError::OAuth(err.0)
    }
}

fn describe(message: &Option<String>) -> String {
    match message {
        Some(message) => format!(": {message}"),
        None => String::new(),
    }
}
