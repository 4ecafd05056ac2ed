use std::{env, time::Duration};

use thiserror::Error;
use url::Url;

use crate::domain::SignUpForm;
use crate::use_cases::sign_in::SignInMethod;

// Runtime settings read from the environment (a local .env is loaded first).

pub fn carpool_api_url() -> String {
    env::var("CARPOOL_API_URL").unwrap_or_else(|_| "http://127.0.0.1:3000".to_string())
}

pub fn graph_api_url() -> Result<Url, ConfigError> {
    let raw =
        env::var("GRAPH_API_URL").unwrap_or_else(|_| "https://graph.facebook.com/".to_string());
    parse_base_url(&raw)
}

pub fn http_timeout() -> Duration {
    let millis = env::var("HTTP_TIMEOUT_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(10_000);
    Duration::from_millis(millis)
}

pub fn facebook_access_token() -> Option<String> {
    env::var("FACEBOOK_ACCESS_TOKEN").ok()
}

pub fn sign_in_method() -> Result<SignInMethod, ConfigError> {
    let kind = env::var("SIGN_IN_METHOD").unwrap_or_else(|_| "email".to_string());
    parse_sign_in_method(&kind, |key| env::var(key).ok())
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown sign-in method {0:?}; expected email, facebook or signup")]
    UnknownMethod(String),
    #[error("invalid url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

// Relative joins need a trailing slash on the base path.
pub fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    Url::parse(&normalized).map_err(|err| ConfigError::InvalidUrl {
        url: raw.to_string(),
        reason: err.to_string(),
    })
}

pub fn parse_sign_in_method(
    kind: &str,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<SignInMethod, ConfigError> {
    match kind.trim().to_ascii_lowercase().as_str() {
        "email" => Ok(SignInMethod::Email {
            email: lookup("SIGN_IN_EMAIL"),
            password: lookup("SIGN_IN_PASSWORD"),
        }),
        "facebook" => Ok(SignInMethod::Facebook),
        "signup" | "sign_up" => {
            let field = |key: &str| lookup(key).unwrap_or_default();
            Ok(SignInMethod::SignUp(SignUpForm {
                first_name: field("SIGN_UP_FIRST_NAME"),
                last_name: field("SIGN_UP_LAST_NAME"),
                email: field("SIGN_UP_EMAIL"),
                phone: field("SIGN_UP_PHONE"),
                password: field("SIGN_UP_PASSWORD"),
            }))
        }
        other => Err(ConfigError::UnknownMethod(other.to_string())),
    }
}
