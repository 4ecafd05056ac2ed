use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::{
    ApiError, CarpoolApi, ContactInfo, DriverCommitment, GraphApi, GraphProfile, OAuthError,
    OAuthLogin, OAuthLoginResult, ResponseCode, SessionApi, SessionGrant,
};

pub(crate) type Params = HashMap<String, String>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum SessionCall {
    CreateSession(Params),
    Register(Params),
    FetchProfile(String),
}

#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub create_session: bool,
    pub register: bool,
    pub fetch_profile: bool,
}

// Session API fake that records every call so tests can assert on traffic.
#[derive(Clone)]
pub(crate) struct RecordingSessionApi {
    calls: Arc<Mutex<Vec<SessionCall>>>,
    failures: FailureFlags,
    account_setup_complete: bool,
    profile: ContactInfo,
}

impl RecordingSessionApi {
    pub(crate) fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            failures: FailureFlags::default(),
            account_setup_complete: true,
            profile: ContactInfo::default(),
        }
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn with_profile(mut self, profile: ContactInfo) -> Self {
        self.profile = profile;
        self
    }

    pub(crate) fn calls(&self) -> Vec<SessionCall> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }

    fn record(&self, call: SessionCall) {
        self.calls.lock().expect("calls mutex poisoned").push(call);
    }

    fn grant(&self) -> SessionGrant {
        SessionGrant {
            token: "session-token".to_string(),
            account_setup_complete: self.account_setup_complete,
        }
    }
}

pub(crate) fn upstream_unauthorized() -> ApiError {
    ApiError::Upstream {
        status: 401,
        message: Some("invalid credentials".to_string()),
    }
}

#[async_trait]
impl SessionApi for RecordingSessionApi {
    async fn create_session(&self, params: Params) -> Result<SessionGrant, ApiError> {
        self.record(SessionCall::CreateSession(params));
        if self.failures.create_session {
            return Err(upstream_unauthorized());
        }
        Ok(self.grant())
    }

    async fn register(&self, params: Params) -> Result<SessionGrant, ApiError> {
        self.record(SessionCall::Register(params));
        if self.failures.register {
            return Err(ApiError::Transport("connection refused".to_string()));
        }
        Ok(self.grant())
    }

    async fn fetch_profile(&self, token: &str) -> Result<ContactInfo, ApiError> {
        self.record(SessionCall::FetchProfile(token.to_string()));
        if self.failures.fetch_profile {
            return Err(ApiError::Decode("missing data".to_string()));
        }
        Ok(self.profile.clone())
    }
}

// Scripted OAuth SDK stand-in.
pub(crate) struct ScriptedOAuthLogin {
    result: Result<OAuthLoginResult, OAuthError>,
    pub(crate) logged_out: AtomicBool,
    pub(crate) prompts: AtomicUsize,
}

impl ScriptedOAuthLogin {
    pub(crate) fn new(result: Result<OAuthLoginResult, OAuthError>) -> Self {
        Self {
            result,
            logged_out: AtomicBool::new(false),
            prompts: AtomicUsize::new(0),
        }
    }

    pub(crate) fn was_logged_out(&self) -> bool {
        self.logged_out.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OAuthLogin for ScriptedOAuthLogin {
    async fn log_in(&self, _permissions: &[&str]) -> Result<OAuthLoginResult, OAuthError> {
        self.prompts.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }

    fn log_out(&self) {
        self.logged_out.store(true, Ordering::SeqCst);
    }
}

// Graph API fake with independently failing halves.
pub(crate) struct StubGraphApi {
    pub(crate) profile: Result<GraphProfile, ApiError>,
    pub(crate) picture: Result<Option<String>, ApiError>,
}

#[async_trait]
impl GraphApi for StubGraphApi {
    async fn me(&self, _access_token: &str) -> Result<GraphProfile, ApiError> {
        self.profile.clone()
    }

    async fn profile_picture_url(&self, _access_token: &str) -> Result<Option<String>, ApiError> {
        self.picture.clone()
    }
}

// Carpool API fake that answers every submission with a fixed result.
pub(crate) struct FixedCarpoolApi {
    pub(crate) result: Result<ResponseCode, ApiError>,
    pub(crate) submitted: Mutex<Vec<(u64, DriverCommitment)>>,
}

impl FixedCarpoolApi {
    pub(crate) fn new(result: Result<ResponseCode, ApiError>) -> Self {
        Self {
            result,
            submitted: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CarpoolApi for FixedCarpoolApi {
    async fn submit_response(
        &self,
        _token: &str,
        event_id: u64,
        commitment: DriverCommitment,
    ) -> Result<ResponseCode, ApiError> {
        self.submitted
            .lock()
            .expect("submitted mutex poisoned")
            .push((event_id, commitment));
        self.result.clone()
    }
}
