//! Sign-in strategies and the resolver that picks one for the chosen method.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::{
    AuthenticatedSession, GraphApi, IdentityCredential, IdentitySource, OAuthLogin,
    OAuthLoginResult, SessionApi, SessionGrant, SessionOutcome, SignInError, SignUpForm,
};
use crate::use_cases::contact_info::{ContactInfoSource, GraphContactInfo, ProfileContactInfo};

// Read permissions requested from the OAuth provider.
pub const FACEBOOK_PERMISSIONS: &[&str] = &["public_profile", "email"];

/// One way of obtaining a carpool session.
///
/// `sign_in` resolves exactly once: a session, a silent cancel, or one error.
/// Nothing is retried.
#[async_trait]
pub trait SignInStrategy: Send + Sync {
    fn session_api(&self) -> &dyn SessionApi;

    async fn sign_in(&self) -> Result<SessionOutcome, SignInError>;

    // Contact-info provider paired with this strategy for an authenticated session.
    fn contact_info_strategy(&self, session: &AuthenticatedSession) -> ContactInfoSource;

    // Shared token exchange. Registration credentials go to the registration
    // endpoint; everything else goes to the session endpoint.
    async fn exchange_token(
        &self,
        credential: &IdentityCredential,
    ) -> Result<SessionGrant, SignInError> {
        let api = self.session_api();
        let params = credential.params();
        let result = match credential {
            IdentityCredential::SignUp(_) => api.register(params).await,
            _ => api.create_session(params).await,
        };

        result.map_err(|err| {
            warn!(error = %err, "session exchange failed.");
            SignInError::from(err)
        })
    }
}

pub struct EmailSignIn {
    pub api: Arc<dyn SessionApi>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[async_trait]
impl SignInStrategy for EmailSignIn {
    fn session_api(&self) -> &dyn SessionApi {
        self.api.as_ref()
    }

    #[tracing::instrument(name = "email_sign_in", skip_all)]
    async fn sign_in(&self) -> Result<SessionOutcome, SignInError> {
        // Reject missing fields before any request is made.
        let credential =
            IdentityCredential::email_password(self.email.as_deref(), self.password.as_deref())?;

        let grant = self.exchange_token(&credential).await?;
        info!(
            account_setup_complete = grant.account_setup_complete,
            "email sign-in succeeded."
        );

        Ok(SessionOutcome::SignedIn(AuthenticatedSession {
            grant,
            source: IdentitySource::Carpool,
        }))
    }

    fn contact_info_strategy(&self, session: &AuthenticatedSession) -> ContactInfoSource {
        ContactInfoSource::Profile(ProfileContactInfo {
            api: self.api.clone(),
            token: session.grant.token.clone(),
        })
    }
}

pub struct FacebookSignIn {
    pub api: Arc<dyn SessionApi>,
    pub oauth: Arc<dyn OAuthLogin>,
    pub graph: Arc<dyn GraphApi>,
}

#[async_trait]
impl SignInStrategy for FacebookSignIn {
    fn session_api(&self) -> &dyn SessionApi {
        self.api.as_ref()
    }

    #[tracing::instrument(name = "facebook_sign_in", skip_all)]
    async fn sign_in(&self) -> Result<SessionOutcome, SignInError> {
        let access_token = match self.oauth.log_in(FACEBOOK_PERMISSIONS).await {
            Ok(OAuthLoginResult::Token(token)) => token,
            Ok(OAuthLoginResult::Cancelled) => {
                info!("facebook login cancelled by user.");
                return Ok(SessionOutcome::Cancelled);
            }
            Err(err) => {
                warn!(error = %err, "facebook login failed.");
                self.oauth.log_out();
                return Err(err.into());
            }
        };

        let credential = IdentityCredential::OAuthToken(access_token.clone());
        let grant = match self.exchange_token(&credential).await {
            Ok(grant) => grant,
            Err(err) => {
                // Leave no half-open provider session behind.
                self.oauth.log_out();
                return Err(err);
            }
        };
        info!(
            account_setup_complete = grant.account_setup_complete,
            "facebook sign-in succeeded."
        );

        Ok(SessionOutcome::SignedIn(AuthenticatedSession {
            grant,
            source: IdentitySource::Facebook { access_token },
        }))
    }

    fn contact_info_strategy(&self, session: &AuthenticatedSession) -> ContactInfoSource {
        match &session.source {
            IdentitySource::Facebook { access_token } => {
                ContactInfoSource::Graph(GraphContactInfo {
                    graph: self.graph.clone(),
                    access_token: access_token.clone(),
                })
            }
            // A carpool-issued session has no provider token; fall back to the profile endpoint.
            IdentitySource::Carpool => ContactInfoSource::Profile(ProfileContactInfo {
                api: self.api.clone(),
                token: session.grant.token.clone(),
            }),
        }
    }
}

pub struct SignUpStrategy {
    pub api: Arc<dyn SessionApi>,
    pub form: SignUpForm,
}

#[async_trait]
impl SignInStrategy for SignUpStrategy {
    fn session_api(&self) -> &dyn SessionApi {
        self.api.as_ref()
    }

    #[tracing::instrument(name = "sign_up", skip_all)]
    async fn sign_in(&self) -> Result<SessionOutcome, SignInError> {
        self.form.validate()?;

        let credential = IdentityCredential::SignUp(self.form.clone());
        let mut grant = self.exchange_token(&credential).await?;
        // New accounts always go through profile setup.
        grant.account_setup_complete = false;
        info!("account registered.");

        Ok(SessionOutcome::SignedIn(AuthenticatedSession {
            grant,
            source: IdentitySource::Carpool,
        }))
    }

    fn contact_info_strategy(&self, session: &AuthenticatedSession) -> ContactInfoSource {
        ContactInfoSource::Profile(ProfileContactInfo {
            api: self.api.clone(),
            token: session.grant.token.clone(),
        })
    }
}

// The authentication method the user picked on the sign-in screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignInMethod {
    Email {
        email: Option<String>,
        password: Option<String>,
    },
    Facebook,
    SignUp(SignUpForm),
}

// Closed set of strategies, dispatched by match.
pub enum Strategy {
    Email(EmailSignIn),
    Facebook(FacebookSignIn),
    SignUp(SignUpStrategy),
}

impl Strategy {
    fn inner(&self) -> &dyn SignInStrategy {
        match self {
            Strategy::Email(strategy) => strategy,
            Strategy::Facebook(strategy) => strategy,
            Strategy::SignUp(strategy) => strategy,
        }
    }
}

#[async_trait]
impl SignInStrategy for Strategy {
    fn session_api(&self) -> &dyn SessionApi {
        self.inner().session_api()
    }

    async fn sign_in(&self) -> Result<SessionOutcome, SignInError> {
        self.inner().sign_in().await
    }

    fn contact_info_strategy(&self, session: &AuthenticatedSession) -> ContactInfoSource {
        self.inner().contact_info_strategy(session)
    }
}

// Builds strategies from injected ports.
#[derive(Clone)]
pub struct StrategyResolver {
    pub api: Arc<dyn SessionApi>,
    pub oauth: Arc<dyn OAuthLogin>,
    pub graph: Arc<dyn GraphApi>,
}

impl StrategyResolver {
    pub fn resolve(&self, method: SignInMethod) -> Strategy {
        match method {
            SignInMethod::Email { email, password } => Strategy::Email(EmailSignIn {
                api: self.api.clone(),
                email,
                password,
            }),
            SignInMethod::Facebook => Strategy::Facebook(FacebookSignIn {
                api: self.api.clone(),
                oauth: self.oauth.clone(),
                graph: self.graph.clone(),
            }),
            SignInMethod::SignUp(form) => Strategy::SignUp(SignUpStrategy {
                api: self.api.clone(),
                form,
            }),
        }
    }
}
