// Token pair extracted from the session envelope.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionGrant {
    pub token: String,
    pub account_setup_complete: bool,
}

// Where the authenticated identity came from. Contact info is resolved per source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IdentitySource {
    Carpool,
    Facebook { access_token: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedSession {
    pub grant: SessionGrant,
    pub source: IdentitySource,
}

/// Successful completion of a sign-in attempt.
///
/// Failures travel on the `Err` side of the result, so a completed attempt
/// either carries a token or was cancelled by the user with nothing to report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    SignedIn(AuthenticatedSession),
    Cancelled,
}

impl SessionOutcome {
    pub fn token(&self) -> Option<&str> {
        match self {
            SessionOutcome::SignedIn(session) => Some(session.grant.token.as_str()),
            SessionOutcome::Cancelled => None,
        }
    }

    pub fn account_setup_complete(&self) -> bool {
        match self {
            SessionOutcome::SignedIn(session) => session.grant.account_setup_complete,
            SessionOutcome::Cancelled => false,
        }
    }
}
