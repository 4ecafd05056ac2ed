use crate::domain::{SessionOutcome, SignInError};

const SIGN_IN_FAILED_TITLE: &str = "Sign In Failed";

// What the sign-in screen does once a strategy resolves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignInPresentation {
    // User backed out of the provider prompt; nothing to show.
    Silent,
    Alert { title: String, message: String },
    ProfileSetup { token: String },
    Home { token: String },
}

pub fn present(result: &Result<SessionOutcome, SignInError>) -> SignInPresentation {
    match result {
        Ok(SessionOutcome::Cancelled) => SignInPresentation::Silent,
        Ok(SessionOutcome::SignedIn(session)) => {
            let token = session.grant.token.clone();
            if session.grant.account_setup_complete {
                SignInPresentation::Home { token }
            } else {
                SignInPresentation::ProfileSetup { token }
            }
        }
        Err(err) => SignInPresentation::Alert {
            title: SIGN_IN_FAILED_TITLE.to_string(),
            message: err.to_string(),
        },
    }
}
