mod contact_info;
mod credentials;
pub mod driver_status;
mod errors;
mod ports;
mod session;

// Re-export the domain boundary types and ports.
pub use contact_info::ContactInfo;
pub use credentials::{IdentityCredential, SignUpForm};
pub use driver_status::{ConfirmationOutcome, DriverCommitment, ResponseCode};
pub use errors::{ApiError, OAuthError, SignInError};
pub use ports::{CarpoolApi, GraphApi, GraphProfile, OAuthLogin, OAuthLoginResult, SessionApi};
pub use session::{AuthenticatedSession, IdentitySource, SessionGrant, SessionOutcome};
