//! Confirmation mapping for a driver's response to a carpool event.
//!
//! A driver commits to one or both legs of a trip ("to" is outbound, "from" is
//! the return). The server answers with a [`ResponseCode`], and the pair picks
//! the [`ConfirmationOutcome`] that selects the illustration and copy shown.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriverCommitment {
    CanDriveTo,
    CanDriveFrom,
    CanDriveToAndFrom,
    CanDriveToNotFrom,
    CanDriveFromNotTo,
    CannotDriveTo,
    CannotDriveFrom,
    CannotDriveToAndFrom,
}

impl DriverCommitment {
    pub const ALL: [DriverCommitment; 8] = [
        DriverCommitment::CanDriveTo,
        DriverCommitment::CanDriveFrom,
        DriverCommitment::CanDriveToAndFrom,
        DriverCommitment::CanDriveToNotFrom,
        DriverCommitment::CanDriveFromNotTo,
        DriverCommitment::CannotDriveTo,
        DriverCommitment::CannotDriveFrom,
        DriverCommitment::CannotDriveToAndFrom,
    ];

    pub fn is_decline(self) -> bool {
        matches!(
            self,
            DriverCommitment::CannotDriveTo
                | DriverCommitment::CannotDriveFrom
                | DriverCommitment::CannotDriveToAndFrom
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseCode {
    Success,
    Partial,
    Failure,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmationOutcome {
    ToSuccess,
    FromSuccess,
    BothSuccess,
    CannotSuccess,
    CanPartialSuccess,
    CanFailed,
}

impl ConfirmationOutcome {
    // Asset name of the illustration shown on the confirmation screen.
    pub fn illustration(self) -> &'static str {
        match self {
            ConfirmationOutcome::ToSuccess => "car_to",
            ConfirmationOutcome::FromSuccess => "car_from",
            ConfirmationOutcome::BothSuccess => "car_to_and_from",
            ConfirmationOutcome::CannotSuccess => "car_declined",
            ConfirmationOutcome::CanPartialSuccess => "car_partial",
            ConfirmationOutcome::CanFailed => "car_failed",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ConfirmationOutcome::ToSuccess
            | ConfirmationOutcome::FromSuccess
            | ConfirmationOutcome::BothSuccess => "You're driving!",
            ConfirmationOutcome::CannotSuccess => "Thanks for letting us know",
            ConfirmationOutcome::CanPartialSuccess => "Almost there",
            ConfirmationOutcome::CanFailed => "Someone beat you to it",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ConfirmationOutcome::ToSuccess => "You're signed up to drive there.",
            ConfirmationOutcome::FromSuccess => "You're signed up to drive back.",
            ConfirmationOutcome::BothSuccess => "You're signed up to drive there and back.",
            ConfirmationOutcome::CannotSuccess => {
                "We'll let the group know you can't drive this time."
            }
            ConfirmationOutcome::CanPartialSuccess => {
                "Another driver already took one leg, so you're only signed up for the other."
            }
            ConfirmationOutcome::CanFailed => {
                "Another driver already signed up for this trip."
            }
        }
    }
}

/// Picks the confirmation shown after the server answers a driver's commitment.
///
/// A failure always reads as [`ConfirmationOutcome::CanFailed`]. A partial
/// acceptance of any offer to drive is [`ConfirmationOutcome::CanPartialSuccess`],
/// while a partial answer to a decline still confirms the decline.
pub fn map(commitment: DriverCommitment, response: ResponseCode) -> ConfirmationOutcome {
    use DriverCommitment::*;

    match (response, commitment) {
        (ResponseCode::Failure, _) => ConfirmationOutcome::CanFailed,
        (_, CannotDriveTo | CannotDriveFrom | CannotDriveToAndFrom) => {
            ConfirmationOutcome::CannotSuccess
        }
        (ResponseCode::Partial, _) => ConfirmationOutcome::CanPartialSuccess,
        (ResponseCode::Success, CanDriveTo | CanDriveToNotFrom) => ConfirmationOutcome::ToSuccess,
        (ResponseCode::Success, CanDriveFrom | CanDriveFromNotTo) => {
            ConfirmationOutcome::FromSuccess
        }
        (ResponseCode::Success, CanDriveToAndFrom) => ConfirmationOutcome::BothSuccess,
    }
}
