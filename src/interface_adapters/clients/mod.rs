// The clients defined here are reqwest clients for the carpool API and the
// OAuth provider. Each one implements a domain port.
pub mod carpool;
pub mod graph;
pub mod oauth;

use serde::de::DeserializeOwned;

use crate::domain::ApiError;
use crate::interface_adapters::protocol::ErrorResponse;

// Decode a JSON body, keeping upstream status/message on non-2xx responses.
async fn read_json<T: DeserializeOwned>(res: reqwest::Response) -> Result<T, ApiError> {
    let status = res.status();

    if !status.is_success() {
        let message = res
            .json::<ErrorResponse>()
            .await
            .ok()
            .map(|payload| payload.message);
        return Err(ApiError::Upstream {
            status: status.as_u16(),
            message,
        });
    }

    res.json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}
