use crate::domain::driver_status::{self, ConfirmationOutcome, DriverCommitment};
use crate::domain::{ApiError, CarpoolApi};

// Driver response use case with injected dependencies.
pub struct RespondToEventUseCase<A> {
    pub api: A,
    pub token: String,
}

impl<A> RespondToEventUseCase<A>
where
    A: CarpoolApi,
{
    #[tracing::instrument(name = "respond_to_event", skip(self))]
    pub async fn execute(
        &self,
        event_id: u64,
        commitment: DriverCommitment,
    ) -> Result<ConfirmationOutcome, ApiError> {
        let code = self
            .api
            .submit_response(&self.token, event_id, commitment)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "failed to submit driver response.");
                err
            })?;

        // A rejected commitment is still a completed exchange; the outcome says so.
        let outcome = driver_status::map(commitment, code);
        tracing::info!(?code, ?outcome, "driver response recorded.");
        Ok(outcome)
    }
}
