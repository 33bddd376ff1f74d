use async_trait::async_trait;
use enrollment_lib::controller::{SubmitReceipt, Submitter};
use enrollment_lib::error::SubmitError;
use enrollment_lib::model::FormRecord;

/// Accepts every record and writes it to the log as JSON.
pub struct ConsoleSubmitter;

#[async_trait]
impl Submitter for ConsoleSubmitter {
    async fn submit(&self, record: FormRecord) -> Result<SubmitReceipt, SubmitError> {
        let json =
            serde_json::to_string(&record).map_err(|e| SubmitError::Unavailable(e.to_string()))?;
        let receipt = SubmitReceipt::new();
        log::info!("Registration {}: {}", receipt.id, json);
        Ok(receipt)
    }
}
