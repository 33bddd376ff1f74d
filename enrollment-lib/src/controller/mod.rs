//! Submit and reset controllers.

mod reset;
mod submit;

pub use reset::ResetController;
pub use submit::{
    Acknowledge, PendingSubmission, SubmitController, SubmitOutcome, SubmitReceipt, Submitter,
};
