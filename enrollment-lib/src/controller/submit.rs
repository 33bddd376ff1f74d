//! Validate-then-submit orchestration.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::FormConfig;
use crate::error::SubmitError;
use crate::model::FormRecord;
use crate::state::{Action, Notice};
use crate::store::FormStore;
use crate::validation::{ErrorMap, ValidationEngine};

/// Acknowledgment returned by a submission collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitReceipt {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
}

impl SubmitReceipt {
    /// A receipt with a fresh id, stamped now.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
        }
    }
}

impl Default for SubmitReceipt {
    fn default() -> Self {
        Self::new()
    }
}

/// The external system that processes a validated record.
///
/// Only ever called with a record that passed validation. The record is an
/// owned copy, so nothing the collaborator does can reach the live form.
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, record: FormRecord) -> Result<SubmitReceipt, SubmitError>;
}

/// Submitter that accepts every record immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct Acknowledge;

#[async_trait]
impl Submitter for Acknowledge {
    async fn submit(&self, record: FormRecord) -> Result<SubmitReceipt, SubmitError> {
        let receipt = SubmitReceipt::new();
        log::info!(
            "Acknowledged registration for {:?} ({})",
            record.username,
            receipt.id
        );
        Ok(receipt)
    }
}

/// Result of a submit trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed. The errors are also stored on the form.
    Invalid(ErrorMap),
    /// A submission is already pending; the trigger was ignored.
    Busy,
    Submitted(SubmitReceipt),
    /// The collaborator reported a failure.
    Failed(SubmitError),
    /// The form was reset while the submission was pending, so its result was
    /// dropped.
    Stale,
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted(_))
    }
}

/// A validated record on its way to the collaborator.
#[derive(Debug, Clone)]
pub struct PendingSubmission {
    record: FormRecord,
    generation: u64,
}

impl PendingSubmission {
    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    /// Reset generation the submission was started under.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Runs validation on submit and hands valid records to a [`Submitter`].
#[derive(Clone)]
pub struct SubmitController {
    engine: Arc<ValidationEngine>,
    submitter: Arc<dyn Submitter>,
    config: FormConfig,
}

impl SubmitController {
    pub fn new(
        engine: Arc<ValidationEngine>,
        submitter: Arc<dyn Submitter>,
        config: FormConfig,
    ) -> Self {
        Self {
            engine,
            submitter,
            config,
        }
    }

    /// Validate and submit the current record.
    pub async fn submit(&self, store: &FormStore) -> SubmitOutcome {
        match self.begin(store) {
            Ok(pending) => self.complete(store, pending).await,
            Err(outcome) => outcome,
        }
    }

    /// Synchronous half of a submit: validate and, if valid, mark the form as
    /// submitting.
    ///
    /// The busy check, validation and the transition happen in one store
    /// update. Returns `Err` with the final outcome when there is nothing to
    /// send.
    pub fn begin(&self, store: &FormStore) -> Result<PendingSubmission, SubmitOutcome> {
        let begun = store.update(|state| {
            if state.is_submitting() {
                return (None, Err(SubmitOutcome::Busy));
            }

            let errors = self.engine.validate(&state.record);
            if !errors.is_empty() {
                return (
                    Some(Action::Rejected(errors.clone())),
                    Err(SubmitOutcome::Invalid(errors)),
                );
            }

            let generation = state.generation();
            let pending = PendingSubmission {
                record: state.record.clone(),
                generation,
            };
            (Some(Action::SubmitStarted { generation }), Ok(pending))
        });

        match &begun {
            Ok(pending) => log::info!(
                "Submitting registration (generation {})",
                pending.generation
            ),
            Err(SubmitOutcome::Invalid(errors)) => log::debug!(
                "Submit rejected: {:?}",
                errors.fields().map(|f| f.name()).collect::<Vec<_>>()
            ),
            Err(_) => log::debug!("Submit ignored: a submission is already pending"),
        }
        begun
    }

    /// Hand a pending record to the collaborator and apply its answer.
    ///
    /// If this future is dropped before the collaborator answers, the form
    /// goes back to editing.
    pub async fn complete(&self, store: &FormStore, pending: PendingSubmission) -> SubmitOutcome {
        let generation = pending.generation;
        let mut in_flight = InFlight {
            store,
            generation,
            armed: true,
        };
        let result = self.submitter.submit(pending.record).await;
        in_flight.armed = false;
        self.finish(store, generation, result)
    }

    /// Apply a collaborator result to the form, unless a reset made it stale.
    pub fn finish(
        &self,
        store: &FormStore,
        generation: u64,
        result: Result<SubmitReceipt, SubmitError>,
    ) -> SubmitOutcome {
        store.update(|state| {
            if state.generation() != generation {
                log::warn!(
                    "Dropping submission result from generation {} (form is at {})",
                    generation,
                    state.generation()
                );
                return (None, SubmitOutcome::Stale);
            }

            match result {
                Ok(receipt) => {
                    log::info!("Registration submitted ({})", receipt.id);
                    let action = Action::SubmitFinished {
                        generation,
                        notice: Notice::Submitted {
                            message: self.config.acknowledgment.to_string(),
                            receipt: receipt.clone(),
                        },
                        clear_record: self.config.clear_on_success,
                    };
                    (Some(action), SubmitOutcome::Submitted(receipt))
                }
                Err(err) => {
                    log::warn!("Registration submission failed: {}", err);
                    let action = Action::SubmitFinished {
                        generation,
                        notice: Notice::Failed {
                            message: err.to_string(),
                        },
                        clear_record: false,
                    };
                    (Some(action), SubmitOutcome::Failed(err))
                }
            }
        })
    }
}

/// Returns the form to editing if a submission is dropped mid-await.
struct InFlight<'a> {
    store: &'a FormStore,
    generation: u64,
    armed: bool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.armed {
            log::warn!(
                "Submission from generation {} abandoned before the collaborator answered",
                self.generation
            );
            self.store.dispatch(Action::SubmitAbandoned {
                generation: self.generation,
            });
        }
    }
}
