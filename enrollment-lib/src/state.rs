//! Form state and the reducer that transitions it.
//!
//! Every change to the form goes through [`reduce`], a pure function from the
//! current state and an [`Action`] to the next state. The store applies it
//! under its lock; tests can call it directly.

use crate::controller::SubmitReceipt;
use crate::model::{Field, FormRecord};
use crate::validation::ErrorMap;

/// Where the form is in its submit lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// Accepting input. Errors from the last submit attempt may be visible.
    #[default]
    Editing,
    /// A valid record has been handed to the submission collaborator and its
    /// result is pending.
    Submitting,
}

/// Message surfaced to the user after a submission completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Submitted {
        message: String,
        receipt: SubmitReceipt,
    },
    Failed {
        message: String,
    },
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Submitted { message, .. } | Notice::Failed { message } => message,
        }
    }
}

/// Snapshot of everything a presentation layer renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub record: FormRecord,
    pub errors: ErrorMap,
    pub phase: Phase,
    pub notice: Option<Notice>,
    /// Bumped on every reset. A submission started under an older generation
    /// is no longer relevant when it completes.
    generation: u64,
}

impl FormState {
    /// Fresh state: default record, no errors, nothing pending.
    pub fn initialize() -> Self {
        Self::default()
    }

    /// Default record and empty errors in a single transition.
    pub fn reset(&self) -> Self {
        Self {
            generation: self.generation.wrapping_add(1),
            ..Self::default()
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }
}

/// A state transition requested by an input event or a controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A single field changed. Never validates.
    Change { field: Field, value: String },
    /// A submit attempt failed validation.
    Rejected(ErrorMap),
    /// A valid record was handed off; stale errors are cleared. Ignored if a
    /// reset happened since `generation` was read.
    SubmitStarted { generation: u64 },
    /// The submission collaborator answered.
    SubmitFinished {
        generation: u64,
        notice: Notice,
        clear_record: bool,
    },
    /// The submitting task went away before the collaborator answered.
    SubmitAbandoned { generation: u64 },
    DismissNotice,
    Reset,
}

impl Action {
    /// Short name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Change { .. } => "change",
            Action::Rejected(_) => "rejected",
            Action::SubmitStarted { .. } => "submit_started",
            Action::SubmitFinished { .. } => "submit_finished",
            Action::SubmitAbandoned { .. } => "submit_abandoned",
            Action::DismissNotice => "dismiss_notice",
            Action::Reset => "reset",
        }
    }
}

/// Compute the state that follows `state` after `action`.
pub fn reduce(state: &FormState, action: Action) -> FormState {
    match action {
        Action::Change { field, value } => FormState {
            record: state.record.update(field, value),
            ..state.clone()
        },
        Action::Rejected(errors) => FormState {
            errors,
            notice: None,
            ..state.clone()
        },
        Action::SubmitStarted { generation } => {
            if generation != state.generation {
                return state.clone();
            }
            FormState {
                errors: ErrorMap::new(),
                phase: Phase::Submitting,
                notice: None,
                ..state.clone()
            }
        }
        Action::SubmitFinished {
            generation,
            notice,
            clear_record,
        } => {
            if generation != state.generation {
                return state.clone();
            }
            let record = if clear_record {
                FormRecord::initialize()
            } else {
                state.record.clone()
            };
            FormState {
                record,
                phase: Phase::Editing,
                notice: Some(notice),
                ..state.clone()
            }
        }
        Action::SubmitAbandoned { generation } => {
            if generation != state.generation {
                return state.clone();
            }
            FormState {
                phase: Phase::Editing,
                ..state.clone()
            }
        }
        Action::DismissNotice => FormState {
            notice: None,
            ..state.clone()
        },
        Action::Reset => state.reset(),
    }
}
