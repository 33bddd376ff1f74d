//! Registration form state and validation engine.
//!
//! Owns the seven field values of a registration form, validates them with a
//! declarative rule table and drives the submit/reset lifecycle. Rendering and
//! the actual transport of a submitted record are left to collaborators.

pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod model;
pub mod state;
pub mod store;
pub mod validation;

pub use config::FormConfig;
pub use form::Form;

pub mod prelude {
    pub use crate::config::FormConfig;
    pub use crate::controller::{
        Acknowledge, ResetController, SubmitController, SubmitOutcome, SubmitReceipt, Submitter,
    };
    pub use crate::error::{FieldError, SubmitError};
    pub use crate::form::Form;
    pub use crate::model::{Course, Field, FormRecord, Gender, InputKind};
    pub use crate::state::{Action, FormState, Notice};
    pub use crate::store::FormStore;
    pub use crate::validation::{ErrorMap, ValidationEngine};
}
