//! Form validation for the registration record.
//!
//! Validation is a pure function from a [`FormRecord`](crate::model::FormRecord)
//! to an [`ErrorMap`]. Rules are declared per field with a fluent builder and
//! every field is evaluated on every call, so one pass reports every problem.
//!
//! # Example
//!
//! ```
//! use enrollment_lib::model::{Field, FormRecord};
//! use enrollment_lib::validation::ValidationEngine;
//!
//! let engine = ValidationEngine::builder()
//!     .field(Field::Username)
//!         .required("Name is required")
//!     .field(Field::Phone)
//!         .required("Phone number is required")
//!         .pattern(r"^[0-9]{10}$", "Phone number must be 10 digits")
//!     .build();
//!
//! let errors = engine.validate(&FormRecord::initialize());
//! assert_eq!(errors.len(), 2);
//! ```

mod builder;
mod engine;
mod error_map;
mod registration;

pub use builder::{EngineBuilder, FieldBuilder};
pub use engine::ValidationEngine;
pub use error_map::ErrorMap;
