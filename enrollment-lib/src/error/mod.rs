//! Error types

mod field;
mod submit;

pub use field::*;
pub use submit::*;
