//! Form data model

mod course;
mod field;
mod gender;
mod record;

pub use course::Course;
pub use field::{Field, InputKind};
pub use gender::Gender;
pub use record::FormRecord;
