//! The fixed course catalog.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A course a student can register for.
///
/// Each entry has a submitted value and a display label. They differ only for
/// [`Course::ComputerApplication`], whose value keeps the lowercase "computer"
/// the catalog was published with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Course {
    #[serde(rename = "B.sc Computer Science")]
    ComputerScience,
    #[serde(
        rename = "Bachelor of computer Application",
        alias = "Bachelor of Computer Application"
    )]
    ComputerApplication,
    #[serde(rename = "B.com")]
    Commerce,
    #[serde(rename = "B.sc Electronics")]
    Electronics,
}

impl Course {
    /// Catalog in display order.
    pub const ALL: [Course; 4] = [
        Course::ComputerScience,
        Course::ComputerApplication,
        Course::Commerce,
        Course::Electronics,
    ];

    /// Value submitted with the record.
    pub fn value(self) -> &'static str {
        match self {
            Course::ComputerScience => "B.sc Computer Science",
            Course::ComputerApplication => "Bachelor of computer Application",
            Course::Commerce => "B.com",
            Course::Electronics => "B.sc Electronics",
        }
    }

    /// Text shown in the drop-down.
    pub fn label(self) -> &'static str {
        match self {
            Course::ComputerApplication => "Bachelor of Computer Application",
            other => other.value(),
        }
    }

    /// Look a course up by its value or its label.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.value() == value || c.label() == value)
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
