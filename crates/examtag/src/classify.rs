//! Session classification for question records.
//!
//! Exam sessions in the source question bank are identified by the Bikram
//! Sambat month named inside each record's `year` string. Papers sat in
//! Chaitra or Bhadra belong to a regular session; anything else is a back
//! (supplementary) session.

use serde::{Deserialize, Serialize};

/// Month names that mark a regular exam session.
///
/// Matching is case-sensitive substring containment against the raw `year`
/// value, with no trimming or normalization.
pub const REGULAR_SESSION_MONTHS: [&str; 2] = ["Chaitra", "Bhadra"];

/// The session type derived from a record's `year` field.
///
/// Serializes to the exact strings stored in the question files
/// (`"Regular"` / `"Back"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExamType {
    /// A regular exam session (Chaitra or Bhadra).
    Regular,
    /// A back (supplementary) exam session.
    Back,
}

impl ExamType {
    /// Classify a `year` string.
    ///
    /// Returns [`ExamType::Regular`] if the string contains any of
    /// [`REGULAR_SESSION_MONTHS`] as a substring, [`ExamType::Back`]
    /// otherwise. Each record is classified independently.
    #[must_use]
    pub fn from_year(year: &str) -> Self {
        if REGULAR_SESSION_MONTHS.iter().any(|m| year.contains(m)) {
            Self::Regular
        } else {
            Self::Back
        }
    }

    /// The string stored in the `Type` field for this session type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::Back => "Back",
        }
    }
}

impl std::fmt::Display for ExamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
