//! `examtag` - Tags exam question files with their session type
//!
//! This library reads the numbered `question_{i}.json` files of a question
//! bank, classifies every record as a `Regular` or `Back` exam session
//! from its `year` field, and rewrites the files in place.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod tagger;

pub use classify::ExamType;
pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use tagger::{RunSummary, TagStats, Tagger};
