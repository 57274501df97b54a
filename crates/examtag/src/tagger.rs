//! The tagger: reads question files, derives each record's session type,
//! and rewrites the files in place.
//!
//! A question file is a top-level JSON array of objects, each carrying at
//! least a string `year` field. Tagging adds (or overwrites) a `Type`
//! field per record and preserves everything else, including object key
//! order and array order. A file is only written after its whole array
//! transformed successfully, so a bad record leaves the file untouched.

use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Serializer, Value};
use tracing::{debug, info, warn};

use crate::classify::ExamType;
use crate::error::{Error, Result};

/// First file index processed by default.
pub const DEFAULT_FIRST_INDEX: u32 = 1;

/// Last file index processed by default.
pub const DEFAULT_LAST_INDEX: u32 = 10;

/// The field read from each record.
const YEAR_FIELD: &str = "year";

/// The field written to each record.
const TYPE_FIELD: &str = "Type";

/// Compute the file name for a question file index.
#[must_use]
pub fn question_file_name(index: u32) -> String {
    format!("question_{index}.json")
}

/// Per-file record counts from a tagging pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TagStats {
    /// Records classified as a regular session.
    pub regular: usize,
    /// Records classified as a back session.
    pub back: usize,
}

impl TagStats {
    /// Total number of records classified.
    #[must_use]
    pub fn total(&self) -> usize {
        self.regular + self.back
    }
}

/// What happened to one question file during a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileStatus {
    /// The file was read, classified, and written back.
    Updated {
        /// Record counts for the file.
        #[serde(flatten)]
        stats: TagStats,
    },
    /// No file existed at the expected path; the index was skipped.
    NotFound,
    /// The file could not be processed and was left in its prior state.
    Failed {
        /// Human-readable description of the failure.
        message: String,
    },
}

/// The outcome for one index of a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileOutcome {
    /// The question file name (e.g. `question_3.json`).
    pub file: String,
    /// What happened to it.
    #[serde(flatten)]
    pub status: FileStatus,
}

/// Summary of a full tagging run, one entry per index attempted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunSummary {
    /// Per-file outcomes, in index order.
    pub files: Vec<FileOutcome>,
}

impl RunSummary {
    /// Number of files updated (or, in a dry run, that would be updated).
    #[must_use]
    pub fn updated_count(&self) -> usize {
        self.files
            .iter()
            .filter(|o| matches!(o.status, FileStatus::Updated { .. }))
            .count()
    }

    /// Number of indices skipped because no file existed.
    #[must_use]
    pub fn not_found_count(&self) -> usize {
        self.files
            .iter()
            .filter(|o| o.status == FileStatus::NotFound)
            .count()
    }

    /// Number of files that failed to process.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.files
            .iter()
            .filter(|o| matches!(o.status, FileStatus::Failed { .. }))
            .count()
    }

    /// Whether any file failed to process.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed_count() > 0
    }
}

/// Tags the question files under a base directory.
#[derive(Debug, Clone)]
pub struct Tagger {
    /// Directory holding the `question_{i}.json` files.
    base_dir: PathBuf,
    /// Indices to attempt, inclusive.
    indices: RangeInclusive<u32>,
    /// Stop at the first file error instead of recording it and moving on.
    fail_fast: bool,
    /// Classify without writing anything back.
    dry_run: bool,
}

impl Tagger {
    /// Create a tagger for the given base directory with the default
    /// index range (1 through 10).
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            indices: DEFAULT_FIRST_INDEX..=DEFAULT_LAST_INDEX,
            fail_fast: false,
            dry_run: false,
        }
    }

    /// Set the inclusive index range to process.
    #[must_use]
    pub fn with_indices(mut self, indices: RangeInclusive<u32>) -> Self {
        self.indices = indices;
        self
    }

    /// Stop the run at the first file that fails.
    #[must_use]
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Classify without writing files back.
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// The base directory this tagger reads from.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Run the tagger over the configured index range.
    ///
    /// Missing files are skipped. A file that fails to process is recorded
    /// in the summary and left in its prior state; with `fail_fast` the
    /// error is returned immediately instead.
    ///
    /// # Errors
    ///
    /// Returns the first file error when `fail_fast` is set. Without it,
    /// file errors land in the summary and `run` itself only fails on
    /// errors that escape the per-file transform.
    pub fn run(&self) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for index in self.indices.clone() {
            let file = question_file_name(index);
            let path = self.base_dir.join(&file);

            if !path.exists() {
                debug!("No file at {}, skipping index {}", path.display(), index);
                summary.files.push(FileOutcome {
                    file,
                    status: FileStatus::NotFound,
                });
                continue;
            }

            match self.tag_file(&path) {
                Ok(stats) => {
                    info!(
                        "Tagged {} ({} regular, {} back)",
                        path.display(),
                        stats.regular,
                        stats.back
                    );
                    summary.files.push(FileOutcome {
                        file,
                        status: FileStatus::Updated { stats },
                    });
                }
                Err(err) if self.fail_fast => return Err(err),
                Err(err) => {
                    warn!("Failed to process {}: {}", path.display(), err);
                    summary.files.push(FileOutcome {
                        file,
                        status: FileStatus::Failed {
                            message: err.to_string(),
                        },
                    });
                }
            }
        }

        Ok(summary)
    }

    /// Tag a single question file in place.
    ///
    /// Reads and parses the file, classifies every record, and (unless
    /// this is a dry run) overwrites the file with the updated array,
    /// pretty-printed with 4-space indentation.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or written, does not
    /// parse as a JSON array of objects, or contains a record without a
    /// string `year` field. No write happens on error.
    pub fn tag_file(&self, path: &Path) -> Result<TagStats> {
        let raw =
            fs::read_to_string(path).map_err(|source| Error::file_read(path, source))?;
        let mut data: Value =
            serde_json::from_str(&raw).map_err(|source| Error::parse(path, source))?;

        let stats = tag_array(&mut data, path)?;

        if self.dry_run {
            debug!("Dry run, not writing {}", path.display());
        } else {
            let rendered = render_pretty(&data)?;
            fs::write(path, rendered).map_err(|source| Error::file_write(path, source))?;
        }

        Ok(stats)
    }
}

/// Tag every record of a parsed question array in place.
///
/// # Errors
///
/// Returns an error if `data` is not an array, or any element is not an
/// object with a string `year` field. Elements before the bad one are
/// still mutated in memory; callers must not persist `data` on error.
pub fn tag_array(data: &mut Value, path: &Path) -> Result<TagStats> {
    let Value::Array(records) = data else {
        return Err(Error::NotAnArray {
            path: path.to_path_buf(),
        });
    };

    let mut stats = TagStats::default();
    for (index, record) in records.iter_mut().enumerate() {
        let Value::Object(map) = record else {
            return Err(Error::NotAnObject {
                path: path.to_path_buf(),
                index,
            });
        };
        match tag_record(map, path, index)? {
            ExamType::Regular => stats.regular += 1,
            ExamType::Back => stats.back += 1,
        }
    }
    Ok(stats)
}

/// Classify one record and set its `Type` field, returning the type.
fn tag_record(record: &mut Map<String, Value>, path: &Path, index: usize) -> Result<ExamType> {
    let year = match record.get(YEAR_FIELD) {
        Some(Value::String(year)) => year,
        Some(_) => return Err(Error::year_not_string(path, index)),
        None => return Err(Error::missing_year(path, index)),
    };

    let exam_type = ExamType::from_year(year);
    record.insert(
        TYPE_FIELD.to_string(),
        Value::String(exam_type.as_str().to_string()),
    );
    Ok(exam_type)
}

/// Serialize a value pretty-printed with 4-space indentation, matching
/// the formatting the question files are maintained in.
fn render_pretty(value: &Value) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}
