use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors surfaced by the corpus data layer.
#[derive(Clone, Error, Debug)]
pub enum CorpusError {
    #[error("The corpus data source is unavailable. Cause: {cause}")]
    DataUnavailable { cause: String },
}

/// Handle to the on-disk corpus and the testament index used to
/// classify its records.
///
/// The handle holds no open file; every query re-reads the file through
/// [`load`]. Cloning is cheap, so handlers can move a copy into a
/// blocking closure.
#[derive(Clone, Debug)]
pub struct CorpusSource {
    path: PathBuf,
    testaments: TestamentIndex,
}

impl CorpusSource {
    /// Creates a source for the given file with the canonical
    /// sixty-six book testament index.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_testaments(path, TestamentIndex::canonical())
    }

    /// Creates a source with a caller-supplied testament index.
    pub fn with_testaments(path: impl Into<PathBuf>, testaments: TestamentIndex) -> Self {
        Self {
            path: path.into(),
            testaments,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn testaments(&self) -> &TestamentIndex {
        &self.testaments
    }
}

pub mod models;

mod concordance;
mod loader;
mod testament;

pub use concordance::{Concordance, CsvConcordance};
pub use loader::load;
pub use testament::{ClassifiedVerse, TestamentIndex, NEW_TESTAMENT, OLD_TESTAMENT};
