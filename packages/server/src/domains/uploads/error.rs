//! Typed errors for tabular answer extraction.
//!
//! None of these reach a caller: the extractor maps every variant to the
//! sentinel answer at its boundary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TabularError {
    /// Neither an archive nor a flat tabular file
    #[error("unsupported file type: {path}")]
    UnsupportedFormat { path: String },

    /// Archive opened but holds no CSV member
    #[error("archive contains no CSV entry")]
    NoTabularEntry,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Header row has no column named "answer" in any casing
    #[error("no answer column in header")]
    MissingAnswerColumn,

    /// Header row only
    #[error("CSV has no data rows")]
    NoRows,

    /// Answer cell missing or empty in the first data row
    #[error("answer column is empty in first row")]
    EmptyAnswer,
}
