//! Answer extraction from uploaded archives and CSV files.
//!
//! `.zip` uploads are searched for their first `.csv` member; `.csv` uploads
//! are read directly. The value of the first data row's "answer" column (any
//! casing) is the answer. Every failure resolves to [`SENTINEL_ANSWER`].

use std::io::{Cursor, Read};
use std::path::Path;

use tracing::{debug, warn};
use zip::ZipArchive;

use super::error::TabularError;

/// Returned whenever no usable answer can be pulled out of an upload.
pub const SENTINEL_ANSWER: &str = "7f9da";

const ANSWER_COLUMN: &str = "answer";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileKind {
    Archive,
    Tabular,
    Other,
}

impl FileKind {
    fn of(path: &Path) -> Self {
        let name = path.to_string_lossy().to_lowercase();
        if name.ends_with(".zip") {
            FileKind::Archive
        } else if name.ends_with(".csv") {
            FileKind::Tabular
        } else {
            FileKind::Other
        }
    }
}

/// Extract the answer from an uploaded file, or the sentinel on any failure.
pub async fn extract_answer(path: &Path) -> String {
    match try_extract_answer(path).await {
        Ok(answer) => {
            debug!(path = %path.display(), "Answer extracted from upload");
            answer
        }
        Err(e) => {
            warn!(error = %e, path = %path.display(), "Error processing file, using sentinel answer");
            SENTINEL_ANSWER.to_string()
        }
    }
}

/// Fallible extraction; callers outside this module use [`extract_answer`].
pub async fn try_extract_answer(path: &Path) -> Result<String, TabularError> {
    let csv_text = match FileKind::of(path) {
        FileKind::Archive => {
            let bytes = tokio::fs::read(path).await?;
            first_csv_member(&bytes)?
        }
        FileKind::Tabular => {
            let bytes = tokio::fs::read(path).await?;
            String::from_utf8_lossy(&bytes).into_owned()
        }
        FileKind::Other => {
            return Err(TabularError::UnsupportedFormat {
                path: path.display().to_string(),
            })
        }
    };

    answer_from_csv(&csv_text)
}

/// Text of the first archive member whose name ends in `.csv` (any casing).
fn first_csv_member(bytes: &[u8]) -> Result<String, TabularError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;

    // Names come from the raw entry so members this build cannot decompress
    // are still skippable.
    let mut csv_index = None;
    for index in 0..archive.len() {
        if archive.by_index_raw(index)?.name().to_lowercase().ends_with(".csv") {
            csv_index = Some(index);
            break;
        }
    }
    let index = csv_index.ok_or(TabularError::NoTabularEntry)?;

    let mut entry = archive.by_index(index)?;
    debug!(entry = %entry.name(), "Found CSV entry in archive");
    let mut data = Vec::new();
    entry.read_to_end(&mut data)?;
    Ok(String::from_utf8_lossy(&data).into_owned())
}

/// Value of the "answer" column in the first data row.
fn answer_from_csv(text: &str) -> Result<String, TabularError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let column = reader
        .headers()?
        .iter()
        .position(|name| name.trim_start_matches('\u{feff}').to_lowercase() == ANSWER_COLUMN)
        .ok_or(TabularError::MissingAnswerColumn)?;

    let first_row = reader.records().next().ok_or(TabularError::NoRows)??;

    match first_row.get(column) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(TabularError::EmptyAnswer),
    }
}
