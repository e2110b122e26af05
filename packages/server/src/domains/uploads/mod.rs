pub mod error;
pub mod models;
pub mod tabular;

#[cfg(test)]
pub(crate) mod fixtures;

pub use error::TabularError;
pub use models::UploadedFile;
pub use tabular::{extract_answer, try_extract_answer, SENTINEL_ANSWER};
