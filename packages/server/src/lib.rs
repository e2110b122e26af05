// Course Answer Service - API Core
//
// Answers course assignment questions over HTTP. A question runs through
// ordered rule families, then the uploaded file, then a remote completion.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
