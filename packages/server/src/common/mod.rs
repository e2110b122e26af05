// Shared helpers used across domains

pub mod patterns;

pub use patterns::{first_match, owner_and_repo};
