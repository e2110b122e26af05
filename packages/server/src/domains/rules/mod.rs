//! Pattern rule families.
//!
//! Each family is an ordered list of keyword rules for one question category.
//! Families are consulted in the order returned by [`default_families`]; the
//! first matching rule of the first matching family answers.

pub mod analysis;
pub mod deployment;
pub mod llm;
pub mod models;
pub mod sourcing;
pub mod tooling;

pub use models::{Family, Question, Resolution, Rule, RuleContext};

/// All families in resolution order.
pub fn default_families() -> Vec<Family> {
    vec![
        tooling::family(),
        deployment::family(),
        llm::family(),
        sourcing::family(),
        analysis::family(),
    ]
}
