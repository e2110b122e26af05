//! Answer resolution pipeline.
//!
//! Stages run strictly in order and the first one that produces an answer
//! ends the request:
//!
//! 1. each rule family, in declaration order
//! 2. the uploaded file's "answer" column (only when a file was uploaded)
//! 3. a remote completion
//!
//! No stage is retried and no candidate answers are ranked or merged.

use std::sync::Arc;

use tracing::info;

use super::completion::{course_prompt, RemoteCompletion};
use crate::config::StudentProfile;
use crate::domains::identity;
use crate::domains::rules::{default_families, Family, Question, Resolution, RuleContext};
use crate::domains::uploads::{self, UploadedFile};
use crate::kernel::BaseAI;

/// Which stage produced an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerSource {
    Family(&'static str),
    Upload,
    Completion,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAnswer {
    pub answer: String,
    pub source: AnswerSource,
}

#[derive(Clone)]
pub struct AnswerPipeline {
    families: Arc<Vec<Family>>,
    completion: RemoteCompletion,
    profile: Arc<StudentProfile>,
}

impl AnswerPipeline {
    /// Pipeline with the standard rule families.
    pub fn new(profile: StudentProfile, ai: Arc<dyn BaseAI>) -> Self {
        Self::with_families(default_families(), profile, ai)
    }

    pub fn with_families(families: Vec<Family>, profile: StudentProfile, ai: Arc<dyn BaseAI>) -> Self {
        Self {
            families: Arc::new(families),
            completion: RemoteCompletion::new(ai),
            profile: Arc::new(profile),
        }
    }

    /// Resolve a question without touching the upload's lifecycle.
    pub async fn resolve(&self, question: &Question, file: Option<&UploadedFile>) -> ResolvedAnswer {
        let personal = identity::extract(question.raw(), file, &self.profile).await;
        let ctx = RuleContext {
            question,
            personal: &personal,
            profile: &self.profile,
            has_file: file.is_some(),
        };

        for family in self.families.iter() {
            if let Resolution::Matched(answer) = family.resolve(&ctx) {
                return ResolvedAnswer {
                    answer,
                    source: AnswerSource::Family(family.name()),
                };
            }
        }

        if let Some(file) = file {
            return ResolvedAnswer {
                answer: uploads::extract_answer(file.path()).await,
                source: AnswerSource::Upload,
            };
        }

        ResolvedAnswer {
            answer: self.completion.complete(&course_prompt(question.raw())).await,
            source: AnswerSource::Completion,
        }
    }

    /// Resolve a question, then delete the upload whatever the outcome.
    pub async fn answer(&self, question: &Question, file: Option<UploadedFile>) -> String {
        let resolved = self.resolve(question, file.as_ref()).await;

        info!(source = ?resolved.source, answer_length = resolved.answer.len(), "Question answered");

        if let Some(file) = file {
            file.discard().await;
        }

        resolved.answer
    }
}
