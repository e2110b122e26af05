pub mod completion;
pub mod pipeline;

pub use completion::{course_prompt, RemoteCompletion, COMPLETION_FAILURE_ANSWER};
pub use pipeline::{AnswerPipeline, AnswerSource, ResolvedAnswer};
