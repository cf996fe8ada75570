pub mod completion;
pub mod pipeline;
pub mod prompt;
pub mod refine;
pub mod sanitize;
pub mod technology;
pub mod validate;

pub use completion::{CompletionClient, CompletionError, CompletionRequest, OpenAiCompletionClient};
pub use pipeline::{Generation, GenerationRequest, GenerationSettings, Generator};
pub use technology::Technology;
pub use validate::{ValidationReport, Violation};
