#![forbid(unsafe_code)]

pub mod error;
pub mod provider;
pub mod quiz_loop;

pub use error::{ProviderError, QuizServiceError};
pub use provider::{OpenTdbConfig, OpenTdbProvider, QuestionProvider, QuestionQuery};
pub use quiz_loop::QuizLoopService;
