mod quiz;
mod state;

pub use quiz::{
    FeedbackPanel, IntroPanel, LoadingPanel, OutroPanel, QuestionPanel, QuizIntent, QuizServices,
    QuizState, QuizStatus, QuizView, use_quiz_dispatcher, use_quiz_state,
};
pub use state::{RequestState, ViewError};
