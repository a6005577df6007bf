mod actions;
mod components;
mod state;
mod view;

#[cfg(test)]
mod intent_smoke;
#[cfg(test)]
mod view_smoke;

pub use actions::{QuizIntent, use_quiz_dispatcher};
pub use components::{
    FeedbackPanel, IntroPanel, LoadingPanel, OutroPanel, QuestionPanel, QuizStatus,
};
pub use state::{QuizServices, QuizState, use_quiz_state};
pub use view::QuizView;
