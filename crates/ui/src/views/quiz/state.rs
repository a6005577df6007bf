use std::sync::Arc;

use dioxus::prelude::*;
use services::QuizLoopService;
use trivia_core::Quiz;
use trivia_core::model::QuestionAmount;

use crate::views::RequestState;

#[derive(Clone)]
pub struct QuizServices {
    pub quiz_loop: Arc<QuizLoopService>,
}

/// Reactive handles for the quiz screen.
#[derive(Clone, Copy)]
pub struct QuizState {
    pub quiz: Signal<Quiz>,
    pub amount: Signal<QuestionAmount>,
    pub selected: Signal<Option<String>>,
    /// Session token request; the start control waits for it to settle.
    pub token: Signal<RequestState>,
    /// Question batch request for the current game.
    pub batch: Signal<RequestState>,
}

impl QuizState {
    /// Start stays disabled until a session token has been acquired.
    #[must_use]
    pub fn can_start(&self) -> bool {
        *self.token.read() == RequestState::Ready
    }
}

pub fn use_quiz_state(default_amount: QuestionAmount) -> QuizState {
    QuizState {
        quiz: use_signal(Quiz::new),
        amount: use_signal(|| default_amount),
        selected: use_signal(|| None::<String>),
        token: use_signal(|| RequestState::Idle),
        batch: use_signal(|| RequestState::Idle),
    }
}
