use std::sync::Arc;

use dioxus::prelude::*;
use trivia_core::model::QuestionAmount;

use super::state::{QuizServices, QuizState};
use crate::views::{RequestState, ViewError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    RequestToken,
    SetAmount(QuestionAmount),
    Start,
    SelectAnswer(String),
    Submit,
    Continue,
}

pub fn use_quiz_dispatcher(state: &QuizState, services: &QuizServices) -> Callback<QuizIntent> {
    let state = *state;
    let services = services.clone();

    use_callback(move |intent: QuizIntent| match intent {
        QuizIntent::RequestToken => request_token(state, &services),
        QuizIntent::SetAmount(amount) => {
            let mut current = state.amount;
            current.set(amount);
        }
        QuizIntent::Start => start_quiz(state, &services),
        QuizIntent::SelectAnswer(value) => {
            let mut selected = state.selected;
            selected.set(Some(value));
        }
        QuizIntent::Submit => submit_answer(state, &services),
        QuizIntent::Continue => next_question(state, &services),
    })
}

fn request_token(state: QuizState, services: &QuizServices) {
    let QuizState {
        mut quiz,
        mut token,
        ..
    } = state;

    if quiz.peek().session_token().is_some() {
        token.set(RequestState::Ready);
        return;
    }
    if token.peek().is_pending() {
        return;
    }

    token.set(RequestState::Pending);
    let quiz_loop = Arc::clone(&services.quiz_loop);
    spawn(async move {
        match quiz_loop.request_token().await {
            Ok(value) => {
                quiz.write().set_session_token(value);
                token.set(RequestState::Ready);
            }
            Err(_) => token.set(RequestState::Error(ViewError::Network)),
        }
    });
}

fn start_quiz(state: QuizState, services: &QuizServices) {
    if !state.can_start() {
        return;
    }
    let QuizState {
        mut quiz,
        amount,
        mut selected,
        mut batch,
        ..
    } = state;

    let (ticket, session_token) = {
        let mut game = quiz.write();
        let ticket = game.start_quiz();
        (ticket, game.session_token().cloned())
    };
    selected.set(None);
    batch.set(RequestState::Pending);

    let amount = *amount.peek();
    let quiz_loop = Arc::clone(&services.quiz_loop);
    spawn(async move {
        let result = quiz_loop.fetch_batch(amount, session_token).await;
        // A newer start owns the screen now.
        if !quiz.peek().is_current(ticket) {
            return;
        }
        match result {
            Ok(questions) => {
                if quiz_loop.seed(&mut quiz.write(), ticket, questions).is_ok() {
                    batch.set(RequestState::Ready);
                }
            }
            Err(_) => batch.set(RequestState::Error(ViewError::Network)),
        }
    });
}

fn submit_answer(state: QuizState, services: &QuizServices) {
    let QuizState {
        mut quiz,
        mut selected,
        ..
    } = state;

    // Nothing checked submits an empty answer, which simply scores as wrong.
    let choice = selected.cloned().unwrap_or_default();
    match services.quiz_loop.submit_answer(&mut quiz.write(), choice) {
        Ok(_) => selected.set(None),
        Err(err) => tracing::debug!(error = %err, "submit ignored"),
    }
}

fn next_question(state: QuizState, services: &QuizServices) {
    let QuizState {
        mut quiz,
        mut selected,
        ..
    } = state;

    match services.quiz_loop.next_question(&mut quiz.write()) {
        Ok(_) => selected.set(None),
        Err(err) => tracing::debug!(error = %err, "continue ignored"),
    }
}
