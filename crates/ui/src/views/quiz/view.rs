use dioxus::prelude::*;
use trivia_core::model::Page;

use super::actions::{QuizIntent, use_quiz_dispatcher};
use super::components::{
    FeedbackPanel, IntroPanel, LoadingPanel, OutroPanel, QuestionPanel, QuizStatus,
};
use super::state::{QuizServices, use_quiz_state};
use crate::context::AppContext;
use crate::vm::{amount_options, map_quiz};

/// The whole quiz screen, redrawn from the current `Quiz` on every change.
#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let services = QuizServices {
        quiz_loop: ctx.quiz_loop(),
    };
    let state = use_quiz_state(ctx.default_amount());
    let dispatch = use_quiz_dispatcher(&state, &services);

    use_effect(move || dispatch.call(QuizIntent::RequestToken));

    let vm = map_quiz(&state.quiz.read());
    let amount = *state.amount.read();
    let token = *state.token.read();
    let batch = *state.batch.read();
    let selected = state.selected.cloned();

    let body = match vm.page {
        Page::Intro => rsx! {
            IntroPanel {
                amount: amount.get(),
                options: amount_options(amount),
                token,
                dispatch,
            }
        },
        Page::Question => match vm.question.clone() {
            Some(question) => rsx! {
                QuestionPanel { question, selected, dispatch }
            },
            None => rsx! {
                LoadingPanel { batch, dispatch }
            },
        },
        Page::Answer => rsx! {
            FeedbackPanel {
                feedback_html: vm.feedback_html.clone().unwrap_or_default(),
                dispatch,
            }
        },
        Page::Outro => rsx! {
            OutroPanel { final_label: vm.final_score_label(), dispatch }
        },
    };

    rsx! {
        div { class: "page quiz",
            if let Some(status) = vm.status.clone().filter(|_| !vm.is_loading) {
                QuizStatus { status }
            }
            {body}
        }
    }
}
