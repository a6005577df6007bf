use dioxus::prelude::*;
use trivia_core::model::QuestionAmount;

use super::actions::QuizIntent;
use crate::views::RequestState;
use crate::vm::{QuestionVm, QuizStatusVm};

#[component]
pub fn QuizStatus(status: QuizStatusVm) -> Element {
    rsx! {
        div { class: "quiz-status",
            span { class: "quiz-score", "{status.score_label()}" }
            span { class: "quiz-progress", "{status.progress_label()}" }
        }
    }
}

#[component]
pub fn IntroPanel(
    amount: u32,
    options: Vec<u32>,
    token: RequestState,
    dispatch: Callback<QuizIntent>,
) -> Element {
    let ready = token == RequestState::Ready;
    let amount_options = options.iter().map(|&option| {
        rsx! {
            option { key: "{option}", value: "{option}", selected: option == amount, "{option}" }
        }
    });

    rsx! {
        section { class: "quiz-intro",
            h2 { "Trivia Quiz" }
            p { class: "view-subtitle", "Questions come from the Open Trivia Database." }
            label { r#for: "question-quantity", "How many questions?" }
            select {
                id: "question-quantity",
                onchange: move |evt: Event<FormData>| {
                    if let Ok(parsed) = evt.value().parse::<QuestionAmount>() {
                        dispatch.call(QuizIntent::SetAmount(parsed));
                    }
                },
                {amount_options}
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                disabled: !ready,
                onclick: move |_| dispatch.call(QuizIntent::Start),
                "Start quiz"
            }
            match token {
                RequestState::Idle | RequestState::Pending => rsx! {
                    p { class: "quiz-hint", "Connecting to the question service..." }
                },
                RequestState::Error(err) => rsx! {
                    p { class: "quiz-error", "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| dispatch.call(QuizIntent::RequestToken),
                        "Retry"
                    }
                },
                RequestState::Ready => rsx! {},
            }
        }
    }
}

#[component]
pub fn QuestionPanel(
    question: QuestionVm,
    selected: Option<String>,
    dispatch: Callback<QuizIntent>,
) -> Element {
    let answers = question.answers.iter().enumerate().map(|(index, answer)| {
        let value = answer.value.clone();
        let checked = selected.as_deref() == Some(answer.value.as_str());
        let input_id = format!("answer-{index}");
        rsx! {
            li { key: "{index}", class: "answer-item",
                input {
                    id: "{input_id}",
                    r#type: "radio",
                    name: "answers",
                    value: "{answer.value}",
                    checked: checked,
                    onchange: move |_| dispatch.call(QuizIntent::SelectAnswer(value.clone())),
                }
                label {
                    class: "answer-text",
                    r#for: "{input_id}",
                    dangerous_inner_html: "{answer.label_html}",
                }
            }
        }
    });

    rsx! {
        section { class: "quiz-question",
            if let Some(meta) = question.meta_label.as_ref() {
                p { class: "question-meta", dangerous_inner_html: "{meta}" }
            }
            fieldset {
                legend { class: "question-text", dangerous_inner_html: "{question.text_html}" }
                ul { class: "answers", {answers} }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| dispatch.call(QuizIntent::Submit),
                    "Submit"
                }
            }
        }
    }
}

#[component]
pub fn FeedbackPanel(feedback_html: String, dispatch: Callback<QuizIntent>) -> Element {
    rsx! {
        section { class: "quiz-feedback",
            p { class: "feedback-text", dangerous_inner_html: "{feedback_html}" }
            button {
                class: "btn btn-primary continue",
                r#type: "button",
                onclick: move |_| dispatch.call(QuizIntent::Continue),
                "Continue"
            }
        }
    }
}

#[component]
pub fn OutroPanel(final_label: String, dispatch: Callback<QuizIntent>) -> Element {
    rsx! {
        section { class: "quiz-outro",
            h2 { "Quiz complete" }
            p { class: "final-score", "{final_label}" }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| dispatch.call(QuizIntent::Start),
                "Play again"
            }
        }
    }
}

#[component]
pub fn LoadingPanel(batch: RequestState, dispatch: Callback<QuizIntent>) -> Element {
    rsx! {
        section { class: "quiz-loading",
            match batch.error() {
                Some(err) => rsx! {
                    p { class: "quiz-error", "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| dispatch.call(QuizIntent::Start),
                        "Retry"
                    }
                },
                None => rsx! {
                    p { "Loading questions..." }
                },
            }
        }
    }
}
