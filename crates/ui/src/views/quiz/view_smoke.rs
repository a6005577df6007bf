use dioxus::prelude::*;

use super::actions::QuizIntent;
use super::components::{
    FeedbackPanel, IntroPanel, LoadingPanel, OutroPanel, QuestionPanel, QuizStatus,
};
use crate::views::{RequestState, ViewError};
use crate::vm::{AnswerVm, QuestionVm, QuizStatusVm};

fn render(root: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(root);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn arithmetic_question() -> QuestionVm {
    let answers = ["3", "5", "4"]
        .into_iter()
        .map(|value| AnswerVm {
            value: value.to_string(),
            label_html: value.to_string(),
        })
        .collect();
    QuestionVm {
        text_html: "What is 2+2?".to_string(),
        answers,
        meta_label: Some("Mathematics · easy".to_string()),
    }
}

fn question_fixture() -> Element {
    rsx! {
        QuestionPanel {
            question: arithmetic_question(),
            selected: Some("4".to_string()),
            dispatch: move |_: QuizIntent| {},
        }
    }
}

fn intro_pending_fixture() -> Element {
    rsx! {
        IntroPanel {
            amount: 10,
            options: vec![5, 10, 15],
            token: RequestState::Pending,
            dispatch: move |_: QuizIntent| {},
        }
    }
}

fn intro_error_fixture() -> Element {
    rsx! {
        IntroPanel {
            amount: 10,
            options: vec![5, 10, 15],
            token: RequestState::Error(ViewError::Network),
            dispatch: move |_: QuizIntent| {},
        }
    }
}

fn feedback_fixture() -> Element {
    rsx! {
        FeedbackPanel {
            feedback_html: "Too bad! The correct answer was: 4".to_string(),
            dispatch: move |_: QuizIntent| {},
        }
    }
}

fn outro_fixture() -> Element {
    rsx! {
        OutroPanel {
            final_label: "You scored 2 out of 3".to_string(),
            dispatch: move |_: QuizIntent| {},
        }
    }
}

fn status_fixture() -> Element {
    rsx! {
        QuizStatus { status: QuizStatusVm { score: 1, current: 2, total: 3 } }
    }
}

fn loading_fixture() -> Element {
    rsx! {
        LoadingPanel { batch: RequestState::Pending, dispatch: move |_: QuizIntent| {} }
    }
}

fn loading_error_fixture() -> Element {
    rsx! {
        LoadingPanel {
            batch: RequestState::Error(ViewError::Network),
            dispatch: move |_: QuizIntent| {},
        }
    }
}

#[test]
fn question_panel_renders_text_and_answers() {
    let html = render(question_fixture);
    assert!(html.contains("What is 2+2?"), "missing question in {html}");
    assert!(html.contains("Mathematics · easy"), "missing meta in {html}");
    for id in ["answer-0", "answer-1", "answer-2"] {
        assert!(html.contains(id), "missing {id} in {html}");
    }
    assert!(html.contains("Submit"), "missing submit in {html}");
}

#[test]
fn intro_panel_waits_for_token() {
    let html = render(intro_pending_fixture);
    assert!(html.contains("How many questions?"), "missing picker in {html}");
    assert!(html.contains("Start quiz"), "missing start in {html}");
    assert!(html.contains("Connecting"), "missing pending hint in {html}");
}

#[test]
fn intro_panel_offers_retry_on_token_failure() {
    let html = render(intro_error_fixture);
    assert!(html.contains("Could not reach"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[test]
fn feedback_panel_renders_message() {
    let html = render(feedback_fixture);
    assert!(html.contains("Too bad! The correct answer was: 4"), "missing feedback in {html}");
    assert!(html.contains("Continue"), "missing continue in {html}");
}

#[test]
fn outro_panel_renders_final_score() {
    let html = render(outro_fixture);
    assert!(html.contains("You scored 2 out of 3"), "missing score in {html}");
    assert!(html.contains("Play again"), "missing restart in {html}");
}

#[test]
fn status_renders_score_and_progress() {
    let html = render(status_fixture);
    assert!(html.contains("Score: 1"), "missing score in {html}");
    assert!(html.contains("Question 2 of 3"), "missing progress in {html}");
}

#[test]
fn loading_panel_switches_to_retry_on_error() {
    let html = render(loading_fixture);
    assert!(html.contains("Loading questions..."), "missing loading in {html}");

    let html = render(loading_error_fixture);
    assert!(html.contains("Could not reach"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}
