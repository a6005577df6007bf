use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{ProviderError, QuestionProvider, QuestionQuery, QuizLoopService};
use trivia_core::model::{Page, QuestionAmount, RawQuestion, SessionToken};

use super::actions::{QuizIntent, use_quiz_dispatcher};
use super::state::{QuizServices, QuizState, use_quiz_state};
use super::view::QuizView;
use crate::context::{AppContext, UiApp, build_app_context};
use crate::views::{RequestState, ViewError};

#[derive(Default)]
struct FakeProvider {
    batch: Vec<RawQuestion>,
    fail_token: bool,
    fail_questions: bool,
}

#[async_trait]
impl QuestionProvider for FakeProvider {
    async fn request_token(&self) -> Result<SessionToken, ProviderError> {
        if self.fail_token {
            return Err(ProviderError::Api {
                code: 5,
                reason: "rate limit exceeded",
            });
        }
        Ok(SessionToken::new("ui-token"))
    }

    async fn fetch_questions(
        &self,
        query: &QuestionQuery,
    ) -> Result<Vec<RawQuestion>, ProviderError> {
        if self.fail_questions {
            return Err(ProviderError::Api {
                code: 1,
                reason: "not enough questions for the query",
            });
        }
        let amount = query.amount().get() as usize;
        Ok(self.batch.iter().take(amount).cloned().collect())
    }
}

struct TestApp {
    quiz_loop: Arc<QuizLoopService>,
}

impl UiApp for TestApp {
    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    fn default_amount(&self) -> QuestionAmount {
        QuestionAmount::DEFAULT
    }
}

fn raw(question: &str, correct: &str, incorrect: &[&str]) -> RawQuestion {
    RawQuestion {
        question: question.to_string(),
        incorrect_answers: incorrect.iter().map(ToString::to_string).collect(),
        correct_answer: correct.to_string(),
        category: None,
        difficulty: None,
        kind: None,
    }
}

fn two_questions() -> Vec<RawQuestion> {
    vec![
        raw("2+2?", "4", &["3", "5"]),
        raw("Capital of France?", "Paris", &["Lyon", "Nice"]),
    ]
}

fn services_for(provider: FakeProvider) -> QuizServices {
    QuizServices {
        quiz_loop: Arc::new(QuizLoopService::new(Arc::new(provider))),
    }
}

#[derive(Clone, Default)]
struct HarnessHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    state: Rc<RefCell<Option<QuizState>>>,
}

impl HarnessHandles {
    fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("dispatcher registered")
    }

    fn state(&self) -> QuizState {
        (*self.state.borrow()).expect("state registered")
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    services: QuizServices,
    handles: HarnessHandles,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizIntentHarness(props: HarnessProps) -> Element {
    let state = use_quiz_state(QuestionAmount::DEFAULT);
    let dispatch = use_quiz_dispatcher(&state, &props.services);
    let handles = props.handles.clone();
    use_hook(move || {
        *handles.dispatch.borrow_mut() = Some(dispatch);
        *handles.state.borrow_mut() = Some(state);
    });
    rsx! { div {} }
}

fn setup(provider: FakeProvider) -> (VirtualDom, HarnessHandles) {
    let handles = HarnessHandles::default();
    let mut dom = VirtualDom::new_with_props(
        QuizIntentHarness,
        HarnessProps {
            services: services_for(provider),
            handles: handles.clone(),
        },
    );
    dom.rebuild_in_place();
    (dom, handles)
}

async fn settle(dom: &mut VirtualDom) {
    for _ in 0..4 {
        let _ = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work()).await;
        dom.render_immediate(&mut NoOpMutations);
        dom.process_events();
    }
}

fn page(dom: &VirtualDom, state: QuizState) -> Page {
    dom.in_runtime(|| state.quiz.peek().page())
}

#[tokio::test(flavor = "current_thread")]
async fn full_game_runs_through_intents() {
    let (mut dom, handles) = setup(FakeProvider {
        batch: two_questions(),
        ..FakeProvider::default()
    });
    let dispatch = handles.dispatch();
    let state = handles.state();

    dom.in_runtime(|| dispatch.call(QuizIntent::RequestToken));
    settle(&mut dom).await;
    assert_eq!(dom.in_runtime(|| *state.token.peek()), RequestState::Ready);

    dom.in_runtime(|| {
        dispatch.call(QuizIntent::SetAmount(QuestionAmount::new(5).unwrap()));
        dispatch.call(QuizIntent::Start);
    });
    settle(&mut dom).await;
    assert_eq!(dom.in_runtime(|| *state.batch.peek()), RequestState::Ready);
    dom.in_runtime(|| {
        let quiz = state.quiz.peek();
        assert_eq!(quiz.page(), Page::Question);
        assert_eq!(quiz.questions().len(), 2);
        assert_eq!(quiz.session_token().map(SessionToken::as_str), Some("ui-token"));
    });

    dom.in_runtime(|| {
        dispatch.call(QuizIntent::SelectAnswer("4".to_string()));
        dispatch.call(QuizIntent::Submit);
    });
    assert_eq!(page(&dom, state), Page::Answer);
    dom.in_runtime(|| {
        assert_eq!(state.quiz.peek().score(), 1);
        assert_eq!(state.quiz.peek().feedback(), Some("You got it!"));
        assert!(state.selected.peek().is_none());
    });

    // A second submit on the answer page is ignored.
    dom.in_runtime(|| dispatch.call(QuizIntent::Submit));
    dom.in_runtime(|| assert_eq!(state.quiz.peek().user_answers().len(), 1));

    dom.in_runtime(|| dispatch.call(QuizIntent::Continue));
    assert_eq!(page(&dom, state), Page::Question);

    dom.in_runtime(|| {
        dispatch.call(QuizIntent::SelectAnswer("Lyon".to_string()));
        dispatch.call(QuizIntent::Submit);
        dispatch.call(QuizIntent::Continue);
    });
    assert_eq!(page(&dom, state), Page::Outro);
    dom.in_runtime(|| assert_eq!(state.quiz.peek().score(), 1));
}

#[tokio::test(flavor = "current_thread")]
async fn start_waits_for_session_token() {
    let (mut dom, handles) = setup(FakeProvider {
        batch: two_questions(),
        fail_token: true,
        ..FakeProvider::default()
    });
    let dispatch = handles.dispatch();
    let state = handles.state();

    dom.in_runtime(|| dispatch.call(QuizIntent::RequestToken));
    settle(&mut dom).await;
    assert_eq!(
        dom.in_runtime(|| *state.token.peek()),
        RequestState::Error(ViewError::Network)
    );

    dom.in_runtime(|| dispatch.call(QuizIntent::Start));
    settle(&mut dom).await;
    assert_eq!(page(&dom, state), Page::Intro);
    assert_eq!(dom.in_runtime(|| *state.batch.peek()), RequestState::Idle);
}

#[tokio::test(flavor = "current_thread")]
async fn failed_batch_leaves_quiz_waiting_with_error() {
    let (mut dom, handles) = setup(FakeProvider {
        fail_questions: true,
        ..FakeProvider::default()
    });
    let dispatch = handles.dispatch();
    let state = handles.state();

    dom.in_runtime(|| dispatch.call(QuizIntent::RequestToken));
    settle(&mut dom).await;
    dom.in_runtime(|| dispatch.call(QuizIntent::Start));
    settle(&mut dom).await;

    assert_eq!(
        dom.in_runtime(|| *state.batch.peek()),
        RequestState::Error(ViewError::Network)
    );
    dom.in_runtime(|| {
        let quiz = state.quiz.peek();
        assert_eq!(quiz.page(), Page::Question);
        assert!(quiz.is_awaiting_questions());
    });
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_renders_intro_from_app_context() {
    let app: Arc<dyn UiApp> = Arc::new(TestApp {
        quiz_loop: services_for(FakeProvider::default()).quiz_loop,
    });
    let context: AppContext = build_app_context(&app);

    let mut dom = VirtualDom::new(QuizView).with_root_context(context);
    dom.rebuild_in_place();
    settle(&mut dom).await;

    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("Trivia Quiz"), "missing title in {html}");
    assert!(html.contains("Start quiz"), "missing start in {html}");
    assert!(!html.contains("Connecting"), "token still pending in {html}");
}
