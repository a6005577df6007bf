use std::sync::Arc;

use trivia_core::model::{Page, Question, QuestionAmount, SessionToken};
use trivia_core::{GameTicket, Quiz};

use crate::error::{ProviderError, QuizServiceError};
use crate::provider::{QuestionProvider, QuestionQuery};

/// Drives the quiz state machine against a question provider.
///
/// Each handler awaits the provider first and then applies a synchronous
/// transition on [`Quiz`]. Callers that cannot hold `&mut Quiz` across an
/// await (UI signals) use [`QuizLoopService::request_token`] and
/// [`QuizLoopService::fetch_batch`] directly and apply the results themselves.
#[derive(Clone)]
pub struct QuizLoopService {
    provider: Arc<dyn QuestionProvider>,
    params: Vec<(String, String)>,
}

impl QuizLoopService {
    /// Multiple-choice questions only, matching the radio-button answer list.
    #[must_use]
    pub fn new(provider: Arc<dyn QuestionProvider>) -> Self {
        Self {
            provider,
            params: vec![("type".to_string(), "multiple".to_string())],
        }
    }

    /// Add a parameter sent with every batch request (e.g. `category`, `difficulty`).
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Request a session token from the provider.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` when the request fails; the failure is logged.
    pub async fn request_token(&self) -> Result<SessionToken, ProviderError> {
        self.provider.request_token().await.inspect_err(|err| {
            tracing::warn!(error = %err, "session token request failed");
        })
    }

    /// Make sure `quiz` holds a session token, requesting one if needed.
    ///
    /// A token that is already present is never replaced.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Provider` when the request fails. The quiz is
    /// left without a token and later batches are requested without one.
    pub async fn ensure_token(&self, quiz: &mut Quiz) -> Result<(), QuizServiceError> {
        if quiz.session_token().is_some() {
            return Ok(());
        }
        let token = self.request_token().await?;
        tracing::debug!("session token acquired");
        quiz.set_session_token(token);
        Ok(())
    }

    /// Fetch and decorate a batch of questions.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` when the request fails; the failure is logged.
    pub async fn fetch_batch(
        &self,
        amount: QuestionAmount,
        token: Option<SessionToken>,
    ) -> Result<Vec<Question>, ProviderError> {
        let query = QuestionQuery::new(amount)
            .with_token(token)
            .with_params(self.params.iter().cloned());

        match self.provider.fetch_questions(&query).await {
            Ok(raw) => {
                tracing::debug!(requested = amount.get(), received = raw.len(), "question batch fetched");
                Ok(raw.into_iter().map(Question::from_raw).collect())
            }
            Err(err) => {
                tracing::warn!(error = %err, amount = amount.get(), "question batch request failed");
                Err(err)
            }
        }
    }

    /// Start a new game and load its questions.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Provider` when the batch request fails. The
    /// quiz stays on the question page with no questions loaded.
    pub async fn start_quiz(
        &self,
        quiz: &mut Quiz,
        amount: QuestionAmount,
    ) -> Result<GameTicket, QuizServiceError> {
        let ticket = quiz.start_quiz();
        let token = quiz.session_token().cloned();
        let questions = self.fetch_batch(amount, token).await?;
        self.seed(quiz, ticket, questions)?;
        Ok(ticket)
    }

    /// Apply a fetched batch to the game identified by `ticket`.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` when the game was restarted meanwhile.
    pub fn seed(
        &self,
        quiz: &mut Quiz,
        ticket: GameTicket,
        questions: Vec<Question>,
    ) -> Result<(), QuizServiceError> {
        quiz.seed_questions(ticket, questions).inspect_err(|err| {
            tracing::debug!(error = %err, "discarding question batch");
        })?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` when not on the question page.
    pub fn submit_answer(
        &self,
        quiz: &mut Quiz,
        selected: impl Into<String>,
    ) -> Result<String, QuizServiceError> {
        let index = quiz.current_question_index();
        let feedback = quiz.submit_answer(selected)?.to_string();
        tracing::debug!(?index, score = quiz.score(), "answer recorded");
        Ok(feedback)
    }

    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` when not on the answer page.
    pub fn next_question(&self, quiz: &mut Quiz) -> Result<Page, QuizServiceError> {
        let page = quiz.next_question()?;
        if page == Page::Outro {
            tracing::info!(
                score = quiz.score(),
                total = quiz.questions().len(),
                "quiz finished"
            );
        }
        Ok(page)
    }
}
