use std::fmt;

use thiserror::Error;

use crate::model::{
    Page, Progress, Question, QuestionRepository, SessionScope, SessionToken,
};

pub const SUCCESS_FEEDBACK: &str = "You got it!";

#[must_use]
pub fn failure_feedback(correct_answer: &str) -> String {
    format!("Too bad! The correct answer was: {correct_answer}")
}

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// The user-facing events the state machine accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAction {
    StartQuiz,
    SubmitAnswer,
    NextQuestion,
}

impl fmt::Display for QuizAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuizAction::StartQuiz => "start quiz",
            QuizAction::SubmitAnswer => "submit answer",
            QuizAction::NextQuestion => "next question",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("cannot {action} while on the {page} page")]
    InvalidTransition { action: QuizAction, page: Page },
    #[error("questions have not been loaded yet")]
    QuestionsNotLoaded,
    #[error("question batch belongs to a game that has since been restarted")]
    StaleGame,
}

//
// ─── GAME STATE ────────────────────────────────────────────────────────────────
//

/// Identifies the game a pending question fetch was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameTicket(u64);

/// Per-game fields, rebuilt on every start.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct GameState {
    page: Page,
    current_question_index: Option<usize>,
    user_answers: Vec<String>,
    feedback: Option<String>,
}

//
// ─── QUIZ ──────────────────────────────────────────────────────────────────────
//

/// The quiz state machine.
///
/// Owns the process-wide [`SessionScope`], the per-game state and the
/// current [`QuestionRepository`]. Every transition is synchronous; network
/// calls happen outside and feed their results back in through
/// [`Quiz::seed_questions`] and [`Quiz::set_session_token`].
#[derive(Debug, Clone, Default)]
pub struct Quiz {
    scope: SessionScope,
    game: GameState,
    questions: QuestionRepository,
    generation: u64,
}

impl Quiz {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_scope(scope: SessionScope) -> Self {
        Self {
            scope,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn page(&self) -> Page {
        self.game.page
    }

    #[must_use]
    pub fn current_question_index(&self) -> Option<usize> {
        self.game.current_question_index
    }

    #[must_use]
    pub fn user_answers(&self) -> &[String] {
        &self.game.user_answers
    }

    /// Feedback for the most recent answer.
    ///
    /// Survives `next_question`; callers decide whether to show it based on
    /// [`Quiz::page`].
    #[must_use]
    pub fn feedback(&self) -> Option<&str> {
        self.game.feedback.as_deref()
    }

    #[must_use]
    pub fn questions(&self) -> &QuestionRepository {
        &self.questions
    }

    #[must_use]
    pub fn scope(&self) -> &SessionScope {
        &self.scope
    }

    #[must_use]
    pub fn session_token(&self) -> Option<&SessionToken> {
        self.scope.token()
    }

    pub fn set_session_token(&mut self, token: SessionToken) {
        self.scope.set_token(token);
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.game
            .current_question_index
            .and_then(|index| self.questions.get(index))
    }

    /// True while a game has started but its questions have not arrived.
    #[must_use]
    pub fn is_awaiting_questions(&self) -> bool {
        self.game.page == Page::Question && self.questions.is_empty()
    }

    /// Number of answers that match their question's correct answer.
    #[must_use]
    pub fn score(&self) -> usize {
        self.game
            .user_answers
            .iter()
            .enumerate()
            .filter(|(index, answer)| {
                self.questions
                    .get(*index)
                    .is_some_and(|question| question.is_correct(answer))
            })
            .count()
    }

    /// `None` on the intro page, where no game is in progress.
    #[must_use]
    pub fn progress(&self) -> Option<Progress> {
        if self.game.page == Page::Intro {
            return None;
        }
        let index = self.game.current_question_index.unwrap_or(0);
        Some(Progress {
            current: index + 1,
            total: self.questions.len(),
        })
    }

    /// Reset per-game state and begin a new game.
    ///
    /// Allowed from any page. The session token is kept. The question
    /// repository is emptied until [`Quiz::seed_questions`] is called with the
    /// returned ticket.
    pub fn start_quiz(&mut self) -> GameTicket {
        self.reset_game();
        self.game.page = Page::Question;
        self.game.current_question_index = Some(0);
        self.generation = self.generation.wrapping_add(1);
        GameTicket(self.generation)
    }

    /// Install the question batch fetched for `ticket`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::StaleGame` when another game was started after the
    /// ticket was issued; state is left untouched.
    pub fn seed_questions(
        &mut self,
        ticket: GameTicket,
        questions: Vec<Question>,
    ) -> Result<(), QuizError> {
        if !self.is_current(ticket) {
            return Err(QuizError::StaleGame);
        }
        self.questions.replace(questions);
        Ok(())
    }

    /// True when `ticket` belongs to the most recently started game.
    #[must_use]
    pub fn is_current(&self, ticket: GameTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Record `selected` as the answer to the current question.
    ///
    /// Any string is accepted, including one that is not among the offered
    /// answers, or an empty one.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidTransition` unless on the question page, and
    /// `QuizError::QuestionsNotLoaded` when no question is available yet.
    pub fn submit_answer(&mut self, selected: impl Into<String>) -> Result<&str, QuizError> {
        self.require_page(QuizAction::SubmitAnswer, Page::Question)?;
        let question = self
            .current_question()
            .ok_or(QuizError::QuestionsNotLoaded)?;

        let selected = selected.into();
        let feedback = if question.is_correct(&selected) {
            SUCCESS_FEEDBACK.to_string()
        } else {
            failure_feedback(question.correct_answer())
        };

        self.game.user_answers.push(selected);
        self.game.page = Page::Answer;
        Ok(self.game.feedback.insert(feedback).as_str())
    }

    /// Advance past the feedback page.
    ///
    /// Moves to the outro after the last question, otherwise to the next
    /// question. Returns the new page.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidTransition` unless on the answer page.
    pub fn next_question(&mut self) -> Result<Page, QuizError> {
        self.require_page(QuizAction::NextQuestion, Page::Answer)?;
        let index = self.game.current_question_index.unwrap_or(0);

        if Some(index) == self.questions.last_index() || self.questions.is_empty() {
            self.game.page = Page::Outro;
        } else {
            self.game.current_question_index = Some(index + 1);
            self.game.page = Page::Question;
        }
        Ok(self.game.page)
    }

    fn reset_game(&mut self) {
        self.game = GameState::default();
        self.questions.clear();
    }

    fn require_page(&self, action: QuizAction, expected: Page) -> Result<(), QuizError> {
        if self.game.page == expected {
            Ok(())
        } else {
            Err(QuizError::InvalidTransition {
                action,
                page: self.game.page,
            })
        }
    }
}
