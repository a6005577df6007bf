use trivia_core::Quiz;
use trivia_core::model::{Page, Question, QuestionAmount};

use crate::vm::sanitize_html;

/// Question counts offered on the start screen.
pub const AMOUNT_OPTIONS: [u32; 5] = [5, 10, 15, 20, 25];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerVm {
    /// Raw provider value, submitted verbatim.
    pub value: String,
    pub label_html: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub text_html: String,
    pub answers: Vec<AnswerVm>,
    pub meta_label: Option<String>,
}

impl From<&Question> for QuestionVm {
    fn from(question: &Question) -> Self {
        let answers = question
            .answers()
            .iter()
            .map(|answer| AnswerVm {
                value: answer.clone(),
                label_html: sanitize_html(answer),
            })
            .collect();

        let meta_label = match (question.category(), question.difficulty()) {
            (Some(category), Some(difficulty)) => {
                Some(format!("{} · {difficulty}", sanitize_html(category)))
            }
            (Some(category), None) => Some(sanitize_html(category)),
            (None, Some(difficulty)) => Some(difficulty.to_string()),
            (None, None) => None,
        };

        Self {
            text_html: sanitize_html(question.text()),
            answers,
            meta_label,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizStatusVm {
    pub score: usize,
    pub current: usize,
    pub total: usize,
}

impl QuizStatusVm {
    #[must_use]
    pub fn score_label(&self) -> String {
        format!("Score: {}", self.score)
    }

    #[must_use]
    pub fn progress_label(&self) -> String {
        format!("Question {} of {}", self.current, self.total)
    }
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizVm {
    pub page: Page,
    pub question: Option<QuestionVm>,
    pub feedback_html: Option<String>,
    /// Hidden on the intro page.
    pub status: Option<QuizStatusVm>,
    /// On the question page but the batch has not arrived.
    pub is_loading: bool,
}

impl QuizVm {
    #[must_use]
    pub fn final_score_label(&self) -> String {
        match &self.status {
            Some(status) => format!("You scored {} out of {}", status.score, status.total),
            None => String::new(),
        }
    }
}

#[must_use]
pub fn map_quiz(quiz: &Quiz) -> QuizVm {
    let page = quiz.page();
    let question = match page {
        Page::Question => quiz.current_question().map(QuestionVm::from),
        _ => None,
    };
    let feedback_html = match page {
        Page::Answer => quiz.feedback().map(sanitize_html),
        _ => None,
    };
    let status = quiz.progress().map(|progress| QuizStatusVm {
        score: quiz.score(),
        current: progress.current,
        total: progress.total,
    });

    QuizVm {
        page,
        question,
        feedback_html,
        status,
        is_loading: quiz.is_awaiting_questions(),
    }
}

/// Options for the quantity picker, always including the current choice.
#[must_use]
pub fn amount_options(current: QuestionAmount) -> Vec<u32> {
    let mut options = AMOUNT_OPTIONS.to_vec();
    if !options.contains(&current.get()) {
        options.push(current.get());
        options.sort_unstable();
    }
    options
}
