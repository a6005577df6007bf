use serde::{Deserialize, Serialize};

//
// ─── PROVIDER RECORD ───────────────────────────────────────────────────────────
//

/// A question exactly as the provider serves it.
///
/// Only `question`, `incorrect_answers` and `correct_answer` are required;
/// the remaining fields are carried through when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawQuestion {
    pub question: String,
    pub incorrect_answers: Vec<String>,
    pub correct_answer: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A quiz question decorated from a [`RawQuestion`].
///
/// `answers` holds the incorrect options in provider order followed by the
/// correct answer as the last entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    answers: Vec<String>,
    correct_answer: String,
    category: Option<String>,
    difficulty: Option<String>,
}

impl Question {
    #[must_use]
    pub fn from_raw(raw: RawQuestion) -> Self {
        let RawQuestion {
            question,
            incorrect_answers,
            correct_answer,
            category,
            difficulty,
            kind: _,
        } = raw;

        let mut answers = incorrect_answers;
        answers.push(correct_answer.clone());

        Self {
            text: question,
            answers,
            correct_answer,
            category,
            difficulty,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    #[must_use]
    pub fn difficulty(&self) -> Option<&str> {
        self.difficulty.as_deref()
    }

    /// Exact string comparison; no trimming or case folding.
    #[must_use]
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }
}

impl From<RawQuestion> for Question {
    fn from(raw: RawQuestion) -> Self {
        Self::from_raw(raw)
    }
}

//
// ─── REPOSITORY ────────────────────────────────────────────────────────────────
//

/// The ordered batch of questions for the current game.
///
/// Replaced wholesale per game, never edited element by element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionRepository {
    questions: Vec<Question>,
}

impl QuestionRepository {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn replace(&mut self, questions: Vec<Question>) {
        self.questions = questions;
    }

    pub fn clear(&mut self) {
        self.questions.clear();
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    /// Index of the final question, if any.
    #[must_use]
    pub fn last_index(&self) -> Option<usize> {
        self.questions.len().checked_sub(1)
    }
}

impl FromIterator<Question> for QuestionRepository {
    fn from_iter<I: IntoIterator<Item = Question>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
