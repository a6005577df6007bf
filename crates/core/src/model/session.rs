use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// The screen the quiz is currently on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Intro,
    Question,
    Answer,
    Outro,
}

impl Page {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Page::Intro => "intro",
            Page::Question => "question",
            Page::Answer => "answer",
            Page::Outro => "outro",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque credential issued by the question provider.
///
/// Cloning shares the same allocation, so a token carried across a game
/// reset is the identical value, not a copy of it.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(Arc<str>);

impl SessionToken {
    #[must_use]
    pub fn new(value: impl Into<Arc<str>>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when both tokens point at the same allocation.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

// Tokens end up in log lines; keep the value out of them.
impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SessionToken").field(&"..").finish()
    }
}

/// State that lives for the whole process rather than a single game.
#[derive(Debug, Clone, Default)]
pub struct SessionScope {
    token: Option<SessionToken>,
}

impl SessionScope {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_token(token: SessionToken) -> Self {
        Self { token: Some(token) }
    }

    #[must_use]
    pub fn token(&self) -> Option<&SessionToken> {
        self.token.as_ref()
    }

    #[must_use]
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub fn set_token(&mut self, token: SessionToken) {
        self.token = Some(token);
    }
}

/// One-based position within the current batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub current: usize,
    pub total: usize,
}
