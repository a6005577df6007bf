mod opentdb;

use async_trait::async_trait;

use trivia_core::model::{QuestionAmount, RawQuestion, SessionToken};

use crate::error::ProviderError;

pub use opentdb::{OpenTdbConfig, OpenTdbProvider};

/// Source of session tokens and question batches.
#[async_trait]
pub trait QuestionProvider: Send + Sync {
    /// Request a fresh session token.
    async fn request_token(&self) -> Result<SessionToken, ProviderError>;

    /// Fetch a batch of raw question records for `query`.
    async fn fetch_questions(&self, query: &QuestionQuery) -> Result<Vec<RawQuestion>, ProviderError>;
}

/// Parameters for a question batch request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionQuery {
    amount: QuestionAmount,
    token: Option<SessionToken>,
    params: Vec<(String, String)>,
}

impl QuestionQuery {
    #[must_use]
    pub fn new(amount: QuestionAmount) -> Self {
        Self {
            amount,
            token: None,
            params: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_token(mut self, token: Option<SessionToken>) -> Self {
        self.token = token;
        self
    }

    /// Add a free-form parameter. Later values for the same key win.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn with_params<K, V>(mut self, params: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.params
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    #[must_use]
    pub fn amount(&self) -> QuestionAmount {
        self.amount
    }

    #[must_use]
    pub fn token(&self) -> Option<&SessionToken> {
        self.token.as_ref()
    }

    /// Query pairs in request order.
    ///
    /// `amount` comes first, then `token` when present, then each free-form
    /// parameter. A parameter named `amount` or `token` (or repeated) replaces
    /// the earlier value in place instead of adding a second pair.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = Vec::with_capacity(self.params.len() + 2);
        set_pair(&mut pairs, "amount", self.amount.to_string());
        if let Some(token) = &self.token {
            set_pair(&mut pairs, "token", token.as_str().to_string());
        }
        for (key, value) in &self.params {
            set_pair(&mut pairs, key, value.clone());
        }
        pairs
    }
}

fn set_pair(pairs: &mut Vec<(String, String)>, key: &str, value: String) {
    match pairs.iter_mut().find(|(existing, _)| existing == key) {
        Some((_, slot)) => *slot = value,
        None => pairs.push((key.to_string(), value)),
    }
}
