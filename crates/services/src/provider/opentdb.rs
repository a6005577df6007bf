use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use trivia_core::model::{RawQuestion, SessionToken};

use super::{QuestionProvider, QuestionQuery};
use crate::error::ProviderError;

const DEFAULT_BASE_URL: &str = "https://opentdb.com";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpenTdbConfig {
    pub base_url: String,
}

impl OpenTdbConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Reads `TRIVIA_API_BASE_URL`, falling back to the public Open Trivia DB host.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var("TRIVIA_API_BASE_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.into());
        Self { base_url }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url.trim_end_matches('/'))
    }

    /// # Errors
    ///
    /// Returns `url::ParseError` when the base url is malformed.
    pub fn questions_url(&self, query: &QuestionQuery) -> Result<Url, url::ParseError> {
        Url::parse_with_params(&self.endpoint("api.php"), query.to_pairs())
    }

    /// # Errors
    ///
    /// Returns `url::ParseError` when the base url is malformed.
    pub fn token_url(&self) -> Result<Url, url::ParseError> {
        Url::parse_with_params(&self.endpoint("api_token.php"), [("command", "request")])
    }
}

impl Default for OpenTdbConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// HTTP client for the Open Trivia DB API.
#[derive(Clone)]
pub struct OpenTdbProvider {
    client: Client,
    config: OpenTdbConfig,
}

impl OpenTdbProvider {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(OpenTdbConfig::from_env())
    }

    #[must_use]
    pub fn new(config: OpenTdbConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &OpenTdbConfig {
        &self.config
    }

    async fn get_json<T>(&self, url: Url) -> Result<T, ProviderError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ProviderError::HttpStatus(response.status()));
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl QuestionProvider for OpenTdbProvider {
    async fn request_token(&self) -> Result<SessionToken, ProviderError> {
        let body: TokenResponse = self.get_json(self.config.token_url()?).await?;
        if body.response_code != 0 {
            return Err(ProviderError::api(body.response_code));
        }
        Ok(SessionToken::new(body.token))
    }

    async fn fetch_questions(
        &self,
        query: &QuestionQuery,
    ) -> Result<Vec<RawQuestion>, ProviderError> {
        let body: QuestionsResponse = self.get_json(self.config.questions_url(query)?).await?;
        if body.response_code != 0 {
            return Err(ProviderError::api(body.response_code));
        }
        Ok(body.results)
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    response_code: u8,
    token: String,
}

#[derive(Debug, Deserialize)]
struct QuestionsResponse {
    #[serde(default)]
    response_code: u8,
    results: Vec<RawQuestion>,
}
