//! LLM-backed preference analyzer.
//!
//! Talks to any OpenAI-compatible `/chat/completions` endpoint. The catalog
//! only hands over a pre-built tasting summary and takes prose back; prompt
//! wording lives here and nowhere else.

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::domain::repository::PreferenceAnalyzerPort;
use crate::error::CatalogError;

const SYSTEM_PROMPT: &str = "You are a professional coffee cupper and flavor expert. \
    Provide detailed, actionable analysis of coffee preferences based on tasting data. \
    Be specific and helpful.";

#[derive(Clone)]
pub struct OpenAiAnalyzer {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

impl OpenAiAnalyzer {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }
}

impl PreferenceAnalyzerPort for OpenAiAnalyzer {
    async fn analyze(&self, summary: &str) -> Result<String, CatalogError> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_owned(),
                },
                ChatMessage {
                    role: "user",
                    content: summary.to_owned(),
                },
            ],
            temperature: 0.7,
            max_tokens: 1500,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("send completion request")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Internal(anyhow::anyhow!(
                "completion endpoint returned {status}: {body}"
            )));
        }

        let result: ChatCompletionResponse = response
            .json()
            .await
            .context("parse completion response")?;
        let content = result
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_else(|| "Unable to generate analysis.".to_owned());
        Ok(content)
    }
}
