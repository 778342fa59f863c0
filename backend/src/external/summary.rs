//! Text-generation client for report summaries
//!
//! Wraps the Gemini generateContent endpoint. The core only hands over a
//! prompt and reads back plain text; prompt construction lives in the
//! report service.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::SummaryConfig;
use crate::error::{AppError, AppResult};

/// Text-generation API client
#[derive(Clone)]
pub struct SummaryClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl SummaryClient {
    /// Create a new SummaryClient
    pub fn new(config: &SummaryConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.api_endpoint.clone(),
        }
    }

    /// Create a new SummaryClient with custom base URL (for testing)
    pub fn with_base_url(config: &SummaryConfig, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url,
        }
    }

    /// Generate a text completion for the given prompt
    pub async fn generate(&self, prompt: &str) -> AppResult<String> {
        if self.api_key.is_empty() {
            return Err(AppError::Configuration(
                "summary API key is not set (SARKOP__SUMMARY__API_KEY)".to_string(),
            ));
        }

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::SummaryService(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::SummaryService(format!("{} - {}", status, body)));
        }

        let data: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AppError::SummaryService(format!("failed to parse response: {}", e)))?;

        let text = data
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(AppError::SummaryService(
                "model returned an empty response".to_string(),
            ));
        }
        Ok(text)
    }
}
