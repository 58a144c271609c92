// src/services/gemini_client.rs
// DOCUMENTATION: Google Gemini generateContent client
// PURPOSE: Plain-text and JSON-mode generation for travel advice

use crate::config::{is_configured, Config};
use crate::errors::ExternalApiError;
use crate::services::http::{build_client, decode_json, AI_TIMEOUT};
use lazy_static::lazy_static;
use regex::Regex;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Body of a ```json ... ``` (or bare ```) fenced block
    static ref CODE_FENCE: Regex = Regex::new(r"(?s)```[a-zA-Z]*\s*\n(.*?)\n?\s*```").unwrap();
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
    generation_config: GenerationConfig,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateResponse {
    fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
            .filter(|t| !t.trim().is_empty())
    }
}

/// Remove a surrounding markdown code fence, if any
pub fn strip_code_fences(text: &str) -> &str {
    match CODE_FENCE.captures(text).and_then(|c| c.get(1)) {
        Some(body) => body.as_str().trim(),
        None => text.trim(),
    }
}

/// Parse model output into `T`, tolerating code fences
pub fn parse_json_reply<T: DeserializeOwned>(text: &str) -> Result<T, ExternalApiError> {
    serde_json::from_str(strip_code_fences(text))
        .map_err(|e| ExternalApiError::Payload(format!("Gemini returned invalid JSON: {}", e)))
}

pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_client(AI_TIMEOUT)?,
            api_key: config.gemini_api_key.clone(),
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
            model: config.gemini_model.clone(),
        })
    }

    async fn generate(
        &self,
        prompt: &str,
        max_output_tokens: u32,
        json_mode: bool,
    ) -> Result<String, ExternalApiError> {
        if !is_configured(&self.api_key) {
            return Err(ExternalApiError::MissingApiKey);
        }

        let body = GenerateRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.7,
                max_output_tokens,
                response_mime_type: json_mode.then_some("application/json"),
            },
        };

        log::debug!("Gemini {} request ({} chars)", self.model, prompt.len());

        let response = self
            .client
            .post(format!("{}/models/{}:generateContent", self.base_url, self.model))
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let raw: GenerateResponse = decode_json("Gemini", response).await?;
        raw.into_text()
            .ok_or_else(|| ExternalApiError::Payload("Gemini returned no text".to_string()))
    }

    /// Free-form text answer
    pub async fn generate_text(
        &self,
        prompt: &str,
        max_output_tokens: u32,
    ) -> Result<String, ExternalApiError> {
        self.generate(prompt, max_output_tokens, false).await
    }

    /// JSON-mode answer deserialized into `T`
    pub async fn generate_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        max_output_tokens: u32,
    ) -> Result<T, ExternalApiError> {
        let text = self.generate(prompt, max_output_tokens, true).await?;
        parse_json_reply(&text)
    }
}
