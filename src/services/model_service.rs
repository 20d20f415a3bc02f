use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};

use crate::{config::Config, errors::GenerationError};

/// The external text-generation provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Whether a credential is configured. Checked before any call.
    fn has_credentials(&self) -> bool;

    /// Sends one prompt with a structured-output schema. `Ok(None)` means
    /// the provider answered without any text.
    async fn generate(&self, prompt: &str, schema: &Value) -> Result<Option<String>, GenerationError>;
}

/// Client for an OpenAI-compatible chat completions endpoint.
pub struct ChatCompletionsGenerator {
    client: Client,
    api_base: String,
    api_key: Option<SecretString>,
    model: String,
}

impl ChatCompletionsGenerator {
    pub fn new(client: Client, api_base: &str, api_key: Option<SecretString>, model: &str) -> Self {
        Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key,
            model: model.to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Client::new(),
            &config.generation_api_base,
            config.generation_api_key.clone(),
            &config.generation_model,
        )
    }

    fn request_body(&self, prompt: &str, schema: &Value) -> Value {
        json!({
            "model": self.model,
            "messages": [
                {"role": "user", "content": prompt}
            ],
            "response_format": {
                "type": "json_schema",
                "json_schema": {
                    "name": "exam_package",
                    "schema": schema
                }
            }
        })
    }
}

#[async_trait]
impl TextGenerator for ChatCompletionsGenerator {
    fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }

    async fn generate(&self, prompt: &str, schema: &Value) -> Result<Option<String>, GenerationError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or(GenerationError::ProviderUnavailable)?;

        log::info!(
            "Requesting exam package from model {} (prompt {} chars)",
            self.model,
            prompt.len()
        );

        let res = self
            .client
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(api_key.expose_secret())
            .json(&self.request_body(prompt, schema))
            .send()
            .await
            .map_err(|e| GenerationError::ProviderError(e.to_string()))?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(GenerationError::ProviderError(format!(
                "provider returned {}: {}",
                status,
                crate::services::response_repair::excerpt(&text, 200)
            )));
        }

        let body: Value = res
            .json()
            .await
            .map_err(|e| GenerationError::ProviderError(e.to_string()))?;

        Ok(extract_message_content(&body))
    }
}

/// Text of the first choice, or `None` when there is none or it is blank.
pub fn extract_message_content(body: &Value) -> Option<String> {
    body.get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(|c| c.as_str())
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_follow_config() {
        let mut config = Config::test_config();
        assert!(ChatCompletionsGenerator::from_config(&config).has_credentials());

        config.generation_api_key = None;
        assert!(!ChatCompletionsGenerator::from_config(&config).has_credentials());
    }

    #[tokio::test]
    async fn test_generate_without_key_is_unavailable() {
        let generator = ChatCompletionsGenerator::new(Client::new(), "http://127.0.0.1:9", None, "m");

        let result = generator.generate("prompt", &json!({})).await;
        assert_eq!(result, Err(GenerationError::ProviderUnavailable));
    }

    #[test]
    fn test_request_body_carries_schema() {
        let generator =
            ChatCompletionsGenerator::new(Client::new(), "http://localhost/v1/", None, "gemini-2.5-flash");
        let body = generator.request_body("buat soal", &json!({"type": "object"}));

        assert_eq!(body["model"], "gemini-2.5-flash");
        assert_eq!(body["messages"][0]["content"], "buat soal");
        assert_eq!(body["response_format"]["type"], "json_schema");
        assert_eq!(body["response_format"]["json_schema"]["schema"]["type"], "object");
        assert_eq!(generator.api_base, "http://localhost/v1");
    }

    #[test]
    fn test_extract_message_content() {
        let body = json!({"choices": [{"message": {"content": "{\"title\":\"X\"}"}}]});
        assert_eq!(
            extract_message_content(&body).as_deref(),
            Some("{\"title\":\"X\"}")
        );

        let empty = json!({"choices": [{"message": {"content": "  "}}]});
        assert_eq!(extract_message_content(&empty), None);

        let no_choices = json!({"choices": []});
        assert_eq!(extract_message_content(&no_choices), None);
    }
}
