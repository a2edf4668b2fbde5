use crate::config::Config;
use crate::error::{Error, Result};
use reqwest::Client;
use serde_json::Value as JsonValue;
use std::time::Duration;

#[derive(Clone)]
pub struct AIService {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    max_tokens: u32,
}

impl AIService {
    pub fn new(
        api_key: String,
        client: Client,
        base_url: String,
        model: String,
        max_tokens: u32,
    ) -> Self {
        Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            max_tokens,
        }
    }

    /// Builds the relay from configuration, or `None` when no credential is
    /// configured.
    pub fn from_config(config: &Config) -> Result<Option<Self>> {
        let Some(api_key) = config.openai_api_key.clone() else {
            return Ok(None);
        };

        let client = Client::builder()
            .timeout(Duration::from_secs(config.ai_timeout_secs))
            .build()?;

        Ok(Some(Self::new(
            api_key,
            client,
            config.ai_base_url.clone(),
            config.ai_model.clone(),
            config.ai_max_tokens,
        )))
    }

    pub async fn explain_topic(&self, topic: &str, question: Option<&str>) -> Result<String> {
        let prompt = build_explanation_prompt(topic, question);
        tracing::info!(topic, with_question = question.is_some(), "Requesting topic explanation");

        let payload = serde_json::json!({
            "model": self.model,
            "messages": [
                {"role": "user", "content": prompt}
            ],
            "max_tokens": self.max_tokens,
            "temperature": 0.7
        });

        self.chat_completion(payload)
            .await
            .map_err(|e| Error::Upstream(format!("Failed to generate explanation: {}", e)))
    }

    async fn chat_completion(&self, payload: JsonValue) -> Result<String> {
        let res = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("AI API Error {}: {}", status, text).into());
        }

        let body: JsonValue = res.json().await?;

        body.get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| anyhow::anyhow!("Invalid AI response format").into())
    }
}

pub fn build_explanation_prompt(topic: &str, question: Option<&str>) -> String {
    match question.map(str::trim).filter(|q| !q.is_empty()) {
        Some(question) => format!(
            "You are a patient tutor helping a student prepare for a quiz.\n\
             The student is studying the topic \"{}\" and got stuck on this question:\n\
             \"{}\"\n\n\
             Explain the key concepts of the topic needed to answer the question. \
             Keep it clear and concise, under 200 words, and do not just state the answer.",
            topic, question
        ),
        None => format!(
            "You are a patient tutor helping a student prepare for a quiz.\n\
             Explain the topic \"{}\" in clear, simple terms. \
             Cover the core ideas and one short example, in under 200 words.",
            topic
        ),
    }
}
