use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::EmbeddingProvider;
use crate::error::{ChunkError, ChunkResult};
use crate::models::{EmbeddingModel, EmbeddingProviderType, EmbeddingResult};

/// Cloudflare Workers AI provider configuration
#[derive(Debug, Clone)]
pub struct WorkersAiConfig {
    pub account_id: String,
    pub api_token: String,
    pub base_url: String,
}

impl WorkersAiConfig {
    pub fn new(account_id: String, api_token: String) -> Self {
        Self {
            account_id,
            api_token,
            base_url: "https://api.cloudflare.com/client/v4".to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn from_env() -> ChunkResult<Self> {
        let account_id = std::env::var("CLOUDFLARE_ACCOUNT_ID")
            .map_err(|_| ChunkError::Config("CLOUDFLARE_ACCOUNT_ID not set".to_string()))?;

        let api_token = std::env::var("CLOUDFLARE_API_TOKEN")
            .map_err(|_| ChunkError::Config("CLOUDFLARE_API_TOKEN not set".to_string()))?;

        let base_url = std::env::var("CLOUDFLARE_API_BASE_URL")
            .unwrap_or_else(|_| "https://api.cloudflare.com/client/v4".to_string());

        Ok(Self {
            account_id,
            api_token,
            base_url,
        })
    }
}

/// Workers AI embeddings provider.
///
/// Runs text-embedding models (`@cf/baai/bge-*`) through the Workers AI
/// REST API. One request embeds a whole batch; the response carries one
/// vector per input, in input order.
pub struct WorkersAiProvider {
    client: Client,
    config: WorkersAiConfig,
}

impl WorkersAiProvider {
    pub fn new(config: WorkersAiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn from_env() -> ChunkResult<Self> {
        Ok(Self::new(WorkersAiConfig::from_env()?))
    }

    fn run_url(&self, model: EmbeddingModel) -> String {
        format!(
            "{}/accounts/{}/ai/run/{}",
            self.config.base_url,
            self.config.account_id,
            model.model_name()
        )
    }
}

#[derive(Debug, Serialize)]
struct RunRequest<'a> {
    text: &'a [String],
}

#[derive(Debug, Deserialize)]
struct RunResponse {
    result: Option<RunResult>,
    success: bool,
    #[serde(default)]
    errors: Vec<ApiError>,
}

#[derive(Debug, Deserialize)]
struct RunResult {
    data: Vec<Vec<f32>>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: i64,
    message: String,
}

#[async_trait]
impl EmbeddingProvider for WorkersAiProvider {
    fn provider_type(&self) -> EmbeddingProviderType {
        EmbeddingProviderType::WorkersAi
    }

    async fn embed(&self, model: EmbeddingModel, text: &str) -> ChunkResult<EmbeddingResult> {
        let results = self.embed_batch(model, &[text.to_string()]).await?;
        results
            .into_iter()
            .next()
            .ok_or_else(|| ChunkError::Embedding("No embedding returned".to_string()))
    }

    async fn embed_batch(
        &self,
        model: EmbeddingModel,
        texts: &[String],
    ) -> ChunkResult<Vec<EmbeddingResult>> {
        if texts.is_empty() {
            return Ok(vec![]);
        }

        let response = self
            .client
            .post(self.run_url(model))
            .bearer_auth(&self.config.api_token)
            .json(&RunRequest { text: texts })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(ChunkError::Embedding(format!(
                "Workers AI API error ({}): {}",
                status, error_text
            )));
        }

        let run_response: RunResponse = response
            .json()
            .await
            .map_err(|e| ChunkError::Embedding(format!("Invalid Workers AI response: {}", e)))?;

        if !run_response.success {
            let messages: Vec<String> = run_response
                .errors
                .iter()
                .map(|e| format!("{} (code {})", e.message, e.code))
                .collect();
            return Err(ChunkError::Embedding(format!(
                "Workers AI request failed: {}",
                messages.join("; ")
            )));
        }

        let result = run_response
            .result
            .ok_or_else(|| ChunkError::Embedding("No embedding data returned".to_string()))?;

        Ok(result.data.into_iter().map(EmbeddingResult::new).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_url_includes_account_and_model() {
        let provider = WorkersAiProvider::new(
            WorkersAiConfig::new("acct123".to_string(), "token".to_string())
                .with_base_url("http://localhost:8787".to_string()),
        );

        assert_eq!(
            provider.run_url(EmbeddingModel::BgeLargeEnV15),
            "http://localhost:8787/accounts/acct123/ai/run/@cf/baai/bge-large-en-v1.5"
        );
    }

    #[test]
    fn test_response_parsing() {
        let payload = r#"{
            "result": {"shape": [2, 3], "data": [[0.1, 0.2, 0.3], [0.4, 0.5, 0.6]]},
            "success": true,
            "errors": [],
            "messages": []
        }"#;

        let parsed: RunResponse = serde_json::from_str(payload).unwrap();
        assert!(parsed.success);
        assert_eq!(parsed.result.unwrap().data.len(), 2);
    }

    #[test]
    fn test_error_response_parsing() {
        let payload = r#"{
            "result": null,
            "success": false,
            "errors": [{"code": 7009, "message": "Upstream service unavailable"}]
        }"#;

        let parsed: RunResponse = serde_json::from_str(payload).unwrap();
        assert!(!parsed.success);
        assert_eq!(parsed.errors[0].code, 7009);
    }
}
