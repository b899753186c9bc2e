//! watsonx.ai text-generation client.
//!
//! Exchanges an IBM Cloud API key for an IAM bearer token at construction
//! time, then issues one generation request per message. Responses are
//! trimmed to their first line before being handed back.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;
use url::Url;

use crate::clients::Summarizer;
use crate::config::AppConfig;
use crate::errors::DigestError;
use crate::prompt;

const GENERATION_PATH: &str = "ml/v1/text/generation?version=2023-05-29";
const IAM_TOKEN_PATH: &str = "identity/token";
const IAM_GRANT_TYPE: &str = "urn:ibm:params:oauth:grant-type:apikey";

const DECODING_METHOD: &str = "greedy";
const MAX_NEW_TOKENS: u32 = 200;
const MIN_NEW_TOKENS: u32 = 0;
const REPETITION_PENALTY: u32 = 1;
const HAP_THRESHOLD: f64 = 0.5;

/// Generation can take a while on a busy region; allow well past the
/// service-side limit before giving up on the socket.
const HTTP_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

pub struct WatsonxClient {
    http: Client,
    access_token: String,
    project_id: String,
    model_id: String,
    generation_url: Url,
}

impl WatsonxClient {
    /// Builds the client, exchanging the configured API key for an access
    /// token. Fails if the exchange fails or yields an empty token, so a
    /// client that constructs successfully is ready to summarize.
    pub async fn new(config: &AppConfig) -> Result<Self, DigestError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;

        let access_token =
            exchange_api_key(&http, &config.watsonx_iam_url, &config.watsonx_api_key).await?;

        let generation_url = config
            .watsonx_url
            .join(GENERATION_PATH)
            .map_err(|e| DigestError::WatsonxError(format!("bad watsonx URL: {}", e)))?;

        Ok(Self {
            http,
            access_token,
            project_id: config.watsonx_project_id.clone(),
            model_id: config.watsonx_model.clone(),
            generation_url,
        })
    }
}

#[async_trait]
impl Summarizer for WatsonxClient {
    async fn summarize(&self, message: &str) -> Result<String, DigestError> {
        let request_body = json!({
            "input": prompt::build_input(message),
            "parameters": {
                "decoding_method": DECODING_METHOD,
                "max_new_tokens": MAX_NEW_TOKENS,
                "min_new_tokens": MIN_NEW_TOKENS,
                "stop_sequences": [],
                "repetition_penalty": REPETITION_PENALTY
            },
            "model_id": self.model_id,
            "project_id": self.project_id,
            "moderations": {
                "hap": {
                    "input": {
                        "enabled": true,
                        "threshold": HAP_THRESHOLD,
                        "mask": { "remove_entity_value": true }
                    },
                    "output": {
                        "enabled": true,
                        "threshold": HAP_THRESHOLD,
                        "mask": { "remove_entity_value": true }
                    }
                }
            }
        });

        info!("Requesting summary from model {}", self.model_id);

        let response = self
            .http
            .post(self.generation_url.clone())
            .bearer_auth(&self.access_token)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| DigestError::HttpError(format!("watsonx request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(DigestError::WatsonxError(format!(
                "generation request returned [{}] {}",
                status, error_text
            )));
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| DigestError::ParseError(format!("watsonx response: {}", e)))?;

        let generated = extract_generated_text(&response_json).ok_or_else(|| {
            DigestError::WatsonxError("no generated text in response".to_string())
        })?;

        Ok(prompt::first_line(&generated).to_string())
    }
}

/// Exchanges an IBM Cloud API key for a short-lived IAM access token.
async fn exchange_api_key(
    http: &Client,
    iam_url: &Url,
    api_key: &str,
) -> Result<String, DigestError> {
    let url = iam_url
        .join(IAM_TOKEN_PATH)
        .map_err(|e| DigestError::TokenError(format!("bad IAM URL: {}", e)))?;

    let response = http
        .post(url)
        .form(&[("grant_type", IAM_GRANT_TYPE), ("apikey", api_key)])
        .send()
        .await
        .map_err(|e| DigestError::HttpError(format!("IAM token request failed: {}", e)))?;

    if !response.status().is_success() {
        return Err(DigestError::TokenError(format!(
            "IAM returned status {}",
            response.status()
        )));
    }

    let token: TokenResponse = response
        .json()
        .await
        .map_err(|e| DigestError::ParseError(format!("IAM token response: {}", e)))?;

    if token.access_token.is_empty() {
        return Err(DigestError::TokenError(
            "IAM response carried an empty access token".to_string(),
        ));
    }

    Ok(token.access_token)
}

fn extract_generated_text(response: &Value) -> Option<String> {
    response
        .get("results")
        .and_then(|r| r.as_array())
        .and_then(|r| r.first())
        .and_then(|r| r.get("generated_text"))
        .and_then(|t| t.as_str())
        .map(|t| t.to_string())
}

#[cfg(test)]
mod tests {
    use super::extract_generated_text;
    use serde_json::json;

    #[test]
    fn extracts_generated_text_from_first_result() {
        let response = json!({
            "model_id": "ibm/granite-13b-chat-v2",
            "results": [
                { "generated_text": " A sent 10 GBP to B.\nExtra detail.", "stop_reason": "eos_token" }
            ]
        });
        assert_eq!(
            extract_generated_text(&response).as_deref(),
            Some(" A sent 10 GBP to B.\nExtra detail.")
        );
    }

    #[test]
    fn missing_results_yields_none() {
        assert!(extract_generated_text(&json!({})).is_none());
        assert!(extract_generated_text(&json!({ "results": [] })).is_none());
        assert!(extract_generated_text(&json!({ "results": [{}] })).is_none());
    }
}
