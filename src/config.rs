use std::env;

use url::Url;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mq_rest_url: Url,
    pub mq_qmgr: String,
    pub mq_queue: String,
    pub mq_user: String,
    pub mq_password: String,
    pub mq_accept_invalid_certs: bool,
    pub watsonx_api_key: String,
    pub watsonx_project_id: String,
    pub watsonx_url: Url,
    pub watsonx_iam_url: Url,
    pub watsonx_model: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            mq_rest_url: parse_url_var("MQ_REST_URL", "https://localhost:9443")?,
            mq_qmgr: env::var("MQ_QMGR").unwrap_or_else(|_| "QM1".to_string()),
            mq_queue: env::var("MQ_QUEUE").unwrap_or_else(|_| "STREAMED".to_string()),
            mq_user: env::var("MQ_USER").map_err(|e| format!("MQ_USER: {}", e))?,
            mq_password: env::var("MQ_PASSWORD").map_err(|e| format!("MQ_PASSWORD: {}", e))?,
            mq_accept_invalid_certs: env::var("MQ_ACCEPT_INVALID_CERTS")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            watsonx_api_key: env::var("WATSONX_API_KEY")
                .map_err(|e| format!("WATSONX_API_KEY: {}", e))?,
            watsonx_project_id: env::var("WATSONX_PROJECT_ID")
                .map_err(|e| format!("WATSONX_PROJECT_ID: {}", e))?,
            watsonx_url: parse_url_var("WATSONX_URL", "https://eu-gb.ml.cloud.ibm.com")?,
            watsonx_iam_url: parse_url_var("WATSONX_IAM_URL", "https://iam.cloud.ibm.com")?,
            watsonx_model: env::var("WATSONX_MODEL")
                .unwrap_or_else(|_| "ibm/granite-13b-chat-v2".to_string()),
        })
    }
}

fn parse_url_var(name: &str, default: &str) -> Result<Url, String> {
    let raw = env::var(name).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| format!("{}: {}", name, e))
}
