use thiserror::Error;

#[derive(Debug, Error)]
pub enum DigestError {
    #[error("Failed to receive from queue manager: {0}")]
    QueueError(String),

    #[error("Queue manager connection has not been established")]
    NotConnected,

    #[error("Failed to access watsonx.ai API: {0}")]
    WatsonxError(String),

    #[error("Failed to exchange API key for access token: {0}")]
    TokenError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Failed to parse service response: {0}")]
    ParseError(String),
}

impl From<reqwest::Error> for DigestError {
    fn from(error: reqwest::Error) -> Self {
        DigestError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for DigestError {
    fn from(error: serde_json::Error) -> Self {
        DigestError::ParseError(error.to_string())
    }
}
