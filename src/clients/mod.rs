//! Clients for the two external services: IBM MQ (message source) and
//! watsonx.ai (summary generation).

pub mod mq_client;
pub mod watsonx_client;

pub use mq_client::MqRestClient;
pub use watsonx_client::WatsonxClient;

use async_trait::async_trait;

use crate::errors::DigestError;

/// Source of raw messages.
///
/// `receive` waits a short bounded interval for a message on the named queue.
/// `Ok(None)` means nothing arrived within that interval; it is a normal poll
/// miss, not an error.
#[async_trait]
pub trait QueueClient: Send + Sync {
    async fn receive(&self, queue: &str) -> Result<Option<String>, DigestError>;
}

/// Turns a raw message into a one-line summary via a remote call.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, message: &str) -> Result<String, DigestError>;
}
