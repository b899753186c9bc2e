//! mqdigest — a worker that drains SWIFT MT103 messages from an IBM MQ queue
//! and prints one-line summaries generated by watsonx.ai.
//!
//! The system has three parts:
//! 1. An MQ REST messaging client that polls a queue with a short bounded
//!    wait ([`clients::MqRestClient`]).
//! 2. A watsonx.ai client that exchanges an API key for an IAM token at
//!    startup and turns each message into a one-line summary
//!    ([`clients::WatsonxClient`]).
//! 3. A processing loop ([`worker::Processor`]) that ties them together:
//!    receive, summarize, emit, with a graceful stop signal and a hard stop
//!    after too many failures.
//!
//! Summaries go to stdout; everything else goes to stderr.

pub mod clients;
pub mod config;
pub mod errors;
pub mod prompt;
pub mod worker;

pub use errors::DigestError;

/// Configure logging on stderr, leaving stdout free for emitted summaries.
pub fn setup_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::INFO)
        .init();
}
