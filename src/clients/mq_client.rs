//! IBM MQ REST messaging client.
//!
//! Uses the destructive-get endpoint of the MQ REST API to consume one
//! message at a time, with a short server-side wait so the caller polls
//! rather than blocking indefinitely.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::info;
use url::Url;

use crate::clients::QueueClient;
use crate::config::AppConfig;
use crate::errors::DigestError;

/// How long the queue manager holds a receive open before reporting "no
/// message available", in milliseconds.
const RECEIVE_WAIT_MS: u64 = 50;

/// Overall HTTP timeout per request. Must comfortably exceed the receive
/// wait so a slow broker surfaces as an error, not a hang.
const HTTP_TIMEOUT_SECS: u64 = 30;

pub struct MqRestClient {
    http: Client,
    base_url: Url,
    qmgr: String,
    user: String,
    password: String,
    connected: AtomicBool,
}

impl MqRestClient {
    pub fn new(config: &AppConfig) -> Result<Self, DigestError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .danger_accept_invalid_certs(config.mq_accept_invalid_certs)
            .build()?;

        Ok(Self {
            http,
            base_url: config.mq_rest_url.clone(),
            qmgr: config.mq_qmgr.clone(),
            user: config.mq_user.clone(),
            password: config.mq_password.clone(),
            connected: AtomicBool::new(false),
        })
    }

    /// Verifies the queue manager is reachable and the credentials are
    /// accepted. Must succeed before `receive` is usable.
    pub async fn connect(&self) -> Result<(), DigestError> {
        let url = self
            .endpoint("ibmmq/rest/v2/login")
            .map_err(|e| DigestError::QueueError(format!("bad REST URL: {}", e)))?;

        let response = self
            .http
            .get(url)
            .basic_auth(&self.user, Some(&self.password))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(DigestError::QueueError(format!(
                "login to queue manager {} failed with status {}",
                self.qmgr,
                response.status()
            )));
        }

        info!("Connected to queue manager {}", self.qmgr);
        self.connected.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn endpoint(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(path)
    }
}

#[async_trait]
impl QueueClient for MqRestClient {
    async fn receive(&self, queue: &str) -> Result<Option<String>, DigestError> {
        if !self.connected.load(Ordering::SeqCst) {
            return Err(DigestError::NotConnected);
        }

        let path = format!(
            "ibmmq/rest/v2/messaging/qmgr/{}/queue/{}/message",
            self.qmgr, queue
        );
        let mut url = self
            .endpoint(&path)
            .map_err(|e| DigestError::QueueError(format!("bad queue name {}: {}", queue, e)))?;
        url.query_pairs_mut()
            .append_pair("wait", &RECEIVE_WAIT_MS.to_string());

        let response = self
            .http
            .delete(url)
            .basic_auth(&self.user, Some(&self.password))
            // Required by the REST gateway for any state-changing verb; the
            // value itself is arbitrary.
            .header("ibm-mq-rest-csrf-token", "mqdigest")
            .header("Accept", "text/plain")
            .send()
            .await?;

        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        if !response.status().is_success() {
            return Err(DigestError::QueueError(format!(
                "receive from {} failed with status {}",
                queue,
                response.status()
            )));
        }

        let body = response.text().await?;
        if body.is_empty() {
            return Ok(None);
        }

        Ok(Some(body))
    }
}
