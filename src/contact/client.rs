use std::future::Future;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Deserialize;
use thiserror::Error;

use super::FormFields;

pub const DEFAULT_ENDPOINT: &str = "https://formspree.io/f/myznqrjk";

const MAX_DETAIL_LEN: usize = 200;

/// Where contact submissions are relayed to.
///
/// The browser bundle has no runtime environment, so the endpoint is fixed at
/// compile time: `CONTACT_ENDPOINT` when set during the build, otherwise
/// [`DEFAULT_ENDPOINT`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactConfig {
    pub endpoint: String,
}

impl ContactConfig {
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self::with_endpoint(option_env!("CONTACT_ENDPOINT").unwrap_or(DEFAULT_ENDPOINT))
    }
}

/// Why a submission did not go through. Only ever logged; the visitor sees
/// [`super::FAILURE_MESSAGE`].
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("request to form relay failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("form relay returned {status}: {detail}")]
    Server { status: u16, detail: String },
}

/// Sends one completed form somewhere.
pub trait Submitter {
    fn submit(&self, fields: &FormFields) -> impl Future<Output = Result<(), SubmitError>>;
}

/// Posts the form as JSON to a Formspree-compatible relay.
#[derive(Debug, Clone)]
pub struct FormRelayClient {
    endpoint: String,
    http_client: reqwest::Client,
}

impl FormRelayClient {
    pub fn new(config: &ContactConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            http_client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for FormRelayClient {
    fn default() -> Self {
        Self::new(&ContactConfig::default())
    }
}

impl Submitter for FormRelayClient {
    async fn submit(&self, fields: &FormFields) -> Result<(), SubmitError> {
        log::debug!("sending contact form to {}", self.endpoint);
        let response = self
            .http_client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(fields)
            .send()
            .await
            .inspect_err(|e| log::error!("contact form request failed: {e}"))?;

        let status = response.status();
        if status.is_success() {
            log::debug!("contact form accepted with status {status}");
            return Ok(());
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| String::from("Unable to read response"));
        let detail = describe_failure(&body);
        log::error!("form relay rejected contact form with status {status}: {detail}");
        Err(SubmitError::Server {
            status: status.as_u16(),
            detail,
        })
    }
}

#[derive(Deserialize, Debug, Default)]
struct RelayErrorBody {
    #[serde(default)]
    errors: Vec<RelayErrorItem>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Deserialize, Debug)]
struct RelayErrorItem {
    message: String,
}

/// Pulls the relay's error messages out of a failure body, falling back to the
/// raw text.
fn describe_failure(body: &str) -> String {
    let messages = serde_json::from_str::<RelayErrorBody>(body)
        .map(|parsed| {
            parsed
                .errors
                .into_iter()
                .map(|e| e.message)
                .chain(parsed.error)
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    let detail = if !messages.is_empty() {
        messages.join("; ")
    } else if body.trim().is_empty() {
        "empty response body".to_string()
    } else {
        body.trim().to_string()
    };
    detail.chars().take(MAX_DETAIL_LEN).collect()
}
