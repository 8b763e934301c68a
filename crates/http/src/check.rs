use std::collections::HashSet;
use std::sync::RwLock;

use async_trait::async_trait;
use regex::bytes::Regex;
use reqwest::Method;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use url::Url;

use vigil_core::{CheckResponse, Checker};

use crate::builder::HttpCheckBuilder;
use crate::error::CheckError;

/// A configured HTTP health check: one request per invocation, classified
/// against the allowed-status set and the optional body matcher.
///
/// Safe to invoke concurrently against the same instance; the allowed-status
/// set can be reconfigured between (or during) invocations via
/// [`allow_status`](Self::allow_status) / [`deny_status`](Self::deny_status).
#[derive(Debug)]
pub struct HttpCheck {
    pub(crate) url: Url,
    pub(crate) client: reqwest::Client,
    pub(crate) method: Method,
    pub(crate) body: Vec<u8>,
    pub(crate) username: Option<String>,
    pub(crate) password: Option<String>,
    pub(crate) matcher: Option<Regex>,
    pub(crate) allowed: RwLock<HashSet<u16>>,
}

impl HttpCheck {
    /// Start building a check against `endpoint`.
    pub fn builder(endpoint: impl Into<String>) -> HttpCheckBuilder {
        HttpCheckBuilder::new(endpoint)
    }

    /// The target endpoint.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Add a status code to the success set.
    pub fn allow_status(&self, code: u16) {
        self.allowed
            .write()
            .expect("allowed status set lock poisoned")
            .insert(code);
    }

    /// Remove a status code from the success set (no-op if absent).
    pub fn deny_status(&self, code: u16) {
        self.allowed
            .write()
            .expect("allowed status set lock poisoned")
            .remove(&code);
    }

    /// Whether `code` is currently in the success set.
    pub fn is_status_allowed(&self, code: u16) -> bool {
        self.allowed
            .read()
            .expect("allowed status set lock poisoned")
            .contains(&code)
    }

    /// Perform one request and classify the response.
    ///
    /// Transport errors surface verbatim; `cancel` aborts both the request
    /// and the body read. The status check runs before the content check
    /// and short-circuits it.
    pub async fn run(&self, cancel: &CancellationToken) -> Result<(), CheckError> {
        debug!("http check: {} {}", self.method, self.url);

        let mut request = self
            .client
            .request(self.method.clone(), self.url.clone())
            .body(self.body.clone());
        if let (Some(username), Some(password)) = (&self.username, &self.password) {
            if !username.is_empty() && !password.is_empty() {
                request = request.basic_auth(username, Some(password));
            }
        }

        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(CheckError::Cancelled),
            result = request.send() => result.map_err(CheckError::Transport)?,
        };

        let status = response.status().as_u16();
        let body = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(CheckError::Cancelled),
            result = response.bytes() => result.map_err(CheckError::ReadBody)?,
        };

        if !self.is_status_allowed(status) {
            debug!("http check {} failed: status {}", self.url, status);
            return Err(CheckError::UnexpectedStatus(status));
        }

        if let Some(matcher) = &self.matcher {
            if !matcher.is_match(&body) {
                debug!("http check {} failed: body mismatch", self.url);
                return Err(CheckError::BodyMismatch(matcher.to_string()));
            }
        }

        Ok(())
    }
}

#[async_trait]
impl Checker for HttpCheck {
    async fn check(&self, cancel: &CancellationToken) -> CheckResponse {
        self.run(cancel).await.into()
    }
}
