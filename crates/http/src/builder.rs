use std::collections::HashSet;
use std::sync::RwLock;
use std::time::Duration;

use regex::bytes::Regex;
use reqwest::Method;
use url::Url;

use crate::check::HttpCheck;
use crate::error::BuildError;

/// Timeout of the client built when the caller supplies none.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// An edit to the allowed-status set, kept in call order so a later edit
/// can undo an earlier one (`deny_status(200)` before any `allow_status`
/// leaves a set no code matches).
#[derive(Debug, Clone, Copy)]
enum StatusEdit {
    Allow(u16),
    Deny(u16),
}

/// Builder for [`HttpCheck`].
///
/// Every knob has a documented default; everything fallible (endpoint
/// syntax, regex syntax, default-client construction) is validated in one
/// pass by [`build`](Self::build).
pub struct HttpCheckBuilder {
    endpoint: String,
    client: Option<reqwest::Client>,
    method: Method,
    body: Vec<u8>,
    username: Option<String>,
    password: Option<String>,
    pattern: Option<String>,
    status_edits: Vec<StatusEdit>,
}

impl HttpCheckBuilder {
    pub(crate) fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: None,
            method: Method::GET,
            body: Vec::new(),
            username: None,
            password: None,
            pattern: None,
            status_edits: Vec::new(),
        }
    }

    /// Replace the HTTP client used for requests. Default: an owned client
    /// with a 10 second timeout. `reqwest::Client` is cheaply cloneable, so
    /// a client shared across many checks costs one handle per check.
    pub fn client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Set the request method. Default: `GET`.
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Set the body sent with each request. Default: empty.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Set basic-auth credentials. They are attached per request only when
    /// both username and password are non-empty. Default: none.
    pub fn basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Add a status code to the success set. The set starts as `{200}`;
    /// edits apply in call order.
    pub fn allow_status(mut self, code: u16) -> Self {
        self.status_edits.push(StatusEdit::Allow(code));
        self
    }

    /// Remove a status code from the success set (no-op if absent). Useful
    /// to drop the default 200.
    pub fn deny_status(mut self, code: u16) -> Self {
        self.status_edits.push(StatusEdit::Deny(code));
        self
    }

    /// Require the response body to match `pattern`. The pattern is
    /// compiled at build time; an invalid pattern fails the build.
    /// Default: no content check.
    pub fn match_body(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Validate the configuration and produce the check.
    pub fn build(self) -> Result<HttpCheck, BuildError> {
        let url = Url::parse(&self.endpoint)?;

        let matcher = self
            .pattern
            .as_deref()
            .map(Regex::new)
            .transpose()?;

        let client = match self.client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .timeout(DEFAULT_TIMEOUT)
                .build()
                .map_err(BuildError::Client)?,
        };

        let mut allowed: HashSet<u16> = HashSet::from([200]);
        for edit in &self.status_edits {
            match edit {
                StatusEdit::Allow(code) => {
                    allowed.insert(*code);
                }
                StatusEdit::Deny(code) => {
                    allowed.remove(code);
                }
            }
        }

        Ok(HttpCheck {
            url,
            client,
            method: self.method,
            body: self.body,
            username: self.username,
            password: self.password,
            matcher,
            allowed: RwLock::new(allowed),
        })
    }
}
