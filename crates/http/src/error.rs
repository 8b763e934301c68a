use thiserror::Error;

/// Construction-time failures. Terminal: no check is produced.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BuildError {
    #[error("parsing endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
    #[error("evaluating options: {0}")]
    Pattern(#[from] regex::Error),
    #[error("building default http client: {0}")]
    Client(reqwest::Error),
}

/// Per-invocation failures.
///
/// `UnexpectedStatus` and `BodyMismatch` are the expected "check failed"
/// outcomes; their message text is rendered verbatim by the aggregation
/// layer and is therefore part of the contract.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CheckError {
    /// Transport-level failure (DNS, connect, timeout), surfaced verbatim.
    #[error(transparent)]
    Transport(reqwest::Error),
    #[error("reading response body: {0}")]
    ReadBody(reqwest::Error),
    #[error("Unexpected http status code: {0}")]
    UnexpectedStatus(u16),
    #[error("the response body did not match the supplied regex: {0}")]
    BodyMismatch(String),
    #[error("check cancelled")]
    Cancelled,
}
