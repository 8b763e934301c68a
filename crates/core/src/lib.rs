//! Capability interface between individual health checks and whatever
//! aggregation layer registers and reports them.
//!
//! A registry holds named `Box<dyn Checker>` values and invokes each one to
//! build an overall health report. Check implementations (HTTP, TCP, ...)
//! live in their own crates; this crate only defines the seam.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Outcome of a single check invocation.
///
/// Carries no error on success, or one descriptive error on failure. The
/// aggregation layer is expected to render the error message verbatim per
/// named check, so check implementations treat their message text as part
/// of their contract.
#[derive(Debug, Default)]
pub struct CheckResponse {
    error: Option<anyhow::Error>,
}

impl CheckResponse {
    /// A passing result.
    pub fn ok() -> Self {
        Self { error: None }
    }

    /// A failing result carrying the reason.
    pub fn fail(error: impl Into<anyhow::Error>) -> Self {
        Self {
            error: Some(error.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn error(&self) -> Option<&anyhow::Error> {
        self.error.as_ref()
    }

    pub fn into_error(self) -> Option<anyhow::Error> {
        self.error
    }
}

impl<E: Into<anyhow::Error>> From<Result<(), E>> for CheckResponse {
    fn from(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Self::ok(),
            Err(e) => Self::fail(e),
        }
    }
}

/// A single unit of health validation.
///
/// Implementations must be safe to invoke concurrently from multiple tasks
/// against the same instance. The token is the caller's deadline/cancellation
/// signal; a cancelled check returns a failing response promptly rather than
/// completing the probe.
#[async_trait]
pub trait Checker: Send + Sync {
    async fn check(&self, cancel: &CancellationToken) -> CheckResponse;
}

#[cfg(test)]
mod tests {
    use super::*;
    use thiserror::Error;

    #[derive(Debug, Error)]
    #[error("probe exploded: {0}")]
    struct ProbeError(String);

    #[test]
    fn response_ok_carries_no_error() {
        let resp = CheckResponse::ok();
        assert!(resp.is_ok());
        assert!(resp.error().is_none());
    }

    #[test]
    fn response_fail_renders_message_verbatim() {
        let resp = CheckResponse::fail(ProbeError("dns".into()));
        assert!(!resp.is_ok());
        assert_eq!(
            resp.error().map(|e| e.to_string()).as_deref(),
            Some("probe exploded: dns")
        );
    }

    #[test]
    fn response_from_result() {
        let ok: CheckResponse = Result::<(), ProbeError>::Ok(()).into();
        assert!(ok.is_ok());

        let fail: CheckResponse = Result::<(), _>::Err(ProbeError("io".into())).into();
        assert_eq!(
            fail.into_error().map(|e| e.to_string()).as_deref(),
            Some("probe exploded: io")
        );
    }

    struct AlwaysOk;

    #[async_trait]
    impl Checker for AlwaysOk {
        async fn check(&self, _cancel: &CancellationToken) -> CheckResponse {
            CheckResponse::ok()
        }
    }

    #[tokio::test]
    async fn checker_is_object_safe() {
        let check: Box<dyn Checker> = Box::new(AlwaysOk);
        let resp = check.check(&CancellationToken::new()).await;
        assert!(resp.is_ok());
    }
}
