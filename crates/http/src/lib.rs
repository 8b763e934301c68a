//! Configurable HTTP health check.
//!
//! One check targets one endpoint; each invocation performs a single HTTP
//! round trip and classifies the response against the configured rules
//! (allowed status codes, optional body regex). Retries, scheduling, and
//! result aggregation belong to the caller.
//!
//! ```no_run
//! use tokio_util::sync::CancellationToken;
//! use vigil_http::HttpCheck;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let check = HttpCheck::builder("http://127.0.0.1:8080/healthz")
//!     .allow_status(204)
//!     .match_body("^ok")
//!     .build()?;
//!
//! match check.run(&CancellationToken::new()).await {
//!     Ok(()) => println!("healthy"),
//!     Err(e) => println!("unhealthy: {e}"),
//! }
//! # Ok(())
//! # }
//! ```

mod builder;
mod check;
mod error;

pub use builder::HttpCheckBuilder;
pub use check::HttpCheck;
pub use error::{BuildError, CheckError};
pub use vigil_core::{CheckResponse, Checker};
