//! # board-client
//!
//! Typed async HTTP client for the sprintboard demo API.
//!
//! The remote service models teams containing sprints containing stories
//! containing tasks, each task assigned to a user, and exposes read-only
//! views over that graph at increasing nesting depth, plus a GraphQL
//! endpoint. Operations are grouped by API tag, one module per tag:
//! - `sample_1`: flat lists and progressively nested detail views
//! - `sample_2`: member views filtered by level
//! - `sample_3`: task views carrying ancestor-derived fields
//! - `sample_4`: team summaries with optional sub-trees
//! - `sample_5` / `sample_6`: single-root page compositions
//! - `sample_7`: views built from the reusable base schemas
//! - `demo`: story views with computed fields
//! - `graphql`: query execution and SDL introspection
//!
//! Every operation is a thin wrapper: substitute path parameters into a
//! fixed URL template, issue the request, map the declared error statuses,
//! and deserialize the declared response body. Nothing is interpreted
//! locally.
//!
//! # Usage
//!
//! ```no_run
//! use board_client::ApiClient;
//!
//! # async fn run() -> Result<(), board_client::ApiError> {
//! let client = ApiClient::default();
//! let users = client.sample_1().users().await?;
//! println!("{} users", users.len());
//! # Ok(())
//! # }
//! ```

pub mod demo;
pub mod graphql;
pub mod models;
pub mod sample_1;
pub mod sample_2;
pub mod sample_3;
pub mod sample_4;
pub mod sample_5;
pub mod sample_6;
pub mod sample_7;

mod error;
mod http;

pub use error::ApiError;

// ── Client ─────────────────────────────────────────────────────────

/// Base URL the demo service listens on by default.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8001";

/// HTTP client for the sprintboard demo API.
///
/// Holds the transport and the service base URL. The transport is
/// swappable: build your own [`reqwest::Client`] (proxies, TLS settings,
/// middleware) and pass it to [`ApiClient::with_http`]; [`ApiClient::new`]
/// builds a default one.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiClient {
    /// Create a client for the service at `base_url` with default transport
    /// settings (10 s timeout, `sprintboard/0.1` user agent).
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .user_agent("sprintboard/0.1")
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .expect("reqwest client should build");
        Self::with_http(http, base_url)
    }

    /// Create a client using a caller-supplied transport.
    #[must_use]
    pub fn with_http(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    /// The base URL requests are issued against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join a path template (with parameters already substituted) onto the
    /// base URL.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
