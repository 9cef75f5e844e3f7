//! Settings for reaching the finance tracker REST backend.

use std::time::Duration;

/// The path prefix that the backend API is served under when none is given.
pub const DEFAULT_API_PREFIX: &str = "/api";

/// How long to wait for the backend to respond to a single request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the backend lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    /// The maximum time a single request may take before it is treated as a
    /// transport failure.
    pub request_timeout: Duration,
}

impl ApiConfig {
    /// Create a config from the backend origin (e.g. `http://localhost:8000`)
    /// and the path prefix the API is mounted under (e.g. `/api`).
    ///
    /// Slashes between the two parts are normalised so that `base_url` never
    /// ends with a slash. An empty prefix means the API sits at the origin.
    pub fn new(backend_url: &str, api_prefix: &str) -> Self {
        let origin = backend_url.trim_end_matches('/');
        let prefix = api_prefix.trim_matches('/');

        let base_url = if prefix.is_empty() {
            origin.to_owned()
        } else {
            format!("{origin}/{prefix}")
        };

        Self {
            base_url,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Set the request timeout.
    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    /// The URL that all API paths are appended to, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The full URL for `path`, which should start with a slash.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
