//! Implements a struct that holds the state of the web server.

use std::sync::Arc;

use crate::{Error, api::ApiClient, config::ApiConfig, tracker::Tracker};

/// The state of the web server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The tracker shared by all request handlers.
    pub tracker: Arc<Tracker>,
}

impl AppState {
    /// Create a new [AppState] with a tracker that talks to the backend described by `config`.
    ///
    /// The tracker starts out empty. Collections are fetched when the tracker page is loaded.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ApiConfig) -> Result<Self, Error> {
        let api = ApiClient::new(config)?;

        Ok(Self {
            tracker: Arc::new(Tracker::new(api)),
        })
    }
}
