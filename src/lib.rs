//! A web client for a personal finance tracker.
//!
//! The client keeps an in-memory copy of the user's categories and
//! transactions, synchronises it with the finance tracker REST backend and
//! serves HTML pages for viewing and editing both collections.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::response::{IntoResponse, Response};
use axum_server::Handle;
use tokio::signal;

mod api;
mod app_state;
mod category;
mod config;
mod edit_mode;
mod endpoints;
mod fetch_sequence;
mod html;
mod internal_server_error;
mod logging;
mod not_found;
mod routing;
mod state;
mod tracker;
mod tracker_page;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use api::{ApiClient, ApiError};
pub use app_state::AppState;
pub use category::{Category, CategoryId, CategoryName};
pub use config::{ApiConfig, DEFAULT_API_PREFIX, DEFAULT_REQUEST_TIMEOUT};
pub use edit_mode::EditMode;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use state::TrackerState;
pub use tracker::Tracker;
pub use transaction::{
    NewTransaction, Transaction, TransactionDate, TransactionForm, TransactionId, TransactionType,
    TransactionUpdate,
};

use crate::{internal_server_error::InternalServerError, not_found::get_404_not_found_response};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
///
/// The validation variants are shown to the user as the status message, so
/// their text is written as a user-facing sentence.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty string was used to create a category name.
    #[error("Category name cannot be empty.")]
    EmptyCategoryName,

    /// A transaction was submitted without selecting a category.
    #[error("Please select a category.")]
    MissingCategory,

    /// The transaction amount was empty or could not be parsed as a number.
    #[error("Please enter a valid amount.")]
    InvalidAmount(String),

    /// The category is not in the currently loaded collection.
    #[error("Could not find category {0}. Refresh the page and try again.")]
    UnknownCategory(CategoryId),

    /// The transaction is not in the currently loaded collection.
    #[error("Could not find transaction {0}. Refresh the page and try again.")]
    UnknownTransaction(TransactionId),

    /// Could not acquire the lock on the tracker state.
    #[error("could not acquire the tracker state lock")]
    StateLockError,

    /// The HTTP client for the backend could not be created.
    #[error("could not build the HTTP client: {0}")]
    HttpClientError(String),

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response(),
            Error::StateLockError => InternalServerError {
                description: "Could not read the tracker state",
                fix: "Restart the server and check the server logs for more details.",
            }
            .into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}
