//! A typed client for the finance tracker REST backend.

use reqwest::{Client, Method, RequestBuilder};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{
    Error,
    category::{Category, CategoryId, CategoryName, CategoryPayload},
    config::ApiConfig,
    transaction::{NewTransaction, Transaction, TransactionId, TransactionUpdate},
};

const HEALTH_PATH: &str = "/health";
const CATEGORIES_PATH: &str = "/categories/";
const TRANSACTIONS_PATH: &str = "/transactions/";

/// The ways a request to the backend can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend could not be reached or the request timed out.
    #[error("could not reach the backend: {0}")]
    Transport(String),

    /// The backend answered with a success status but the body was not the
    /// expected JSON.
    #[error("could not decode the backend response: {0}")]
    Decode(String),

    /// The backend answered with a non-2xx status.
    ///
    /// `detail` holds the `detail` string from the error body when there is one.
    #[error("the backend responded with status {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The message the backend gave for the failure.
        detail: Option<String>,
    },
}

impl ApiError {
    /// The message to show the user when listing `collection` failed.
    pub fn fetch_message(&self, collection: &str) -> String {
        match self {
            ApiError::Status { .. } => format!("Failed to fetch {collection}."),
            ApiError::Transport(_) | ApiError::Decode(_) => {
                format!("Error connecting to backend or fetching {collection}.")
            }
        }
    }

    /// The message to show the user when a create, update or delete failed.
    ///
    /// The backend's `detail` is used verbatim when present, otherwise
    /// `fallback` is used.
    pub fn mutation_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ApiError::Status { detail: None, .. } => fallback.to_owned(),
            ApiError::Transport(_) | ApiError::Decode(_) => {
                "Error connecting to backend.".to_owned()
            }
        }
    }
}

/// The error body the backend sends with non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

/// Sends requests to the backend and decodes the responses.
///
/// Cloning is cheap, the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Create a client for the backend described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an [Error::HttpClientError] if the HTTP client cannot be built,
    /// e.g. because the TLS backend failed to initialise.
    pub fn new(config: ApiConfig) -> Result<Self, Error> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|error| Error::HttpClientError(error.to_string()))?;

        Ok(Self { http, config })
    }

    /// The settings this client was created with.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Check that the backend is up.
    pub async fn check_health(&self) -> Result<(), ApiError> {
        self.execute(Method::GET, HEALTH_PATH, self.http.get(self.config.url(HEALTH_PATH)))
            .await
            .map(|_| ())
    }

    /// Get all categories in the order the backend returns them.
    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_json(CATEGORIES_PATH).await
    }

    /// Create a category and return it with its server-assigned ID.
    pub async fn create_category(&self, name: &CategoryName) -> Result<Category, ApiError> {
        self.send_json(Method::POST, CATEGORIES_PATH, &CategoryPayload { name })
            .await
    }

    /// Rename the category `id`.
    pub async fn update_category(
        &self,
        id: CategoryId,
        name: &CategoryName,
    ) -> Result<Category, ApiError> {
        self.send_json(Method::PUT, &category_path(id), &CategoryPayload { name })
            .await
    }

    /// Delete the category `id`.
    pub async fn delete_category(&self, id: CategoryId) -> Result<(), ApiError> {
        self.delete(&category_path(id)).await
    }

    /// Get all transactions in the order the backend returns them.
    pub async fn list_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        self.get_json(TRANSACTIONS_PATH).await
    }

    /// Create a transaction. The backend assigns the ID and the date.
    pub async fn create_transaction(
        &self,
        transaction: &NewTransaction,
    ) -> Result<Transaction, ApiError> {
        self.send_json(Method::POST, TRANSACTIONS_PATH, transaction)
            .await
    }

    /// Replace the fields of the transaction `id`.
    pub async fn update_transaction(
        &self,
        id: TransactionId,
        transaction: &TransactionUpdate,
    ) -> Result<Transaction, ApiError> {
        self.send_json(Method::PUT, &transaction_path(id), transaction)
            .await
    }

    /// Delete the transaction `id`.
    pub async fn delete_transaction(&self, id: TransactionId) -> Result<(), ApiError> {
        self.delete(&transaction_path(id)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = self
            .execute(Method::GET, path, self.http.get(self.config.url(path)))
            .await?;

        decode(path, &body)
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .http
            .request(method.clone(), self.config.url(path))
            .json(body);
        let body = self.execute(method, path, request).await?;

        decode(path, &body)
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(Method::DELETE, path, self.http.delete(self.config.url(path)))
            .await
            .map(|_| ())
    }

    /// Send `request` and return the body of a successful response.
    async fn execute(
        &self,
        method: Method,
        path: &str,
        request: RequestBuilder,
    ) -> Result<String, ApiError> {
        tracing::debug!("Sending {method} {path} to the backend");

        let response = request.send().await.map_err(|error| {
            tracing::warn!("Could not send {method} {path} to the backend: {error}");
            ApiError::Transport(error.to_string())
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|error| {
            tracing::warn!("Could not read the response to {method} {path}: {error}");
            ApiError::Transport(error.to_string())
        })?;

        if status.is_success() {
            tracing::debug!("The backend answered {method} {path} with {status}");
            return Ok(body);
        }

        let detail = extract_detail(&body);
        tracing::warn!("The backend rejected {method} {path} with {status}: {detail:?}");

        Err(ApiError::Status {
            status: status.as_u16(),
            detail,
        })
    }
}

fn category_path(id: CategoryId) -> String {
    format!("{CATEGORIES_PATH}{id}")
}

fn transaction_path(id: TransactionId) -> String {
    format!("{TRANSACTIONS_PATH}{id}")
}

/// Get the `detail` string from an error body.
///
/// Returns `None` if the body is not JSON or if `detail` is not a string,
/// e.g. the list of field errors from a failed request validation.
fn extract_detail(body: &str) -> Option<String> {
    let body: ErrorBody = serde_json::from_str(body).ok()?;

    match body.detail? {
        serde_json::Value::String(detail) => Some(detail),
        _ => None,
    }
}

fn decode<T: DeserializeOwned>(path: &str, body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|error| {
        tracing::warn!("Could not decode the response to {path}: {error}");
        ApiError::Decode(error.to_string())
    })
}
