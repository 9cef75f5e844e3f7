//! An in-memory stand-in for the finance tracker REST backend.
//!
//! The fake follows the backend's contract: trailing slashes on collection
//! routes, `201 Created` for creates, `204 No Content` for deletes and a JSON
//! `detail` string on errors.

use std::{
    net::SocketAddr,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use axum::{
    Json, Router,
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, put},
};
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;

use crate::{
    ApiClient, Tracker,
    category::{Category, CategoryId, CategoryName},
    config::{ApiConfig, DEFAULT_API_PREFIX},
    transaction::{Transaction, TransactionDate, TransactionId, TransactionType},
};

/// The date the fake assigns to every new transaction.
pub(crate) const FAKE_TRANSACTION_DATE: &str = "2025-01-15T09:30:00.123456";

/// The date the fake stamps on a transaction updated without a date, the
/// same way the backend falls back to the current time.
pub(crate) const REGENERATED_TRANSACTION_DATE: &str = "2099-12-31T00:00:00";

#[derive(Debug, Default)]
struct FakeDb {
    categories: Vec<Category>,
    transactions: Vec<Transaction>,
    last_category_id: CategoryId,
    last_transaction_id: TransactionId,
}

impl FakeDb {
    fn insert_category(&mut self, name: &str) -> Category {
        self.last_category_id += 1;
        let category = Category {
            id: self.last_category_id,
            name: CategoryName::new_unchecked(name),
        };
        self.categories.push(category.clone());

        category
    }

    fn insert_transaction(&mut self, body: TransactionBody) -> Transaction {
        self.last_transaction_id += 1;
        let transaction = Transaction {
            id: self.last_transaction_id,
            amount: body.amount,
            type_: body.type_,
            description: body.description,
            category_id: body.category_id,
            transaction_date: TransactionDate::new(FAKE_TRANSACTION_DATE),
        };
        self.transactions.push(transaction.clone());

        transaction
    }

    fn has_category(&self, id: CategoryId) -> bool {
        self.categories.iter().any(|category| category.id == id)
    }

    fn has_category_named(&self, name: &str) -> bool {
        self.categories
            .iter()
            .any(|category| category.name.as_ref() == name)
    }
}

#[derive(Debug, Default)]
struct FakeState {
    db: Mutex<FakeDb>,
    request_count: AtomicUsize,
    canned_response: Mutex<Option<(StatusCode, String)>>,
}

/// A running fake backend listening on an ephemeral local port.
#[derive(Debug, Clone)]
pub(crate) struct FakeBackend {
    address: SocketAddr,
    state: Arc<FakeState>,
}

impl FakeBackend {
    /// Start a fake backend with empty collections.
    pub(crate) async fn spawn() -> Self {
        let state = Arc::new(FakeState::default());
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Could not bind the fake backend");
        let address = listener
            .local_addr()
            .expect("Could not get the fake backend address");
        let router = fake_router(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("The fake backend stopped unexpectedly");
        });

        Self { address, state }
    }

    pub(crate) fn api_config(&self) -> ApiConfig {
        ApiConfig::new(&format!("http://{}", self.address), DEFAULT_API_PREFIX)
    }

    pub(crate) fn client(&self) -> ApiClient {
        ApiClient::new(self.api_config()).expect("Could not create API client")
    }

    /// An empty tracker connected to this backend.
    pub(crate) fn tracker(&self) -> Arc<Tracker> {
        Arc::new(Tracker::new(self.client()))
    }

    /// Add a category directly, without going through the HTTP API.
    pub(crate) fn add_category(&self, name: &str) -> Category {
        self.db().insert_category(name)
    }

    /// Add a transaction directly, without going through the HTTP API.
    pub(crate) fn add_transaction(
        &self,
        amount: f64,
        type_: TransactionType,
        description: Option<&str>,
        category_id: CategoryId,
    ) -> Transaction {
        self.db().insert_transaction(TransactionBody {
            amount,
            type_,
            description: description.map(str::to_owned),
            category_id,
            transaction_date: None,
        })
    }

    /// Delete a category behind the client's back.
    pub(crate) fn remove_category(&self, id: CategoryId) {
        self.db().categories.retain(|category| category.id != id);
    }

    pub(crate) fn categories(&self) -> Vec<Category> {
        self.db().categories.clone()
    }

    pub(crate) fn transactions(&self) -> Vec<Transaction> {
        self.db().transactions.clone()
    }

    /// The number of HTTP requests the fake has received.
    pub(crate) fn request_count(&self) -> usize {
        self.state.request_count.load(Ordering::SeqCst)
    }

    /// Answer every following request with `status` and `body`.
    pub(crate) fn respond_with(&self, status: StatusCode, body: &str) {
        *self
            .state
            .canned_response
            .lock()
            .expect("Could not lock canned response") = Some((status, body.to_owned()));
    }

    /// Go back to serving requests normally after [FakeBackend::respond_with].
    pub(crate) fn respond_normally(&self) {
        *self
            .state
            .canned_response
            .lock()
            .expect("Could not lock canned response") = None;
    }

    fn db(&self) -> std::sync::MutexGuard<'_, FakeDb> {
        self.state.db.lock().expect("Could not lock fake database")
    }
}

/// An API config pointing at a local port that nothing listens on.
pub(crate) async fn unreachable_api_config() -> ApiConfig {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Could not bind a temporary port");
    let address = listener
        .local_addr()
        .expect("Could not get the temporary address");
    drop(listener);

    ApiConfig::new(&format!("http://{address}"), DEFAULT_API_PREFIX)
}

/// A config for a backend that accepts connections but never answers.
pub(crate) async fn silent_api_config() -> ApiConfig {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Could not bind a temporary port");
    let address = listener
        .local_addr()
        .expect("Could not get the temporary address");

    tokio::spawn(async move {
        let mut connections = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            connections.push(stream);
        }
    });

    ApiConfig::new(&format!("http://{address}"), DEFAULT_API_PREFIX)
}

fn fake_router(state: Arc<FakeState>) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .route("/categories/", get(list_categories).post(create_category))
        .route(
            "/categories/{category_id}",
            put(update_category).delete(delete_category),
        )
        .route(
            "/transactions/",
            get(list_transactions).post(create_transaction),
        )
        .route(
            "/transactions/{transaction_id}",
            put(update_transaction).delete(delete_transaction),
        );

    Router::new()
        .nest(DEFAULT_API_PREFIX, api)
        .layer(middleware::from_fn_with_state(state.clone(), record_request))
        .with_state(state)
}

async fn record_request(
    State(state): State<Arc<FakeState>>,
    request: Request,
    next: Next,
) -> Response {
    state.request_count.fetch_add(1, Ordering::SeqCst);

    let canned_response = state
        .canned_response
        .lock()
        .expect("Could not lock canned response")
        .clone();

    match canned_response {
        Some((status, body)) => (status, body).into_response(),
        None => next.run(request).await,
    }
}

fn detail(status: StatusCode, detail: &str) -> Response {
    (status, Json(json!({ "detail": detail }))).into_response()
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "OK" }))
}

#[derive(Debug, Deserialize)]
struct CategoryBody {
    name: String,
}

#[derive(Debug, Deserialize)]
struct TransactionBody {
    amount: f64,
    #[serde(rename = "type")]
    type_: TransactionType,
    description: Option<String>,
    category_id: CategoryId,
    transaction_date: Option<TransactionDate>,
}

async fn list_categories(State(state): State<Arc<FakeState>>) -> Json<Vec<Category>> {
    Json(state.db.lock().unwrap().categories.clone())
}

async fn create_category(
    State(state): State<Arc<FakeState>>,
    Json(body): Json<CategoryBody>,
) -> Response {
    let mut db = state.db.lock().unwrap();

    if db.has_category_named(&body.name) {
        return detail(
            StatusCode::BAD_REQUEST,
            "Category with this name already exists",
        );
    }

    let category = db.insert_category(&body.name);
    (StatusCode::CREATED, Json(category)).into_response()
}

async fn update_category(
    State(state): State<Arc<FakeState>>,
    Path(category_id): Path<CategoryId>,
    Json(body): Json<CategoryBody>,
) -> Response {
    let mut db = state.db.lock().unwrap();

    let Some(index) = db
        .categories
        .iter()
        .position(|category| category.id == category_id)
    else {
        return detail(StatusCode::NOT_FOUND, "Category not found");
    };

    if db.categories[index].name.as_ref() != body.name && db.has_category_named(&body.name) {
        return detail(
            StatusCode::BAD_REQUEST,
            "Category with this name already exists",
        );
    }

    db.categories[index].name = CategoryName::new_unchecked(&body.name);
    Json(db.categories[index].clone()).into_response()
}

async fn delete_category(
    State(state): State<Arc<FakeState>>,
    Path(category_id): Path<CategoryId>,
) -> Response {
    let mut db = state.db.lock().unwrap();

    if !db.has_category(category_id) {
        return detail(StatusCode::NOT_FOUND, "Category not found");
    }

    db.categories.retain(|category| category.id != category_id);
    StatusCode::NO_CONTENT.into_response()
}

async fn list_transactions(State(state): State<Arc<FakeState>>) -> Json<Vec<Transaction>> {
    Json(state.db.lock().unwrap().transactions.clone())
}

async fn create_transaction(
    State(state): State<Arc<FakeState>>,
    Json(body): Json<TransactionBody>,
) -> Response {
    let mut db = state.db.lock().unwrap();

    if !db.has_category(body.category_id) {
        return detail(StatusCode::BAD_REQUEST, "Category not found");
    }

    let transaction = db.insert_transaction(body);
    (StatusCode::CREATED, Json(transaction)).into_response()
}

async fn update_transaction(
    State(state): State<Arc<FakeState>>,
    Path(transaction_id): Path<TransactionId>,
    Json(body): Json<TransactionBody>,
) -> Response {
    let mut db = state.db.lock().unwrap();

    let Some(index) = db
        .transactions
        .iter()
        .position(|transaction| transaction.id == transaction_id)
    else {
        return detail(StatusCode::NOT_FOUND, "Transaction not found");
    };

    if db.transactions[index].category_id != body.category_id && !db.has_category(body.category_id)
    {
        return detail(StatusCode::BAD_REQUEST, "New category not found");
    }

    let transaction = &mut db.transactions[index];
    transaction.amount = body.amount;
    transaction.type_ = body.type_;
    transaction.description = body.description;
    transaction.category_id = body.category_id;
    transaction.transaction_date = body
        .transaction_date
        .unwrap_or_else(|| TransactionDate::new(REGENERATED_TRANSACTION_DATE));

    Json(transaction.clone()).into_response()
}

async fn delete_transaction(
    State(state): State<Arc<FakeState>>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    let mut db = state.db.lock().unwrap();

    let Some(index) = db
        .transactions
        .iter()
        .position(|transaction| transaction.id == transaction_id)
    else {
        return detail(StatusCode::NOT_FOUND, "Transaction not found");
    };

    db.transactions.remove(index);
    StatusCode::NO_CONTENT.into_response()
}
