//! Application router configuration.

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::{
    AppState,
    category::{
        begin_edit_category_endpoint, cancel_edit_category_endpoint, create_category_endpoint,
        delete_category_endpoint, update_category_endpoint,
    },
    endpoints,
    not_found::get_404_not_found,
    tracker_page::get_tracker_page,
    transaction::{
        begin_edit_transaction_endpoint, cancel_edit_transaction_endpoint,
        create_transaction_endpoint, delete_transaction_endpoint, update_transaction_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_tracker_page))
        .route(endpoints::CATEGORIES, post(create_category_endpoint))
        .route(
            endpoints::CATEGORY,
            put(update_category_endpoint).delete(delete_category_endpoint),
        )
        .route(endpoints::EDIT_CATEGORY, post(begin_edit_category_endpoint))
        .route(
            endpoints::CANCEL_CATEGORY_EDIT,
            post(cancel_edit_category_endpoint),
        )
        .route(endpoints::TRANSACTIONS, post(create_transaction_endpoint))
        .route(
            endpoints::TRANSACTION,
            put(update_transaction_endpoint).delete(delete_transaction_endpoint),
        )
        .route(
            endpoints::EDIT_TRANSACTION,
            post(begin_edit_transaction_endpoint),
        )
        .route(
            endpoints::CANCEL_TRANSACTION_EDIT,
            post(cancel_edit_transaction_endpoint),
        )
        .fallback(get_404_not_found)
        .with_state(state)
}
