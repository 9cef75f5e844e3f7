//! Transaction editing endpoints.

use axum::{
    Form,
    extract::{Path, State},
    response::Response,
};

use crate::{
    Error,
    tracker_page::{TrackerPageState, render_tracker},
    transaction::{TransactionForm, TransactionId},
};

/// Put the transaction form into edit mode for the transaction `transaction_id`.
pub async fn begin_edit_transaction_endpoint(
    Path(transaction_id): Path<TransactionId>,
    State(state): State<TrackerPageState>,
) -> Result<Response, Error> {
    state.tracker.begin_edit_transaction(transaction_id)?;

    render_tracker(&state.tracker)
}

/// Leave edit mode without saving.
pub async fn cancel_edit_transaction_endpoint(
    State(state): State<TrackerPageState>,
) -> Result<Response, Error> {
    state.tracker.cancel_edit_transaction()?;

    render_tracker(&state.tracker)
}

/// Handle transaction update form submission.
pub async fn update_transaction_endpoint(
    Path(transaction_id): Path<TransactionId>,
    State(state): State<TrackerPageState>,
    Form(form): Form<TransactionForm>,
) -> Result<Response, Error> {
    state
        .tracker
        .update_transaction(transaction_id, form)
        .await?;

    render_tracker(&state.tracker)
}
