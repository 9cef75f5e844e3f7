//! Transaction deletion endpoint.

use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::{
    Error,
    tracker_page::{TrackerPageState, render_tracker},
    transaction::TransactionId,
};

/// Delete the transaction `transaction_id` and render the refreshed tracker.
pub async fn delete_transaction_endpoint(
    Path(transaction_id): Path<TransactionId>,
    State(state): State<TrackerPageState>,
) -> Result<Response, Error> {
    state.tracker.delete_transaction(transaction_id).await?;

    render_tracker(&state.tracker)
}
