//! Transaction creation endpoint.

use axum::{Form, extract::State, response::Response};

use crate::{
    Error,
    tracker_page::{TrackerPageState, render_tracker},
    transaction::TransactionForm,
};

/// Handle transaction creation form submission.
pub async fn create_transaction_endpoint(
    State(state): State<TrackerPageState>,
    Form(form): Form<TransactionForm>,
) -> Result<Response, Error> {
    state.tracker.create_transaction(form).await?;

    render_tracker(&state.tracker)
}
