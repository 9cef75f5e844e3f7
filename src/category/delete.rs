//! Category deletion endpoint.

use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::{
    Error,
    category::CategoryId,
    tracker_page::{TrackerPageState, render_tracker},
};

/// Delete the category `category_id` and render the refreshed tracker.
pub async fn delete_category_endpoint(
    Path(category_id): Path<CategoryId>,
    State(state): State<TrackerPageState>,
) -> Result<Response, Error> {
    state.tracker.delete_category(category_id).await?;

    render_tracker(&state.tracker)
}
