//! Category creation endpoint.

use axum::{Form, extract::State, response::Response};

use crate::{
    Error,
    category::CategoryFormData,
    tracker_page::{TrackerPageState, render_tracker},
};

/// Handle category creation form submission.
pub async fn create_category_endpoint(
    State(state): State<TrackerPageState>,
    Form(form): Form<CategoryFormData>,
) -> Result<Response, Error> {
    state.tracker.create_category(&form.name).await?;

    render_tracker(&state.tracker)
}
