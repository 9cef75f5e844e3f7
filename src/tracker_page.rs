//! The tracker page: the status message, both forms and both lists.

use std::sync::Arc;

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use axum_htmx::HxRequest;
use maud::{Markup, html};

use crate::{
    AppState, Error,
    category::categories_view,
    html::{PAGE_CONTAINER_STYLE, base},
    state::TrackerState,
    tracker::Tracker,
    transaction::{transaction_form_view, transaction_list_view},
};

/// The state needed by the tracker page and every action on it.
#[derive(Debug, Clone)]
pub struct TrackerPageState {
    pub tracker: Arc<Tracker>,
}

impl FromRef<AppState> for TrackerPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            tracker: state.tracker.clone(),
        }
    }
}

/// Load both collections and render the tracker page.
///
/// Requests made by htmx only get the `#tracker` element.
pub async fn get_tracker_page(
    State(state): State<TrackerPageState>,
    HxRequest(is_htmx_request): HxRequest,
) -> Result<Response, Error> {
    state.tracker.load().await?;
    let snapshot = state.tracker.snapshot()?;
    let tracker = tracker_view(&snapshot);

    if is_htmx_request {
        return Ok(tracker.into_response());
    }

    Ok(base("Personal Finance Tracker", &tracker).into_response())
}

/// Render the `#tracker` element from the current state.
pub fn render_tracker(tracker: &Tracker) -> Result<Response, Error> {
    let snapshot = tracker.snapshot()?;

    Ok(tracker_view(&snapshot).into_response())
}

fn tracker_view(state: &TrackerState) -> Markup {
    html! {
        div id="tracker" class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-3xl font-bold" { "Personal Finance Tracker" }

            p id="message" class="text-sm text-red-600 dark:text-red-400" { (state.message) }

            (categories_view(&state.categories))

            (transaction_form_view(&state.transactions, &state.categories))

            (transaction_list_view(&state.transactions, &state.categories))
        }
    }
}
