//! Category editing endpoints.

use axum::{
    Form,
    extract::{Path, State},
    response::Response,
};

use crate::{
    Error,
    category::{CategoryFormData, CategoryId},
    tracker_page::{TrackerPageState, render_tracker},
};

/// Put the category form into edit mode for the category `category_id`.
pub async fn begin_edit_category_endpoint(
    Path(category_id): Path<CategoryId>,
    State(state): State<TrackerPageState>,
) -> Result<Response, Error> {
    state.tracker.begin_edit_category(category_id)?;

    render_tracker(&state.tracker)
}

/// Leave edit mode without saving.
pub async fn cancel_edit_category_endpoint(
    State(state): State<TrackerPageState>,
) -> Result<Response, Error> {
    state.tracker.cancel_edit_category()?;

    render_tracker(&state.tracker)
}

/// Handle category update form submission.
pub async fn update_category_endpoint(
    Path(category_id): Path<CategoryId>,
    State(state): State<TrackerPageState>,
    Form(form): Form<CategoryFormData>,
) -> Result<Response, Error> {
    state
        .tracker
        .update_category(category_id, &form.name)
        .await?;

    render_tracker(&state.tracker)
}

#[cfg(test)]
mod edit_category_endpoint_tests {
    use axum::{
        Form,
        extract::{Path, State},
    };

    use crate::{
        category::CategoryFormData,
        test_utils::{
            FakeBackend, assert_form_input_with_value, assert_form_submit_button_with_text,
            assert_hx_endpoint, must_get_form, must_get_text, parse_html_fragment,
        },
        tracker_page::TrackerPageState,
    };

    use super::{
        begin_edit_category_endpoint, cancel_edit_category_endpoint, update_category_endpoint,
    };

    async fn loaded_state(backend: &FakeBackend) -> TrackerPageState {
        let state = TrackerPageState {
            tracker: backend.tracker(),
        };
        state.tracker.load().await.unwrap();
        state
    }

    #[tokio::test]
    async fn begin_edit_prefills_form() {
        let backend = FakeBackend::spawn().await;
        let food = backend.add_category("Food");
        let state = loaded_state(&backend).await;

        let response = begin_edit_category_endpoint(Path(food.id), State(state))
            .await
            .unwrap();

        let html = parse_html_fragment(response).await;
        let form = must_get_form(&html, "category-form");
        assert_hx_endpoint(&form, &format!("/categories/{}", food.id), "hx-put");
        assert_form_input_with_value(&form, "name", "text", "Food");
        assert_form_submit_button_with_text(&form, "Update Category");
    }

    #[tokio::test]
    async fn begin_edit_of_unknown_category_sets_message() {
        let backend = FakeBackend::spawn().await;
        let state = loaded_state(&backend).await;

        let response = begin_edit_category_endpoint(Path(9), State(state))
            .await
            .unwrap();

        let html = parse_html_fragment(response).await;
        assert_eq!(
            must_get_text(&html, "#message"),
            "Could not find category 9. Refresh the page and try again."
        );
        let form = must_get_form(&html, "category-form");
        assert_hx_endpoint(&form, "/categories", "hx-post");
    }

    #[tokio::test]
    async fn cancel_edit_restores_create_form() {
        let backend = FakeBackend::spawn().await;
        let food = backend.add_category("Food");
        let state = loaded_state(&backend).await;
        state.tracker.begin_edit_category(food.id).unwrap();

        let response = cancel_edit_category_endpoint(State(state)).await.unwrap();

        let html = parse_html_fragment(response).await;
        let form = must_get_form(&html, "category-form");
        assert_hx_endpoint(&form, "/categories", "hx-post");
        assert_form_input_with_value(&form, "name", "text", "");
        assert_form_submit_button_with_text(&form, "Add Category");
    }

    #[tokio::test]
    async fn update_renames_category() {
        let backend = FakeBackend::spawn().await;
        let food = backend.add_category("Fod");
        let state = loaded_state(&backend).await;
        state.tracker.begin_edit_category(food.id).unwrap();

        let response = update_category_endpoint(
            Path(food.id),
            State(state),
            Form(CategoryFormData {
                name: "Food".to_owned(),
            }),
        )
        .await
        .unwrap();

        let html = parse_html_fragment(response).await;
        assert_eq!(must_get_text(&html, "#message"), "Category 'Food' updated!");
        assert_eq!(must_get_text(&html, ".category-name"), "Food");
        let form = must_get_form(&html, "category-form");
        assert_hx_endpoint(&form, "/categories", "hx-post");
        assert_eq!(backend.categories()[0].name.as_ref(), "Food");
    }

    #[tokio::test]
    async fn update_to_duplicate_name_shows_backend_detail() {
        let backend = FakeBackend::spawn().await;
        backend.add_category("Food");
        let rent = backend.add_category("Rent");
        let state = loaded_state(&backend).await;
        state.tracker.begin_edit_category(rent.id).unwrap();

        let response = update_category_endpoint(
            Path(rent.id),
            State(state),
            Form(CategoryFormData {
                name: "Food".to_owned(),
            }),
        )
        .await
        .unwrap();

        let html = parse_html_fragment(response).await;
        assert_eq!(
            must_get_text(&html, "#message"),
            "Category with this name already exists"
        );
        let form = must_get_form(&html, "category-form");
        assert_hx_endpoint(&form, &format!("/categories/{}", rent.id), "hx-put");
        assert_form_input_with_value(&form, "name", "text", "Food");
    }
}
