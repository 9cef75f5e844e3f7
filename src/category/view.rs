use maud::{Markup, html};

use crate::{
    category::{Category, CategoryStore},
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_DELETE_STYLE, BUTTON_EDIT_STYLE, BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE,
        FORM_CONTAINER_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, SECTION_HEADING_STYLE,
    },
};

/// The category form followed by the list of categories.
pub fn categories_view(store: &CategoryStore) -> Markup {
    html! {
        section id="categories" class=(FORM_CONTAINER_STYLE)
        {
            h2 class=(SECTION_HEADING_STYLE) { "Manage Categories" }

            (category_form_view(store))

            h3 class="text-lg font-semibold" { "Your Categories:" }

            (category_list_view(&store.items))
        }
    }
}

fn category_form_view(store: &CategoryStore) -> Markup {
    let editing = store.mode.target();
    let create_endpoint = editing.is_none().then_some(endpoints::CATEGORIES);
    let update_endpoint = editing.map(|category| format_endpoint(endpoints::CATEGORY, category.id));

    html! {
        form
            id="category-form"
            hx-post=[create_endpoint]
            hx-put=[update_endpoint]
            hx-target="#tracker"
            hx-swap="outerHTML"
            class="w-full space-y-4"
        {
            div
            {
                label
                    for="name"
                    class=(FORM_LABEL_STYLE)
                {
                    "Category Name"
                }

                input
                    id="name"
                    type="text"
                    name="name"
                    placeholder="Category Name (e.g., Food, Salary)"
                    value=(store.form.name)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            @if editing.is_some() {
                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Update Category" }

                button
                    type="button"
                    hx-post=(endpoints::CANCEL_CATEGORY_EDIT)
                    hx-target="#tracker"
                    hx-swap="outerHTML"
                    class=(BUTTON_SECONDARY_STYLE)
                {
                    "Cancel Edit"
                }
            } @else {
                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Category" }
            }
        }
    }
}

fn category_list_view(categories: &[Category]) -> Markup {
    html! {
        @if categories.is_empty() {
            p id="no-categories" { "No categories yet. Add some!" }
        } @else {
            ul id="category-list" class="space-y-2"
            {
                @for category in categories {
                    li
                        data-category-id=(category.id)
                        class="flex items-center justify-between gap-4"
                    {
                        span class="category-name" { (category.name) }

                        span class="flex gap-4"
                        {
                            button
                                type="button"
                                hx-post=(format_endpoint(endpoints::EDIT_CATEGORY, category.id))
                                hx-target="#tracker"
                                hx-swap="outerHTML"
                                class=(BUTTON_EDIT_STYLE)
                            {
                                "Edit"
                            }

                            button
                                type="button"
                                hx-delete=(format_endpoint(endpoints::CATEGORY, category.id))
                                hx-confirm={
                                    "Are you sure you want to delete '" (category.name) "'?"
                                }
                                hx-target="#tracker"
                                hx-swap="outerHTML"
                                class=(BUTTON_DELETE_STYLE)
                            {
                                "Delete"
                            }
                        }
                    }
                }
            }
        }
    }
}
