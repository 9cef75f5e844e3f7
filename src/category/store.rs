//! The local copy of the category collection and the category form.

use crate::{
    Error,
    api::ApiError,
    category::{Category, CategoryFormData, CategoryId, CategoryName},
    edit_mode::EditMode,
    fetch_sequence::{FetchSequence, FetchTicket},
};

/// What the user sees when a category cannot be named.
pub const UNKNOWN_CATEGORY: &str = "Unknown Category";

/// The loaded categories, the edit cursor and the form contents.
#[derive(Debug, Clone, Default)]
pub struct CategoryStore {
    /// The categories from the last successful fetch, in server order.
    pub items: Vec<Category>,
    /// Whether the form creates a category or renames one.
    pub mode: EditMode<Category>,
    /// The current contents of the category form.
    pub form: CategoryFormData,
    fetches: FetchSequence,
}

impl CategoryStore {
    /// Find a loaded category by ID.
    pub fn find(&self, id: CategoryId) -> Option<&Category> {
        self.items.iter().find(|category| category.id == id)
    }

    /// The name of the category `id`, or [UNKNOWN_CATEGORY] if it is not loaded.
    pub fn name_of(&self, id: CategoryId) -> &str {
        self.find(id)
            .map(|category| category.name.as_ref())
            .unwrap_or(UNKNOWN_CATEGORY)
    }

    /// Put the form into edit mode for `category` and fill in its name.
    pub fn begin_edit(&mut self, category: Category) {
        self.form.name = category.name.to_string();
        self.mode = EditMode::Editing(category);
    }

    /// Leave edit mode and clear the form.
    pub fn cancel_edit(&mut self) {
        self.mode = EditMode::Creating;
        self.form = CategoryFormData::default();
    }

    /// Record the name the user submitted and validate it.
    ///
    /// The submitted text stays in the form either way so a failed request
    /// does not lose the user's input.
    pub fn submit_name(&mut self, name: &str) -> Result<CategoryName, Error> {
        self.form.name = name.to_owned();
        CategoryName::new(name)
    }

    /// Record that a fetch is being sent.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.fetches.issue()
    }

    /// Apply the result of the fetch identified by `ticket`.
    ///
    /// A successful result replaces the collection. Returns the message to
    /// show if the fetch failed. Results of superseded fetches are dropped
    /// without touching the collection or producing a message.
    pub fn finish_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Category>, ApiError>,
    ) -> Option<String> {
        if !self.fetches.is_latest(ticket) {
            tracing::debug!("Dropping the result of a superseded category fetch");
            return None;
        }

        match result {
            Ok(categories) => {
                self.items = categories;
                None
            }
            Err(error) => Some(error.fetch_message("categories")),
        }
    }

    /// Clear the form after `category` was created and return the message to show.
    pub fn created(&mut self, category: &Category) -> String {
        self.form = CategoryFormData::default();
        format!("Category '{}' created!", category.name)
    }

    /// Leave edit mode after `category` was updated and return the message to show.
    pub fn updated(&mut self, category: &Category) -> String {
        self.cancel_edit();
        format!("Category '{}' updated!", category.name)
    }
}
