//! The view-model for the tracker page.

use crate::{
    api::ApiError,
    category::{Category, CategoryId, CategoryStore},
    fetch_sequence::FetchTicket,
    transaction::{Transaction, TransactionStore},
};

/// Everything the tracker page shows: both collections, their editors and
/// the status message.
///
/// All changes go through the methods below so that each user action or
/// server response maps to one update that can be tested without a server.
#[derive(Debug, Clone, Default)]
pub struct TrackerState {
    /// The categories and the category editor.
    pub categories: CategoryStore,
    /// The transactions and the transaction editor.
    pub transactions: TransactionStore,
    /// The last status or error message. Empty until something happens.
    pub message: String,
}

impl TrackerState {
    /// Replace the status message.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// The display name for the category `id`.
    pub fn category_name(&self, id: CategoryId) -> &str {
        self.categories.name_of(id)
    }

    /// Apply a finished category fetch.
    ///
    /// On success the transaction form gets a default category if it has none.
    pub fn categories_fetched(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Category>, ApiError>,
    ) {
        match self.categories.finish_fetch(ticket, result) {
            Some(message) => self.set_message(message),
            None => self
                .transactions
                .select_default_category(&self.categories.items),
        }
    }

    /// Apply a finished transaction fetch.
    pub fn transactions_fetched(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Transaction>, ApiError>,
    ) {
        if let Some(message) = self.transactions.finish_fetch(ticket, result) {
            self.set_message(message);
        }
    }
}
