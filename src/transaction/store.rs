//! The local copy of the transaction collection and the transaction form.

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    api::ApiError,
    category::{Category, CategoryId},
    edit_mode::EditMode,
    fetch_sequence::{FetchSequence, FetchTicket},
    transaction::{NewTransaction, Transaction, TransactionId, TransactionType},
};

/// The contents of the transaction form as the user entered them.
///
/// Fields are kept as text so that invalid input can be shown back to the
/// user unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionForm {
    /// The amount as typed, e.g. `"12.50"`.
    #[serde(default)]
    pub amount: String,
    /// Expense or income.
    #[serde(rename = "type", default)]
    pub type_: TransactionType,
    /// The optional description. Empty means no description.
    #[serde(default)]
    pub description: String,
    /// The selected category ID, or empty if no category is selected.
    #[serde(default)]
    pub category_id: String,
}

impl TransactionForm {
    /// Fill the form with the stored values of `transaction`.
    pub fn from_transaction(transaction: &Transaction) -> Self {
        Self {
            amount: transaction.amount.to_string(),
            type_: transaction.type_,
            description: transaction.description.clone().unwrap_or_default(),
            category_id: transaction.category_id.to_string(),
        }
    }

    /// The selected category, if the selection is a valid ID.
    pub fn selected_category(&self) -> Option<CategoryId> {
        self.category_id.trim().parse().ok()
    }

    /// Check the form and convert it into a request body.
    ///
    /// # Errors
    ///
    /// Returns [Error::MissingCategory] if no category is selected and
    /// [Error::InvalidAmount] if the amount is not a finite number.
    pub fn validate(&self) -> Result<NewTransaction, Error> {
        let category_id = self.selected_category().ok_or(Error::MissingCategory)?;

        let amount = self
            .amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite())
            .ok_or_else(|| Error::InvalidAmount(self.amount.clone()))?;

        let description = if self.description.is_empty() {
            None
        } else {
            Some(self.description.clone())
        };

        Ok(NewTransaction {
            amount,
            type_: self.type_,
            description,
            category_id,
        })
    }
}

/// The loaded transactions, the edit cursor and the form contents.
#[derive(Debug, Clone, Default)]
pub struct TransactionStore {
    /// The transactions from the last successful fetch, in server order.
    pub items: Vec<Transaction>,
    /// Whether the form creates a transaction or updates one.
    pub mode: EditMode<Transaction>,
    /// The current contents of the transaction form.
    pub form: TransactionForm,
    fetches: FetchSequence,
}

impl TransactionStore {
    /// Find a loaded transaction by ID.
    pub fn find(&self, id: TransactionId) -> Option<&Transaction> {
        self.items.iter().find(|transaction| transaction.id == id)
    }

    /// The transaction to update for `id`.
    ///
    /// Prefers the copy held by the edit cursor, since that is the record the
    /// user started editing, and falls back to the loaded collection.
    pub fn update_target(&self, id: TransactionId) -> Option<&Transaction> {
        self.mode
            .target()
            .filter(|target| target.id == id)
            .or_else(|| self.find(id))
    }

    /// Put the form into edit mode for `transaction` and fill in its values.
    pub fn begin_edit(&mut self, transaction: Transaction) {
        self.form = TransactionForm::from_transaction(&transaction);
        self.mode = EditMode::Editing(transaction);
    }

    /// Leave edit mode and clear the form, keeping the selected type.
    pub fn cancel_edit(&mut self) {
        self.mode = EditMode::Creating;
        self.form = TransactionForm {
            type_: self.form.type_,
            ..Default::default()
        };
    }

    /// Select the first of `categories` if the form has no category selected.
    pub fn select_default_category(&mut self, categories: &[Category]) {
        if !self.form.category_id.is_empty() {
            return;
        }

        if let Some(first) = categories.first() {
            self.form.category_id = first.id.to_string();
        }
    }

    /// Record that a fetch is being sent.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.fetches.issue()
    }

    /// Apply the result of the fetch identified by `ticket`.
    ///
    /// A successful result replaces the collection. Returns the message to
    /// show if the fetch failed. Results of superseded fetches are dropped.
    pub fn finish_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Transaction>, ApiError>,
    ) -> Option<String> {
        if !self.fetches.is_latest(ticket) {
            tracing::debug!("Dropping the result of a superseded transaction fetch");
            return None;
        }

        match result {
            Ok(transactions) => {
                self.items = transactions;
                None
            }
            Err(error) => Some(error.fetch_message("transactions")),
        }
    }

    /// Clear the amount and description after a create and return the
    /// message to show. The type and category stay selected for the next entry.
    pub fn created(&mut self) -> String {
        self.form.amount.clear();
        self.form.description.clear();
        "Transaction added!".to_owned()
    }

    /// Leave edit mode after an update and return the message to show.
    pub fn updated(&mut self) -> String {
        self.cancel_edit();
        "Transaction updated!".to_owned()
    }
}
