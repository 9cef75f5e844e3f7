//! Keeps the tracker state in sync with the backend.

use std::sync::{Mutex, MutexGuard};

use crate::{
    Error,
    api::ApiClient,
    category::CategoryId,
    state::TrackerState,
    transaction::{TransactionForm, TransactionId, TransactionUpdate},
};

/// The tracker state plus the operations that talk to the backend.
///
/// Failed requests never return an error: they set the status message and
/// leave the collections as they were. The only errors returned are for a
/// poisoned state lock.
///
/// Mutations of one collection are sent one at a time, and each mutation's
/// refresh completes before the next mutation of that collection starts.
/// Fetches can overlap, but only the most recently issued fetch of a
/// collection is applied.
#[derive(Debug)]
pub struct Tracker {
    api: ApiClient,
    state: Mutex<TrackerState>,
    category_requests: tokio::sync::Mutex<()>,
    transaction_requests: tokio::sync::Mutex<()>,
}

impl Tracker {
    /// Create a tracker with empty collections.
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: Mutex::new(TrackerState::default()),
            category_requests: tokio::sync::Mutex::new(()),
            transaction_requests: tokio::sync::Mutex::new(()),
        }
    }

    /// The client used to reach the backend.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// A copy of the current state for rendering.
    pub fn snapshot(&self) -> Result<TrackerState, Error> {
        Ok(self.lock_state()?.clone())
    }

    /// Fetch both collections.
    pub async fn load(&self) -> Result<(), Error> {
        let (categories, transactions) =
            tokio::join!(self.list_categories(), self.list_transactions());

        categories.and(transactions)
    }

    /// Fetch the categories, replacing the local copy on success.
    pub async fn list_categories(&self) -> Result<(), Error> {
        let ticket = self.update_state(|state| state.categories.begin_fetch())?;

        let result = self.api.list_categories().await;
        match &result {
            Ok(categories) => tracing::debug!("Fetched {} categories", categories.len()),
            Err(error) => tracing::warn!("Could not fetch categories: {error}"),
        }

        self.update_state(|state| state.categories_fetched(ticket, result))
    }

    /// Fetch the transactions, replacing the local copy on success.
    pub async fn list_transactions(&self) -> Result<(), Error> {
        let ticket = self.update_state(|state| state.transactions.begin_fetch())?;

        let result = self.api.list_transactions().await;
        match &result {
            Ok(transactions) => tracing::debug!("Fetched {} transactions", transactions.len()),
            Err(error) => tracing::warn!("Could not fetch transactions: {error}"),
        }

        self.update_state(|state| state.transactions_fetched(ticket, result))
    }

    /// Create a category named `name` and refresh the categories.
    pub async fn create_category(&self, name: &str) -> Result<(), Error> {
        let submitted = self.update_state(|state| state.categories.submit_name(name))?;
        let name = match submitted {
            Ok(name) => name,
            Err(error) => return self.set_message(error.to_string()),
        };

        let _guard = self.category_requests.lock().await;
        let result = self.api.create_category(&name).await;

        match result {
            Ok(category) => {
                tracing::info!("Created category {} '{}'", category.id, category.name);
                self.update_state(|state| {
                    let message = state.categories.created(&category);
                    state.set_message(message);
                })?;
                self.list_categories().await
            }
            Err(error) => self.set_message(error.mutation_message("Failed to create category.")),
        }
    }

    /// Rename the category `id` to `name`, leave edit mode and refresh the categories.
    pub async fn update_category(&self, id: CategoryId, name: &str) -> Result<(), Error> {
        let submitted = self.update_state(|state| state.categories.submit_name(name))?;
        let name = match submitted {
            Ok(name) => name,
            Err(error) => return self.set_message(error.to_string()),
        };

        let _guard = self.category_requests.lock().await;
        let result = self.api.update_category(id, &name).await;

        match result {
            Ok(category) => {
                tracing::info!("Updated category {} to '{}'", category.id, category.name);
                self.update_state(|state| {
                    let message = state.categories.updated(&category);
                    state.set_message(message);
                })?;
                self.list_categories().await
            }
            Err(error) => self.set_message(error.mutation_message("Failed to update category.")),
        }
    }

    /// Delete the category `id` and refresh both collections.
    ///
    /// Transactions are refreshed too since the backend decides what happens
    /// to transactions in the deleted category.
    pub async fn delete_category(&self, id: CategoryId) -> Result<(), Error> {
        let _guard = self.category_requests.lock().await;
        let result = self.api.delete_category(id).await;

        match result {
            Ok(()) => {
                tracing::info!("Deleted category {id}");
                self.update_state(|state| {
                    if state.categories.mode.target().is_some_and(|target| target.id == id) {
                        state.categories.cancel_edit();
                    }
                    state.set_message("Category deleted successfully!");
                })?;
                self.load().await
            }
            Err(error) => self.set_message(error.mutation_message("Failed to delete category.")),
        }
    }

    /// Start editing the loaded category `id`.
    pub fn begin_edit_category(&self, id: CategoryId) -> Result<(), Error> {
        self.update_state(|state| match state.categories.find(id).cloned() {
            Some(category) => state.categories.begin_edit(category),
            None => state.set_message(Error::UnknownCategory(id).to_string()),
        })
    }

    /// Stop editing a category without saving.
    pub fn cancel_edit_category(&self) -> Result<(), Error> {
        self.update_state(|state| state.categories.cancel_edit())
    }

    /// Create a transaction from `form` and refresh the transactions.
    ///
    /// An invalid form sets a message without sending a request.
    pub async fn create_transaction(&self, form: TransactionForm) -> Result<(), Error> {
        let validated = self.update_state(|state| {
            state.transactions.form = form;
            state.transactions.form.validate()
        })?;
        let new_transaction = match validated {
            Ok(new_transaction) => new_transaction,
            Err(error) => return self.set_message(error.to_string()),
        };

        let _guard = self.transaction_requests.lock().await;
        let result = self.api.create_transaction(&new_transaction).await;

        match result {
            Ok(transaction) => {
                tracing::info!("Created transaction {}", transaction.id);
                self.update_state(|state| {
                    let message = state.transactions.created();
                    state.set_message(message);
                })?;
                self.list_transactions().await
            }
            Err(error) => self.set_message(error.mutation_message("Failed to add transaction.")),
        }
    }

    /// Update the transaction `id` from `form`, keeping its original date,
    /// then leave edit mode and refresh the transactions.
    pub async fn update_transaction(
        &self,
        id: TransactionId,
        form: TransactionForm,
    ) -> Result<(), Error> {
        let prepared = self.update_state(|state| {
            state.transactions.form = form;
            let fields = state.transactions.form.validate()?;
            let target = state
                .transactions
                .update_target(id)
                .ok_or(Error::UnknownTransaction(id))?;

            Ok::<_, Error>(TransactionUpdate {
                fields,
                transaction_date: target.transaction_date.clone(),
            })
        })?;
        let update = match prepared {
            Ok(update) => update,
            Err(error) => return self.set_message(error.to_string()),
        };

        let _guard = self.transaction_requests.lock().await;
        let result = self.api.update_transaction(id, &update).await;

        match result {
            Ok(transaction) => {
                tracing::info!("Updated transaction {}", transaction.id);
                self.update_state(|state| {
                    let message = state.transactions.updated();
                    state.set_message(message);
                })?;
                self.list_transactions().await
            }
            Err(error) => {
                self.set_message(error.mutation_message("Failed to update transaction."))
            }
        }
    }

    /// Delete the transaction `id` and refresh the transactions.
    pub async fn delete_transaction(&self, id: TransactionId) -> Result<(), Error> {
        let _guard = self.transaction_requests.lock().await;
        let result = self.api.delete_transaction(id).await;

        match result {
            Ok(()) => {
                tracing::info!("Deleted transaction {id}");
                self.update_state(|state| {
                    if state.transactions.mode.target().is_some_and(|target| target.id == id) {
                        state.transactions.cancel_edit();
                    }
                    state.set_message("Transaction deleted successfully!");
                })?;
                self.list_transactions().await
            }
            Err(error) => {
                self.set_message(error.mutation_message("Failed to delete transaction."))
            }
        }
    }

    /// Start editing the loaded transaction `id`.
    pub fn begin_edit_transaction(&self, id: TransactionId) -> Result<(), Error> {
        self.update_state(|state| match state.transactions.find(id).cloned() {
            Some(transaction) => state.transactions.begin_edit(transaction),
            None => state.set_message(Error::UnknownTransaction(id).to_string()),
        })
    }

    /// Stop editing a transaction without saving.
    pub fn cancel_edit_transaction(&self) -> Result<(), Error> {
        self.update_state(|state| state.transactions.cancel_edit())
    }

    fn lock_state(&self) -> Result<MutexGuard<'_, TrackerState>, Error> {
        self.state.lock().map_err(|error| {
            tracing::error!("could not acquire the tracker state lock: {error}");
            Error::StateLockError
        })
    }

    /// Run `update` with the state locked.
    ///
    /// The lock is released before this returns, so it is never held across
    /// an `.await`.
    fn update_state<R>(&self, update: impl FnOnce(&mut TrackerState) -> R) -> Result<R, Error> {
        let mut state = self.lock_state()?;
        Ok(update(&mut state))
    }

    fn set_message(&self, message: impl Into<String>) -> Result<(), Error> {
        let message = message.into();
        self.update_state(|state| state.set_message(message))
    }
}
