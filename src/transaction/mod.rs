//! Transactions: amounts of money spent or earned, each filed under a category.

mod create;
mod delete;
mod domain;
mod edit;
mod store;
mod view;

pub use create::create_transaction_endpoint;
pub use delete::delete_transaction_endpoint;
pub use domain::{
    NewTransaction, Transaction, TransactionDate, TransactionId, TransactionType,
    TransactionUpdate,
};
pub use edit::{
    begin_edit_transaction_endpoint, cancel_edit_transaction_endpoint,
    update_transaction_endpoint,
};
pub use store::{TransactionForm, TransactionStore};
pub use view::{transaction_form_view, transaction_list_view};
