//! Categories: the labels each transaction is filed under.

mod create;
mod delete;
mod domain;
mod edit;
mod store;
mod view;

pub use create::create_category_endpoint;
pub use delete::delete_category_endpoint;
pub use domain::{Category, CategoryFormData, CategoryId, CategoryName, CategoryPayload};
pub use edit::{
    begin_edit_category_endpoint, cancel_edit_category_endpoint, update_category_endpoint,
};
pub use store::CategoryStore;
#[cfg(test)]
pub use store::UNKNOWN_CATEGORY;
pub use view::categories_view;
