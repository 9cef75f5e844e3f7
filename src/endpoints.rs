//! The URIs of the web front end.
//!
//! For endpoints that take a parameter, e.g., '/categories/{category_id}', use [format_endpoint].

/// The tracker page.
pub const ROOT: &str = "/";
/// The route to create a category.
pub const CATEGORIES: &str = "/categories";
/// The route to update or delete a category.
pub const CATEGORY: &str = "/categories/{category_id}";
/// The route to start editing a category.
pub const EDIT_CATEGORY: &str = "/categories/{category_id}/edit";
/// The route to stop editing a category.
pub const CANCEL_CATEGORY_EDIT: &str = "/categories/cancel_edit";
/// The route to create a transaction.
pub const TRANSACTIONS: &str = "/transactions";
/// The route to update or delete a transaction.
pub const TRANSACTION: &str = "/transactions/{transaction_id}";
/// The route to start editing a transaction.
pub const EDIT_TRANSACTION: &str = "/transactions/{transaction_id}/edit";
/// The route to stop editing a transaction.
pub const CANCEL_TRANSACTION_EDIT: &str = "/transactions/cancel_edit";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter starts with a left brace and ends with a right brace.
/// For example, in the endpoint path '/categories/{category_id}', '{category_id}' is the parameter.
/// Only the first parameter is replaced.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map_or(endpoint_path.len(), |end| param_start + end + 1);

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
