//! The URIs served by the app.
//!
//! For endpoints that take a parameter, e.g., '/draft/{field}', use [format_endpoint].

/// The transactions page: the form and the table of recorded transactions.
pub const ROOT: &str = "/";
/// The route the form submits a new transaction to.
pub const TRANSACTIONS: &str = "/transactions";
/// The route for updating a single field of the draft transaction.
pub const DRAFT_FIELD: &str = "/draft/{field}";

/// Replace the parameter in `endpoint_path` with `value`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/draft/{field}', '{field}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, value: &str) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map_or(endpoint_path.len(), |end| param_start + end + 1);

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        value,
        &endpoint_path[param_end..]
    )
}
