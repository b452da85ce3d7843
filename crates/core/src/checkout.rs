//! Hosted checkout link construction

/// Builds the hosted checkout URL for a purchase.
///
/// When both the user and item are known, a correlation reference
/// `client_reference_id={user}_{item}` is appended so asynchronous payment
/// fulfillment can attribute the completed payment without a client-held
/// session. Anonymous checkouts get the base URL unchanged; they still work,
/// but fulfillment cannot be auto-attributed.
pub fn checkout_url(base: &str, user_id: Option<&str>, item_id: Option<&str>) -> String {
    match (user_id, item_id) {
        (Some(user), Some(item)) => {
            let reference = format!("{user}_{item}");
            let separator = if base.contains('?') { '&' } else { '?' };
            format!(
                "{base}{separator}client_reference_id={}",
                urlencoding::encode(&reference)
            )
        }
        _ => base.to_string(),
    }
}
