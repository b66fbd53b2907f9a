//! QR payload format shared by the display screen and the scanner.
//!
//! The code encodes `<origin>/customer/<id>`. The scanner keeps only what follows the
//! last `/`, so any absolute URL ending in the identifier is accepted.

const CUSTOMER_PATH: &str = "/customer/";

/// URL encoded into a customer's QR code.
pub fn customer_url(origin: &str, customer_id: &str) -> String {
    format!(
        "{}{}{}",
        origin.trim_end_matches('/'),
        CUSTOMER_PATH,
        customer_id
    )
}

/// Customer identifier carried by a decoded payload: the final path segment.
///
/// Returns `None` when nothing follows the last `/`.
pub fn extract_customer_id(payload: &str) -> Option<&str> {
    payload
        .trim()
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
}
