//! Comma-separated listings

/// Key under which a mapping declares its ordered element names.
pub const LISTING: &str = "listing";

/// Split a listing value into trimmed, non-empty element names.
pub fn split_listing(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(',')
        .map(str::trim)
        .filter(|element| !element.is_empty())
}
