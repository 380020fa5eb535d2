//! Compact deployment version codes

use crate::{Error, Result};

/// Shorten a four-segment version to its compact code.
///
/// Segments are concatenated and a single-digit fourth segment is padded
/// to two digits: `10.1.2.3` becomes `101203`, `10.1.2.10` becomes
/// `101210`.
///
/// # Errors
///
/// Returns [`Error::InvalidVersion`] unless the version has exactly four
/// non-empty segments.
pub fn shorten_version(version: &str) -> Result<String> {
    let segments: Vec<&str> = version.trim().split('.').collect();
    let [major, minor, micro, patch] = segments.as_slice() else {
        return Err(Error::InvalidVersion {
            version: version.to_string(),
        });
    };
    if segments.iter().any(|segment| segment.is_empty()) {
        return Err(Error::InvalidVersion {
            version: version.to_string(),
        });
    }
    Ok(format!("{major}{minor}{micro}{patch:0>2}"))
}
