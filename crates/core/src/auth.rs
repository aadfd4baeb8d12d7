//! Static-token authorization.
//!
//! Every request must carry an `Authorization` header whose value equals the
//! configured token exactly. There is no scheme prefix and no normalisation:
//! the comparison is byte-for-byte.

use crate::error::CoreError;

/// Default token expected in the `Authorization` header.
pub const DEFAULT_AUTH_TOKEN: &str = "November 10, 2009";

/// Fixed message returned for every rejected request.
pub const PERMISSION_DENIED_MESSAGE: &str = "you don't have the permission!!";

/// Check a raw `Authorization` header value against the expected token.
///
/// `provided` is `None` when the header is absent.
pub fn authorize(provided: Option<&[u8]>, expected: &str) -> Result<(), CoreError> {
    match provided {
        Some(value) if value == expected.as_bytes() => Ok(()),
        _ => Err(CoreError::Unauthorized(PERMISSION_DENIED_MESSAGE.to_string())),
    }
}
