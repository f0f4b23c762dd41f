//! Time related utils.

use chrono::Utc;

/// Current Unix timestamp in seconds.
///
/// Signing never calls this on its own: callers that want "now" fetch it
/// here and pass it down explicitly.
#[inline]
pub fn now_timestamp() -> i64 {
    Utc::now().timestamp()
}
