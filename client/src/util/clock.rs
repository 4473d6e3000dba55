//! Wall-clock access for message ids.
//!
//! In the browser this reads `Date.now()`; during SSR it falls back to the
//! system clock so rendering never needs a browser.

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let now = js_sys::Date::now() as u64;
        now
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }
}
