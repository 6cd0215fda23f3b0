//! TTL token parsing
//!
//! Namecheap expresses TTL as integer seconds, with `0` meaning "Automatic".
//! Users type friendlier tokens (`auto`, `5m`, `3600`); this module turns them
//! into the wire value.

use crate::error::{ProviderError, Result};

/// TTL used when the caller gives none (30 minutes).
pub const DEFAULT_TTL: u32 = 1800;

/// Wire value for Namecheap's "Automatic" TTL.
pub const AUTOMATIC_TTL: u32 = 0;

/// Convert a user TTL token into seconds.
///
/// - `None` -> [`DEFAULT_TTL`]
/// - `auto` / `automatic` (any case) -> [`AUTOMATIC_TTL`]
/// - `<digits>m` -> digits × 60
/// - any other positive number -> that many seconds (`300`, `+300`,
///   `300.0`, `1e3`)
///
/// Everything else is [`ProviderError::InvalidTtl`]. Numbers must be whole
/// and fit in a `u32`, since the wire value is integer seconds.
#[allow(
    clippy::float_cmp,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn normalize_ttl(input: Option<&str>) -> Result<u32> {
    let Some(raw) = input else {
        return Ok(DEFAULT_TTL);
    };

    let invalid = || ProviderError::InvalidTtl {
        input: raw.to_string(),
    };

    let token = raw.trim().to_ascii_lowercase();

    if token == "auto" || token == "automatic" {
        return Ok(AUTOMATIC_TTL);
    }

    if let Some(minutes) = token.strip_suffix('m') {
        if !minutes.is_empty() && minutes.bytes().all(|b| b.is_ascii_digit()) {
            return minutes
                .parse::<u32>()
                .ok()
                .and_then(|m| m.checked_mul(60))
                .ok_or_else(invalid);
        }
        return Err(invalid());
    }

    if let Ok(secs) = token.parse::<u32>() {
        return if secs > 0 { Ok(secs) } else { Err(invalid()) };
    }

    match token.parse::<f64>() {
        Ok(secs)
            if secs.is_finite()
                && secs > 0.0
                && secs.fract() == 0.0
                && secs <= f64::from(u32::MAX) =>
        {
            Ok(secs as u32)
        }
        _ => Err(invalid()),
    }
}
