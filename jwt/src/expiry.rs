//! Token expiration handling
//!
//! An [`Expiry`] is either an absolute point in time or a relative
//! duration written as `<integer><unit>`, e.g. `"30s"` or `"12h"`.

use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};

use crate::error::{JwtError, JwtResult};

/// When a token stops being valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiry {
    /// Absolute expiration instant
    At(DateTime<Utc>),
    /// Duration relative to the token's `iat`
    In(Duration),
}

impl Expiry {
    /// Parse a relative duration string of the form `<integer><unit>`,
    /// unit one of `ms`, `s`, `m`, `h`, `d`.
    ///
    /// # Errors
    ///
    /// Returns [`JwtError::UnparsableExpiry`] when no unit suffix matches
    /// or the leading amount is not an integer.
    pub fn parse(raw: &str) -> JwtResult<Self> {
        // `ms` must be tried before `s`. Amounts are widened to
        // milliseconds; overflow in the multiply is a parse failure.
        const UNITS: [(&str, i64); 5] = [
            ("ms", 1),
            ("s", 1_000),
            ("m", 60_000),
            ("h", 3_600_000),
            ("d", 86_400_000),
        ];
        for (suffix, factor) in UNITS {
            if let Some(amount) = raw.strip_suffix(suffix) {
                let millis = amount
                    .parse::<i64>()
                    .ok()
                    .and_then(|amount| amount.checked_mul(factor))
                    .ok_or_else(|| JwtError::UnparsableExpiry(raw.to_string()))?;
                return Ok(Self::In(Duration::milliseconds(millis)));
            }
        }
        Err(JwtError::UnparsableExpiry(raw.to_string()))
    }

    /// Resolve to an `exp` claim in Unix-epoch seconds, relative
    /// durations counting from `iat`. Sub-second remainders round up so a
    /// positive duration never collapses to "already expired".
    #[must_use]
    pub fn resolve(&self, iat: i64) -> i64 {
        match self {
            Self::At(instant) => div_ceil_seconds(instant.timestamp_millis()),
            Self::In(duration) => iat + div_ceil_seconds(duration.num_milliseconds()),
        }
    }
}

impl FromStr for Expiry {
    type Err = JwtError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse(raw)
    }
}

impl From<DateTime<Utc>> for Expiry {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::At(instant)
    }
}

impl From<Duration> for Expiry {
    fn from(duration: Duration) -> Self {
        Self::In(duration)
    }
}

const fn div_ceil_seconds(millis: i64) -> i64 {
    millis.div_euclid(1000) + if millis.rem_euclid(1000) > 0 { 1 } else { 0 }
}
