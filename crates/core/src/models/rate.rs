use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// USD to KRW rate used until the first successful refresh on a fresh
/// install. Snapshot of the market rate shipped with the original app.
pub const FALLBACK_USD_KRW: f64 = 1423.50;

/// How long a cached rate stays fresh before a refresh is due.
pub const RATE_REFRESH_INTERVAL_HOURS: i64 = 6;

/// A cached USD to KRW exchange rate: 1 USD = `rate` KRW.
///
/// There is no per-record rate pinning. Every cost computation uses
/// whatever rate is current at call time, so converted figures shift
/// when the rate refreshes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// KRW per 1 USD, always finite and positive
    pub rate: f64,

    /// When this rate was fetched
    pub updated_at: DateTime<Utc>,
}

impl ExchangeRate {
    pub fn new(rate: f64, updated_at: DateTime<Utc>) -> Self {
        Self { rate, updated_at }
    }

    /// Whether the rate is older than the refresh interval at `now`.
    #[must_use]
    pub fn is_stale(&self, now: DateTime<Utc>) -> bool {
        now - self.updated_at >= chrono::Duration::hours(RATE_REFRESH_INTERVAL_HOURS)
    }
}
