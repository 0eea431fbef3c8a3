use chrono::{DateTime, Utc};

use crate::errors::CoreError;
use crate::models::rate::{ExchangeRate, FALLBACK_USD_KRW};
use crate::providers::traits::RateProvider;

/// Supplies the USD to KRW rate every cost computation uses.
///
/// Resolution order: the cached rate from the last successful refresh,
/// else the hardcoded fallback snapshot. A refresh failure is recovered
/// locally (the stale rate stays in effect) and logged; it is never a
/// blocking error.
pub struct RateService {
    provider: Box<dyn RateProvider>,
}

impl RateService {
    pub fn new(provider: Box<dyn RateProvider>) -> Self {
        Self { provider }
    }

    /// The most recently known rate, or the fallback on a fresh install.
    #[must_use]
    pub fn current_rate(cached: Option<&ExchangeRate>) -> f64 {
        cached.map_or(FALLBACK_USD_KRW, |r| r.rate)
    }

    /// Whether a refresh is due at `now`: no rate was ever fetched, or
    /// the cached one is older than the refresh interval.
    #[must_use]
    pub fn needs_refresh(cached: Option<&ExchangeRate>, now: DateTime<Utc>) -> bool {
        cached.map_or(true, |r| r.is_stale(now))
    }

    /// Fetch a fresh rate from the provider and stamp it with `now`.
    ///
    /// A non-positive or non-finite rate is a provider fault and is
    /// rejected; the caller keeps the previous rate on any error.
    pub async fn refresh(&self, now: DateTime<Utc>) -> Result<ExchangeRate, CoreError> {
        let rate = self.provider.fetch_usd_krw().await?;

        if !rate.is_finite() || rate <= 0.0 {
            return Err(CoreError::Api {
                provider: self.provider.name().to_string(),
                message: format!("Invalid rate returned: {rate} (must be finite and positive)"),
            });
        }

        tracing::debug!(rate, provider = self.provider.name(), "exchange rate refreshed");
        Ok(ExchangeRate::new(rate, now))
    }

    /// Name of the backing provider (for logs).
    #[must_use]
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }
}
