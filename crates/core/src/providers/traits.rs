use async_trait::async_trait;

use crate::errors::CoreError;

/// Trait abstraction over the external exchange-rate source.
///
/// The live implementation talks to the Frankfurter API. If that API stops
/// working or changes, only that one implementation is replaced; tests
/// inject mocks through the same seam.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait RateProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch the current USD to KRW rate (KRW per 1 USD).
    ///
    /// A malformed response or a response missing the KRW field is an
    /// error; a partial result is never returned.
    async fn fetch_usd_krw(&self) -> Result<f64, CoreError>;
}
