use crate::models::costs::CostBreakdown;
use crate::models::subscription::{BillingCycle, Currency, Subscription};
use super::currency_service;

/// Normalizes a subscription's per-period price into canonical monthly
/// and yearly figures, in the native currency and converted.
///
/// No rounding is applied here; the rendering layer formats.
pub struct CostService;

impl CostService {
    pub fn new() -> Self {
        Self
    }

    /// Cost per month in the subscription's native currency.
    #[must_use]
    pub fn monthly_native(&self, sub: &Subscription) -> f64 {
        match sub.billing_cycle {
            BillingCycle::Yearly => sub.price / 12.0,
            BillingCycle::Monthly => sub.price,
        }
    }

    /// Cost per year in the subscription's native currency.
    #[must_use]
    pub fn yearly_native(&self, sub: &Subscription) -> f64 {
        match sub.billing_cycle {
            BillingCycle::Monthly => sub.price * 12.0,
            BillingCycle::Yearly => sub.price,
        }
    }

    /// Monthly and yearly cost in the native currency and converted to
    /// both display currencies at the given rate.
    #[must_use]
    pub fn breakdown(&self, sub: &Subscription, rate: f64) -> CostBreakdown {
        let monthly = self.monthly_native(sub);
        let yearly = self.yearly_native(sub);

        CostBreakdown {
            native_currency: sub.currency,
            monthly_native: monthly,
            yearly_native: yearly,
            monthly_krw: currency_service::convert(monthly, sub.currency, Currency::Krw, rate),
            monthly_usd: currency_service::convert(monthly, sub.currency, Currency::Usd, rate),
            yearly_krw: currency_service::convert(yearly, sub.currency, Currency::Krw, rate),
            yearly_usd: currency_service::convert(yearly, sub.currency, Currency::Usd, rate),
        }
    }
}

impl Default for CostService {
    fn default() -> Self {
        Self::new()
    }
}
