use crate::models::stats::{Scope, ScopeTotals, StatsOverview};
use crate::models::subscription::{Currency, Subscription};
use super::cost_service::CostService;
use super::currency_service;

/// Reduces the subscription collection into per-scope cost totals for
/// the stats header.
///
/// Summation order is insignificant; these are display aggregates and
/// floating-point accumulation error is accepted.
pub struct StatsService {
    cost_service: CostService,
}

impl StatsService {
    pub fn new() -> Self {
        Self {
            cost_service: CostService::new(),
        }
    }

    /// Totals over the records matching `scope`, converted at `rate`.
    ///
    /// A record whose price is not finite still counts but contributes 0
    /// to every total; one bad record never aborts the aggregation.
    /// Empty input yields an all-zero result.
    #[must_use]
    pub fn aggregate(&self, subscriptions: &[Subscription], scope: Scope, rate: f64) -> ScopeTotals {
        let mut totals = ScopeTotals::default();

        for sub in subscriptions.iter().filter(|s| scope.matches(s.expense_type)) {
            totals.count += 1;

            let monthly = self.cost_service.monthly_native(sub);
            let yearly = self.cost_service.yearly_native(sub);
            if !monthly.is_finite() || !yearly.is_finite() {
                continue;
            }

            totals.monthly_krw +=
                currency_service::convert(monthly, sub.currency, Currency::Krw, rate);
            totals.monthly_usd +=
                currency_service::convert(monthly, sub.currency, Currency::Usd, rate);
            totals.yearly_krw +=
                currency_service::convert(yearly, sub.currency, Currency::Krw, rate);
            totals.yearly_usd +=
                currency_service::convert(yearly, sub.currency, Currency::Usd, rate);
        }

        totals
    }

    /// Totals for every tab at once.
    #[must_use]
    pub fn overview(&self, subscriptions: &[Subscription], rate: f64) -> StatsOverview {
        StatsOverview {
            all: self.aggregate(subscriptions, Scope::All, rate),
            personal: self.aggregate(subscriptions, Scope::Personal, rate),
            company: self.aggregate(subscriptions, Scope::Company, rate),
        }
    }
}

impl Default for StatsService {
    fn default() -> Self {
        Self::new()
    }
}
