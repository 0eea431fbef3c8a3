use chrono::NaiveDate;
use std::cmp::Ordering;

use crate::models::card::SubscriptionCard;
use crate::models::stats::Scope;
use crate::models::subscription::{Category, Subscription};
use super::billing_service::BillingService;
use super::cost_service::CostService;

/// Filters the collection for display and orders it by urgency.
///
/// The filter is the AND of tab, category, and search text; the order is
/// ascending next billing date, with lapsed records (no next billing
/// date) after all dated ones. Every comparison in one call uses the
/// single `today` passed in, so mid-sort clock drift cannot produce an
/// inconsistent order.
pub struct ListingService {
    billing_service: BillingService,
    cost_service: CostService,
}

impl ListingService {
    pub fn new() -> Self {
        Self {
            billing_service: BillingService::new(),
            cost_service: CostService::new(),
        }
    }

    /// The filtered, ordered display sequence.
    #[must_use]
    pub fn select<'a>(
        &self,
        subscriptions: &'a [Subscription],
        tab: Scope,
        category: Option<Category>,
        search: &str,
        today: NaiveDate,
    ) -> Vec<&'a Subscription> {
        let needle = search.trim().to_lowercase();

        let mut items: Vec<(&Subscription, Option<NaiveDate>)> = subscriptions
            .iter()
            .filter(|sub| {
                tab.matches(sub.expense_type)
                    && category.map_or(true, |c| sub.category == c)
                    && matches_search(sub, &needle)
            })
            .map(|sub| {
                let next = self.billing_service.next_billing_date(
                    sub.start_date,
                    sub.end_date,
                    sub.billing_cycle,
                    today,
                );
                (sub, next)
            })
            .collect();

        // Stable sort: lapsed records keep their relative order at the end.
        items.sort_by(|a, b| match (a.1, b.1) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });

        items.into_iter().map(|(sub, _)| sub).collect()
    }

    /// The same selection with derived billing and cost figures attached:
    /// one full render pass.
    #[must_use]
    pub fn cards<'a>(
        &self,
        subscriptions: &'a [Subscription],
        tab: Scope,
        category: Option<Category>,
        search: &str,
        rate: f64,
        today: NaiveDate,
    ) -> Vec<SubscriptionCard<'a>> {
        self.select(subscriptions, tab, category, search, today)
            .into_iter()
            .map(|sub| SubscriptionCard {
                subscription: sub,
                billing: self.billing_service.billing_state(sub, today),
                costs: self.cost_service.breakdown(sub, rate),
                days_since_start: self.billing_service.days_since_start(sub.start_date, today),
            })
            .collect()
    }
}

impl Default for ListingService {
    fn default() -> Self {
        Self::new()
    }
}

fn matches_search(sub: &Subscription, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    sub.name.to_lowercase().contains(needle)
        || sub
            .description
            .as_deref()
            .unwrap_or("")
            .to_lowercase()
            .contains(needle)
}
