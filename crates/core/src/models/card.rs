use super::billing::BillingState;
use super::costs::CostBreakdown;
use super::subscription::Subscription;

/// Everything the rendering layer needs to draw one list entry:
/// the record itself plus its derived billing and cost figures.
///
/// Pure data; currency symbols, number formatting, and date localization
/// happen downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionCard<'a> {
    pub subscription: &'a Subscription,
    pub billing: BillingState,
    pub costs: CostBreakdown,
    /// Days elapsed since the subscription started, 0 for future starts
    pub days_since_start: i64,
}
