use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Days before `end_date` at which a subscription counts as expiring soon.
pub const EXPIRING_SOON_WINDOW_DAYS: i64 = 30;

/// Per-record billing status, recomputed from the subscription plus
/// "today" on every render pass. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BillingState {
    /// The next date the subscription bills; `None` once it has lapsed
    pub next_billing_date: Option<NaiveDate>,

    /// Whole days until the next billing, 0 when due today
    pub days_until_billing: Option<i64>,

    /// The end date has passed
    pub is_expired: bool,

    /// The end date falls within the next 30 days
    pub is_expiring_soon: bool,
}
