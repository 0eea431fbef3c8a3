use serde::{Deserialize, Serialize};

use super::rate::ExchangeRate;
use super::subscription::Subscription;

/// The main data container. Everything in here gets serialized to the
/// JSON file the app persists between sessions.
///
/// Contains the subscription records and the last fetched exchange rate
/// (so converted costs are available offline).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionBook {
    /// All subscription records
    pub subscriptions: Vec<Subscription>,

    /// Cached USD to KRW rate; `None` on a fresh install
    #[serde(default)]
    pub cached_rate: Option<ExchangeRate>,
}

impl SubscriptionBook {
    pub fn new() -> Self {
        Self::default()
    }
}
