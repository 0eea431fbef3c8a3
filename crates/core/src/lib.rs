pub mod errors;
pub mod models;
pub mod providers;
pub mod services;
pub mod storage;

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use models::{
    billing::BillingState,
    book::SubscriptionBook,
    card::SubscriptionCard,
    costs::CostBreakdown,
    rate::ExchangeRate,
    stats::{Scope, ScopeTotals, StatsOverview},
    subscription::{Category, Subscription},
};
use providers::frankfurter::FrankfurterProvider;
use providers::traits::RateProvider;
use services::{
    billing_service::BillingService, cost_service::CostService,
    listing_service::ListingService, rate_service::RateService, stats_service::StatsService,
};
use storage::export;
use storage::manager::StorageManager;

use errors::CoreError;

/// Main entry point for the Subscription Tracker core library.
/// Owns the subscription collection and all services that operate on it.
///
/// The collection is mutated only through this type; every computation
/// below works on read-only snapshots and returns freshly derived values.
#[must_use]
pub struct SubscriptionTracker {
    book: SubscriptionBook,
    billing_service: BillingService,
    cost_service: CostService,
    stats_service: StatsService,
    listing_service: ListingService,
    rate_service: RateService,
    /// Tracks whether any mutation has occurred since the last save/load.
    dirty: bool,
}

impl std::fmt::Debug for SubscriptionTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubscriptionTracker")
            .field("subscriptions", &self.book.subscriptions.len())
            .field("cached_rate", &self.book.cached_rate)
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl SubscriptionTracker {
    /// Create a brand new empty tracker backed by the live rate provider.
    pub fn create_new() -> Self {
        Self::build(SubscriptionBook::new())
    }

    /// Load an existing book from JSON bytes.
    /// Use this for WASM or hosts where the frontend handles file I/O.
    pub fn load_from_bytes(data: &[u8]) -> Result<Self, CoreError> {
        let book = StorageManager::load_from_bytes(data)?;
        Ok(Self::build(book))
    }

    /// Save the current book to JSON bytes.
    /// Returns raw bytes the frontend can write to a file.
    /// Clears the unsaved-changes flag on success.
    pub fn save_to_bytes(&mut self) -> Result<Vec<u8>, CoreError> {
        let bytes = StorageManager::save_to_bytes(&self.book)?;
        self.dirty = false;
        Ok(bytes)
    }

    /// Load from a JSON file on disk (native only, not WASM).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: &str) -> Result<Self, CoreError> {
        let book = StorageManager::load_from_file(path)?;
        Ok(Self::build(book))
    }

    /// Save to a JSON file on disk (native only).
    /// Clears the unsaved-changes flag on success.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_file(&mut self, path: &str) -> Result<(), CoreError> {
        StorageManager::save_to_file(&self.book, path)?;
        self.dirty = false;
        Ok(())
    }

    /// Swap the exchange-rate provider (e.g., a mock in tests).
    pub fn set_rate_provider(&mut self, provider: Box<dyn RateProvider>) {
        self.rate_service = RateService::new(provider);
    }

    // ── Subscription Management ─────────────────────────────────────

    /// Add a subscription to the collection.
    /// Validates the record before adding (non-empty name, positive
    /// price, end date not before start date, unique id).
    pub fn add_subscription(&mut self, subscription: Subscription) -> Result<Uuid, CoreError> {
        Self::validate(&subscription)?;
        if self
            .book
            .subscriptions
            .iter()
            .any(|s| s.id == subscription.id)
        {
            return Err(CoreError::ValidationError(format!(
                "Duplicate subscription id: {}",
                subscription.id
            )));
        }
        let id = subscription.id;
        self.book.subscriptions.push(subscription);
        self.dirty = true;
        Ok(id)
    }

    /// Replace an existing subscription by its ID, keeping the ID stable.
    /// Validates the updated record before committing.
    pub fn update_subscription(
        &mut self,
        id: Uuid,
        mut updated: Subscription,
    ) -> Result<(), CoreError> {
        updated.id = id;
        Self::validate(&updated)?;
        let slot = self
            .book
            .subscriptions
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| CoreError::SubscriptionNotFound(id.to_string()))?;
        *slot = updated;
        self.dirty = true;
        Ok(())
    }

    /// Remove a subscription by its ID.
    pub fn remove_subscription(&mut self, id: Uuid) -> Result<(), CoreError> {
        let idx = self
            .book
            .subscriptions
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| CoreError::SubscriptionNotFound(id.to_string()))?;
        self.book.subscriptions.remove(idx);
        self.dirty = true;
        Ok(())
    }

    /// Get a single subscription by its ID.
    #[must_use]
    pub fn get_subscription(&self, id: Uuid) -> Option<&Subscription> {
        self.book.subscriptions.iter().find(|s| s.id == id)
    }

    /// All subscriptions in insertion order.
    #[must_use]
    pub fn subscriptions(&self) -> &[Subscription] {
        &self.book.subscriptions
    }

    /// Total number of subscriptions without filtering.
    #[must_use]
    pub fn subscription_count(&self) -> usize {
        self.book.subscriptions.len()
    }

    // ── Derived State ───────────────────────────────────────────────

    /// Billing projection for one record as of `today`.
    pub fn billing_state(&self, id: Uuid, today: NaiveDate) -> Result<BillingState, CoreError> {
        let sub = self
            .get_subscription(id)
            .ok_or_else(|| CoreError::SubscriptionNotFound(id.to_string()))?;
        Ok(self.billing_service.billing_state(sub, today))
    }

    /// Cost figures for one record at the current rate.
    pub fn cost_breakdown(&self, id: Uuid) -> Result<CostBreakdown, CoreError> {
        let sub = self
            .get_subscription(id)
            .ok_or_else(|| CoreError::SubscriptionNotFound(id.to_string()))?;
        Ok(self.cost_service.breakdown(sub, self.current_rate()))
    }

    /// Aggregate totals for one scope at the current rate.
    #[must_use]
    pub fn totals(&self, scope: Scope) -> ScopeTotals {
        self.stats_service
            .aggregate(&self.book.subscriptions, scope, self.current_rate())
    }

    /// Totals for every tab at once.
    #[must_use]
    pub fn overview(&self) -> StatsOverview {
        self.stats_service
            .overview(&self.book.subscriptions, self.current_rate())
    }

    /// The filtered, ordered display sequence for a tab.
    #[must_use]
    pub fn select(
        &self,
        tab: Scope,
        category: Option<Category>,
        search: &str,
        today: NaiveDate,
    ) -> Vec<&Subscription> {
        self.listing_service
            .select(&self.book.subscriptions, tab, category, search, today)
    }

    /// The display sequence with billing state and costs attached:
    /// everything one render pass needs.
    #[must_use]
    pub fn cards(
        &self,
        tab: Scope,
        category: Option<Category>,
        search: &str,
        today: NaiveDate,
    ) -> Vec<SubscriptionCard<'_>> {
        self.listing_service.cards(
            &self.book.subscriptions,
            tab,
            category,
            search,
            self.current_rate(),
            today,
        )
    }

    // ── Exchange Rate ───────────────────────────────────────────────

    /// The rate every conversion currently uses: the cached rate from
    /// the last successful refresh, or the fallback on a fresh install.
    #[must_use]
    pub fn current_rate(&self) -> f64 {
        RateService::current_rate(self.book.cached_rate.as_ref())
    }

    /// When the cached rate was last refreshed, if ever.
    #[must_use]
    pub fn rate_last_updated(&self) -> Option<DateTime<Utc>> {
        self.book.cached_rate.map(|r| r.updated_at)
    }

    /// Whether the cached rate is due for a refresh at `now`.
    /// The host's event loop drives the actual refresh cadence.
    #[must_use]
    pub fn needs_rate_refresh(&self, now: DateTime<Utc>) -> bool {
        RateService::needs_refresh(self.book.cached_rate.as_ref(), now)
    }

    /// Fetch a fresh rate from the provider and cache it.
    ///
    /// Non-fatal on failure: the stale rate stays in effect, a warning is
    /// logged, and the error is returned for the caller to inspect or
    /// ignore. A refresh completing mid-interaction only affects the next
    /// computation pass, never one already produced.
    pub async fn refresh_rate(&mut self) -> Result<f64, CoreError> {
        match self.rate_service.refresh(Utc::now()).await {
            Ok(fresh) => {
                self.book.cached_rate = Some(fresh);
                self.dirty = true;
                Ok(fresh.rate)
            }
            Err(e) => {
                tracing::warn!(
                    provider = self.rate_service.provider_name(),
                    error = %e,
                    "exchange rate refresh failed; keeping cached rate"
                );
                Err(e)
            }
        }
    }

    /// Manually set the cached rate (useful for testing, offline use, or
    /// seeding from an external source).
    pub fn set_cached_rate(&mut self, rate: f64, updated_at: DateTime<Utc>) {
        self.book.cached_rate = Some(ExchangeRate::new(rate, updated_at));
        self.dirty = true;
    }

    // ── Export / Import ─────────────────────────────────────────────

    /// Export all subscriptions as a backup JSON string.
    pub fn export_to_json(&self) -> Result<String, CoreError> {
        export::export_to_json(&self.book.subscriptions, Utc::now())
    }

    /// Import subscriptions from a backup JSON string, replacing the
    /// current collection. All-or-nothing: a payload that fails
    /// validation is rejected wholesale and the collection is untouched.
    /// Returns the number of records imported.
    pub fn import_from_json(&mut self, json: &str) -> Result<usize, CoreError> {
        let imported = export::import_from_json(json)?;
        let count = imported.len();
        self.book.subscriptions = imported;
        self.dirty = true;
        Ok(count)
    }

    // ── Dirty State ─────────────────────────────────────────────────

    /// Returns `true` if the book has been modified since the last save
    /// or load.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    // ── Internal ────────────────────────────────────────────────────

    /// Input-boundary validation: non-empty name, finite positive price,
    /// and an end date no earlier than the start date. The computation
    /// layer still defends against records that bypassed this (e.g., from
    /// an old file), but nothing new enters the collection violating it.
    fn validate(sub: &Subscription) -> Result<(), CoreError> {
        if sub.name.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "Subscription name must not be empty".into(),
            ));
        }
        if !sub.price.is_finite() || sub.price <= 0.0 {
            return Err(CoreError::ValidationError(format!(
                "Price must be a positive number, got {}",
                sub.price
            )));
        }
        if let Some(end) = sub.end_date {
            if end < sub.start_date {
                return Err(CoreError::ValidationError(format!(
                    "End date ({end}) must not be before start date ({})",
                    sub.start_date
                )));
            }
        }
        Ok(())
    }

    fn build(book: SubscriptionBook) -> Self {
        Self {
            book,
            billing_service: BillingService::new(),
            cost_service: CostService::new(),
            stats_service: StatsService::new(),
            listing_service: ListingService::new(),
            rate_service: RateService::new(Box::new(FrankfurterProvider::new())),
            dirty: false,
        }
    }
}
