use serde::{Deserialize, Serialize};

use super::subscription::ExpenseType;

/// A partition of the collection over which totals are computed, and the
/// tab the display list is filtered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    #[default]
    All,
    Personal,
    Company,
}

impl Scope {
    /// Whether a record with the given expense type belongs to this scope.
    #[must_use]
    pub fn matches(&self, expense_type: ExpenseType) -> bool {
        match self {
            Scope::All => true,
            Scope::Personal => expense_type == ExpenseType::Personal,
            Scope::Company => expense_type == ExpenseType::Company,
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scope::All => write!(f, "all"),
            Scope::Personal => write!(f, "personal"),
            Scope::Company => write!(f, "company"),
        }
    }
}

/// Aggregate cost figures for one scope.
///
/// These are display aggregates, not an accounting ledger; floating-point
/// accumulation error is acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScopeTotals {
    /// Number of subscriptions in the scope
    pub count: usize,

    /// Total monthly cost in KRW
    pub monthly_krw: f64,

    /// Total monthly cost in USD
    pub monthly_usd: f64,

    /// Total yearly cost in KRW
    pub yearly_krw: f64,

    /// Total yearly cost in USD
    pub yearly_usd: f64,
}

/// Totals for every tab, computed in one pass for the stats header.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StatsOverview {
    pub all: ScopeTotals,
    pub personal: ScopeTotals,
    pub company: ScopeTotals,
}
