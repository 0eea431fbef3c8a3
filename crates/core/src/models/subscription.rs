use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who pays for a subscription.
///
/// Records written by early versions of the app predate this field, so it
/// defaults to `Personal` when absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseType {
    #[default]
    Personal,
    Company,
}

impl std::fmt::Display for ExpenseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpenseType::Personal => write!(f, "personal"),
            ExpenseType::Company => write!(f, "company"),
        }
    }
}

/// Service category. Values not recognized by this version deserialize
/// as `Other` so newer exports still load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Streaming,
    Music,
    Software,
    Shopping,
    Fitness,
    #[default]
    #[serde(other)]
    Other,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Streaming => write!(f, "streaming"),
            Category::Music => write!(f, "music"),
            Category::Software => write!(f, "software"),
            Category::Shopping => write!(f, "shopping"),
            Category::Fitness => write!(f, "fitness"),
            Category::Other => write!(f, "other"),
        }
    }
}

/// The two currencies a subscription can be billed in.
/// Defaults to `Krw` for records that predate the currency field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "KRW")]
    Krw,
    #[serde(rename = "USD")]
    Usd,
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Currency::Krw => write!(f, "KRW"),
            Currency::Usd => write!(f, "USD"),
        }
    }
}

/// How often a subscription bills. `price` is per billing period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    Monthly,
    Yearly,
}

impl std::fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BillingCycle::Monthly => write!(f, "monthly"),
            BillingCycle::Yearly => write!(f, "yearly"),
        }
    }
}

/// A single recurring service the user pays for.
///
/// Wire format is camelCase JSON, matching files exported by the original
/// app. Optional fields carry serde defaults so legacy records normalize
/// once at load time; computations never see a missing field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// Unique identifier, stable for the record's lifetime
    pub id: Uuid,

    /// Display name (non-empty, enforced at the input boundary)
    pub name: String,

    /// Personal or company expense
    #[serde(default)]
    pub expense_type: ExpenseType,

    /// Service category
    #[serde(default)]
    pub category: Category,

    /// Currency `price` is denominated in
    #[serde(default)]
    pub currency: Currency,

    /// Cost per billing period, in `currency`
    pub price: f64,

    /// Monthly or yearly billing
    pub billing_cycle: BillingCycle,

    /// First billing occurrence (no time component, daily granularity)
    pub start_date: NaiveDate,

    /// Last day of the subscription; `None` means indefinite
    #[serde(default)]
    pub end_date: Option<NaiveDate>,

    /// Optional free-text memo
    #[serde(default)]
    pub description: Option<String>,
}

impl Subscription {
    pub fn new(
        name: impl Into<String>,
        category: Category,
        price: f64,
        currency: Currency,
        billing_cycle: BillingCycle,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            expense_type: ExpenseType::Personal,
            category,
            currency,
            price,
            billing_cycle,
            start_date,
            end_date: None,
            description: None,
        }
    }

    /// Mark the subscription as a company expense.
    #[must_use]
    pub fn with_expense_type(mut self, expense_type: ExpenseType) -> Self {
        self.expense_type = expense_type;
        self
    }

    /// Set the date the subscription ends.
    #[must_use]
    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Attach a free-text memo.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
