use serde::{Deserialize, Serialize};

use super::subscription::Currency;

/// Normalized cost figures for one subscription at the current rate.
///
/// All values are full precision. Rounding and locale formatting belong
/// to the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// The currency `price` is denominated in
    pub native_currency: Currency,

    /// Cost per month in the native currency
    pub monthly_native: f64,

    /// Cost per year in the native currency
    pub yearly_native: f64,

    /// Cost per month converted to KRW
    pub monthly_krw: f64,

    /// Cost per month converted to USD
    pub monthly_usd: f64,

    /// Cost per year converted to KRW
    pub yearly_krw: f64,

    /// Cost per year converted to USD
    pub yearly_usd: f64,
}
