use crate::models::subscription::Currency;

/// Convert an amount between the two supported currencies at the given
/// USD to KRW rate.
///
/// Same-currency conversion is the exact identity: no arithmetic is
/// applied, so no floating rounding is introduced. `rate` must be finite
/// and positive; the rate service validates that before a rate ever
/// reaches this function.
#[must_use]
pub fn convert(amount: f64, from: Currency, to: Currency, rate: f64) -> f64 {
    match (from, to) {
        (Currency::Usd, Currency::Krw) => amount * rate,
        (Currency::Krw, Currency::Usd) => amount / rate,
        // Same currency: identity, exact
        _ => amount,
    }
}
