use chrono::{Datelike, NaiveDate};

use crate::models::billing::{BillingState, EXPIRING_SOON_WINDOW_DAYS};
use crate::models::subscription::{BillingCycle, Subscription};

/// Computes billing-cycle projections: the next billing date for a
/// subscription and the countdown to it.
///
/// Pure date arithmetic, no I/O. All inputs are `NaiveDate`, so "today"
/// carries no time-of-day and a billing due today resolves to day 0.
pub struct BillingService;

impl BillingService {
    pub fn new() -> Self {
        Self
    }

    /// Compute the next date the subscription bills, or `None` once it
    /// has lapsed.
    ///
    /// - Lapsed (`today` past `end_date`) or inverted (`end_date` before
    ///   `start_date`) records have no next billing date.
    /// - A subscription that has not started yet bills first on its
    ///   start date.
    /// - Otherwise the anchor day (day-of-month of the start date) is
    ///   projected into the current month or year and advanced one cycle
    ///   if already past. Anchor days beyond the target month's length
    ///   clamp to its last day, so a day-31 anchor bills on Apr 30 and
    ///   Feb 28/29.
    pub fn next_billing_date(
        &self,
        start: NaiveDate,
        end: Option<NaiveDate>,
        cycle: BillingCycle,
        today: NaiveDate,
    ) -> Option<NaiveDate> {
        if let Some(end) = end {
            if end < start {
                // Inverted range: rejected at the input boundary, but a
                // record that slipped through must not bill again.
                return None;
            }
            if today > end {
                return None;
            }
        }

        if today <= start {
            return Some(start);
        }

        let anchor = start.day();
        match cycle {
            BillingCycle::Yearly => {
                let candidate = clamped_ymd(today.year(), start.month(), anchor);
                if candidate < today {
                    Some(clamped_ymd(today.year() + 1, start.month(), anchor))
                } else {
                    Some(candidate)
                }
            }
            BillingCycle::Monthly => {
                let candidate = clamped_ymd(today.year(), today.month(), anchor);
                if candidate < today {
                    let (year, month) = next_month(today.year(), today.month());
                    Some(clamped_ymd(year, month, anchor))
                } else {
                    Some(candidate)
                }
            }
        }
    }

    /// Whole days from `today` until `target`. Never negative; 0 when the
    /// target is today or already past.
    #[must_use]
    pub fn days_until(&self, target: NaiveDate, today: NaiveDate) -> i64 {
        (target - today).num_days().max(0)
    }

    /// Days elapsed since the subscription started, 0 for future starts.
    #[must_use]
    pub fn days_since_start(&self, start: NaiveDate, today: NaiveDate) -> i64 {
        (today - start).num_days().max(0)
    }

    /// Assemble the full derived billing state for one record.
    #[must_use]
    pub fn billing_state(&self, sub: &Subscription, today: NaiveDate) -> BillingState {
        let is_expired = sub.end_date.is_some_and(|end| today > end);
        let is_expiring_soon = !is_expired
            && sub
                .end_date
                .is_some_and(|end| (end - today).num_days() <= EXPIRING_SOON_WINDOW_DAYS);

        let next_billing_date =
            self.next_billing_date(sub.start_date, sub.end_date, sub.billing_cycle, today);
        let days_until_billing = next_billing_date.map(|d| self.days_until(d, today));

        BillingState {
            next_billing_date,
            days_until_billing,
            is_expired,
            is_expiring_soon,
        }
    }
}

impl Default for BillingService {
    fn default() -> Self {
        Self::new()
    }
}

// ── Calendar helpers ────────────────────────────────────────────────

/// Number of days in the given month.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
                29
            } else {
                28
            }
        }
        _ => 30,
    }
}

/// Shift a date by a number of months, clamping the day to the length of
/// the target month (Jan 31 + 1 month = Feb 28/29).
#[must_use]
pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    clamped_ymd(year, month as u32, date.day())
}

/// Build a date from year/month and a desired day, clamping the day to
/// the month's length. Infallible: the clamped day always exists.
fn clamped_ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    let day = day.min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}
