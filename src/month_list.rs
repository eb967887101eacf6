//! Holds bounded month list generation between period bounds.

use crate::{
    format::{date_to_ym, date_to_ymd},
    months::saturating_add_months,
    parse::ym_to_date,
};

/// Inclusive "YYYY-MM" strings from the start month to the end month.
///
/// Inputs may be "YYYY-MM" or "YYYY-MM-DD"; a day field is ignored. A start
/// chronologically after the end collapses to the end month, so the output is
/// never backwards and always holds at least the end month. Unparseable input
/// yields an empty list.
pub fn month_list_between(start: &str, end: &str) -> Vec<String> {
    let (Some(start), Some(end)) = (ym_to_date(start, false), ym_to_date(end, false)) else {
        return Vec::new();
    };

    let mut current = start.min(end);
    let mut months = Vec::new();
    while current <= end {
        months.push(date_to_ym(current));
        current = saturating_add_months(current, 1);
    }
    months
}

/// Month strings from `window_start` onward, stopping at `end` or after
/// `window_size` entries, whichever comes first.
///
/// A window start past the end clamps back to the end month, and at least one
/// month comes out for valid input. `start` bounds nothing but must still
/// parse. `append_day` suffixes each entry with the first of the month, for
/// callers that need full dates. `None` if any of the three date strings does
/// not parse.
pub fn month_list_from_period(
    start: &str,
    end: &str,
    window_start: &str,
    window_size: u32,
    append_day: bool,
) -> Option<Vec<String>> {
    ym_to_date(start, false)?;
    let end = ym_to_date(end, false)?;
    let mut current = ym_to_date(window_start, false)?.min(end);
    let window_size = window_size.max(1) as usize;

    let mut months = Vec::new();
    while current <= end {
        months.push(if append_day {
            date_to_ymd(current)
        } else {
            date_to_ym(current)
        });
        if months.len() >= window_size {
            break;
        }
        current = saturating_add_months(current, 1);
    }
    Some(months)
}
