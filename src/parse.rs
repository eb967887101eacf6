//! Holds parsers for the fixed date string formats.
//!
//! Every parser returns `None` for input it cannot read instead of failing
//! loudly. The accepted formats are exactly "YYYY-MM-DD", "DD.MM.YYYY" and
//! "YYYY-MM"; nothing here guesses at free form input.

use jiff::{Span, civil::Date};

/// Build a date from the first of the month and let the day roll over boundaries.
///
/// "2017-02-30" becomes 2017-03-02 and a day of zero steps back into the
/// previous month. Callers relying on day values must validate beforehand.
fn date_with_day_rollover(year: i16, month: i8, day: i16) -> Option<Date> {
    let first = Date::new(year, month, 1).ok()?;
    Some(first.saturating_add(Span::new().days(i64::from(day) - 1)))
}

/// Parse a "YYYY-MM-DD" string.
///
/// The month must be 1 to 12 while the day is taken verbatim and rolls over
/// through month boundaries (see [`date_with_day_rollover`]).
pub fn ymd_to_date(s: &str) -> Option<Date> {
    let mut parts = s.splitn(3, '-');
    let year = parts.next()?.parse().ok()?;
    let month = parts.next()?.parse().ok()?;
    let day = parts.next()?.parse().ok()?;
    date_with_day_rollover(year, month, day)
}

/// Parse a "DD.MM.YYYY" string, with the same day handling as [`ymd_to_date`].
pub fn dmy_to_date(s: &str) -> Option<Date> {
    let mut parts = s.splitn(3, '.');
    let day = parts.next()?.parse().ok()?;
    let month = parts.next()?.parse().ok()?;
    let year = parts.next()?.parse().ok()?;
    date_with_day_rollover(year, month, day)
}

/// Parse a "YYYY-MM" string to the last day of that month, or its first.
///
/// Anything after the month field is ignored, so "YYYY-MM-DD" input reads as
/// its month. Period end months usually want `last_day` so that the whole
/// month counts as covered.
pub fn ym_to_date(s: &str, last_day: bool) -> Option<Date> {
    let mut parts = s.split('-');
    let year = parts.next()?.parse().ok()?;
    let month = parts.next()?.parse().ok()?;
    let first = Date::new(year, month, 1).ok()?;
    Some(if last_day { first.last_of_month() } else { first })
}

/// Reformat "DD.MM.YYYY" as "YYYY-MM-DD", zero padding month and day.
///
/// A pure string conversion: the fields must be numeric but are not checked
/// against the calendar.
pub fn dmy_to_ymd(s: &str) -> Option<String> {
    let mut parts = s.splitn(3, '.');
    let day: u32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let year: u32 = parts.next()?.parse().ok()?;
    Some(format!("{year}-{month:02}-{day:02}"))
}
