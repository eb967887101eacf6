//! Holds month counting and month shifting arithmetic.
//!
//! Shifts normalize the day of month before adding months (mid month for YM
//! strings, first of month for YMD strings) so that month lengths never skew
//! a result. This normalization is contract, not implementation detail.

use jiff::{Span, civil::Date};

use crate::{
    format::{date_to_ym, date_to_ymd},
    parse::{ym_to_date, ymd_to_date},
};

/// Largest month offset accepted by the shifting helpers, about ten millennia.
///
/// Values beyond it clamp; jiff spans reject larger month counts outright.
pub const MONTH_OFFSET_LIMIT: i32 = 120_000;

/// Whether partially covered boundary months count toward a month difference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Inclusion {
    /// Only fully elapsed months count; a started month is nothing.
    Strict,
    /// One boundary month counts, so same month to same month is zero.
    Full,
    /// Both boundary months count as whole, so same month to same month is one.
    #[default]
    Greedy,
}

impl Inclusion {
    /// Offset added to the raw elapsed month count.
    const fn modificator(self) -> i32 {
        match self {
            Inclusion::Strict => 0,
            Inclusion::Full => 1,
            Inclusion::Greedy => 2,
        }
    }
}

/// Count months between two dates under the given inclusion mode.
///
/// Only year and month fields take part. A second date logically preceding
/// the first floors the count to zero, never negative.
pub fn month_diff(d1: Date, d2: Date, mode: Inclusion) -> u32 {
    let months = (i32::from(d2.year()) - i32::from(d1.year())) * 12
        - i32::from(d1.month())
        + i32::from(d2.month())
        - 1
        + mode.modificator();
    months.max(0) as u32
}

/// Count months covered by a period of two "YYYY-MM-DD" strings.
///
/// The first and last month both count as whole, so "2017-01-31" to
/// "2017-03-01" is three months. `None` if either string does not parse.
pub fn count_months_in_period(start: &str, end: &str) -> Option<u32> {
    Some(month_diff(
        ymd_to_date(start)?,
        ymd_to_date(end)?,
        Inclusion::Greedy,
    ))
}

/// Add or remove whole months, crossing year boundaries and never panicking.
///
/// Saturates at the supported calendar bounds, offsets clamp to
/// [`MONTH_OFFSET_LIMIT`].
pub fn saturating_add_months(date: Date, months: i32) -> Date {
    let months = months.clamp(-MONTH_OFFSET_LIMIT, MONTH_OFFSET_LIMIT);
    date.saturating_add(Span::new().months(months))
}

/// Shift a "YYYY-MM" string by whole months.
///
/// The date is pinned to mid month before shifting, see the module notes.
pub fn ym_offset(s: &str, offset: i32) -> Option<String> {
    let date = ym_to_date(s, false)?.with().day(15).build().ok()?;
    Some(date_to_ym(saturating_add_months(date, offset)))
}

/// Shift a "YYYY-MM-DD" string by whole months, flooring to the first of the month.
///
/// End of month days would otherwise bleed into a neighboring month when
/// shifted, so the day component is deliberately discarded.
pub fn ymd_offset_ignore_day(s: &str, offset: i32) -> Option<String> {
    let date = ymd_to_date(s)?.first_of_month();
    Some(date_to_ymd(saturating_add_months(date, offset)))
}

#[cfg(test)]
mod tests {
    use jiff::civil;

    use super::*;

    #[test]
    fn test_month_diff_modes() {
        let first = civil::date(2012, 1, 1);
        let second = civil::date(2012, 2, 12);

        assert_eq!(month_diff(first, second, Inclusion::Strict), 0);
        assert_eq!(month_diff(first, second, Inclusion::Full), 1);
        assert_eq!(month_diff(first, second, Inclusion::Greedy), 2);
        assert_eq!(month_diff(first, second, Inclusion::default()), 2);
    }

    #[test]
    fn test_month_diff_same_month() {
        let first = civil::date(2017, 1, 4);
        let second = civil::date(2017, 1, 6);

        assert_eq!(month_diff(first, second, Inclusion::Strict), 0);
        assert_eq!(month_diff(first, second, Inclusion::Full), 0);
        assert_eq!(month_diff(first, second, Inclusion::Greedy), 1);
    }

    #[test]
    fn test_month_diff_never_negative() {
        let first = civil::date(2017, 1, 4);
        let second = civil::date(2015, 1, 6);

        assert_eq!(month_diff(first, second, Inclusion::Strict), 0);
        assert_eq!(month_diff(first, second, Inclusion::Full), 0);
        assert_eq!(month_diff(first, second, Inclusion::Greedy), 0);
    }

    #[test]
    fn test_count_months_in_period() {
        assert_eq!(count_months_in_period("2017-01-31", "2017-03-01"), Some(3));
        assert_eq!(count_months_in_period("2017-01-04", "2017-01-06"), Some(1));
        assert_eq!(count_months_in_period("2017-01-04", "2015-01-06"), Some(0));
        assert_eq!(count_months_in_period("2017-01-31", "nonsense"), None);
        assert_eq!(count_months_in_period("nonsense", "2017-01-31"), None);
    }

    #[test]
    fn test_ym_offset() {
        assert_eq!(ym_offset("2017-12", 1), Some("2018-01".into()));
        assert_eq!(ym_offset("2017-11", 1), Some("2017-12".into()));
        assert_eq!(ym_offset("2018-03", 1), Some("2018-04".into()));
        assert_eq!(ym_offset("2017-01", -1), Some("2016-12".into()));
        assert_eq!(ym_offset("2017-01", -12), Some("2016-01".into()));
        assert_eq!(ym_offset("2005-05", -120), Some("1995-05".into()));
        assert_eq!(ym_offset("2017-01", 0), Some("2017-01".into()));
        assert_eq!(ym_offset("garbage", 1), None);
    }

    #[test]
    fn test_ym_offset_every_month() {
        for year in 1970..2050 {
            for month in 1..12 {
                assert_eq!(
                    ym_offset(&format!("{year}-{month:02}"), 1),
                    Some(format!("{year}-{:02}", month + 1)),
                );
            }
            assert_eq!(
                ym_offset(&format!("{year}-12"), 1),
                Some(format!("{}-01", year + 1)),
            );
        }
    }

    #[test]
    fn test_ymd_offset_ignore_day() {
        // the end of month day must not leak into the following month
        assert_eq!(
            ymd_offset_ignore_day("2017-03-31", 1),
            Some("2017-04-01".into())
        );
        assert_eq!(
            ymd_offset_ignore_day("2017-01-15", -1),
            Some("2016-12-01".into())
        );
        assert_eq!(
            ymd_offset_ignore_day("2020-02-29", 12),
            Some("2021-02-01".into())
        );
        assert_eq!(ymd_offset_ignore_day("2017-03", 1), None);
    }

    #[test]
    fn test_saturating_add_months_clamps() {
        let date = civil::date(2017, 6, 1);
        assert_eq!(saturating_add_months(date, 1), civil::date(2017, 7, 1));
        assert_eq!(saturating_add_months(date, -6), civil::date(2016, 12, 1));
        // overshooting the calendar saturates instead of panicking
        assert_eq!(saturating_add_months(date, i32::MAX), Date::MAX);
        // ten millennia back stays in range, the offset merely clamps
        assert_eq!(
            saturating_add_months(date, i32::MIN),
            civil::date(-7983, 6, 1)
        );
    }
}
