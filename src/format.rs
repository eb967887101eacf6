//! Holds date to string formatters and weekday naming.

use jiff::civil::Date;

use crate::{WEEKDAYS, WEEKDAYS_DE};

/// Output language for [`weekday_name`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Locale {
    English,
    German,
}

/// Format as zero padded "YYYY-MM-DD".
pub fn date_to_ymd(date: Date) -> String {
    date.strftime("%Y-%m-%d").to_string()
}

/// Format as zero padded "YYYY-MM".
pub fn date_to_ym(date: Date) -> String {
    date.strftime("%Y-%m").to_string()
}

/// Format as zero padded "DD.MM.YYYY".
pub fn date_to_dmy(date: Date) -> String {
    date.strftime("%d.%m.%Y").to_string()
}

/// Name the weekday of the given date.
pub fn weekday_name(date: Date, locale: Locale) -> &'static str {
    let weekday = date.weekday().to_sunday_zero_offset() as usize;
    match locale {
        Locale::English => WEEKDAYS[weekday],
        Locale::German => WEEKDAYS_DE[weekday],
    }
}
