//! Date string conversions and a sliding month window for project period displays.
pub mod encode;
pub mod format;
pub mod month_list;
pub mod months;
pub mod parse;
pub mod window;

/// Sunday based weekdays in English.
pub const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Sunday based weekdays in German.
pub const WEEKDAYS_DE: [&str; 7] = [
    "Sonntag",
    "Montag",
    "Dienstag",
    "Mittwoch",
    "Donnerstag",
    "Freitag",
    "Samstag",
];
