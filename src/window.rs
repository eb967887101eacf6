//! Holds the sliding month window over a project period.

use jiff::{Zoned, civil::Date};

use crate::{
    format::{date_to_ym, date_to_ymd},
    months::{self, Inclusion},
    parse::ymd_to_date,
};

/// One computed placement of the display window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    /// First displayed month.
    pub display_start: Date,
    /// Last displayed month.
    pub display_end: Date,
    /// The window starts on the first project month.
    pub touch_left: bool,
    /// The window ends on the last project month.
    pub touch_right: bool,
}

/// A sliding display window of whole months clamped to a project period.
///
/// The window tries to cover `window_size` months around a pointer date. A
/// pointer outside the project snaps to the nearest bound, a window reaching
/// past the project end slides left as far as the project allows, and a
/// project shorter than the window pins to its start. The touch flags report
/// whether the displayed edges coincide with the project edges, which is what
/// a paging UI needs to disable its back and forward controls.
///
/// All dates are floored to the first of their month. The day component
/// carries no information here and keeping it would drag month length edge
/// cases (think of February) into every comparison.
///
/// Results are computed on demand: construct, call
/// [`Self::calculate_window`], read the accessors. [`Self::shift_pointer`]
/// drops the previous result, so accessors return `None` again until the next
/// calculation.
#[derive(Clone, Debug)]
pub struct TimeWindow {
    date_start: Date,
    date_end: Date,
    pointer: Date,
    window_size: u32,
    start_to_end_month_count: u32,
    frame: Option<Frame>,
}

impl TimeWindow {
    /// Create a window over a project period of two "YYYY-MM-DD" strings.
    ///
    /// `window_size` is in months and floored to 1. The pointer defaults to
    /// today when absent. `None` if any given string does not parse. The
    /// project bounds and window size stay fixed for the life of the value.
    pub fn new(
        project_start: &str,
        project_end: &str,
        window_size: u32,
        pointer: Option<&str>,
    ) -> Option<Self> {
        let date_start = ymd_to_date(project_start)?.first_of_month();
        let date_end = ymd_to_date(project_end)?.first_of_month();
        let pointer = match pointer {
            Some(s) => ymd_to_date(s)?,
            None => Zoned::now().date(),
        }
        .first_of_month();

        Some(Self {
            date_start,
            date_end,
            pointer,
            window_size: window_size.clamp(1, months::MONTH_OFFSET_LIMIT as u32),
            start_to_end_month_count: months::month_diff(date_start, date_end, Inclusion::Greedy),
            frame: None,
        })
    }

    /// Derive the displayed window from the current pointer and project bounds.
    ///
    /// May be called any number of times; the result only changes when the
    /// pointer does.
    pub fn calculate_window(&mut self) {
        let mut touch_left = false;
        let mut touch_right = false;

        // a pointer outside the project seeds at the nearest bound; past the
        // end it seeds on the end and is pulled left by the correction below
        let mut display_start = if self.pointer < self.date_start {
            touch_left = true;
            self.date_start
        } else if self.pointer > self.date_end {
            self.date_end
        } else {
            self.pointer
        };

        if display_start <= self.date_start {
            touch_left = true;
            display_start = self.date_start;
        }

        // the window may reach past the project end, which needs flagging and
        // possibly sliding the whole window left
        let span = self.window_size as i32 - 1;
        let mut display_end = months::saturating_add_months(display_start, span);
        if display_end >= self.date_end {
            touch_right = true;

            if self.start_to_end_month_count >= self.window_size {
                // slide left until the right edge lands on the project end
                display_start = months::saturating_add_months(self.date_end, -span);
                // only an exact fit still touches the left edge
                touch_left = self.start_to_end_month_count == self.window_size;
            } else {
                // project shorter than the window, pin to the very left
                display_start = self.date_start;
                touch_left = true;
            }

            // the start may have moved, derive the end once more
            display_end = months::saturating_add_months(display_start, span);
            if display_end >= self.date_end {
                display_end = self.date_end;
            }
        }

        self.frame = Some(Frame {
            display_start,
            display_end,
            touch_left,
            touch_right,
        });
    }

    /// Move the pointer by whole months.
    ///
    /// Drops any previously computed frame; call [`Self::calculate_window`]
    /// before reading the accessors again.
    pub fn shift_pointer(&mut self, offset: i32) {
        self.pointer = months::saturating_add_months(self.pointer, offset);
        self.frame = None;
    }

    /// The computed placement, or `None` before the first calculation.
    pub fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    /// First displayed month, once calculated.
    pub fn window_start(&self) -> Option<Date> {
        Some(self.frame?.display_start)
    }

    /// [`Self::window_start`] as "YYYY-MM-DD".
    pub fn window_start_string(&self) -> Option<String> {
        Some(date_to_ymd(self.frame?.display_start))
    }

    /// [`Self::window_start`] as "YYYY-MM".
    pub fn window_start_string_no_day(&self) -> Option<String> {
        Some(date_to_ym(self.frame?.display_start))
    }

    /// Last displayed month, once calculated.
    pub fn window_end(&self) -> Option<Date> {
        Some(self.frame?.display_end)
    }

    /// [`Self::window_end`] as "YYYY-MM-DD".
    pub fn window_end_string(&self) -> Option<String> {
        Some(date_to_ymd(self.frame?.display_end))
    }

    /// Whether the displayed window starts on the first project month.
    pub fn touch_left(&self) -> Option<bool> {
        Some(self.frame?.touch_left)
    }

    /// Whether the displayed window ends on the last project month.
    pub fn touch_right(&self) -> Option<bool> {
        Some(self.frame?.touch_right)
    }
}
