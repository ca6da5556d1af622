//! Duration and calendar-date display utilities.

use std::fmt;

use jiff::civil::Date;

/// A minute count displayed as hours and minutes.
///
/// Whole hours omit the minutes part: `120` is `2h`, `150` is `2h 30m` and
/// `45` is `0h 45m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minutes(pub u32);

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.0 / 60;
        let mins = self.0 % 60;
        if mins > 0 {
            write!(f, "{hours}h {mins}m")
        } else {
            write!(f, "{hours}h")
        }
    }
}

/// A calendar date with its weekday, e.g. `Monday, October 16`.
pub struct DayDate<'a>(pub &'a Date);

impl<'a> fmt::Display for DayDate<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%A, %B %-d"))
    }
}
