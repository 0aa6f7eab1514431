// The doomsday is the weekday shared that year by the last day of February,
// 4/4, 6/6, 8/8, 10/10, 12/12, 5/9, 9/5, 7/11 and 11/7. It is the anchor from
// which the weekday of any other date in the year can be counted.

use num_integer::Integer;

use crate::era::Era;
use crate::weekday::Weekday;

/// Sunday-based index (0-6) of the year's doomsday.
pub fn doomsday_index(year: i64) -> u8 {
    // 400 Gregorian years are 146097 days and 28 Julian years are 10227 days,
    // both whole weeks, so only the position in the cycle matters. It is
    // non-negative, so plain division below is floor division.
    let raw = match Era::of_year(year) {
        Era::Gregorian => {
            let y = year.mod_floor(&400);
            2 + y + y / 4 - y / 100 + y / 400
        }
        Era::Julian => {
            let y = year.mod_floor(&28);
            y + y / 4
        }
    };
    (raw % 7) as u8
}

pub fn doomsday(year: i64) -> Weekday {
    Weekday::from_index(doomsday_index(year) as i64)
}
