use num_integer::Integer;
use tracing::trace;

use crate::feast_date::FeastDate;

/// Orthodox Pascha for `year` by Meeus' Julian algorithm.
///
/// The result is a date on the Julian calendar for every year, including
/// years after the Gregorian reform. No conversion to the civil calendar is
/// applied, so the date is not directly comparable with [`super::easter`]
/// after 1582.
pub fn pascha(year: i64) -> FeastDate {
    let a = year.mod_floor(&4);
    let b = year.mod_floor(&7);
    let c = year.mod_floor(&19);
    let d = (19 * c + 15).mod_floor(&30);
    let e = (2 * a + 4 * b - d + 34).mod_floor(&7);
    // Days counted so that f / 31 is the month and f mod 31 the day before.
    let f = d + e + 114;
    trace!(year, d, e, f, "meeus terms");

    let (mut month, mut day) = f.div_mod_floor(&31);
    day += 1;
    if day == 32 {
        // March 32 is April 1.
        day -= 31;
        month += 1;
    }
    FeastDate::new(day as u8, month as u8)
}
