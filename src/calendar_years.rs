// Year numbers of other calendars overlapping a civil year. Offsets are
// returned as i128 so that every i64 year has an answer.

use num_integer::Integer;

use crate::div_rem::MulDivFloor;
use crate::era::Era;

/// Year numbers before and after a calendar's new year, for calendars whose
/// new year falls inside the civil year.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct YearSpan {
    pub before_new_year: i128,
    pub after_new_year: i128,
}

impl YearSpan {
    fn starting_at(before_new_year: i128) -> Self {
        YearSpan {
            before_new_year,
            after_new_year: before_new_year + 1,
        }
    }
}

/// Days the Julian calendar trails the Gregorian, or `None` before the reform.
pub fn julian_gregorian_delta(year: i64) -> Option<i64> {
    match Era::of_year(year) {
        // Positive years only, so truncating division is floor division.
        Era::Gregorian => Some(year / 100 - year / 400 - 2),
        Era::Julian => None,
    }
}

pub fn vietnamese_year(year: i64) -> i128 {
    i128::from(year) + 2879
}

pub fn buddhist_year(year: i64) -> i128 {
    i128::from(year) + 544
}

// Changes at Rosh Hashanah.
pub fn jewish_year(year: i64) -> YearSpan {
    YearSpan::starting_at(i128::from(year) + 3760)
}

/// Whether the Jewish year beginning in the autumn before `year` is a leap
/// year of the 19-year cycle.
pub fn has_two_adars(year: i64) -> bool {
    let cycle_year = (year.mod_floor(&19) + 3760) % 19;
    (7 * cycle_year + 1) % 19 < 7
}

// Changes on September 1 (Julian).
pub fn byzantine_year(year: i64) -> YearSpan {
    YearSpan::starting_at(i128::from(year) + 5508)
}

pub fn hijri_year(year: i64) -> i128 {
    // 33 lunar years to 32 solar years.
    (i128::from(year) - 622).mul_div_floor(33, 32)
}
