use crate::doomsday::doomsday_index;
use crate::era::{is_leap_year, REFORM_YEAR};

// Indexed by doomsday, Sunday first.
const COMMON_YEAR_LETTERS: [&str; 7] = ["C", "B", "A", "G", "F", "E", "D"];
const LEAP_YEAR_LETTERS: [&str; 7] = ["DC", "CB", "BA", "AG", "GF", "FE", "ED"];

/// Letter naming the Sundays of the year, or the pair of letters for a leap
/// year (the first applies through February, the second after the leap day).
///
/// The reform year is split as well: 4 October 1582 (Julian) was followed
/// directly by 15 October 1582 (Gregorian), so the letter changes from G to C.
pub fn dominical_letter(year: i64) -> &'static str {
    if year == REFORM_YEAR {
        return "GC";
    }
    let index = doomsday_index(year) as usize;
    if is_leap_year(year) {
        LEAP_YEAR_LETTERS[index]
    } else {
        COMMON_YEAR_LETTERS[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dominical_letter_common_years() {
        assert_eq!(dominical_letter(2023), "A");
        assert_eq!(dominical_letter(2025), "E");
        assert_eq!(dominical_letter(1900), "G");
    }

    #[test]
    fn test_dominical_letter_leap_years() {
        assert_eq!(dominical_letter(2024), "GF");
        assert_eq!(dominical_letter(2000), "BA");
    }

    #[test]
    fn test_dominical_letter_reform_year() {
        assert_eq!(dominical_letter(1582), "GC");
        assert_eq!(dominical_letter(1581), "A");
        assert_eq!(dominical_letter(1583), "B");
    }

    #[test]
    fn test_dominical_letter_at_integer_extremes() {
        assert_eq!(dominical_letter(i64::MAX), "D");
        assert_eq!(dominical_letter(i64::MIN), "GF");
    }
}
