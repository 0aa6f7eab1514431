use num_integer::Integer;

/// Last year computed with Julian-era constants. The Gregorian reform took
/// effect in October of this year, but arithmetic for the year as a whole
/// still follows the Julian rules.
pub const REFORM_YEAR: i64 = 1582;

/// Which set of calendar rules a proleptic year is computed with.
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum Era {
    Julian,
    Gregorian,
}

impl Era {
    pub fn of_year(year: i64) -> Self {
        if year > REFORM_YEAR {
            Era::Gregorian
        } else {
            Era::Julian
        }
    }

    pub fn is_gregorian(&self) -> bool {
        *self == Era::Gregorian
    }
}

/// Leap-year status under the rule of the year's era.
///
/// Gregorian-era years skip the leap day on centuries not divisible by 400;
/// Julian-era years have one every fourth year without exception.
pub fn is_leap_year(year: i64) -> bool {
    match Era::of_year(year) {
        Era::Gregorian => {
            (year.mod_floor(&4) == 0 && year.mod_floor(&100) != 0) || year.mod_floor(&400) == 0
        }
        Era::Julian => year.mod_floor(&4) == 0,
    }
}
