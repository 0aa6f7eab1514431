// Gauss' Easter algorithm. The year's position in the Metonic cycle (a), the
// leap cycle (b) and the week cycle (c) give the days from March 21 to the
// paschal full moon (d) and from there to the following Sunday (e). In the
// Gregorian era the lunar (M) and solar (N) corrections move with the century;
// in the Julian era they are fixed.

use num_integer::Integer;
use tracing::trace;

use crate::era::Era;
use crate::feast_date::FeastDate;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
struct GaussTerms {
    m: i64,
    d: i64,
    e: i64,
}

impl GaussTerms {
    fn for_year(year: i64) -> Self {
        let a = year.mod_floor(&19);
        let b = year.mod_floor(&4);
        let c = year.mod_floor(&7);
        let (m, n) = match Era::of_year(year) {
            Era::Gregorian => {
                // Positive years only, so truncating division is floor division.
                let k = year / 100;
                let p = (13 + 8 * k) / 25;
                let q = k / 4;
                ((15 - p + k - q).mod_floor(&30), (4 + k - q).mod_floor(&7))
            }
            Era::Julian => (15, 6),
        };
        let d = (19 * a + m).mod_floor(&30);
        let e = (2 * b + 4 * c + 6 * d + n).mod_floor(&7);
        GaussTerms { m, d, e }
    }

    fn provisional_date(&self) -> FeastDate {
        let day = 22 + self.d + self.e;
        if day > 31 {
            FeastDate::april((self.d + self.e - 9) as u8)
        } else {
            FeastDate::march(day as u8)
        }
    }
}

type Override = fn(&GaussTerms) -> Option<FeastDate>;

// Applied in order to the provisional date. Each rule looks at the uncorrected
// terms, never at the date produced by an earlier rule.
const OVERRIDES: [Override; 2] = [april_25_exception, april_26_exception];

fn april_25_exception(terms: &GaussTerms) -> Option<FeastDate> {
    if terms.d == 28 && terms.e == 6 && (11 * terms.m + 11).mod_floor(&30) < 19 {
        Some(FeastDate::april(18))
    } else {
        None
    }
}

fn april_26_exception(terms: &GaussTerms) -> Option<FeastDate> {
    if terms.d == 29 && terms.e == 6 {
        Some(FeastDate::april(19))
    } else {
        None
    }
}

/// Western Easter Sunday for `year`.
///
/// Dates up to 1582 are on the Julian calendar, later dates on the Gregorian
/// calendar.
///
/// # Example
///
/// ```
/// use paschalion::computus::easter;
///
/// assert_eq!((31, 3), easter(2024).as_day_month());
/// ```
pub fn easter(year: i64) -> FeastDate {
    let terms = GaussTerms::for_year(year);
    trace!(year, m = terms.m, d = terms.d, e = terms.e, "gauss terms");
    OVERRIDES
        .iter()
        .fold(terms.provisional_date(), |date, rule| {
            rule(&terms).unwrap_or(date)
        })
}
