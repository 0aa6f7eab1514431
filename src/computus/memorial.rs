// The Memorial of Christ's death is held on Nisan 14, taken here as the day
// of the paschal full moon. The moon's age comes from the golden number (g)
// with the Gregorian solar (s) and lunar (l) equations applied after the
// reform, following the Book of Common Prayer tables.

use num_integer::Integer;
use tracing::trace;

use crate::era::Era;
use crate::feast_date::FeastDate;

fn paschal_moon_offset(year: i64) -> i64 {
    let g = year.mod_floor(&19) + 1;
    match Era::of_year(year) {
        Era::Gregorian => {
            // year - 1600 is negative up to 1599.
            let since_1600 = year - 1600;
            let s = Integer::div_floor(&since_1600, &100) - Integer::div_floor(&since_1600, &400);
            let l = 8 * (year / 100 - 14) / 25;
            let mut p = (3 - 11 * g + s - l).mod_floor(&30);
            if p == 29 || (p == 28 && g > 11) {
                p -= 1;
            }
            trace!(year, g, s, l, p, "memorial terms");
            p
        }
        Era::Julian => (26 - 11 * g).mod_floor(&30),
    }
}

/// Date of the Memorial of Christ's death as observed by Jehovah's Witnesses.
pub fn memorial(year: i64) -> FeastDate {
    let m = paschal_moon_offset(year) - 1;
    if m < 11 {
        FeastDate::march((m + 21) as u8)
    } else {
        FeastDate::april((m - 10) as u8)
    }
}
