// Minor chronological cycles. None of them depends on the era.

use std::fmt;

use num_integer::Integer;

use crate::div_rem::TableIndex;

// Shifts are applied after reduction so that no year overflows.

/// Position (1-15) in the Roman indiction cycle.
pub fn indiction(year: i64) -> u8 {
    ((year.mod_floor(&15) + 2) % 15 + 1) as u8
}

pub fn solar_cycle(year: i64) -> u8 {
    ((year.mod_floor(&28) + 8) % 28 + 1) as u8
}

// Second year of each solar cycle.
pub fn is_birkat_hachama_year(year: i64) -> bool {
    solar_cycle(year) == 2
}

pub fn epact(year: i64) -> u8 {
    (year.mod_floor(&19) + 1) as u8
}

/// Year of the Julian period, counted from 4713 BC.
pub fn julian_period(year: i64) -> i128 {
    i128::from(year) + 4713
}

#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum SundayCycle {
    A,
    B,
    C,
}

#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum WeekdayCycle {
    Even,
    Odd,
}

// Index is year mod 3.
const SUNDAY_CYCLES: [SundayCycle; 3] = [SundayCycle::C, SundayCycle::A, SundayCycle::B];
// Index is year mod 2.
const WEEKDAY_CYCLES: [WeekdayCycle; 2] = [WeekdayCycle::Even, WeekdayCycle::Odd];

impl SundayCycle {
    pub fn letter(&self) -> &'static str {
        match self {
            SundayCycle::A => "A",
            SundayCycle::B => "B",
            SundayCycle::C => "C",
        }
    }
}

impl WeekdayCycle {
    pub fn label(&self) -> &'static str {
        match self {
            WeekdayCycle::Even => "EVEN",
            WeekdayCycle::Odd => "ODD",
        }
    }
}

impl fmt::Display for SundayCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

impl fmt::Display for WeekdayCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Lectionary {
    pub sunday: SundayCycle,
    pub weekday: WeekdayCycle,
}

pub fn lectionary(year: i64) -> Lectionary {
    Lectionary {
        sunday: SUNDAY_CYCLES[year.table_index(SUNDAY_CYCLES.len())],
        weekday: WEEKDAY_CYCLES[year.table_index(WEEKDAY_CYCLES.len())],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indiction() {
        assert_eq!(indiction(2024), 2);
        assert_eq!(indiction(2023), 1);
        assert_eq!(indiction(2022), 15);
        assert_eq!(indiction(-2), 1);
    }

    #[test]
    fn test_solar_cycle() {
        assert_eq!(solar_cycle(2024), 17);
        assert_eq!(solar_cycle(2026), 19);
        assert_eq!(solar_cycle(-8), 1);
        assert_eq!(solar_cycle(-9), 28);
    }

    #[test]
    fn test_birkat_hachama() {
        assert_eq!(solar_cycle(2009), 2);
        assert_eq!(solar_cycle(2037), 2);
        assert!(is_birkat_hachama_year(2009));
        assert!(is_birkat_hachama_year(2037));
        assert!(is_birkat_hachama_year(1981));
        assert!(!is_birkat_hachama_year(2024));
    }

    #[test]
    fn test_epact() {
        assert_eq!(epact(2024), 11);
        assert_eq!(epact(2025), 12);
        assert_eq!(epact(0), 1);
        assert_eq!(epact(-1), 19);
    }

    #[test]
    fn test_julian_period() {
        assert_eq!(julian_period(2024), 6737);
        assert_eq!(julian_period(-4713), 0);
    }

    #[test]
    fn test_lectionary() {
        let cycle = lectionary(2024);
        assert_eq!(cycle.sunday, SundayCycle::B);
        assert_eq!(cycle.weekday, WeekdayCycle::Even);

        let cycle = lectionary(2025);
        assert_eq!(cycle.sunday, SundayCycle::C);
        assert_eq!(cycle.weekday, WeekdayCycle::Odd);

        let cycle = lectionary(2026);
        assert_eq!(cycle.sunday.letter(), "A");
        assert_eq!(cycle.weekday.label(), "EVEN");
    }

    #[test]
    fn test_cycles_match_unshifted_formula() {
        for year in -3000..=6000_i64 {
            assert_eq!(indiction(year) as i64, (year + 2).mod_floor(&15) + 1);
            assert_eq!(solar_cycle(year) as i64, (year + 8).mod_floor(&28) + 1);
        }
    }

    #[test]
    fn test_cycles_at_integer_extremes() {
        assert_eq!(indiction(i64::MAX), 10);
        assert_eq!(indiction(i64::MIN), 10);
        assert_eq!(solar_cycle(i64::MAX), 16);
        assert_eq!(solar_cycle(i64::MIN), 1);
        assert_eq!(epact(i64::MAX), 18);
        assert_eq!(epact(i64::MIN), 2);
        assert_eq!(julian_period(i64::MAX), i64::MAX as i128 + 4713);
        assert_eq!(julian_period(i64::MIN), i64::MIN as i128 + 4713);
        assert_eq!(lectionary(i64::MIN).weekday, WeekdayCycle::Even);
    }

    #[test]
    fn test_lectionary_negative_year() {
        let cycle = lectionary(-1);
        assert_eq!(cycle.sunday, SundayCycle::B);
        assert_eq!(cycle.weekday, WeekdayCycle::Odd);
    }
}
