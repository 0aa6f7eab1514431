use std::fmt;

pub const MARCH: u8 = 3;
pub const APRIL: u8 = 4;

/// A day and month within the paschal season. Every computus in this crate
/// lands in March or April of the year it was computed for.
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct FeastDate {
    // Field order gives chronological ordering within a year.
    month: u8,
    day: u8,
}

impl FeastDate {
    pub fn new(day: u8, month: u8) -> Self {
        debug_assert!(
            month == MARCH || month == APRIL,
            "paschal dates fall in March or April"
        );
        debug_assert!((1..=31).contains(&day));
        FeastDate { month, day }
    }

    pub fn march(day: u8) -> Self {
        FeastDate::new(day, MARCH)
    }

    pub fn april(day: u8) -> Self {
        FeastDate::new(day, APRIL)
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn month_name(&self) -> &'static str {
        if self.month == MARCH {
            "March"
        } else {
            "April"
        }
    }

    pub fn as_day_month(&self) -> (u8, u8) {
        (self.day, self.month)
    }
}

impl From<FeastDate> for (u8, u8) {
    fn from(date: FeastDate) -> Self {
        date.as_day_month()
    }
}

impl fmt::Display for FeastDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month_name(), self.day)
    }
}
