use std::fmt;

use crate::div_rem::TableIndex;

#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

// Index 0 = Sunday
const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

impl Weekday {
    pub const ALL: [Weekday; 7] = WEEKDAYS;

    /// Weekday for a Sunday-based index. Any integer is accepted and reduced
    /// modulo 7, so `-1` is Saturday.
    pub fn from_index(index: i64) -> Self {
        WEEKDAYS[index.table_index(WEEKDAYS.len())]
    }

    /// Position in the week counting from Sunday = 0.
    pub fn index(&self) -> u8 {
        *self as u8
    }

    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }

    /// Name shown in reports. Friday and Saturday carry their congregational
    /// names, the day of Muslim congregational prayer and the Jewish day of rest.
    pub fn display_name(&self) -> &'static str {
        match self {
            Weekday::Friday => "Jumu'ah",
            Weekday::Saturday => "Sabbath",
            _ => self.name(),
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
