//! Calendar facts for a proleptic year: the doomsday, leap-year status and
//! dominical letter, the dates of Western Easter, Orthodox Pascha and the
//! Memorial, the minor chronological cycles, and the daylight-saving
//! transitions that follow from the doomsday.
//!
//! Years up to 1582 are computed with Julian rules, later years with
//! Gregorian rules. Every function is a pure function of the year.
//!
//! ```
//! use paschalion::{doomsday, easter, Weekday, YearReport};
//!
//! assert_eq!(Weekday::Thursday, doomsday(2024));
//! assert_eq!((20, 4), easter(2025).as_day_month());
//!
//! let report = YearReport::for_year(2024);
//! assert_eq!("GF", report.dominical_letter);
//! ```

pub use computus::{easter, memorial, pascha};
pub use cycles::{
    epact, indiction, is_birkat_hachama_year, julian_period, lectionary, solar_cycle, Lectionary,
    SundayCycle, WeekdayCycle,
};
pub use dominical::dominical_letter;
pub use doomsday::{doomsday, doomsday_index};
pub use dst::{dst_schedule, dst_schedule_for_year, DstSchedule};
pub use era::{is_leap_year, Era, REFORM_YEAR};
pub use feast_date::FeastDate;
pub use report::YearReport;
pub use sexagenary::{sexagenary, Animal, Element, SexagenaryYear};
pub use weekday::Weekday;
pub use error::YearError;
pub use year::parse_year;

pub mod calendar_years;
pub mod computus;
mod cycles;
mod div_rem;
mod dominical;
mod doomsday;
mod dst;
mod era;
mod error;
mod feast_date;
mod report;
mod sexagenary;
mod weekday;
mod year;
