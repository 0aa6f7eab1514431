use tracing::debug;

use crate::calendar_years::{
    buddhist_year, byzantine_year, has_two_adars, hijri_year, jewish_year,
    julian_gregorian_delta, vietnamese_year, YearSpan,
};
use crate::computus::{easter, memorial, pascha};
use crate::cycles::{
    epact, indiction, is_birkat_hachama_year, julian_period, lectionary, solar_cycle, Lectionary,
};
use crate::dominical::dominical_letter;
use crate::doomsday::doomsday;
use crate::dst::{dst_schedule, DstSchedule};
use crate::era::{is_leap_year, Era};
use crate::feast_date::FeastDate;
use crate::sexagenary::{sexagenary, SexagenaryYear};
use crate::weekday::Weekday;

/// Every calendar fact this crate computes for one year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearReport {
    pub year: i64,
    pub era: Era,
    pub doomsday: Weekday,
    pub is_leap_year: bool,
    pub dominical_letter: &'static str,
    pub easter: FeastDate,
    pub pascha: FeastDate,
    pub memorial: FeastDate,
    pub julian_gregorian_delta: Option<i64>,
    pub indiction: u8,
    pub solar_cycle: u8,
    pub is_birkat_hachama_year: bool,
    pub epact: u8,
    pub julian_period: i128,
    pub sexagenary: SexagenaryYear,
    pub vietnamese_year: i128,
    pub buddhist_year: i128,
    pub jewish_year: YearSpan,
    pub has_two_adars: bool,
    pub byzantine_year: YearSpan,
    pub hijri_year: i128,
    pub lectionary: Lectionary,
    pub dst: DstSchedule,
}

impl YearReport {
    pub fn for_year(year: i64) -> Self {
        let era = Era::of_year(year);
        let doomsday = doomsday(year);
        debug!(year, ?era, ?doomsday, "building year report");

        YearReport {
            year,
            era,
            doomsday,
            is_leap_year: is_leap_year(year),
            dominical_letter: dominical_letter(year),
            easter: easter(year),
            pascha: pascha(year),
            memorial: memorial(year),
            julian_gregorian_delta: julian_gregorian_delta(year),
            indiction: indiction(year),
            solar_cycle: solar_cycle(year),
            is_birkat_hachama_year: is_birkat_hachama_year(year),
            epact: epact(year),
            julian_period: julian_period(year),
            sexagenary: sexagenary(year),
            vietnamese_year: vietnamese_year(year),
            buddhist_year: buddhist_year(year),
            jewish_year: jewish_year(year),
            has_two_adars: has_two_adars(year),
            byzantine_year: byzantine_year(year),
            hijri_year: hijri_year(year),
            lectionary: lectionary(year),
            dst: dst_schedule(doomsday),
        }
    }
}
