// Daylight-saving transitions only depend on the weekday the year starts its
// months on, so they are tabulated by doomsday.
//
// - US: starts 2am local on the 2nd Sunday of March, ends 2am on the 1st
//   Sunday of November.
// - EU: starts and ends 1am UTC on the last Sunday of March and of October.
// - AU (SA, NSW, ACT, Victoria, Tasmania) and NZ: ends on the 1st Sunday of
//   April and starts on the 1st Sunday of October. The southern summer spans
//   the new year, so the end date comes first within a calendar year.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::doomsday::doomsday;
use crate::weekday::Weekday;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
pub struct DstSchedule {
    pub us_start: Option<&'static str>,
    pub us_end: Option<&'static str>,
    pub eu_start: Option<&'static str>,
    pub eu_end: Option<&'static str>,
    pub au_nz_end: Option<&'static str>,
    pub au_nz_start: Option<&'static str>,
}

impl DstSchedule {
    const fn new(us: [&'static str; 2], eu: [&'static str; 2], au_nz: [&'static str; 2]) -> Self {
        DstSchedule {
            us_start: Some(us[0]),
            us_end: Some(us[1]),
            eu_start: Some(eu[0]),
            eu_end: Some(eu[1]),
            au_nz_end: Some(au_nz[0]),
            au_nz_start: Some(au_nz[1]),
        }
    }

    /// Schedule with every transition unknown.
    pub const fn unset() -> Self {
        DstSchedule {
            us_start: None,
            us_end: None,
            eu_start: None,
            eu_end: None,
            au_nz_end: None,
            au_nz_start: None,
        }
    }

    pub fn is_set(&self) -> bool {
        self.fields().iter().all(Option::is_some)
    }

    /// All six transitions in table order: US start/end, EU start/end,
    /// AU/NZ end/start.
    pub fn fields(&self) -> [Option<&'static str>; 6] {
        [
            self.us_start,
            self.us_end,
            self.eu_start,
            self.eu_end,
            self.au_nz_end,
            self.au_nz_start,
        ]
    }
}

lazy_static! {
    static ref DST_SCHEDULES: HashMap<Weekday, DstSchedule> = {
        // Columns are US [start, end], EU [start, end], AU/NZ [end, start].
        let entries = [
            (
                Weekday::Thursday,
                DstSchedule::new(["10 March", "3 November"], ["31 March", "27 October"], ["7 April", "6 October"]),
            ),
            (
                Weekday::Friday,
                DstSchedule::new(["9 March", "2 November"], ["30 March", "26 October"], ["6 April", "5 October"]),
            ),
            (
                Weekday::Saturday,
                DstSchedule::new(["8 March", "1 November"], ["29 March", "25 October"], ["5 April", "4 October"]),
            ),
            (
                Weekday::Sunday,
                DstSchedule::new(["14 March", "7 November"], ["28 March", "31 October"], ["4 April", "3 October"]),
            ),
            (
                Weekday::Monday,
                DstSchedule::new(["13 March", "6 November"], ["27 March", "30 October"], ["3 April", "2 October"]),
            ),
            (
                Weekday::Tuesday,
                DstSchedule::new(["12 March", "5 November"], ["26 March", "29 October"], ["2 April", "1 October"]),
            ),
            (
                Weekday::Wednesday,
                DstSchedule::new(["11 March", "6 November"], ["25 March", "29 October"], ["1 April", "7 October"]),
            ),
        ];
        entries.into_iter().collect()
    };
}

/// DST transitions for a year whose doomsday is `weekday`. A weekday with no
/// table entry yields [`DstSchedule::unset`].
pub fn dst_schedule(weekday: Weekday) -> DstSchedule {
    DST_SCHEDULES
        .get(&weekday)
        .copied()
        .unwrap_or_else(DstSchedule::unset)
}

pub fn dst_schedule_for_year(year: i64) -> DstSchedule {
    dst_schedule(doomsday(year))
}
