use std::io::{self, Write};

use paschalion::{DstSchedule, YearReport};

const UNKNOWN: &str = "unknown";

fn or_unknown(field: Option<&'static str>) -> &'static str {
    field.unwrap_or(UNKNOWN)
}

pub fn write_separator<W: Write>(w: &mut W) -> io::Result<()> {
    writeln!(w, "\n------------\n")
}

pub fn write_report<W: Write>(w: &mut W, report: &YearReport) -> io::Result<()> {
    let y = report.year;
    writeln!(w, "Doomsday for {y} is {}.", report.doomsday)?;
    writeln!(
        w,
        "{y} is a {} year.",
        if report.is_leap_year { "leap" } else { "normal" }
    )?;
    writeln!(w, "Dominical letter: {}", report.dominical_letter)?;
    writeln!(
        w,
        "Jehovah's Witnesses' Memorial of Jesus' Death is on {}.",
        report.memorial
    )?;
    writeln!(w, "Easter is on {}.", report.easter)?;
    // Pascha is a Julian date; before the reform it coincides with Easter.
    if let Some(delta) = report.julian_gregorian_delta {
        writeln!(w, "Pascha is on {}.", report.pascha)?;
        writeln!(w, "Delta: {delta}")?;
    }

    writeln!(
        w,
        "\nIndiction: {}; Solar Cycle: {}; Epact Cycle: {}",
        report.indiction, report.solar_cycle, report.epact
    )?;
    if report.is_birkat_hachama_year {
        writeln!(w, "---This is the year of Birkat Hachama.---")?;
    }
    writeln!(
        w,
        "Julian Period: {}; Year of the {}.",
        report.julian_period, report.sexagenary
    )?;

    write_calendar_years(w, report)?;

    writeln!(
        w,
        "\nLectionary Cycle: {} {}",
        report.lectionary.sunday, report.lectionary.weekday
    )?;

    write_dst(w, &report.dst)
}

fn write_calendar_years<W: Write>(w: &mut W, report: &YearReport) -> io::Result<()> {
    writeln!(
        w,
        "\nVietnamese Calendar: {}; Buddhist Calendar: {}",
        report.vietnamese_year, report.buddhist_year
    )?;
    writeln!(
        w,
        "Jewish Calendar: {} (until Rosh Hashanah) / {} (since Rosh Hashanah)",
        report.jewish_year.before_new_year, report.jewish_year.after_new_year
    )?;
    writeln!(
        w,
        "This year has {}.",
        if report.has_two_adars { "2 Adars" } else { "1 Adar" }
    )?;
    let julian = if report.era.is_gregorian() { "Julian " } else { "" };
    writeln!(
        w,
        "Byzantine Calendar: {} (to {julian}August 31) / {} (from {julian}September 1)",
        report.byzantine_year.before_new_year, report.byzantine_year.after_new_year
    )?;
    writeln!(w, "Hijri Calendar (around 1 January): {}", report.hijri_year)
}

fn write_dst<W: Write>(w: &mut W, dst: &DstSchedule) -> io::Result<()> {
    writeln!(
        w,
        "\nIn the USA, the DST starts at 2am ST (3am DT) local time {}\n\
         (corresponding 12:30pm (from Newfoundland), 1pm (from AT), 2pm (from ET), 3pm (from CT), \n\
         4pm (from MT except Arizona and Yukon), 5pm (from PT), 6pm (from AKT), \n\
         7pm (from Aleut) Vietnam time)\n\
         and ends at 2am DT (1am ST) local time {}\n\
         (corresponding 11:30am (from Newfoundland), 12pm (from AT), \n\
         1pm (from ET), 2pm (from CT), 3pm (from MT except Arizona and Yukon), \n\
         4pm (from PT), 5pm (from AKT), 6pm (from Aleut) Vietnam time)",
        or_unknown(dst.us_start),
        or_unknown(dst.us_end)
    )?;
    writeln!(
        w,
        "\nIn Europe, the DST starts at 8am Vietnam time {}\nand ends at 8am Vietnam time {}",
        or_unknown(dst.eu_start),
        or_unknown(dst.eu_end)
    )?;
    writeln!(
        w,
        "\nIn AU and NZ, the DST ends at 2am local Australian time and 3am New Zealand time {}\n\
         (corresponding 9pm (from NZ), 10pm (from Southeast Australia) \n\
         and 10:30pm (from South Australia) Vietnam time the previous day) \n\
         and starts at 2am local time {}\n\
         (corresponding 9pm (from NZ), 11pm (from Southeast Australia) \n\
         and 11:30pm (from South Australia) Vietnam time the previous day)",
        or_unknown(dst.au_nz_end),
        or_unknown(dst.au_nz_start)
    )
}
