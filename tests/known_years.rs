use paschalion::calendar_years::{hijri_year, julian_gregorian_delta};
use paschalion::{
    dominical_letter, doomsday, dst_schedule, dst_schedule_for_year, easter, epact, indiction,
    is_leap_year, julian_period, lectionary, memorial, pascha, sexagenary, solar_cycle, Animal,
    DstSchedule, Element, Era, SundayCycle, Weekday, WeekdayCycle, YearReport,
};

#[test]
fn era_boundary() {
    assert_eq!(Era::of_year(1582), Era::Julian);
    assert_eq!(Era::of_year(1583), Era::Gregorian);
}

#[test]
fn leap_years() {
    assert!(is_leap_year(2000));
    assert!(!is_leap_year(1900));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(2023));
    assert!(is_leap_year(1500));
}

#[test]
fn doomsday_2024() {
    assert_eq!(doomsday(2024), Weekday::Thursday);
    assert_eq!(doomsday(2024).to_string(), "Thursday");
}

#[test]
fn easter_reference_dates() {
    assert_eq!(easter(2024).as_day_month(), (31, 3));
    assert_eq!(easter(2025).as_day_month(), (20, 4));
    assert_eq!(easter(2000).as_day_month(), (23, 4));
}

#[test]
fn dominical_letter_of_reform_year() {
    assert_eq!(dominical_letter(1582), "GC");
}

#[test]
fn pascha_is_a_julian_date() {
    assert_ne!(pascha(2024), easter(2024));
    assert_eq!(pascha(2024).as_day_month(), (22, 4));
}

#[test]
fn memorial_reference_dates() {
    assert_eq!(memorial(2024).as_day_month(), (24, 3));
    assert_eq!(memorial(2025).as_day_month(), (12, 4));
}

#[test]
fn solar_cycle_birkat_hachama() {
    assert_eq!(solar_cycle(2009), 2);
    assert_eq!(solar_cycle(2037), 2);
}

#[test]
fn minor_cycles_2024() {
    assert_eq!(indiction(2024), 2);
    assert_eq!(solar_cycle(2024), 17);
    assert_eq!(epact(2024), 11);
    assert_eq!(julian_period(2024), 6737);

    let year = sexagenary(2024);
    assert_eq!(year.stem, Element::Wood);
    assert_eq!(year.branch, Animal::Dragon);

    let cycle = lectionary(2024);
    assert_eq!(cycle.sunday, SundayCycle::B);
    assert_eq!(cycle.weekday, WeekdayCycle::Even);

    assert_eq!(julian_gregorian_delta(2024), Some(13));
    assert_eq!(hijri_year(2024), 1445);
}

#[test]
fn dst_table_is_complete() {
    for weekday in Weekday::ALL {
        let schedule = dst_schedule(weekday);
        assert_ne!(schedule, DstSchedule::unset());
        assert!(schedule.fields().iter().all(|f| f.is_some_and(|s| !s.is_empty())));
    }
    assert_eq!(dst_schedule_for_year(2025).us_start, Some("9 March"));
}

#[test]
fn calculators_are_pure() {
    for year in [-4713, -44, 0, 1, 1582, 1583, 1900, 2000, 2024, 9999] {
        assert_eq!(doomsday(year), doomsday(year));
        assert_eq!(easter(year), easter(year));
        assert_eq!(pascha(year), pascha(year));
        assert_eq!(memorial(year), memorial(year));
        assert_eq!(dominical_letter(year), dominical_letter(year));
        assert_eq!(YearReport::for_year(year), YearReport::for_year(year));
    }
}

#[test]
fn calculators_are_total_at_integer_extremes() {
    for year in [i64::MIN, i64::MIN + 1, i64::MAX - 1, i64::MAX] {
        let report = YearReport::for_year(year);
        assert_eq!(report.doomsday, doomsday(year));
        assert_eq!(report.easter, easter(year));
        assert_eq!(report.julian_period, i128::from(year) + 4713);
        assert_eq!(report.hijri_year, hijri_year(year));
    }
    assert_eq!(paschalion::parse_year("-9223372036854775808"), Ok(i64::MIN));
}

#[test]
fn calculators_are_thread_safe() {
    let handles: Vec<_> = (2020..2030)
        .map(|year| std::thread::spawn(move || YearReport::for_year(year)))
        .collect();
    for (year, handle) in (2020..2030).zip(handles) {
        assert_eq!(handle.join().unwrap(), YearReport::for_year(year));
    }
}
