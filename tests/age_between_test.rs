use age_calc::{Age, FixedClock, age_between, age_now};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

struct Case {
    name: &'static str,
    birth: NaiveDateTime,
    reference: NaiveDateTime,
    expected: Age,
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32, nanos: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_nano_opt(h, min, s, nanos)
        .unwrap()
}

fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
    at(y, m, d, 0, 0, 0, 0)
}

fn cases() -> Vec<Case> {
    vec![
        Case {
            name: "normal",
            birth: midnight(1989, 1, 1),
            reference: midnight(2022, 8, 25),
            expected: Age::new(33, 7, 24),
        },
        Case {
            name: "normal_same_year",
            birth: midnight(2022, 2, 6),
            reference: midnight(2022, 8, 25),
            expected: Age::new(0, 6, 19),
        },
        Case {
            name: "leap_year_to_leap_year",
            birth: midnight(2000, 2, 6),
            reference: midnight(2016, 2, 29),
            expected: Age::new(16, 0, 23),
        },
        Case {
            name: "leap_year_to_leap_year_boundaries",
            birth: midnight(2000, 2, 29),
            reference: midnight(2020, 2, 28),
            expected: Age::new(19, 11, 28),
        },
        Case {
            name: "leap_year_to_leap_year_boundaries_two",
            birth: midnight(2000, 2, 28),
            reference: midnight(2020, 2, 29),
            expected: Age::new(20, 0, 1),
        },
        Case {
            name: "leap_year_to_leap_year_boundaries_three",
            birth: midnight(2000, 2, 13),
            reference: midnight(2020, 2, 4),
            expected: Age::new(19, 11, 4),
        },
        Case {
            name: "normal_months",
            birth: midnight(2022, 2, 13),
            reference: midnight(2022, 6, 4),
            expected: Age::new(0, 3, 19),
        },
        Case {
            name: "multiple_days",
            birth: midnight(2022, 6, 13),
            reference: midnight(2022, 6, 20),
            expected: Age::new(0, 0, 7),
        },
        Case {
            name: "new_born",
            birth: at(2022, 6, 13, 12, 30, 0, 0),
            reference: at(2022, 6, 13, 14, 38, 12, 3455),
            expected: Age::ZERO,
        },
        Case {
            name: "birth_after_reference",
            birth: midnight(2023, 1, 1),
            reference: midnight(2022, 12, 31),
            expected: Age::ZERO,
        },
    ]
}

#[test]
fn age_table() {
    for case in cases() {
        let age = age_between(case.birth, case.reference);
        assert_eq!(
            age, case.expected,
            "{}: expected {:?}, got {:?}",
            case.name, case.expected, age
        );
    }
}

#[test]
fn new_born_formats_as_one_day() {
    let age = age_between(at(2022, 6, 13, 12, 30, 0, 0), at(2022, 6, 13, 14, 38, 12, 3455));
    assert_eq!(age.to_string(), "1 day");
}

#[test]
fn fixed_points_format() {
    assert_eq!(
        age_between(midnight(2022, 2, 13), midnight(2022, 6, 4)).to_string(),
        "3 months"
    );
    assert_eq!(
        age_between(midnight(2021, 2, 13), midnight(2022, 6, 4)).to_string(),
        "1 year, 3 months"
    );
    assert_eq!(
        age_between(midnight(2022, 5, 13), midnight(2022, 6, 20)).to_string(),
        "1 month, 7 days"
    );
}

#[test]
fn works_with_timezone_aware_instants() {
    let birth: DateTime<Utc> = Utc.with_ymd_and_hms(1989, 1, 1, 8, 0, 0).unwrap();
    let reference: DateTime<Utc> = Utc.with_ymd_and_hms(2022, 8, 25, 7, 0, 0).unwrap();
    assert_eq!(age_between(birth, reference), Age::new(33, 7, 24));
}

#[test]
fn works_with_plain_dates() {
    let birth = NaiveDate::from_ymd_opt(2000, 2, 6).unwrap();
    let reference = NaiveDate::from_ymd_opt(2016, 2, 29).unwrap();
    assert_eq!(age_between(birth, reference), Age::new(16, 0, 23));
}

#[test]
fn eligibility_check_with_injected_clock() {
    let clock = FixedClock::new(midnight(2022, 8, 25));

    let adult = age_now(midnight(2004, 8, 25), &clock);
    assert_eq!(adult, Age::new(18, 0, 0));
    assert!(adult.at_least(18, 0, 0));

    let minor = age_now(midnight(2004, 8, 26), &clock);
    assert_eq!(minor, Age::new(17, 11, 30));
    assert!(!minor.at_least(18, 0, 0));
    assert!(minor.younger_than(&adult));
}
