use chrono::NaiveDate;
use quandl_rs::QuandlError;
use quandl_rs::params::resolve_date;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

const TODAY: (i32, u32, u32) = (2014, 3, 15);

fn today() -> NaiveDate {
    d(TODAY.0, TODAY.1, TODAY.2)
}

#[test]
fn anchors_resolve_relative_to_today() {
    assert_eq!(resolve_date("today", today()).unwrap(), today());
    assert_eq!(resolve_date("now", today()).unwrap(), today());
    assert_eq!(resolve_date("Yesterday", today()).unwrap(), d(2014, 3, 14));
    assert_eq!(resolve_date("  tomorrow ", today()).unwrap(), d(2014, 3, 16));
}

#[test]
fn absolute_dates_in_several_notations() {
    assert_eq!(resolve_date("2014-01-01", today()).unwrap(), d(2014, 1, 1));
    assert_eq!(resolve_date("2014/02/02", today()).unwrap(), d(2014, 2, 2));
    assert_eq!(resolve_date("20140203", today()).unwrap(), d(2014, 2, 3));
    assert_eq!(
        resolve_date("2014-01-05T23:30:00Z", today()).unwrap(),
        d(2014, 1, 5)
    );
}

#[test]
fn offsets_after_an_anchor() {
    assert_eq!(resolve_date("today-30 days", today()).unwrap(), d(2014, 2, 13));
    assert_eq!(resolve_date("today -1 week", today()).unwrap(), d(2014, 3, 8));
    assert_eq!(resolve_date("today+2 fortnights", today()).unwrap(), d(2014, 4, 12));
    assert_eq!(resolve_date("2014-01-01 +1 year", today()).unwrap(), d(2015, 1, 1));
    assert_eq!(resolve_date("2014-01-01+10 days", today()).unwrap(), d(2014, 1, 11));
    assert_eq!(
        resolve_date("yesterday -1 month +2 days", today()).unwrap(),
        d(2014, 2, 16)
    );
}

#[test]
fn bare_offsets_apply_to_today() {
    assert_eq!(resolve_date("-1 day", today()).unwrap(), d(2014, 3, 14));
    assert_eq!(resolve_date("+3 weeks", today()).unwrap(), d(2014, 4, 5));
    assert_eq!(resolve_date("3 days ago", today()).unwrap(), d(2014, 3, 12));
    assert_eq!(resolve_date("1 year 2 months ago", today()).unwrap(), d(2013, 1, 15));
}

#[test]
fn month_arithmetic_clamps_to_month_end() {
    assert_eq!(resolve_date("2014-01-31 +1 month", today()).unwrap(), d(2014, 2, 28));
    assert_eq!(resolve_date("2016-02-29 -1 year", today()).unwrap(), d(2015, 2, 28));
}

#[test]
fn unreadable_expressions_are_rejected() {
    for expr in [
        "",
        "   ",
        "banana",
        "today-30 parsecs",
        "today 30",
        "2014-13-01",
        "ago",
        "3 days ago later",
        "todayish",
    ] {
        match resolve_date(expr, today()) {
            Err(QuandlError::InvalidDateExpression(raw)) => assert_eq!(raw, expr),
            other => panic!("expected InvalidDateExpression for {expr:?}, got {other:?}"),
        }
    }
}

#[test]
fn overflow_is_an_invalid_expression() {
    let err = resolve_date("today+999999999 years", today()).unwrap_err();
    assert!(matches!(err, QuandlError::InvalidDateExpression(_)));
}
