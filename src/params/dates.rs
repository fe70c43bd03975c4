use chrono::{DateTime, Days, Months, NaiveDate};

use crate::core::QuandlError;

#[derive(Debug, Clone, Copy)]
enum Unit {
    Day,
    Week,
    Fortnight,
    Month,
    Year,
}

#[derive(Debug, Clone, Copy)]
struct Offset {
    amount: i64,
    unit: Unit,
}

/// Resolves a free-form date expression against `today`.
///
/// Accepts an optional anchor (`today`, `now`, `midnight`, `yesterday`, `tomorrow`,
/// `YYYY-MM-DD`, `YYYY/MM/DD`, `YYYYMMDD` or an RFC 3339 timestamp) followed by any number of
/// signed offsets such as `-30 days`, `+1 month` or `2 weeks`, optionally ending in `ago`.
/// Without an anchor the offsets apply to `today`. Month and year offsets clamp to the end
/// of the target month.
///
/// ```
/// use chrono::NaiveDate;
/// use quandl_rs::params::resolve_date;
///
/// let today = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
/// assert_eq!(resolve_date("today-30 days", today).unwrap(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
/// assert_eq!(resolve_date("-1 month", today).unwrap(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// ```
///
/// # Errors
///
/// Returns `QuandlError::InvalidDateExpression` for anything it cannot read, or when the
/// result falls outside the representable calendar.
pub fn resolve_date(expr: &str, today: NaiveDate) -> Result<NaiveDate, QuandlError> {
    let invalid = || QuandlError::InvalidDateExpression(expr.to_string());

    let lowered = expr.trim().to_ascii_lowercase();
    if lowered.is_empty() {
        return Err(invalid());
    }

    let (anchor, rest) = match parse_anchor(&lowered, today) {
        Some((date, rest)) => (Some(date), rest),
        None => (None, lowered.as_str()),
    };
    let offsets = parse_offsets(rest).ok_or_else(invalid)?;
    if anchor.is_none() && offsets.is_empty() {
        return Err(invalid());
    }

    offsets
        .into_iter()
        .try_fold(anchor.unwrap_or(today), apply)
        .ok_or_else(invalid)
}

fn parse_anchor(s: &str, today: NaiveDate) -> Option<(NaiveDate, &str)> {
    let keywords: [(&str, fn(NaiveDate) -> Option<NaiveDate>); 5] = [
        ("today", Some),
        ("now", Some),
        ("midnight", Some),
        ("yesterday", |d| d.pred_opt()),
        ("tomorrow", |d| d.succ_opt()),
    ];
    for (word, resolve) in keywords {
        if let Some(rest) = strip_word(s, word) {
            return resolve(today).map(|d| (d, rest));
        }
    }

    let end = s.find(char::is_whitespace).unwrap_or(s.len());
    let token = &s[..end];
    if let Some(date) = parse_absolute(token) {
        return Some((date, &s[end..]));
    }
    // `2014-01-31+1 month`: a dashed or slashed date glued to its first offset
    if token.len() > 10 && token.is_char_boundary(10) {
        let (head, tail) = token.split_at(10);
        if tail.starts_with(['+', '-']) {
            if let Some(date) = parse_absolute(head) {
                return Some((date, &s[10..]));
            }
        }
    }
    None
}

fn parse_absolute(token: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(token) {
        return Some(dt.date_naive());
    }
    ["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(token, fmt).ok())
}

/// Strips `word` from the front of `s` if it is not followed by more letters.
fn strip_word<'a>(s: &'a str, word: &str) -> Option<&'a str> {
    let rest = s.strip_prefix(word)?;
    if rest.starts_with(|c: char| c.is_ascii_alphabetic()) {
        None
    } else {
        Some(rest)
    }
}

fn parse_offsets(mut s: &str) -> Option<Vec<Offset>> {
    let mut offsets = Vec::new();
    loop {
        s = s.trim_start();
        if s.is_empty() {
            return Some(offsets);
        }
        if let Some(rest) = strip_word(s, "ago") {
            if !rest.trim().is_empty() || offsets.is_empty() {
                return None;
            }
            for o in &mut offsets {
                o.amount = -o.amount;
            }
            return Some(offsets);
        }

        let sign = match s.chars().next() {
            Some('-') => {
                s = &s[1..];
                -1
            }
            Some('+') => {
                s = &s[1..];
                1
            }
            _ => 1,
        };
        s = s.trim_start();

        let digits = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        if digits == 0 {
            return None;
        }
        let amount: i64 = s[..digits].parse().ok()?;
        s = s[digits..].trim_start();

        let letters = s
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(s.len());
        let unit = parse_unit(&s[..letters])?;
        s = &s[letters..];

        offsets.push(Offset {
            amount: sign * amount,
            unit,
        });
    }
}

fn parse_unit(word: &str) -> Option<Unit> {
    let singular = word.strip_suffix('s').unwrap_or(word);
    match singular {
        "day" => Some(Unit::Day),
        "week" => Some(Unit::Week),
        "fortnight" => Some(Unit::Fortnight),
        "month" => Some(Unit::Month),
        "year" => Some(Unit::Year),
        _ => None,
    }
}

fn apply(date: NaiveDate, offset: Offset) -> Option<NaiveDate> {
    let (days, months) = match offset.unit {
        Unit::Day => (offset.amount, 0),
        Unit::Week => (offset.amount.checked_mul(7)?, 0),
        Unit::Fortnight => (offset.amount.checked_mul(14)?, 0),
        Unit::Month => (0, offset.amount),
        Unit::Year => (0, offset.amount.checked_mul(12)?),
    };

    let date = if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))?
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))?
    };
    let months_abs = u32::try_from(months.unsigned_abs()).ok()?;
    if months >= 0 {
        date.checked_add_months(Months::new(months_abs))
    } else {
        date.checked_sub_months(Months::new(months_abs))
    }
}
