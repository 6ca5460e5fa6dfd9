//! Birth date input.

use chrono::{Datelike, NaiveDate};
use ohaeng_types::OhaengError;

/// Earliest accepted birth date.
pub fn earliest_birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Parse an eight-digit `YYYYMMDD` birth date. Non-digit characters are
/// stripped first, so `1990-12-31` is accepted. The date must exist and lie
/// between 1900-01-01 and `today` inclusive.
pub fn parse_birth_date(input: &str, today: NaiveDate) -> Result<NaiveDate, OhaengError> {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    let invalid = |reason: &str| OhaengError::InvalidBirthDate {
        input: input.to_string(),
        reason: reason.to_string(),
    };

    if digits.len() != 8 {
        return Err(invalid("expected eight digits (YYYYMMDD)"));
    }

    let field = |range: std::ops::Range<usize>| digits[range].parse::<u32>().ok();
    let (year, month, day) = match (field(0..4), field(4..6), field(6..8)) {
        (Some(y), Some(m), Some(d)) => (y, m, d),
        _ => return Err(invalid("expected eight digits (YYYYMMDD)")),
    };

    let year = i32::try_from(year).map_err(|_| invalid("year out of range"))?;
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| invalid("no such calendar date"))?;

    if date < earliest_birth_date() {
        return Err(invalid("dates before 1900-01-01 are not accepted"));
    }
    if date > today {
        return Err(invalid("date is in the future"));
    }
    Ok(date)
}

/// Year and month of a parsed birth date.
pub fn year_month(date: NaiveDate) -> (i32, u32) {
    (date.year(), date.month())
}
