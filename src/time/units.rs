//! Parser for `<unit> since <timestamp>` time units.

use crate::error::{GridError, Result};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use std::fmt;
use std::str::FromStr;

/// Calendar step a raw time value counts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeStep {
    /// Seconds.
    Seconds,
    /// Minutes.
    Minutes,
    /// Hours.
    Hours,
    /// Days of exactly 86400 seconds.
    Days,
}

impl TimeStep {
    /// Parse a unit word, case-insensitive, singular, plural or abbreviated.
    pub fn from_word(word: &str) -> Option<Self> {
        match word.to_ascii_lowercase().as_str() {
            "second" | "seconds" | "sec" | "secs" | "s" => Some(Self::Seconds),
            "minute" | "minutes" | "min" | "mins" => Some(Self::Minutes),
            "hour" | "hours" | "hr" | "hrs" | "h" => Some(Self::Hours),
            "day" | "days" | "d" => Some(Self::Days),
            _ => None,
        }
    }

    /// Length of one step in seconds.
    pub fn seconds(self) -> i64 {
        match self {
            Self::Seconds => 1,
            Self::Minutes => 60,
            Self::Hours => 3_600,
            Self::Days => 86_400,
        }
    }

    /// Plural unit word.
    pub fn name(self) -> &'static str {
        match self {
            Self::Seconds => "seconds",
            Self::Minutes => "minutes",
            Self::Hours => "hours",
            Self::Days => "days",
        }
    }
}

/// A parsed time encoding: raw values count `step`s since `epoch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeUnit {
    /// Step each raw unit represents.
    pub step: TimeStep,
    /// Reference instant, normalized to UTC.
    pub epoch: DateTime<Utc>,
}

impl FromStr for TimeUnit {
    type Err = GridError;

    fn from_str(units: &str) -> Result<Self> {
        let mut tokens = units.split_whitespace();

        let step = tokens
            .next()
            .and_then(TimeStep::from_word)
            .ok_or_else(|| GridError::unparsable_units(units))?;

        match tokens.next() {
            Some(word) if word.eq_ignore_ascii_case("since") => {}
            _ => return Err(GridError::unparsable_units(units)),
        }

        let timestamp = tokens.collect::<Vec<_>>().join(" ");
        if timestamp.is_empty() {
            return Err(GridError::unparsable_units(units));
        }

        let epoch = parse_timestamp(&timestamp)?;
        Ok(Self { step, epoch })
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} since {}",
            self.step.name(),
            self.epoch.format("%Y-%m-%dT%H:%M:%SZ")
        )
    }
}

/// Parse `YYYY-MM-DD[(T| )hh[:mm[:ss[.fff]]]][zone]` into a UTC instant.
///
/// A missing time means midnight; a missing zone means UTC.
pub fn parse_timestamp(text: &str) -> Result<DateTime<Utc>> {
    let text = text.trim();
    let invalid = |reason: &str| GridError::invalid_timestamp(text, reason);

    let (date_part, rest) = match text.find(|c: char| c == 'T' || c == 't' || c == ' ') {
        Some(i) => (&text[..i], text[i + 1..].trim_start()),
        None => (text, ""),
    };

    let date = parse_date(date_part).ok_or_else(|| invalid("expected a YYYY-MM-DD date"))?;

    let clock_end = rest
        .find(|c: char| !(c.is_ascii_digit() || c == ':' || c == '.'))
        .unwrap_or(rest.len());
    let (clock, zone) = (&rest[..clock_end], rest[clock_end..].trim());

    let time = if clock.is_empty() {
        NaiveTime::default()
    } else {
        parse_clock(clock).ok_or_else(|| invalid("expected an hh:mm:ss time of day"))?
    };

    let offset = parse_zone(zone).ok_or_else(|| invalid("expected Z, UTC or a +hh:mm offset"))?;

    offset
        .from_local_datetime(&NaiveDateTime::new(date, time))
        .single()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| invalid("not a representable instant"))
}

fn parse_number<T: FromStr>(field: &str) -> Option<T> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    let mut fields = text.split('-');
    let year: i32 = parse_number(fields.next()?)?;
    let month: u32 = parse_number(fields.next()?)?;
    let day: u32 = parse_number(fields.next()?)?;
    if fields.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_clock(text: &str) -> Option<NaiveTime> {
    let mut fields = text.split(':');
    let hour: u32 = parse_number(fields.next()?)?;
    let minute: u32 = fields.next().map_or(Some(0), parse_number)?;
    let (second, nano) = match fields.next() {
        Some(field) => parse_seconds(field)?,
        None => (0, 0),
    };
    if fields.next().is_some() {
        return None;
    }
    NaiveTime::from_hms_nano_opt(hour, minute, second, nano)
}

fn parse_seconds(field: &str) -> Option<(u32, u32)> {
    let (whole, fraction) = match field.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (field, ""),
    };
    let second = parse_number(whole)?;
    if fraction.is_empty() {
        return Some((second, 0));
    }

    // Nanosecond resolution; further digits are dropped.
    let digits: String = fraction.chars().take(9).collect();
    let scale = 10u32.pow(9 - digits.len() as u32);
    let nano = parse_number::<u32>(&digits)? * scale;
    Some((second, nano))
}

fn parse_zone(zone: &str) -> Option<FixedOffset> {
    if zone.is_empty()
        || zone.eq_ignore_ascii_case("z")
        || zone.eq_ignore_ascii_case("utc")
        || zone.eq_ignore_ascii_case("gmt")
    {
        return FixedOffset::east_opt(0);
    }

    let (sign, digits) = match zone.as_bytes()[0] {
        b'+' => (1, &zone[1..]),
        b'-' => (-1, &zone[1..]),
        _ => return None,
    };
    let digits = digits.replace(':', "");
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let (hours, minutes): (i32, i32) = match digits.len() {
        1 | 2 => (parse_number(&digits)?, 0),
        4 => (parse_number(&digits[..2])?, parse_number(&digits[2..])?),
        _ => return None,
    };
    if minutes >= 60 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3_600 + minutes * 60))
}
