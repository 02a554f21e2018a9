//! Conversion of raw time-axis values into absolute instants.

use super::TimeUnit;
use crate::error::{GridError, Result};
use chrono::{DateTime, Duration, FixedOffset, Local, SecondsFormat, Utc};
use std::fmt;

/// Zone a decoded instant is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayZone {
    /// Coordinated Universal Time.
    #[default]
    Utc,
    /// The system's local zone.
    Local,
}

/// An absolute instant decoded from a time axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DecodedTime(DateTime<Utc>);

impl DecodedTime {
    /// The instant in UTC.
    pub fn instant(&self) -> DateTime<Utc> {
        self.0
    }

    /// The same instant with the offset of `zone`.
    pub fn in_zone(&self, zone: DisplayZone) -> DateTime<FixedOffset> {
        match zone {
            DisplayZone::Utc => self.0.fixed_offset(),
            DisplayZone::Local => self.0.with_timezone(&Local).fixed_offset(),
        }
    }

    /// ISO-8601 rendering in `zone`, e.g. `1970-01-01T01:00:00Z`.
    pub fn to_iso8601(&self, zone: DisplayZone) -> String {
        self.in_zone(zone).to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }
}

impl From<DecodedTime> for DateTime<Utc> {
    fn from(time: DecodedTime) -> Self {
        time.0
    }
}

impl fmt::Display for DecodedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso8601(DisplayZone::Utc))
    }
}

impl TimeUnit {
    /// Duration of `raw_value` steps.
    ///
    /// Integral values are exact to the second. Fractional values are rounded to
    /// the nearest nanosecond. Returns `None` for non-finite or overflowing input.
    pub fn offset(&self, raw_value: f64) -> Option<Duration> {
        if !raw_value.is_finite() {
            return None;
        }

        let step = self.step.seconds();
        if raw_value.fract() == 0.0 && raw_value.abs() < i64::MAX as f64 {
            let seconds = (raw_value as i64).checked_mul(step)?;
            return Duration::try_seconds(seconds);
        }

        let nanos = (raw_value * step as f64 * 1e9).round();
        if nanos.abs() >= i64::MAX as f64 {
            return None;
        }
        Some(Duration::nanoseconds(nanos as i64))
    }

    /// The instant `raw_value` steps after the epoch.
    pub fn decode(&self, raw_value: f64) -> Option<DecodedTime> {
        let offset = self.offset(raw_value)?;
        self.epoch.checked_add_signed(offset).map(DecodedTime)
    }
}

/// Decode a raw time value using its variable's units string.
///
/// `units` must read `<unit> since <timestamp>`; see [`TimeUnit`]. The unit is
/// parsed on every call and nothing is cached.
pub fn decode_time(units: &str, raw_value: f64) -> Result<DecodedTime> {
    let unit: TimeUnit = units.parse()?;
    unit.decode(raw_value).ok_or_else(|| GridError::TimeOutOfRange {
        value: raw_value,
        units: units.to_string(),
    })
}
