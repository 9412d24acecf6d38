//! ISO-8601 durations as they appear on the Graph wire (`PT1H30M`, `P1D`, `-PT0.5S`).
//!
//! Calendar components (years, months) have no fixed length, so the value keeps
//! every component separately and only converts to an exact span on request.

use std::fmt;
use std::str::FromStr;

use chrono::TimeDelta;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseError;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// A lossless ISO-8601 duration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IsoDuration {
    pub negative: bool,
    pub years: u32,
    pub months: u32,
    pub weeks: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub nanoseconds: u32,
}

impl IsoDuration {
    /// Duration made only of time-of-day components.
    #[must_use]
    pub fn from_hms(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn from_days(days: u32) -> Self {
        Self {
            days,
            ..Self::default()
        }
    }

    /// Flip the sign.
    #[must_use]
    pub fn negated(mut self) -> Self {
        self.negative = !self.negative;
        self
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.years == 0
            && self.months == 0
            && self.weeks == 0
            && self.days == 0
            && self.hours == 0
            && self.minutes == 0
            && self.seconds == 0
            && self.nanoseconds == 0
    }

    /// Exact span of this duration.
    ///
    /// Returns `None` when the duration carries years or months, which have no
    /// fixed length, or when the span overflows `TimeDelta`.
    #[must_use]
    pub fn to_time_delta(&self) -> Option<TimeDelta> {
        if self.years != 0 || self.months != 0 {
            return None;
        }
        let days = i64::from(self.weeks) * 7 + i64::from(self.days);
        let seconds = days
            .checked_mul(86_400)?
            .checked_add(i64::from(self.hours) * 3_600)?
            .checked_add(i64::from(self.minutes) * 60)?
            .checked_add(i64::from(self.seconds))?;
        let delta = TimeDelta::try_seconds(seconds)?
            .checked_add(&TimeDelta::nanoseconds(i64::from(self.nanoseconds)))?;
        Some(if self.negative { -delta } else { delta })
    }

    /// Build a duration from an exact span, using days, hours, minutes and seconds.
    #[must_use]
    pub fn from_time_delta(delta: TimeDelta) -> Self {
        let negative = delta < TimeDelta::zero();
        let delta = delta.abs();
        let total_seconds = delta.num_seconds();
        let nanoseconds = u32::try_from(delta.subsec_nanos()).unwrap_or(0);
        let days = total_seconds / 86_400;
        let rest = total_seconds % 86_400;
        Self {
            negative,
            days: u32::try_from(days).unwrap_or(u32::MAX),
            hours: u32::try_from(rest / 3_600).unwrap_or(0),
            minutes: u32::try_from((rest % 3_600) / 60).unwrap_or(0),
            seconds: u32::try_from(rest % 60).unwrap_or(0),
            nanoseconds,
            ..Self::default()
        }
    }
}

impl fmt::Display for IsoDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str("P")?;
        if self.is_zero() {
            return f.write_str("T0S");
        }
        for (value, unit) in [
            (self.years, 'Y'),
            (self.months, 'M'),
            (self.weeks, 'W'),
            (self.days, 'D'),
        ] {
            if value != 0 {
                write!(f, "{value}{unit}")?;
            }
        }
        if self.hours == 0 && self.minutes == 0 && self.seconds == 0 && self.nanoseconds == 0 {
            return Ok(());
        }
        f.write_str("T")?;
        if self.hours != 0 {
            write!(f, "{}H", self.hours)?;
        }
        if self.minutes != 0 {
            write!(f, "{}M", self.minutes)?;
        }
        if self.seconds != 0 || self.nanoseconds != 0 {
            write!(f, "{}", self.seconds)?;
            if self.nanoseconds != 0 {
                let fraction = format!("{:09}", self.nanoseconds);
                write!(f, ".{}", fraction.trim_end_matches('0'))?;
            }
            f.write_str("S")?;
        }
        Ok(())
    }
}

impl FromStr for IsoDuration {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidValue {
            kind: "duration",
            value: s.to_owned(),
        };

        let (negative, rest) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        let rest = rest.strip_prefix('P').ok_or_else(invalid)?;
        if rest.is_empty() {
            return Err(invalid());
        }

        let (date_part, time_part) = match rest.split_once('T') {
            Some((date, time)) => {
                if time.is_empty() {
                    return Err(invalid());
                }
                (date, Some(time))
            }
            None => (rest, None),
        };

        let mut out = IsoDuration {
            negative,
            ..IsoDuration::default()
        };

        let mut number = String::new();
        let mut previous = None;
        for ch in date_part.chars() {
            if ch.is_ascii_digit() {
                number.push(ch);
                continue;
            }
            let rank = DATE_UNITS.find(ch).ok_or_else(invalid)?;
            check_unit_order(&mut previous, rank).ok_or_else(invalid)?;
            let value: u32 = number.parse().map_err(|_| invalid())?;
            number.clear();
            match ch {
                'Y' => out.years = value,
                'M' => out.months = value,
                'W' => out.weeks = value,
                _ => out.days = value,
            }
        }
        if !number.is_empty() {
            return Err(invalid());
        }

        if let Some(time_part) = time_part {
            let mut previous = None;
            for ch in time_part.chars() {
                if ch.is_ascii_digit() || ch == '.' || ch == ',' {
                    number.push(ch);
                    continue;
                }
                let rank = TIME_UNITS.find(ch).ok_or_else(invalid)?;
                check_unit_order(&mut previous, rank).ok_or_else(invalid)?;
                match ch {
                    'H' => out.hours = number.parse().map_err(|_| invalid())?,
                    'M' => out.minutes = number.parse().map_err(|_| invalid())?,
                    _ => {
                        let (seconds, nanoseconds) = parse_seconds(&number).ok_or_else(invalid)?;
                        out.seconds = seconds;
                        out.nanoseconds = nanoseconds;
                    }
                }
                number.clear();
            }
            if !number.is_empty() {
                return Err(invalid());
            }
        }

        Ok(out)
    }
}

/// Designators of the date section, in the order they must appear.
const DATE_UNITS: &str = "YMWD";
/// Designators of the time section, in the order they must appear.
const TIME_UNITS: &str = "HMS";

/// Each designator appears at most once and after every designator ranked before it.
fn check_unit_order(previous: &mut Option<usize>, rank: usize) -> Option<()> {
    if previous.is_some_and(|last| rank <= last) {
        return None;
    }
    *previous = Some(rank);
    Some(())
}

/// Split `12.345` into whole seconds and nanoseconds. Digits past nanosecond
/// precision are truncated.
fn parse_seconds(text: &str) -> Option<(u32, u32)> {
    let text = text.replace(',', ".");
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (text.as_str(), ""),
    };
    if whole.is_empty() {
        return None;
    }
    let seconds = whole.parse().ok()?;
    if fraction.is_empty() {
        return Some((seconds, 0));
    }
    if !fraction.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let mut digits: String = fraction.chars().take(9).collect();
    while digits.len() < 9 {
        digits.push('0');
    }
    let nanoseconds: u32 = digits.parse().ok()?;
    debug_assert!(nanoseconds < NANOS_PER_SECOND);
    Some((seconds, nanoseconds))
}

impl Serialize for IsoDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for IsoDuration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
