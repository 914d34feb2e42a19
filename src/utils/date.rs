//! Calendar dates for post metadata and feed output.
//!
//! Accepts every TOML date form (`2024-03-05`, `2024-03-05T08:15:00`,
//! `2024-03-05 08:15:00.5+05:30`, ...), normalized to UTC with fractional
//! seconds dropped. Renders RFC 2822 for `<pubDate>`. Ordering is
//! chronological (fields compare most significant first).

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike, Utc};
use std::fmt;
use toml::value::{Datetime, Offset};

const WEEKDAYS: [&str; 7] = ["Sat", "Sun", "Mon", "Tue", "Wed", "Thu", "Fri"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// UTC datetime without timezone complexity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTimeUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTimeUtc {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Current UTC wall clock, truncated to seconds.
    ///
    /// This is the only place the ambient clock is read; everything else
    /// takes a `DateTimeUtc` parameter.
    pub fn now() -> Self {
        let now = Utc::now();
        Self::new(
            u16::try_from(now.year()).unwrap_or(u16::MAX),
            now.month() as u8,
            now.day() as u8,
            now.hour() as u8,
            now.minute() as u8,
            now.second() as u8,
        )
    }

    /// Midnight of the same day.
    pub const fn date(self) -> Self {
        Self::from_ymd(self.year, self.month, self.day)
    }

    /// Parse any TOML date or datetime string.
    pub fn parse(s: &str) -> Option<Self> {
        let dt: Datetime = s.trim().parse().ok()?;
        Self::from_toml(&dt)
    }

    /// Normalize a TOML date value to UTC.
    ///
    /// Local dates and datetimes are taken as UTC. A bare time has no date
    /// and yields `None`, as does any out-of-range field.
    pub fn from_toml(dt: &Datetime) -> Option<Self> {
        let date = dt.date?;
        let date = NaiveDate::from_ymd_opt(
            i32::from(date.year),
            u32::from(date.month),
            u32::from(date.day),
        )?;
        let time = match dt.time {
            Some(t) => NaiveTime::from_hms_opt(
                u32::from(t.hour),
                u32::from(t.minute),
                u32::from(t.second),
            )?,
            None => NaiveTime::from_hms_opt(0, 0, 0)?,
        };

        let local = date.and_time(time);
        let utc = match dt.offset {
            None | Some(Offset::Z) => local,
            Some(Offset::Custom { minutes }) => {
                local.checked_sub_signed(TimeDelta::try_minutes(i64::from(minutes))?)?
            }
        };
        Self::from_naive(utc)
    }

    fn from_naive(dt: NaiveDateTime) -> Option<Self> {
        Some(Self::new(
            u16::try_from(dt.year()).ok()?,
            dt.month() as u8,
            dt.day() as u8,
            dt.hour() as u8,
            dt.minute() as u8,
            dt.second() as u8,
        ))
    }

    /// Format as `Thu, 21 Mar 2024 00:00:00 GMT`.
    pub fn to_rfc2822(self) -> String {
        format!(
            "{}, {:02} {} {:04} {:02}:{:02}:{:02} GMT",
            WEEKDAYS[self.weekday_index()],
            self.day,
            MONTHS[(self.month - 1) as usize],
            self.year,
            self.hour,
            self.minute,
            self.second
        )
    }

    /// Zeller's congruence, 0 = Saturday.
    #[inline]
    fn weekday_index(&self) -> usize {
        let (y, m) = if self.month < 3 {
            (self.year as i32 - 1, self.month as i32 + 12)
        } else {
            (self.year as i32, self.month as i32)
        };
        let d = self.day as i32;
        ((d + (13 * (m + 1)) / 5 + y + y / 4 - y / 100 + y / 400) % 7) as usize
    }
}

impl fmt::Display for DateTimeUtc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)?;
        if (self.hour, self.minute, self.second) != (0, 0, 0) {
            write!(f, "T{:02}:{:02}:{:02}Z", self.hour, self.minute, self.second)?;
        }
        Ok(())
    }
}
