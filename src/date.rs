use std::fmt;
use std::str::FromStr;
use time::macros::format_description;
use time::{Date, Month, PrimitiveDateTime};

/// Sentinel label shared by every post whose timestamp does not parse.
pub const INVALID_DATE: &str = "Invalid Date";

/// Calendar-day bucket for the daily leaderboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DateKey {
    Day(Date),
    Invalid,
}

impl DateKey {
    /// Derive the bucket from a `"Fri Oct 11 04:05:42 2015"` style timestamp.
    /// Anything unparseable lands in `DateKey::Invalid`.
    pub fn from_timestamp(ts: &str) -> Self {
        parse_timestamp(ts).map(|dt| DateKey::Day(dt.date())).unwrap_or(DateKey::Invalid)
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, DateKey::Day(_))
    }
}

/// Parse a ctime-style timestamp. The leading weekday is optional and not
/// checked against the date; runs of whitespace (as in `"Oct  1"`) are accepted.
pub fn parse_timestamp(ts: &str) -> Option<PrimitiveDateTime> {
    let mut tokens: Vec<&str> = ts.split_whitespace().collect();
    if tokens.len() == 5 && tokens[0].chars().all(|c| c.is_ascii_alphabetic()) {
        tokens.remove(0);
    }
    if tokens.len() != 4 {
        return None;
    }
    // "Oct 11 04:05:42 2015" once the weekday is dropped.
    let format = format_description!(
        "[month repr:short case_sensitive:false] [day padding:none] [hour padding:none]:[minute]:[second] [year]"
    );
    PrimitiveDateTime::parse(&tokens.join(" "), format).ok()
}

impl fmt::Display for DateKey {
    /// US order without zero padding: `10/11/2015`, `1/5/2016`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateKey::Day(d) => write!(f, "{}/{}/{}", u8::from(d.month()), d.day(), d.year()),
            DateKey::Invalid => f.write_str(INVALID_DATE),
        }
    }
}

impl FromStr for DateKey {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == INVALID_DATE {
            return Ok(DateKey::Invalid);
        }
        let parts: Vec<_> = s.split('/').collect();
        if parts.len() != 3 {
            return Err("expected M/D/YYYY".into());
        }
        let month: u8 = parts[0].parse().map_err(|_| "invalid month")?;
        let day: u8 = parts[1].parse().map_err(|_| "invalid day")?;
        let year: i32 = parts[2].parse().map_err(|_| "invalid year")?;
        let month = Month::try_from(month).map_err(|_| "month must be 1..12")?;
        Date::from_calendar_date(year, month, day)
            .map(DateKey::Day)
            .map_err(|e| e.to_string())
    }
}
