use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use icu_calendar::{AnyCalendar, AnyCalendarKind, Date};
use serde::{Deserialize, Serialize};

use crate::constants::{GREGORIAN_TIMEZONE, PERSIAN_LOCALE, PERSIAN_MONTHS, PERSIAN_TIMEZONE};

/// The only way date handling can fail: the supplied instant (or an explicit
/// timezone name) cannot be turned into a calendar representation. Callers
/// decide what to do with it; nothing is caught or logged here.
#[derive(Debug, PartialEq, Eq)]
pub enum DateError {
    InvalidInput(String),
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(reason) => write!(f, "invalid date input: {reason}"),
        }
    }
}

impl std::error::Error for DateError {}

/// An instant handed over by the site build: either already resolved, or the
/// raw text of a frontmatter date field.
#[derive(Clone, Copy, Debug)]
pub enum DateInput<'a> {
    Instant(DateTime<Utc>),
    Text(&'a str),
}

impl From<DateTime<Utc>> for DateInput<'_> {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::Instant(instant)
    }
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl DateInput<'_> {
    fn resolve(self) -> Result<DateTime<Utc>, DateError> {
        match self {
            Self::Instant(instant) => Ok(instant),
            Self::Text(text) => parse_instant(text),
        }
    }
}

fn parse_instant(text: &str) -> Result<DateTime<Utc>, DateError> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Ok(instant.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S") {
        return Ok(Utc.from_utc_datetime(&naive));
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Ok(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)));
    }
    Err(DateError::InvalidInput(format!(
        "unparseable date {text:?}"
    )))
}

/// The calendar a locale tag selects. Resolved once per call, then matched
/// exhaustively, so neither path can be forgotten.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Calendar {
    Persian,
    Gregorian,
}

impl Calendar {
    pub fn from_locale(locale: Option<&str>) -> Self {
        match locale {
            Some(PERSIAN_LOCALE) => Self::Persian,
            _ => Self::Gregorian,
        }
    }

    const fn default_timezone(self) -> Tz {
        match self {
            Self::Persian => PERSIAN_TIMEZONE,
            Self::Gregorian => GREGORIAN_TIMEZONE,
        }
    }
}

/// Presentation switches for [`format_date`]. A partial record (for example
/// one deserialized from a page's frontmatter) falls back to the same
/// defaults as [`FormatOptions::default`]: day and year shown, time hidden,
/// timezone taken from the calendar.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct FormatOptions {
    pub show_time: bool,
    pub show_year: bool,
    pub show_day: bool,
    /// IANA timezone name. When absent, the Persian path uses "Asia/Tehran"
    /// and the Gregorian path uses "UTC".
    pub timezone: Option<String>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            show_time: false,
            show_year: true,
            show_day: true,
            timezone: None,
        }
    }
}

fn resolve_timezone(explicit: Option<&str>, calendar: Calendar) -> Result<Tz, DateError> {
    match explicit {
        Some(name) => name
            .parse()
            .map_err(|_| DateError::InvalidInput(format!("unknown timezone {name:?}"))),
        None => Ok(calendar.default_timezone()),
    }
}

struct JalaaliDate {
    day: u8,
    month_index: usize,
    year: i32,
}

fn jalaali_date(local: &DateTime<Tz>) -> Result<JalaaliDate, DateError> {
    let iso = Date::try_new_iso(local.year(), local.month() as u8, local.day() as u8)
        .map_err(|error| {
            DateError::InvalidInput(format!("date out of calendar range: {error:?}"))
        })?;
    let date = iso.to_any().to_calendar(AnyCalendar::new(AnyCalendarKind::Persian));
    let year_info = date.year();
    let year = match year_info.era() {
        Some(era_year) => era_year.year,
        None => year_info.era_year_or_related_iso(),
    };
    Ok(JalaaliDate {
        day: date.day_of_month().0,
        month_index: usize::from(date.month().ordinal - 1),
        year,
    })
}

/// Renders an instant as a human-readable date string.
///
/// The `"fa"` locale projects the instant into the Persian calendar and
/// builds the string by hand from [`PERSIAN_MONTHS`]; every other locale
/// renders through a Gregorian strftime template. Both the calendar date and
/// the optional clock reading are taken in the resolved timezone
/// (`options.timezone`, else the calendar's fallback zone), never in the
/// ambient system zone.
pub fn format_date<'a>(
    date: impl Into<DateInput<'a>>,
    locale: Option<&str>,
    options: &FormatOptions,
) -> Result<String, DateError> {
    let instant = date.into().resolve()?;
    let calendar = Calendar::from_locale(locale);
    let timezone = resolve_timezone(options.timezone.as_deref(), calendar)?;
    let local = instant.with_timezone(&timezone);
    match calendar {
        Calendar::Persian => {
            let jalaali = jalaali_date(&local)?;
            let mut result = String::new();
            if options.show_day {
                result.push_str(&jalaali.day.to_string());
                // The month name is never empty, so a shown day is always
                // followed by a separator.
                result.push(' ');
            }
            result.push_str(PERSIAN_MONTHS[jalaali.month_index]);
            if options.show_year {
                result.push_str(&format!(" {}", jalaali.year));
            }
            if options.show_time {
                result.push_str(&format!(" | {}", local.format("%H:%M")));
            }
            Ok(result)
        }
        Calendar::Gregorian => {
            let mut template = String::new();
            if options.show_day {
                template.push_str("%-d ");
            }
            template.push_str("%b");
            if options.show_year {
                template.push_str(", %Y");
            }
            if options.show_time {
                template.push_str(" | %H:%M");
            }
            Ok(local.format(&template).to_string())
        }
    }
}

/// The calendar year of the instant, as a string: Persian for `"fa"`,
/// Gregorian for everything else, each in its calendar's fallback zone.
pub fn get_year<'a>(
    date: impl Into<DateInput<'a>>,
    locale: Option<&str>,
) -> Result<String, DateError> {
    let instant = date.into().resolve()?;
    let calendar = Calendar::from_locale(locale);
    let local = instant.with_timezone(&calendar.default_timezone());
    match calendar {
        Calendar::Persian => Ok(jalaali_date(&local)?.year.to_string()),
        Calendar::Gregorian => Ok(local.year().to_string()),
    }
}

/// The display name of the instant's month: a [`PERSIAN_MONTHS`] entry for
/// `"fa"`, the 3-letter Gregorian abbreviation for everything else.
pub fn get_month_name<'a>(
    date: impl Into<DateInput<'a>>,
    locale: Option<&str>,
) -> Result<String, DateError> {
    let instant = date.into().resolve()?;
    let calendar = Calendar::from_locale(locale);
    let local = instant.with_timezone(&calendar.default_timezone());
    match calendar {
        Calendar::Persian => Ok(PERSIAN_MONTHS[jalaali_date(&local)?.month_index].to_string()),
        Calendar::Gregorian => Ok(local.format("%b").to_string()),
    }
}
