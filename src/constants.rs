use chrono_tz::Tz;

/// The one locale tag that selects the Persian calendar path. Every other
/// tag (or no tag at all) selects the Gregorian path.
pub const PERSIAN_LOCALE: &str = "fa";

/// Fallback zone for the Persian path when no timezone option is given.
pub const PERSIAN_TIMEZONE: Tz = chrono_tz::Asia::Tehran;
/// Fallback zone for the Gregorian path when no timezone option is given.
pub const GREGORIAN_TIMEZONE: Tz = chrono_tz::UTC;

/// Display names of the Persian calendar months, indexed 0–11.
pub const PERSIAN_MONTHS: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];
