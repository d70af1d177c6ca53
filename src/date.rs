// 📅 Date Formatting - flexible parse, optional timezone shift, PHP-style patterns
//
// Inputs come from templates in whatever shape the data source used
// ("2023-01-01T13:00:00", "12/31/2024", "January 5, 2023", "+1 day"...).
// Patterns use the PHP date() letters (Y-m-d H:i:s).

use chrono::{
    DateTime, Datelike, Duration, FixedOffset, Months, NaiveDate, NaiveDateTime, NaiveTime,
    Offset, TimeZone, Timelike, Utc, Weekday,
};
use chrono_tz::Tz;

/// Pattern used when the caller does not pass one
pub const DEFAULT_DATE_FORMAT: &str = "Y-m-d 12:00:00";

/// Date+time layouts tried in order (offset-less; interpreted as UTC)
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%d-%m-%Y %H:%M:%S",
    "%d-%m-%Y %H:%M",
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
];

/// Date+time layouts carrying an explicit offset
const OFFSET_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f %:z",
    "%Y-%m-%d %H:%M:%S%.f %z",
];

/// Date-only layouts (midnight)
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y", "%d.%m.%Y"];

/// Layouts with a month (and optionally weekday) name; `%B`/`%b` accept
/// both "January" and "Jan" when parsing
const TEXTUAL_DATE_FORMATS: &[&str] = &[
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%d %B, %Y",
    "%A, %B %d, %Y",
    "%A %B %d %Y",
    "%A, %d %B %Y",
    "%A %d %B %Y",
];

/// Optional time tails for the textual layouts
const TEXTUAL_TIME_SUFFIXES: &[&str] = &[" %H:%M:%S", " %H:%M", ", %H:%M:%S", ", %H:%M"];

// ============================================================================
// PARSING
// ============================================================================

/// Parse a date/time string relative to the current instant
pub fn parse_datetime(input: &str) -> Option<DateTime<FixedOffset>> {
    parse_datetime_at(input, Utc::now())
}

/// Parse a date/time string; relative keywords resolve against `now`
///
/// Returns `None` when no known layout matches.
pub fn parse_datetime_at(input: &str, now: DateTime<Utc>) -> Option<DateTime<FixedOffset>> {
    let input = input.trim();
    let utc = Utc.fix();

    match input.to_ascii_lowercase().as_str() {
        "" | "now" => return Some(now.with_timezone(&utc)),
        "today" | "midnight" => return Some(midnight(now, 0)),
        "tomorrow" => return Some(midnight(now, 1)),
        "yesterday" => return Some(midnight(now, -1)),
        _ => {}
    }

    if let Some(ts) = input.strip_prefix('@') {
        let seconds = ts.parse::<i64>().ok()?;
        return DateTime::from_timestamp(seconds, 0).map(|dt| dt.with_timezone(&utc));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(input) {
        return Some(dt);
    }

    // Trailing Zulu marker: parse the rest as a UTC wall-clock time
    if let Some(rest) = input.strip_suffix(['Z', 'z']) {
        if let Some(naive) = parse_naive(rest) {
            return Some(naive.and_utc().with_timezone(&utc));
        }
    }

    for fmt in OFFSET_DATETIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(input, fmt) {
            return Some(dt);
        }
    }

    // Trailing zone word: "2023-01-01 13:00:00 UTC", "... America/New_York"
    if let Some((rest, zone_id)) = input.rsplit_once(char::is_whitespace) {
        if let Some(zone) = resolve_timezone(zone_id) {
            if let Some(dt) = parse_naive(rest.trim_end()).and_then(|naive| localize(naive, zone)) {
                return Some(dt);
            }
        }
    }

    if let Some(naive) = parse_naive(input) {
        return Some(naive.and_utc().with_timezone(&utc));
    }

    parse_relative(input, now).map(|dt| dt.with_timezone(&utc))
}

fn parse_naive(input: &str) -> Option<NaiveDateTime> {
    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, fmt) {
            return Some(dt);
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(input, fmt) {
            return Some(date.and_time(NaiveTime::MIN));
        }
    }

    // Compact 20230101
    if input.len() == 8 && input.bytes().all(|b| b.is_ascii_digit()) {
        let year = input[..4].parse().ok()?;
        let month = input[4..6].parse().ok()?;
        let day = input[6..].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day).map(|date| date.and_time(NaiveTime::MIN));
    }

    parse_textual(input)
}

/// "January 5, 2023", "5 Jan 2023 14:30", "Thursday, March 14, 2024"
fn parse_textual(input: &str) -> Option<NaiveDateTime> {
    if !input.bytes().any(|b| b.is_ascii_alphabetic()) {
        return None;
    }

    for fmt in TEXTUAL_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(input, fmt) {
            return Some(date.and_time(NaiveTime::MIN));
        }
        for time in TEXTUAL_TIME_SUFFIXES {
            let layout = format!("{}{}", fmt, time);
            if let Ok(dt) = NaiveDateTime::parse_from_str(input, &layout) {
                return Some(dt);
            }
        }
    }

    None
}

/// Pin a wall-clock time to `zone`; the earlier instant wins in a DST overlap
fn localize(naive: NaiveDateTime, zone: Zone) -> Option<DateTime<FixedOffset>> {
    match zone {
        Zone::Named(tz) => tz
            .from_local_datetime(&naive)
            .earliest()
            .map(|dt| dt.with_timezone(&dt.offset().fix())),
        Zone::Fixed(offset) => offset.from_local_datetime(&naive).single(),
    }
}

// ============================================================================
// RELATIVE DATES
// ============================================================================

/// Units accepted in "+3 days", "2 weeks ago", "next month"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RelativeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Fortnight,
    Month,
    Year,
}

impl RelativeUnit {
    fn parse(word: &str) -> Option<Self> {
        let singular = word.strip_suffix('s').unwrap_or(word);
        match singular {
            "sec" | "second" => Some(RelativeUnit::Second),
            "min" | "minute" => Some(RelativeUnit::Minute),
            "hour" => Some(RelativeUnit::Hour),
            "day" => Some(RelativeUnit::Day),
            "week" => Some(RelativeUnit::Week),
            "fortnight" => Some(RelativeUnit::Fortnight),
            "month" => Some(RelativeUnit::Month),
            "year" => Some(RelativeUnit::Year),
            _ => None,
        }
    }
}

/// Relative phrases; `None` for anything else
///
/// - `+1 day`, `-2 weeks`, `3 months ago`: offset from `now`, time kept
/// - `next week`, `last year`: one unit forward/back, time kept
/// - `monday`, `next monday`, `last friday`: midnight of that weekday
///   (bare name may be today; `next`/`last` never are)
fn parse_relative(input: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let lower = input.to_ascii_lowercase();
    let words: Vec<&str> = lower.split_whitespace().collect();

    match words.as_slice() {
        [day] => {
            let day = day.parse::<Weekday>().ok()?;
            Some(weekday_midnight(now, day, 0))
        }
        ["next", word] => match word.parse::<Weekday>() {
            Ok(day) => Some(weekday_midnight(now, day, 1)),
            Err(_) => shift_by(now, RelativeUnit::parse(word)?, 1),
        },
        ["last", word] => match word.parse::<Weekday>() {
            Ok(day) => Some(weekday_midnight(now, day, -1)),
            Err(_) => shift_by(now, RelativeUnit::parse(word)?, -1),
        },
        [amount, unit] => shift_by(now, RelativeUnit::parse(unit)?, amount.parse().ok()?),
        [amount, unit, "ago"] => {
            let amount: i64 = amount.parse().ok()?;
            shift_by(now, RelativeUnit::parse(unit)?, amount.checked_neg()?)
        }
        _ => None,
    }
}

fn shift_by(now: DateTime<Utc>, unit: RelativeUnit, amount: i64) -> Option<DateTime<Utc>> {
    let seconds_per = match unit {
        RelativeUnit::Second => 1,
        RelativeUnit::Minute => 60,
        RelativeUnit::Hour => 3_600,
        RelativeUnit::Day => 86_400,
        RelativeUnit::Week => 7 * 86_400,
        RelativeUnit::Fortnight => 14 * 86_400,
        RelativeUnit::Month | RelativeUnit::Year => {
            let per = if unit == RelativeUnit::Year { 12 } else { 1 };
            let months = u32::try_from(amount.unsigned_abs().checked_mul(per)?).ok()?;
            return if amount < 0 {
                now.checked_sub_months(Months::new(months))
            } else {
                now.checked_add_months(Months::new(months))
            };
        }
    };

    let delta = Duration::try_seconds(amount.checked_mul(seconds_per)?)?;
    now.checked_add_signed(delta)
}

/// Midnight of `day`: direction 0 = today or later, 1 = strictly after
/// today, -1 = strictly before today
fn weekday_midnight(now: DateTime<Utc>, day: Weekday, direction: i8) -> DateTime<Utc> {
    let today = now.date_naive();
    let current = today.weekday().num_days_from_monday() as i64;
    let target = day.num_days_from_monday() as i64;

    let days = match direction {
        d if d < 0 => {
            let back = (current - target).rem_euclid(7);
            -(if back == 0 { 7 } else { back })
        }
        0 => (target - current).rem_euclid(7),
        _ => {
            let ahead = (target - current).rem_euclid(7);
            if ahead == 0 { 7 } else { ahead }
        }
    };

    (today + Duration::days(days)).and_time(NaiveTime::MIN).and_utc()
}

fn midnight(now: DateTime<Utc>, day_offset: i64) -> DateTime<FixedOffset> {
    let day = now.date_naive() + Duration::days(day_offset);
    day.and_time(NaiveTime::MIN).and_utc().with_timezone(&Utc.fix())
}

// ============================================================================
// TIMEZONES
// ============================================================================

/// A resolved timezone identifier
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Zone {
    /// IANA database zone (`Europe/London`, `UTC`)
    Named(Tz),
    /// Fixed UTC offset (`+02:00`, `-0530`)
    Fixed(FixedOffset),
}

/// Resolve a timezone identifier, `None` if unknown
pub fn resolve_timezone(id: &str) -> Option<Zone> {
    let id = id.trim();
    if id.eq_ignore_ascii_case("z") {
        return Some(Zone::Named(Tz::UTC));
    }
    if let Some(offset) = parse_offset(id) {
        return Some(Zone::Fixed(offset));
    }
    id.parse::<Tz>().ok().map(Zone::Named)
}

/// `+02:00`, `-0530`, `+2` style offsets
fn parse_offset(id: &str) -> Option<FixedOffset> {
    let sign = match id.as_bytes().first()? {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let body = &id[1..];
    if !body.is_ascii() {
        return None;
    }
    let (hours, minutes) = match body.split_once(':') {
        Some((h, m)) => (h, m),
        None if body.len() > 2 => body.split_at(body.len() - 2),
        None => (body, "0"),
    };
    if hours.is_empty()
        || hours.len() > 2
        || !hours.bytes().all(|b| b.is_ascii_digit())
        || minutes.is_empty()
        || minutes.len() > 2
        || !minutes.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if minutes >= 60 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// Timezone labels for the `e` and `T` pattern letters
struct ZoneLabels {
    identifier: String,
    abbreviation: String,
}

fn offset_labels(dt: &DateTime<FixedOffset>) -> ZoneLabels {
    if dt.offset().local_minus_utc() == 0 {
        ZoneLabels {
            identifier: "UTC".to_string(),
            abbreviation: "UTC".to_string(),
        }
    } else {
        let offset = dt.offset().to_string();
        ZoneLabels {
            identifier: offset.clone(),
            abbreviation: offset,
        }
    }
}

/// Shift `dt` into `zone`, returning the shifted time and its labels
fn shift(dt: &DateTime<FixedOffset>, zone: Zone) -> (DateTime<FixedOffset>, ZoneLabels) {
    match zone {
        Zone::Named(tz) => {
            let local = dt.with_timezone(&tz);
            let labels = ZoneLabels {
                identifier: tz.name().to_string(),
                abbreviation: local.format("%Z").to_string(),
            };
            (local.with_timezone(&local.offset().fix()), labels)
        }
        Zone::Fixed(offset) => {
            let local = dt.with_timezone(&offset);
            let labels = offset_labels(&local);
            (local, labels)
        }
    }
}

// ============================================================================
// PATTERN RENDERING
// ============================================================================

/// Render `dt` with a PHP date() pattern
///
/// Unknown letters are copied through; `\` escapes the next character.
pub fn render_pattern(dt: &DateTime<FixedOffset>, pattern: &str) -> String {
    render_with_labels(dt, pattern, &offset_labels(dt))
}

fn render_with_labels(dt: &DateTime<FixedOffset>, pattern: &str, zone: &ZoneLabels) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut chars = pattern.chars();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' => {
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            }
            // Day
            'd' => out.push_str(&format!("{:02}", dt.day())),
            'D' => out.push_str(&dt.format("%a").to_string()),
            'j' => out.push_str(&dt.day().to_string()),
            'l' => out.push_str(&dt.format("%A").to_string()),
            'N' => out.push_str(&dt.weekday().number_from_monday().to_string()),
            'S' => out.push_str(ordinal_suffix(dt.day())),
            'w' => out.push_str(&dt.weekday().num_days_from_sunday().to_string()),
            'z' => out.push_str(&dt.ordinal0().to_string()),
            // Week
            'W' => out.push_str(&format!("{:02}", dt.iso_week().week())),
            // Month
            'F' => out.push_str(&dt.format("%B").to_string()),
            'm' => out.push_str(&format!("{:02}", dt.month())),
            'M' => out.push_str(&dt.format("%b").to_string()),
            'n' => out.push_str(&dt.month().to_string()),
            't' => out.push_str(&days_in_month(dt.year(), dt.month()).to_string()),
            // Year
            'L' => out.push(if is_leap_year(dt.year()) { '1' } else { '0' }),
            'o' => out.push_str(&dt.iso_week().year().to_string()),
            'Y' => out.push_str(&full_year(dt.year())),
            'y' => out.push_str(&format!("{:02}", dt.year().rem_euclid(100))),
            // Time
            'a' => out.push_str(if dt.hour() < 12 { "am" } else { "pm" }),
            'A' => out.push_str(if dt.hour() < 12 { "AM" } else { "PM" }),
            'g' => out.push_str(&hour12(dt.hour()).to_string()),
            'G' => out.push_str(&dt.hour().to_string()),
            'h' => out.push_str(&format!("{:02}", hour12(dt.hour()))),
            'H' => out.push_str(&format!("{:02}", dt.hour())),
            'i' => out.push_str(&format!("{:02}", dt.minute())),
            's' => out.push_str(&format!("{:02}", dt.second())),
            'u' => out.push_str(&format!("{:06}", dt.nanosecond() % 1_000_000_000 / 1_000)),
            'v' => out.push_str(&format!("{:03}", dt.nanosecond() % 1_000_000_000 / 1_000_000)),
            // Timezone
            'e' => out.push_str(&zone.identifier),
            'T' => out.push_str(&zone.abbreviation),
            'P' => out.push_str(&dt.format("%:z").to_string()),
            'O' => out.push_str(&dt.format("%z").to_string()),
            'p' => {
                if dt.offset().local_minus_utc() == 0 {
                    out.push('Z');
                } else {
                    out.push_str(&dt.format("%:z").to_string());
                }
            }
            'Z' => out.push_str(&dt.offset().local_minus_utc().to_string()),
            // Full date/time
            'c' => out.push_str(&dt.format("%Y-%m-%dT%H:%M:%S%:z").to_string()),
            'r' => out.push_str(&dt.format("%a, %d %b %Y %H:%M:%S %z").to_string()),
            'U' => out.push_str(&dt.timestamp().to_string()),
            other => out.push(other),
        }
    }

    out
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

fn hour12(hour: u32) -> u32 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

fn full_year(year: i32) -> String {
    if year < 0 {
        format!("-{:04}", -year)
    } else {
        format!("{:04}", year)
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ if is_leap_year(year) => 29,
        _ => 28,
    }
}

// ============================================================================
// FORMATTER
// ============================================================================

/// Format a date string with a PHP-style pattern
///
/// - Unparseable `data` or an unknown `timezone` → `data` unchanged
/// - With a timezone the instant is shifted into it before rendering
/// - Every `h` in the pattern becomes `H`: output is always 24-hour
///
/// ```
/// use template_helpers::format_date;
///
/// assert_eq!(
///     format_date("2023-01-01T13:00:00", "Y-m-d h:i:s", None),
///     "2023-01-01 13:00:00"
/// );
/// assert_eq!(format_date("not a date", "Y-m-d", None), "not a date");
/// ```
pub fn format_date(data: &str, format: &str, timezone: Option<&str>) -> String {
    format_date_at(data, format, timezone, Utc::now())
}

/// [`format_date`] with the default `Y-m-d 12:00:00` pattern and no timezone
pub fn format_date_default(data: &str) -> String {
    format_date(data, DEFAULT_DATE_FORMAT, None)
}

/// [`format_date`] with relative keywords resolved against `now`
pub fn format_date_at(
    data: &str,
    format: &str,
    timezone: Option<&str>,
    now: DateTime<Utc>,
) -> String {
    let Some(parsed) = parse_datetime_at(data, now) else {
        tracing::debug!(data, "format_date: unparseable date, passing through");
        return data.to_string();
    };

    let (local, labels) = match timezone {
        Some(id) => match resolve_timezone(id) {
            Some(zone) => shift(&parsed, zone),
            None => {
                tracing::debug!(data, timezone = id, "format_date: unknown timezone, passing through");
                return data.to_string();
            }
        },
        None => {
            let labels = offset_labels(&parsed);
            (parsed, labels)
        }
    };

    let pattern = format.replace('h', "H");
    render_with_labels(&local, &pattern, &labels)
}

// ============================================================================
// TESTS
// ============================================================================
