use std::sync::LazyLock;

use chrono::{DateTime, Duration, Utc};
use regex::Regex;
use uuid::Uuid;

use crate::types::{DisciplineFlags, PercentAndColor};

/// Display color per discipline, in chart order.
pub const DISCIPLINE_COLORS: [(&str, &str); 6] = [
    ("sport", "#f15e40"),
    ("trad", "#4f7d65"),
    ("bouldering", "#5a9bd4"),
    ("tr", "#eab308"),
    ("aid", "#8b5cf6"),
    ("alpine", "#64748b"),
];

static NAME_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\(\d+\)\s*|\d+-\s*|[A-Za-z]{1,2}\.\s*)").unwrap());

static USERNAME_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]+([_\-.][a-zA-Z0-9]+)*$").unwrap());

static RESERVED_USERNAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)cragline|cragl1ne|kragline|admin").unwrap());

static WEBSITE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(https?://)?(www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b([-a-zA-Z0-9()@:%_+.~#?&/=]*)$",
    )
    .unwrap()
});

/// Derives the stable media id of a file from its path. Namespace-based, so
/// the same path always yields the same id; no lookup table is kept anywhere.
pub fn media_id_from_filename(filename: &str) -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_URL, filename.as_bytes())
}

/// Aggregates per-climb discipline flags into the percentage/color pairs the
/// breakdown chart renders.
///
/// A discipline is observed when any record carries its key; its percentage
/// is the count of `true` flags over the total `true`-flag count across all
/// observed disciplines. With a total of zero the percentages come out as
/// NaN, which the chart layer tolerates.
pub fn compute_climbing_percents_and_colors(records: &[DisciplineFlags]) -> PercentAndColor {
    let counts: Vec<(&str, usize)> = DISCIPLINE_COLORS
        .iter()
        .filter(|(discipline, _)| records.iter().any(|r| r.contains_key(*discipline)))
        .map(|(discipline, color)| {
            let count = records
                .iter()
                .filter(|r| r.get(*discipline).copied().unwrap_or(false))
                .count();
            (*color, count)
        })
        .collect();

    let total: usize = counts.iter().map(|(_, count)| count).sum();

    PercentAndColor {
        percents: counts
            .iter()
            .map(|(_, count)| *count as f64 / total as f64 * 100.0)
            .collect(),
        colors: counts.iter().map(|(color, _)| color.to_string()).collect(),
    }
}

/// Strips one leading decorative token from a route name: a parenthesized
/// short code, a numeric dash-prefix, or a 1-2 letter abbreviation with a
/// dot. Left-anchored, first match only.
pub fn sanitize_name(name: &str) -> String {
    NAME_PREFIX.replace(name, "").into_owned()
}

/// Returns a copy of the flags with all false-valued disciplines removed.
pub fn simplify_discipline_flags(flags: &DisciplineFlags) -> DisciplineFlags {
    flags
        .iter()
        .filter(|(_, enabled)| **enabled)
        .map(|(discipline, enabled)| (discipline.clone(), *enabled))
        .collect()
}

pub fn disciplines_to_flags(disciplines: &[String]) -> DisciplineFlags {
    disciplines.iter().map(|d| (d.clone(), true)).collect()
}

/// Format check only; no uniqueness or existence lookup. Rejects names over
/// 30 characters and names containing the brand, its look-alike spellings or
/// "admin".
pub fn check_username(username: &str) -> bool {
    username.len() <= 30
        && !RESERVED_USERNAME.is_match(username)
        && USERNAME_FORMAT.is_match(username)
}

/// Best-effort URL shape check, deliberately permissive rather than
/// RFC-exact. Scheme and `www.` are optional.
pub fn check_website_url(url: &str) -> bool {
    url.len() > 2 && !url.contains(char::is_whitespace) && WEBSITE_URL.is_match(url)
}

/// Human-readable age of a date: "Mon YYYY" once more than a year has
/// elapsed, otherwise a strict relative duration with a directional suffix
/// ("3 days ago", "in 2 hours").
pub fn relative_date(date: DateTime<Utc>) -> String {
    let elapsed = Utc::now() - date;
    if elapsed.num_days() > 365 {
        return date.format("%b %Y").to_string();
    }
    strict_relative(elapsed)
}

fn strict_relative(elapsed: Duration) -> String {
    const MINUTE: i64 = 60;
    const HOUR: i64 = 60 * MINUTE;
    const DAY: i64 = 24 * HOUR;
    const MONTH: i64 = 30 * DAY;
    const YEAR: i64 = 365 * DAY;

    let future = elapsed < Duration::zero();
    let secs = elapsed.num_seconds().abs();

    let (value, unit) = if secs < MINUTE {
        (secs, "second")
    } else if secs < HOUR {
        (secs / MINUTE, "minute")
    } else if secs < DAY {
        (secs / HOUR, "hour")
    } else if secs < MONTH {
        (secs / DAY, "day")
    } else if secs < YEAR {
        (secs / MONTH, "month")
    } else {
        (secs / YEAR, "year")
    };

    let plural = if value == 1 { "" } else { "s" };
    if future {
        format!("in {} {}{}", value, unit, plural)
    } else {
        format!("{} {}{} ago", value, unit, plural)
    }
}

/// Maps an entity type code to its display route. Codes outside the closed
/// set yield `None`.
pub fn url_resolver(type_code: i32, id: &str) -> Option<String> {
    let prefix = match type_code {
        0 => "/climbs/",
        1 => "/areas/",
        3 => "/u/",
        _ => return None,
    };
    Some(format!("{}{}", prefix, id))
}

/// Absolute profile URL for a user, e.g. `https://cragline.example/u/{uuid}`.
pub fn user_home_url(public_base_url: &str, uuid: &str) -> String {
    format!("{}/u/{}", public_base_url, uuid)
}
