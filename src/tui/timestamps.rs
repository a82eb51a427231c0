use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Age of a search history item: "just now", "5m ago", "2h ago", "3d ago",
/// then the calendar date
pub fn format_age(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(*timestamp).num_seconds().max(0);
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    match (days, hours, minutes) {
        (d, _, _) if d >= 7 => format_date(timestamp.date_naive(), now.date_naive()),
        (d, _, _) if d > 0 => format!("{}d ago", d),
        (_, h, _) if h > 0 => format!("{}h ago", h),
        (_, _, m) if m > 0 => format!("{}m ago", m),
        _ => "just now".to_string(),
    }
}

/// Training entry date: "Today", "Yesterday", "Jan 15", or "Dec 3, 2023" outside this year
pub fn format_date(date: NaiveDate, today: NaiveDate) -> String {
    match (today - date).num_days() {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        _ if date.year() == today.year() => date.format("%b %-d").to_string(),
        _ => date.format("%b %-d, %Y").to_string(),
    }
}
