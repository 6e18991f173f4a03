use crate::environment::types::{Timestamp, UserId};
use crate::view_model::UserDirectory;

const MINUTE: i64 = 60_000;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
const MONTH: i64 = 30 * DAY;

/// Humanized age of `timestamp` as seen at `now`.
///
/// - under a minute: `Just now`
/// - under an hour: `5m ago`
/// - under a day: `3h ago`
/// - under a week: `2d ago`
/// - under 30 days: `1w ago`
/// - otherwise: `4mo ago`
///
/// Timestamps in the future count as `Just now`.
pub fn format_relative(timestamp: Timestamp, now: Timestamp) -> String {
    let diff = now.millis_since(timestamp);
    if diff < MINUTE {
        "Just now".to_string()
    } else if diff < HOUR {
        format!("{}m ago", diff / MINUTE)
    } else if diff < DAY {
        format!("{}h ago", diff / HOUR)
    } else if diff < WEEK {
        format!("{}d ago", diff / DAY)
    } else if diff < MONTH {
        format!("{}w ago", diff / WEEK)
    } else {
        format!("{}mo ago", diff / MONTH)
    }
}

/// `Liked by …` line for a post. Ids missing from `directory` show up as
/// `Unknown`.
pub fn likes_summary(likes: &[UserId], directory: &UserDirectory) -> String {
    let name = |idx: usize| {
        directory
            .get(&likes[idx])
            .map(|user| user.name.as_str())
            .unwrap_or("Unknown")
    };
    match likes.len() {
        0 => String::new(),
        1 => format!("Liked by {}", name(0)),
        2 => format!("Liked by {} and {}", name(0), name(1)),
        3 => format!("Liked by {}, {} and 1 other", name(0), name(1)),
        n => format!("Liked by {}, {} and {} others", name(0), name(1), n - 2),
    }
}
