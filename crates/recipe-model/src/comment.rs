//! Comments attached to a recipe
//!
//! Comments are append-only and only live in view state. The date shown next
//! to each one is rendered relative to "now" on demand.

use crate::ids::CommentId;
use crate::recipe::Author;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A comment on a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    #[serde(rename = "user")]
    pub author: Author,
    pub text: String,
    pub posted_at: DateTime<Utc>,
}

impl Comment {
    #[inline]
    #[must_use]
    pub fn new(id: CommentId, author: Author, text: impl Into<String>, posted_at: DateTime<Utc>) -> Self {
        Self {
            id,
            author,
            text: text.into(),
            posted_at,
        }
    }

    /// Relative date string as of `now`
    #[inline]
    #[must_use]
    pub fn date(&self, now: DateTime<Utc>) -> String {
        relative_date(self.posted_at, now)
    }
}

/// Render `then` relative to `now`: "Just now", "5 minutes ago", "1 week ago", ...
///
/// Timestamps in the future render as "Just now".
#[must_use]
pub fn relative_date(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);

    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return plural(minutes, "minute");
    }

    let hours = elapsed.num_hours();
    if hours < 24 {
        return plural(hours, "hour");
    }

    let days = elapsed.num_days();
    if days < 7 {
        return plural(days, "day");
    }

    plural(elapsed.num_weeks(), "week")
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}
