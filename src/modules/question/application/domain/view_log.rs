use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::auth::application::domain::entities::UserId;

pub const VIEW_LOG_CAPACITY: usize = 100;
pub const VIEW_DEDUP_WINDOW_HOURS: i64 = 24;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewEntry {
    pub user: UserId,
    pub viewed_at: DateTime<Utc>,
}

/// Recent views of one question, oldest first.
///
/// Only used to suppress repeat views inside the dedup window. The log never
/// holds more than [`VIEW_LOG_CAPACITY`] entries; the oldest are dropped first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewLog {
    entries: VecDeque<ViewEntry>,
}

impl ViewLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_recent_view(&self, viewer: UserId, now: DateTime<Utc>) -> bool {
        let window_start = now - Duration::hours(VIEW_DEDUP_WINDOW_HOURS);
        self.entries
            .iter()
            .any(|entry| entry.user == viewer && entry.viewed_at > window_start)
    }

    /// Returns `false` and leaves the log untouched when `viewer` already
    /// viewed inside the window.
    pub fn record(&mut self, viewer: UserId, now: DateTime<Utc>) -> bool {
        if self.has_recent_view(viewer, now) {
            return false;
        }

        self.entries.push_back(ViewEntry {
            user: viewer,
            viewed_at: now,
        });
        while self.entries.len() > VIEW_LOG_CAPACITY {
            self.entries.pop_front();
        }
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &ViewEntry> {
        self.entries.iter()
    }
}
