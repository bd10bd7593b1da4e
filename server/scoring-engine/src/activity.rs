//! Commit recency signals and the contributor-activity trend.
//!
//! Two signals live here on purpose and are never substituted for each other:
//! - `supplied_commit_count`: size of the commit list the collaborator fetched. The
//!   hotspot and recommendation rules read this as "recent commits".
//! - `count_within`: commits whose author date is within N days of `now`. The trend
//!   analyzer and risk alerts read this one.

use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::types::{Commit, ContributorActivityResult, Trend};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Naive recency signal: every supplied commit counts.
pub fn supplied_commit_count(commits: &[Commit]) -> usize {
  commits.len()
}

/// Commits at most `days` days before `now`. Future-dated commits count as recent.
pub fn count_within(commits: &[Commit], now: DateTime<Utc>, days: i64) -> u32 {
  commits
    .iter()
    .filter(|c| days_ago(c.date, now) <= days as f64)
    .count() as u32
}

/// Count commits in the recent and extended windows and classify the trend.
///
/// The extended window contains the recent one, so the trend compares a subset
/// against its superset rather than two disjoint periods.
pub fn analyze_contributor_activity(
  commits: &[Commit],
  now: DateTime<Utc>,
  config: &Config,
) -> ContributorActivityResult {
  let last_recent = count_within(commits, now, config.recent_window_days);
  let last_extended = count_within(commits, now, config.extended_window_days);

  let (trend, trend_insight) = if last_recent < last_extended {
    (Trend::Declining, "Commit activity has decreased in recent months")
  } else if last_recent > last_extended {
    (Trend::Growing, "Commit activity has increased recently")
  } else {
    (Trend::Stable, "Commit activity is stable")
  };

  let insight = if last_recent == 0 {
    format!("No commit activity in the last {} days", config.recent_window_days)
  } else if last_recent < 5 {
    "Very low recent development activity".to_string()
  } else {
    trend_insight.to_string()
  };

  ContributorActivityResult {
    last_90_days: last_recent,
    last_180_days: last_extended,
    trend,
    insight,
  }
}

fn days_ago(date: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
  (now - date).num_milliseconds() as f64 / MILLIS_PER_DAY
}
