//! Engine configuration with sane defaults.
//!
//! Grade tables, composite weights and classification tiers are fixed and live in
//! `classify` / `composite`; only the windows and caps below are tunable.

/// Tunable windows and caps for one analysis run.
///
/// The activity result keeps its `last_90_days` / `last_180_days` field names and
/// the risk alert keeps its "last 90 days" wording whatever the windows are set
/// to; only the trend insight text follows `recent_window_days`.
#[derive(Debug, Clone)]
pub struct Config {
  /// Days counted as "recent" by the activity trend analyzer.
  pub recent_window_days: i64,
  /// Days of the wider (overlapping) trend window.
  pub extended_window_days: i64,
  /// Max recommendations kept after every rule has run.
  pub max_recommendations: usize,
  /// Share of total commits (0..1) the bus-factor calculator must cover.
  pub bus_factor_threshold: f64,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      recent_window_days: 90,
      extended_window_days: 180,
      max_recommendations: 5,
      bus_factor_threshold: 0.5,
    }
  }
}
