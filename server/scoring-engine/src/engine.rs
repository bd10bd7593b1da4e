//! Engine façade: one snapshot and one `now` in, one consistent report out.

use chrono::{DateTime, Utc};

use crate::activity;
use crate::alerts;
use crate::certificate;
use crate::config::Config;
use crate::dashboard;
use crate::error::EngineError;
use crate::normalize;
use crate::types::*;

/// The scoring engine. Holds configuration only; every call is independent.
#[derive(Debug, Clone, Default)]
pub struct Engine {
  config: Config,
}

impl Engine {
  pub fn new(config: Config) -> Self {
    Self { config }
  }

  pub fn with_defaults() -> Self {
    Self::new(Config::default())
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Parse one JSON snapshot and analyze it.
  pub fn process_str(
    &self,
    input: &str,
    fallback_now: DateTime<Utc>,
  ) -> Result<AnalysisReport, EngineError> {
    let raw: InboundSnapshot = serde_json::from_str(input.trim())?;
    self.process(&raw, fallback_now)
  }

  /// Normalize an inbound snapshot and analyze it.
  ///
  /// `analyzed_at` on the snapshot wins over `fallback_now`.
  pub fn process(
    &self,
    raw: &InboundSnapshot,
    fallback_now: DateTime<Utc>,
  ) -> Result<AnalysisReport, EngineError> {
    let now = normalize::parse_analyzed_at(raw)?.unwrap_or(fallback_now);
    let snapshot = normalize::normalize(raw, &self.config)?;
    Ok(self.analyze(&snapshot, now))
  }

  /// Run every scorer against one snapshot with a single `now`.
  pub fn analyze(&self, snapshot: &RepositorySnapshot, now: DateTime<Utc>) -> AnalysisReport {
    let scores = SubScores::from_snapshot(snapshot);

    let dashboard = dashboard::build_dashboard(snapshot, &scores, &self.config);
    let certificate = certificate::build_certificate(snapshot, &scores, now);
    let activity = activity::analyze_contributor_activity(&snapshot.commits, now, &self.config);

    // Alerts read the dated 90-day window, not the supplied-commit count.
    let alerts = alerts::analyze_risk_alerts(
      scores.bus_factor,
      scores.health,
      activity.last_90_days,
      snapshot.security.as_ref().is_some_and(|s| s.has_critical()),
    );

    tracing::debug!(
      repository = %snapshot.full_name(),
      overall_score = dashboard.overall_score,
      grade = %dashboard.quality_grade,
      risk = %dashboard.risk_level,
      certificate_score = certificate.overall_score,
      hotspots = dashboard.problem_hotspots.len(),
      alerts = alerts.as_ref().map_or(0, |a| a.alerts.len()),
      "analysis complete"
    );

    AnalysisReport {
      repository: snapshot.full_name(),
      analyzed_at: now.to_rfc3339(),
      dashboard,
      certificate,
      activity,
      alerts,
    }
  }
}
