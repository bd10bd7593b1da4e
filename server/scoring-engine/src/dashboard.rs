//! Quality dashboard: overall score, grade, risk tier, key metrics, hotspots and
//! recommendations for one snapshot.

use crate::activity::supplied_commit_count;
use crate::classify;
use crate::composite;
use crate::config::Config;
use crate::hotspots::identify_problem_hotspots;
use crate::ratio::percent;
use crate::recommend::generate_recommendations;
use crate::types::{
  DashboardMetrics, QualityDashboard, RepositorySnapshot, SecurityScanResult, Severity,
  SeverityShare, SubScores,
};

pub fn build_dashboard(
  snapshot: &RepositorySnapshot,
  scores: &SubScores,
  config: &Config,
) -> QualityDashboard {
  let (overall_score, quality_grade) = composite::score_dashboard(scores);
  let risk_level = classify::risk_level(overall_score, scores.bus_factor, scores.security);
  let recent_commits = supplied_commit_count(&snapshot.commits);
  let security = snapshot.security.as_ref();

  let key_metrics = DashboardMetrics {
    health_score: scores.health,
    security_score: scores.security,
    maturity_level: scores.maturity_level.clone(),
    bus_factor: scores.bus_factor,
    activity_level: classify::dashboard_activity(snapshot.commits.len()),
    contributor_count: snapshot.contributors.len(),
  };

  QualityDashboard {
    overall_score,
    risk_level,
    quality_grade,
    problem_hotspots: identify_problem_hotspots(scores, recent_commits, security),
    recommendations: generate_recommendations(
      scores,
      recent_commits,
      snapshot.contributors.len(),
      security,
      snapshot.dependencies.as_ref(),
      config.max_recommendations,
    ),
    key_metrics,
    vulnerability_mix: security.map(vulnerability_mix),
  }
}

/// Per-severity counts of a scan with their share of the total, Critical first.
pub fn vulnerability_mix(result: &SecurityScanResult) -> Vec<SeverityShare> {
  let total = result.total_count();
  [
    (Severity::Critical, result.critical_count),
    (Severity::High, result.high_count),
    (Severity::Medium, result.medium_count),
    (Severity::Low, result.low_count),
  ]
  .into_iter()
  .map(|(severity, count)| SeverityShare {
    severity,
    count,
    percent: percent(count as u64, total),
  })
  .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::*;
  use chrono::{TimeZone, Utc};
  use std::collections::BTreeMap;

  fn snapshot(commit_count: usize, contributors: usize) -> RepositorySnapshot {
    let ts = Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap();
    RepositorySnapshot {
      name: "repo".into(),
      owner: Some("test".into()),
      description: "Test repository".into(),
      stars: 100,
      forks: 20,
      open_issues: 5,
      created_at: ts,
      updated_at: ts,
      pushed_at: ts,
      default_branch: "main".into(),
      language: Some("Go".into()),
      languages: BTreeMap::new(),
      commits: (0..commit_count)
        .map(|_| Commit {
          sha: None,
          date: ts,
        })
        .collect(),
      contributors: (0..contributors)
        .map(|i| Contributor {
          login: format!("user{}", i),
          commits: 10,
          avatar_url: None,
        })
        .collect(),
      scores: ScoreInputs {
        health: 85,
        maturity: 75,
        maturity_level: "Mature".into(),
        bus_factor: 3,
        bus_risk: BusRisk::Medium,
      },
      security: Some(SecurityScanResult {
        security_score: 80,
        critical_count: 0,
        high_count: 1,
        medium_count: 1,
        low_count: 0,
        scanned_packages: 10,
        vulnerabilities: Vec::new(),
      }),
      dependencies: None,
    }
  }

  #[test]
  fn dashboard_shape() {
    let snap = snapshot(2, 3);
    let scores = SubScores::from_snapshot(&snap);
    let dash = build_dashboard(&snap, &scores, &Config::default());

    // 25.5 + 24 + 18.75 + 37 * 0.15 = 73.8
    assert_eq!(dash.overall_score, 73);
    assert_eq!(dash.quality_grade, DashboardGrade::B);
    assert_eq!(dash.risk_level, RiskLevel::Medium);
    assert_eq!(dash.key_metrics.health_score, 85);
    assert_eq!(dash.key_metrics.bus_factor, 3);
    assert_eq!(dash.key_metrics.contributor_count, 3);
    assert_eq!(dash.key_metrics.activity_level, DashboardActivity::VeryLow);
    assert!(!dash.recommendations.is_empty());
  }

  #[test]
  fn missing_scan_defaults_security_to_hundred() {
    let mut snap = snapshot(60, 12);
    snap.security = None;
    let scores = SubScores::from_snapshot(&snap);
    let dash = build_dashboard(&snap, &scores, &Config::default());
    assert_eq!(dash.key_metrics.security_score, 100);
    assert!(dash.vulnerability_mix.is_none());
    assert!(dash.problem_hotspots.is_empty());
  }

  #[test]
  fn mix_percentages() {
    let snap = snapshot(2, 3);
    let mix = vulnerability_mix(snap.security.as_ref().unwrap());
    assert_eq!(mix[0].severity, Severity::Critical);
    assert_eq!(mix[0].percent, 0.0);
    assert_eq!(mix[1].percent, 50.0);
    assert_eq!(mix[2].percent, 50.0);
  }

  #[test]
  fn saturated_counts_do_not_overflow() {
    let result = SecurityScanResult {
      security_score: 0,
      critical_count: u32::MAX,
      high_count: 1,
      medium_count: 0,
      low_count: 0,
      scanned_packages: 1,
      vulnerabilities: Vec::new(),
    };
    assert_eq!(result.total_count(), u32::MAX as u64 + 1);
    let mix = vulnerability_mix(&result);
    assert_eq!(mix[0].percent, 100.0);
    assert_eq!(mix[1].percent, 0.0);
  }

  #[test]
  fn empty_scan_mix_is_all_zero() {
    let result = SecurityScanResult {
      security_score: 100,
      critical_count: 0,
      high_count: 0,
      medium_count: 0,
      low_count: 0,
      scanned_packages: 0,
      vulnerabilities: Vec::new(),
    };
    assert!(vulnerability_mix(&result).iter().all(|s| s.percent == 0.0));
  }
}
