//! Property-based tests for the scoring rules.
//!
//! Every rule is a pure function of its inputs, so invariants are checked
//! across random sub-scores rather than hand-picked fixtures.

use proptest::prelude::*;
use scoring_engine::bus_factor::normalize_bus_factor;
use scoring_engine::certificate::potential_uses;
use scoring_engine::classify::{certificate_grade, dashboard_grade, risk_level};
use scoring_engine::composite::{score_certificate, score_dashboard};
use scoring_engine::hotspots::identify_problem_hotspots;
use scoring_engine::recommend::generate_recommendations;
use scoring_engine::types::{
  BusRisk, CertificateActivity, CertificateData, CertificateGrade, DependencyAnalysis, RiskLevel,
  SecurityScanResult, SubScores,
};

fn bus_risk_strategy() -> impl Strategy<Value = BusRisk> {
  prop_oneof![Just(BusRisk::Low), Just(BusRisk::Medium), Just(BusRisk::High)]
}

prop_compose! {
  fn sub_scores()(
    health in 0u8..=100,
    maturity in 0u8..=100,
    bus_factor in 0u32..=12,
    bus_risk in bus_risk_strategy(),
    security in 0u8..=100,
    level in "(Mature|Growing|Early)",
  ) -> SubScores {
    SubScores { health, maturity, maturity_level: level, bus_factor, bus_risk, security }
  }
}

prop_compose! {
  fn scan()(critical in 0u32..5, high in 0u32..5, score in 0u8..=100) -> SecurityScanResult {
    SecurityScanResult {
      security_score: score,
      critical_count: critical,
      high_count: high,
      medium_count: 0,
      low_count: 0,
      scanned_packages: 10,
      vulnerabilities: Vec::new(),
    }
  }
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(500))]

  #[test]
  fn composite_scores_stay_in_range(
    scores in sub_scores(),
    commits in 0usize..3000,
    contributors in 0usize..200,
  ) {
    let (dash, _) = score_dashboard(&scores);
    prop_assert!(dash <= 100);
    let (cert, _) = score_certificate(&scores, commits, contributors);
    prop_assert!(cert <= 100);
  }

  #[test]
  fn bus_factor_normalization_is_monotonic(a in 0u32..50, b in 0u32..50) {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    prop_assert!(normalize_bus_factor(lo) <= normalize_bus_factor(hi));
    prop_assert!((20..=100).contains(&normalize_bus_factor(a)));
  }

  #[test]
  fn grade_tables_are_monotonic(a in 0u8..=100, b in 0u8..=100) {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    prop_assert!(dashboard_grade(lo) <= dashboard_grade(hi));
    prop_assert!(certificate_grade(lo) <= certificate_grade(hi));
  }

  #[test]
  fn low_risk_implies_every_condition(
    overall in 0u8..=100,
    bus_factor in 0u32..10,
    security in 0u8..=100,
  ) {
    match risk_level(overall, bus_factor, security) {
      RiskLevel::Low => {
        prop_assert!(overall >= 80 && bus_factor >= 3 && security >= 80);
      }
      RiskLevel::Medium => {
        prop_assert!(overall >= 60 && bus_factor >= 2 && security >= 60);
        prop_assert!(!(overall >= 80 && bus_factor >= 3 && security >= 80));
      }
      RiskLevel::High => {
        prop_assert!(!(overall >= 60 && bus_factor >= 2 && security >= 60));
      }
    }
  }

  #[test]
  fn recommendations_never_exceed_cap(
    scores in sub_scores(),
    recent in 0usize..20,
    contributors in 0usize..6,
    security in proptest::option::of(scan()),
    has_lock in proptest::option::of(any::<bool>()),
  ) {
    let deps = has_lock.map(|has_lock_file| DependencyAnalysis {
      has_lock_file,
      total_dependencies: 5,
      outdated_count: 0,
      lock_files: Vec::new(),
    });
    let recs = generate_recommendations(
      &scores,
      recent,
      contributors,
      security.as_ref(),
      deps.as_ref(),
      5,
    );
    prop_assert!(recs.len() <= 5);
  }

  #[test]
  fn hotspots_sorted_by_severity(
    scores in sub_scores(),
    recent in 0usize..3,
    security in proptest::option::of(scan()),
  ) {
    let hotspots = identify_problem_hotspots(&scores, recent, security.as_ref());
    for pair in hotspots.windows(2) {
      prop_assert!(pair[0].severity.rank() >= pair[1].severity.rank());
    }
    let bus_hotspots = hotspots.iter().filter(|h| h.area == "Bus Factor").count();
    prop_assert!(bus_hotspots <= 1);
  }

  #[test]
  fn potential_uses_never_empty(
    scores in sub_scores(),
    stars in 0u32..3000,
    commits in 0usize..800,
  ) {
    let activity = if commits > 300 {
      CertificateActivity::High
    } else if commits > 100 {
      CertificateActivity::Moderate
    } else {
      CertificateActivity::Low
    };
    let cert = CertificateData {
      certificate_id: "cert-test".into(),
      repo_name: "r".into(),
      owner: None,
      description: String::new(),
      stars,
      forks: 0,
      open_issues: 0,
      created_at: "2020-01-01".into(),
      updated_at: "2020-01-01".into(),
      issued_at: "2020-01-01".into(),
      health_score: scores.health,
      maturity_score: scores.maturity,
      maturity_level: scores.maturity_level.clone(),
      bus_factor: scores.bus_factor,
      bus_risk: scores.bus_risk,
      security_score: scores.security,
      commits_last_year: commits,
      contributors: 1,
      activity_level: activity,
      primary_language: "Unknown".into(),
      language_count: 0,
      languages: Vec::new(),
      overall_score: 0,
      grade: CertificateGrade::F,
      uses: Vec::new(),
    };
    let uses = potential_uses(&cert);
    prop_assert!(!uses.is_empty());

    let any_rule = (cert.maturity_level == "Mature" && activity == CertificateActivity::High)
      || stars > 1000
      || cert.health_score > 80
      || cert.bus_risk == BusRisk::Low
      || commits > 500;
    if !any_rule {
      prop_assert_eq!(
        uses,
        vec![
          "Learning resource for developers".to_string(),
          "Personal project with potential for growth".to_string(),
        ]
      );
    }
  }
}
