//! Threshold-to-label tables. Each table has an explicit default branch.
//!
//! The dashboard and certificate tables are deliberately separate: they serve
//! different consumers and do not agree on cut points or labels.

use crate::types::{CertificateActivity, CertificateGrade, DashboardActivity, DashboardGrade, RiskLevel};

/// Dashboard grade: ≥90 A+, ≥80 A, ≥70 B, ≥60 C, ≥50 D, else F.
pub fn dashboard_grade(score: u8) -> DashboardGrade {
  match score {
    90.. => DashboardGrade::APlus,
    80..=89 => DashboardGrade::A,
    70..=79 => DashboardGrade::B,
    60..=69 => DashboardGrade::C,
    50..=59 => DashboardGrade::D,
    _ => DashboardGrade::F,
  }
}

/// Certificate grade: ≥90 A+, ≥80 A, ≥70 B+, ≥60 B, ≥50 C+, ≥40 C, ≥30 D, else F.
pub fn certificate_grade(score: u8) -> CertificateGrade {
  match score {
    90.. => CertificateGrade::APlus,
    80..=89 => CertificateGrade::A,
    70..=79 => CertificateGrade::BPlus,
    60..=69 => CertificateGrade::B,
    50..=59 => CertificateGrade::CPlus,
    40..=49 => CertificateGrade::C,
    30..=39 => CertificateGrade::D,
    _ => CertificateGrade::F,
  }
}

/// Five-tier dashboard activity over the supplied commit count.
pub fn dashboard_activity(commit_count: usize) -> DashboardActivity {
  match commit_count {
    500.. => DashboardActivity::VeryHigh,
    200..=499 => DashboardActivity::High,
    50..=199 => DashboardActivity::Medium,
    10..=49 => DashboardActivity::Low,
    _ => DashboardActivity::VeryLow,
  }
}

/// Three-tier certificate activity: >300 High, >100 Moderate, else Low.
pub fn certificate_activity(commit_count: usize) -> CertificateActivity {
  if commit_count > 300 {
    CertificateActivity::High
  } else if commit_count > 100 {
    CertificateActivity::Moderate
  } else {
    CertificateActivity::Low
  }
}

/// First matching tier wins; every condition in a tier must hold.
pub fn risk_level(overall: u8, bus_factor: u32, security: u8) -> RiskLevel {
  if overall >= 80 && bus_factor >= 3 && security >= 80 {
    return RiskLevel::Low;
  }
  if overall >= 60 && bus_factor >= 2 && security >= 60 {
    return RiskLevel::Medium;
  }
  RiskLevel::High
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn dashboard_grades() {
    let cases = [
      (95, "A+"),
      (90, "A+"),
      (85, "A"),
      (75, "B"),
      (65, "C"),
      (55, "D"),
      (45, "F"),
      (35, "F"),
      (25, "F"),
    ];
    for (score, expected) in cases {
      assert_eq!(dashboard_grade(score).as_str(), expected, "score {}", score);
    }
  }

  #[test]
  fn certificate_grades() {
    let cases = [
      (100, "A+"),
      (80, "A"),
      (79, "B+"),
      (60, "B"),
      (50, "C+"),
      (40, "C"),
      (30, "D"),
      (29, "F"),
      (0, "F"),
    ];
    for (score, expected) in cases {
      assert_eq!(certificate_grade(score).as_str(), expected, "score {}", score);
    }
  }

  #[test]
  fn tables_disagree_below_seventy() {
    assert_eq!(dashboard_grade(45), DashboardGrade::F);
    assert_eq!(certificate_grade(45), CertificateGrade::C);
  }

  #[test]
  fn dashboard_activity_tiers() {
    assert_eq!(dashboard_activity(600), DashboardActivity::VeryHigh);
    assert_eq!(dashboard_activity(300), DashboardActivity::High);
    assert_eq!(dashboard_activity(100), DashboardActivity::Medium);
    assert_eq!(dashboard_activity(20), DashboardActivity::Low);
    assert_eq!(dashboard_activity(5), DashboardActivity::VeryLow);
    assert_eq!(dashboard_activity(500), DashboardActivity::VeryHigh);
    assert_eq!(dashboard_activity(10), DashboardActivity::Low);
  }

  #[test]
  fn certificate_activity_tiers() {
    assert_eq!(certificate_activity(301), CertificateActivity::High);
    assert_eq!(certificate_activity(300), CertificateActivity::Moderate);
    assert_eq!(certificate_activity(150), CertificateActivity::Moderate);
    assert_eq!(certificate_activity(100), CertificateActivity::Low);
    assert_eq!(certificate_activity(50), CertificateActivity::Low);
  }

  #[test]
  fn risk_tiers() {
    assert_eq!(risk_level(90, 5, 90), RiskLevel::Low);
    assert_eq!(risk_level(70, 3, 70), RiskLevel::Medium);
    assert_eq!(risk_level(40, 5, 80), RiskLevel::High);
    assert_eq!(risk_level(80, 1, 80), RiskLevel::High);
    assert_eq!(risk_level(80, 5, 40), RiskLevel::High);
  }

  #[test]
  fn one_weak_metric_drops_the_tier() {
    assert_eq!(risk_level(100, 2, 100), RiskLevel::Medium);
    assert_eq!(risk_level(79, 10, 100), RiskLevel::Medium);
    assert_eq!(risk_level(100, 10, 79), RiskLevel::Medium);
  }
}
