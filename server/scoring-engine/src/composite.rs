//! Composite scoring. Two independent weighting schemes share only the sub-score
//! inputs; each consumes the bus factor on its own scale.
//!
//! - Dashboard: health 30%, security 30%, maturity 25%, normalized bus factor 15%;
//!   truncated, then clamped to 0..100.
//! - Certificate: health 30%, maturity 25%, raw bus factor × 10 at 20%, activity 25%;
//!   rounded half away from zero.

use crate::bus_factor::normalize_bus_factor;
use crate::classify;
use crate::types::{CertificateGrade, DashboardGrade, SubScores};

const DASH_W_HEALTH: f64 = 0.30;
const DASH_W_SECURITY: f64 = 0.30;
const DASH_W_MATURITY: f64 = 0.25;
const DASH_W_BUS: f64 = 0.15;

const CERT_W_HEALTH: f64 = 0.30;
const CERT_W_MATURITY: f64 = 0.25;
const CERT_W_BUS: f64 = 0.20;
const CERT_W_ACTIVITY: f64 = 0.25;

/// Inputs of the dashboard scheme. The bus factor is already on the 20..100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardInputs {
  pub health: u8,
  pub security: u8,
  pub maturity: u8,
  pub normalized_bus_factor: u8,
}

impl DashboardInputs {
  pub fn from_sub_scores(scores: &SubScores) -> Self {
    Self {
      health: scores.health,
      security: scores.security,
      maturity: scores.maturity,
      normalized_bus_factor: normalize_bus_factor(scores.bus_factor),
    }
  }
}

/// Inputs of the certificate scheme. The bus factor is the raw count times ten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CertificateInputs {
  pub health: u8,
  pub maturity: u8,
  pub scaled_bus_factor: u32,
  pub activity_score: u8,
}

impl CertificateInputs {
  pub fn new(scores: &SubScores, commit_count: usize, contributor_count: usize) -> Self {
    Self {
      health: scores.health,
      maturity: scores.maturity,
      scaled_bus_factor: scores.bus_factor.saturating_mul(10),
      activity_score: activity_score(commit_count, contributor_count),
    }
  }
}

/// Dashboard overall score.
pub fn dashboard_score(inputs: &DashboardInputs) -> u8 {
  let raw = inputs.health as f64 * DASH_W_HEALTH
    + inputs.security as f64 * DASH_W_SECURITY
    + inputs.maturity as f64 * DASH_W_MATURITY
    + inputs.normalized_bus_factor as f64 * DASH_W_BUS;
  (raw as i64).clamp(0, 100) as u8
}

/// Certificate overall score. Not clamped: in-range inputs keep it within 0..100
/// as long as the raw bus factor stays at or below 10.
pub fn certificate_score(inputs: &CertificateInputs) -> u8 {
  let raw = inputs.health as f64 * CERT_W_HEALTH
    + inputs.maturity as f64 * CERT_W_MATURITY
    + inputs.scaled_bus_factor as f64 * CERT_W_BUS
    + inputs.activity_score as f64 * CERT_W_ACTIVITY;
  // An outsized bus factor is the only way past 100; saturate rather than wrap.
  raw.round().clamp(0.0, 100.0) as u8
}

/// Commit-count tier plus contributor bonus, capped at 100.
pub fn activity_score(commit_count: usize, contributor_count: usize) -> u8 {
  let base: u8 = match commit_count {
    1001.. => 100,
    501..=1000 => 80,
    101..=500 => 60,
    51..=100 => 40,
    11..=50 => 20,
    _ => 0,
  };
  let bonus: u8 = match contributor_count {
    51.. => 20,
    21..=50 => 15,
    11..=20 => 10,
    6..=10 => 5,
    _ => 0,
  };
  base.saturating_add(bonus).min(100)
}

/// Dashboard score and its grade.
pub fn score_dashboard(scores: &SubScores) -> (u8, DashboardGrade) {
  let score = dashboard_score(&DashboardInputs::from_sub_scores(scores));
  (score, classify::dashboard_grade(score))
}

/// Certificate score and its grade.
pub fn score_certificate(
  scores: &SubScores,
  commit_count: usize,
  contributor_count: usize,
) -> (u8, CertificateGrade) {
  let score = certificate_score(&CertificateInputs::new(scores, commit_count, contributor_count));
  (score, classify::certificate_grade(score))
}
