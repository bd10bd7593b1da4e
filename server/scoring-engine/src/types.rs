//! Core types for the scoring engine (JSON contracts + internal models).

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Inbound types (JSON contract — what the collaborator layer sends)
// ---------------------------------------------------------------------------

/// One repository snapshot from stdin. Unknown fields are silently ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct InboundSnapshot {
  pub name: String,
  #[serde(default)]
  pub owner: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub stars: u32,
  #[serde(default)]
  pub forks: u32,
  #[serde(default)]
  pub open_issues: u32,
  pub created_at: String,
  pub updated_at: String,
  pub pushed_at: String,
  #[serde(default)]
  pub default_branch: Option<String>,
  #[serde(default)]
  pub language: Option<String>,
  /// Bytes per language, as reported by the hosting service.
  #[serde(default)]
  pub languages: BTreeMap<String, u64>,
  #[serde(default)]
  pub file_tree: Vec<InboundTreeEntry>,
  /// Comma-separated extensions, e.g. "go,md". When set, languages come from `file_tree`.
  #[serde(default)]
  pub extension_filter: Option<String>,
  #[serde(default)]
  pub commits: Vec<InboundCommit>,
  #[serde(default)]
  pub contributors: Vec<InboundContributor>,
  pub scores: InboundScores,
  #[serde(default)]
  pub security: Option<InboundSecurity>,
  #[serde(default)]
  pub dependencies: Option<InboundDependencies>,
  #[serde(default)]
  pub analyzed_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InboundTreeEntry {
  pub path: String,
  #[serde(rename = "type")]
  pub kind: String,
  #[serde(default)]
  pub size: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InboundCommit {
  #[serde(default)]
  pub sha: Option<String>,
  /// Author date (RFC3339).
  pub date: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InboundContributor {
  pub login: String,
  #[serde(default, alias = "commits")]
  pub contributions: u32,
  #[serde(default)]
  pub avatar_url: Option<String>,
}

/// Precomputed sub-scores. Signed so out-of-range values can be clamped instead of rejected.
#[derive(Debug, Clone, Deserialize)]
pub struct InboundScores {
  pub health_score: i64,
  pub maturity_score: i64,
  pub maturity_level: String,
  #[serde(default)]
  pub bus_factor: Option<u32>,
  #[serde(default)]
  pub bus_risk: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InboundSecurity {
  pub security_score: i64,
  #[serde(default)]
  pub critical_count: u32,
  #[serde(default)]
  pub high_count: u32,
  #[serde(default)]
  pub medium_count: u32,
  #[serde(default)]
  pub low_count: u32,
  #[serde(default)]
  pub scanned_packages: u32,
  #[serde(default)]
  pub vulnerabilities: Vec<InboundVulnerability>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InboundVulnerability {
  pub id: String,
  #[serde(default)]
  pub package: String,
  pub severity: String,
  #[serde(default)]
  pub summary: Option<String>,
  #[serde(default)]
  pub fixed_version: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InboundDependencies {
  pub has_lock_file: bool,
  #[serde(default)]
  pub total_dependencies: u32,
  #[serde(default)]
  pub outdated_count: u32,
  #[serde(default)]
  pub lock_files: Vec<String>,
}

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

/// Hotspot / vulnerability severity. Ordering follows the hotspot rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
  Low,
  Medium,
  High,
  Critical,
}

impl Severity {
  pub fn from_str_loose(s: &str) -> Option<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "low" | "minor" => Some(Self::Low),
      "medium" | "moderate" => Some(Self::Medium),
      "high" | "important" => Some(Self::High),
      "critical" | "crit" => Some(Self::Critical),
      _ => None,
    }
  }

  /// Sort rank: Critical=4 > High=3 > Medium=2 > Low=1.
  pub fn rank(self) -> u8 {
    match self {
      Self::Critical => 4,
      Self::High => 3,
      Self::Medium => 2,
      Self::Low => 1,
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Critical => "Critical",
      Self::High => "High",
      Self::Medium => "Medium",
      Self::Low => "Low",
    }
  }
}

impl fmt::Display for Severity {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Overall risk tier of the quality dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
  Low,
  Medium,
  High,
}

impl RiskLevel {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Low => "Low",
      Self::Medium => "Medium",
      Self::High => "High",
    }
  }
}

impl fmt::Display for RiskLevel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Risk label attached to the raw bus factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BusRisk {
  Low,
  Medium,
  High,
}

impl BusRisk {
  /// Accepts "low", "Low Risk", "HIGH" and similar.
  pub fn from_str_loose(s: &str) -> Option<Self> {
    let lower = s.trim().to_ascii_lowercase();
    let head = lower.strip_suffix(" risk").unwrap_or(&lower);
    match head {
      "low" => Some(Self::Low),
      "medium" | "moderate" => Some(Self::Medium),
      "high" => Some(Self::High),
      _ => None,
    }
  }
}

/// Dashboard grade table (A+ .. F). Declared worst-first so `Ord` follows quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DashboardGrade {
  F,
  D,
  C,
  B,
  A,
  #[serde(rename = "A+")]
  APlus,
}

impl DashboardGrade {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::APlus => "A+",
      Self::A => "A",
      Self::B => "B",
      Self::C => "C",
      Self::D => "D",
      Self::F => "F",
    }
  }
}

impl fmt::Display for DashboardGrade {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Certificate grade table (A+ .. F). Declared worst-first so `Ord` follows quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CertificateGrade {
  F,
  D,
  C,
  #[serde(rename = "C+")]
  CPlus,
  B,
  #[serde(rename = "B+")]
  BPlus,
  A,
  #[serde(rename = "A+")]
  APlus,
}

impl CertificateGrade {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::APlus => "A+",
      Self::A => "A",
      Self::BPlus => "B+",
      Self::B => "B",
      Self::CPlus => "C+",
      Self::C => "C",
      Self::D => "D",
      Self::F => "F",
    }
  }
}

impl fmt::Display for CertificateGrade {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Five-tier activity label used by the quality dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DashboardActivity {
  #[serde(rename = "Very High")]
  VeryHigh,
  High,
  Medium,
  Low,
  #[serde(rename = "Very Low")]
  VeryLow,
}

impl DashboardActivity {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::VeryHigh => "Very High",
      Self::High => "High",
      Self::Medium => "Medium",
      Self::Low => "Low",
      Self::VeryLow => "Very Low",
    }
  }
}

/// Three-tier activity label used by the certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CertificateActivity {
  High,
  Moderate,
  Low,
}

impl CertificateActivity {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::High => "High",
      Self::Moderate => "Moderate",
      Self::Low => "Low",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trend {
  Growing,
  Declining,
  Stable,
}

// ---------------------------------------------------------------------------
// Internal normalized types
// ---------------------------------------------------------------------------

/// Canonical snapshot after normalization + validation. Read-only to the engine.
#[derive(Debug, Clone)]
pub struct RepositorySnapshot {
  pub name: String,
  pub owner: Option<String>,
  pub description: String,
  pub stars: u32,
  pub forks: u32,
  pub open_issues: u32,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
  pub pushed_at: DateTime<Utc>,
  pub default_branch: String,
  pub language: Option<String>,
  pub languages: BTreeMap<String, u64>,
  pub commits: Vec<Commit>,
  pub contributors: Vec<Contributor>,
  pub scores: ScoreInputs,
  pub security: Option<SecurityScanResult>,
  pub dependencies: Option<DependencyAnalysis>,
}

impl RepositorySnapshot {
  /// "owner/name" when the owner is known, else just the name.
  pub fn full_name(&self) -> String {
    match &self.owner {
      Some(owner) => format!("{}/{}", owner, self.name),
      None => self.name.clone(),
    }
  }
}

#[derive(Debug, Clone)]
pub struct Commit {
  pub sha: Option<String>,
  pub date: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Contributor {
  pub login: String,
  pub commits: u32,
  pub avatar_url: Option<String>,
}

/// Externally computed scores, already clamped to their ranges.
#[derive(Debug, Clone)]
pub struct ScoreInputs {
  pub health: u8,
  pub maturity: u8,
  pub maturity_level: String,
  pub bus_factor: u32,
  pub bus_risk: BusRisk,
}

#[derive(Debug, Clone, Serialize)]
pub struct Vulnerability {
  pub id: String,
  pub package: String,
  pub severity: Severity,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub summary: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub fixed_version: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SecurityScanResult {
  pub security_score: u8,
  pub critical_count: u32,
  pub high_count: u32,
  pub medium_count: u32,
  pub low_count: u32,
  pub scanned_packages: u32,
  pub vulnerabilities: Vec<Vulnerability>,
}

impl SecurityScanResult {
  /// Widened so the sum of four unsigned counts cannot overflow.
  pub fn total_count(&self) -> u64 {
    self.critical_count as u64
      + self.high_count as u64
      + self.medium_count as u64
      + self.low_count as u64
  }

  pub fn has_critical(&self) -> bool {
    self.critical_count > 0
  }
}

#[derive(Debug, Clone)]
pub struct DependencyAnalysis {
  pub has_lock_file: bool,
  pub total_dependencies: u32,
  pub outdated_count: u32,
  pub lock_files: Vec<String>,
}

/// Sub-scores shared by every scorer. Security defaults to 100 when no scan was supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubScores {
  pub health: u8,
  pub maturity: u8,
  pub maturity_level: String,
  pub bus_factor: u32,
  pub bus_risk: BusRisk,
  pub security: u8,
}

impl SubScores {
  pub fn from_snapshot(snapshot: &RepositorySnapshot) -> Self {
    Self {
      health: snapshot.scores.health,
      maturity: snapshot.scores.maturity,
      maturity_level: snapshot.scores.maturity_level.clone(),
      bus_factor: snapshot.scores.bus_factor,
      bus_risk: snapshot.scores.bus_risk,
      security: snapshot
        .security
        .as_ref()
        .map(|s| s.security_score)
        .unwrap_or(100),
    }
  }
}

// ---------------------------------------------------------------------------
// Output types (JSON contract — what we emit)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemHotspot {
  pub area: String,
  pub severity: Severity,
  pub description: String,
  pub impact: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardMetrics {
  pub health_score: u8,
  pub security_score: u8,
  pub maturity_level: String,
  pub bus_factor: u32,
  pub activity_level: DashboardActivity,
  pub contributor_count: usize,
}

/// Share of one severity in a vulnerability scan.
#[derive(Debug, Clone, Serialize)]
pub struct SeverityShare {
  pub severity: Severity,
  pub count: u32,
  pub percent: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct QualityDashboard {
  pub overall_score: u8,
  pub risk_level: RiskLevel,
  pub quality_grade: DashboardGrade,
  pub problem_hotspots: Vec<ProblemHotspot>,
  pub recommendations: Vec<String>,
  pub key_metrics: DashboardMetrics,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub vulnerability_mix: Option<Vec<SeverityShare>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LanguageShare {
  pub language: String,
  pub bytes: u64,
  pub percent: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CertificateData {
  pub certificate_id: String,
  pub repo_name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub owner: Option<String>,
  pub description: String,
  pub stars: u32,
  pub forks: u32,
  pub open_issues: u32,
  /// YYYY-MM-DD
  pub created_at: String,
  /// YYYY-MM-DD
  pub updated_at: String,
  pub issued_at: String,

  pub health_score: u8,
  pub maturity_score: u8,
  pub maturity_level: String,
  pub bus_factor: u32,
  pub bus_risk: BusRisk,
  pub security_score: u8,

  pub commits_last_year: usize,
  pub contributors: usize,
  pub activity_level: CertificateActivity,

  pub primary_language: String,
  pub language_count: usize,
  pub languages: Vec<LanguageShare>,

  pub overall_score: u8,
  pub grade: CertificateGrade,
  pub uses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContributorActivityResult {
  pub last_90_days: u32,
  pub last_180_days: u32,
  pub trend: Trend,
  pub insight: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskAlerts {
  pub alerts: Vec<String>,
}

/// Everything one analysis run produces.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
  pub repository: String,
  pub analyzed_at: String,
  pub dashboard: QualityDashboard,
  pub certificate: CertificateData,
  pub activity: ContributorActivityResult,
  pub alerts: Option<RiskAlerts>,
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// Structured error output for invalid input.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
      field: None,
    }
  }

  pub fn with_field(mut self, field: impl Into<String>) -> Self {
    self.field = Some(field.into());
    self
  }
}
