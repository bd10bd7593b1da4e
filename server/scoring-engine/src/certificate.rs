//! Repository certificate: facts, sub-scores, certificate-scheme overall score
//! and grade, plus the "potential uses" heuristic.

use chrono::{DateTime, Utc};

use crate::classify;
use crate::composite;
use crate::languages;
use crate::types::{BusRisk, CertificateActivity, CertificateData, RepositorySnapshot, SubScores};

const FALLBACK_USES: [&str; 2] = [
  "Learning resource for developers",
  "Personal project with potential for growth",
];

pub fn build_certificate(
  snapshot: &RepositorySnapshot,
  scores: &SubScores,
  now: DateTime<Utc>,
) -> CertificateData {
  let commit_count = snapshot.commits.len();
  let contributor_count = snapshot.contributors.len();
  let (overall_score, grade) = composite::score_certificate(scores, commit_count, contributor_count);
  let issued_at = now.format("%Y-%m-%d").to_string();

  let mut cert = CertificateData {
    certificate_id: certificate_id(snapshot, overall_score, &issued_at),
    repo_name: snapshot.name.clone(),
    owner: snapshot.owner.clone(),
    description: snapshot.description.clone(),
    stars: snapshot.stars,
    forks: snapshot.forks,
    open_issues: snapshot.open_issues,
    created_at: snapshot.created_at.format("%Y-%m-%d").to_string(),
    updated_at: snapshot.updated_at.format("%Y-%m-%d").to_string(),
    issued_at,
    health_score: scores.health,
    maturity_score: scores.maturity,
    maturity_level: scores.maturity_level.clone(),
    bus_factor: scores.bus_factor,
    bus_risk: scores.bus_risk,
    security_score: scores.security,
    commits_last_year: commit_count,
    contributors: contributor_count,
    activity_level: classify::certificate_activity(commit_count),
    primary_language: languages::primary_language(&snapshot.languages, snapshot.language.as_deref()),
    language_count: snapshot.languages.len(),
    languages: languages::language_shares(&snapshot.languages),
    overall_score,
    grade,
    uses: Vec::new(),
  };
  cert.uses = potential_uses(&cert);
  cert
}

/// Suggested uses; never empty.
pub fn potential_uses(cert: &CertificateData) -> Vec<String> {
  let mut uses = Vec::new();

  if cert.maturity_level == "Mature" && cert.activity_level == CertificateActivity::High {
    uses.push("Production-ready software for enterprise use");
    uses.push("Open-source project for community contributions");
  }
  if cert.stars > 1000 {
    uses.push("Popular library or framework");
  }
  if cert.health_score > 80 {
    uses.push("Well-maintained project suitable for dependencies");
  }
  if cert.bus_risk == BusRisk::Low {
    uses.push("Reliable project with diverse contributor base");
  }
  if cert.commits_last_year > 500 {
    uses.push("Actively developed project");
  }

  if uses.is_empty() {
    uses.extend(FALLBACK_USES);
  }
  uses.into_iter().map(String::from).collect()
}

/// Stable id: hash of repository, score and issue date.
fn certificate_id(snapshot: &RepositorySnapshot, overall_score: u8, issued_at: &str) -> String {
  let mut hasher = blake3::Hasher::new();
  hasher.update(snapshot.full_name().as_bytes());
  hasher.update(b"|");
  hasher.update(&[overall_score]);
  hasher.update(b"|");
  hasher.update(issued_at.as_bytes());
  let hex = hasher.finalize().to_hex();
  format!("cert-{}", &hex[..16])
}
