//! Normalize inbound snapshots into the canonical internal RepositorySnapshot.

use chrono::{DateTime, Utc};

use crate::bus_factor;
use crate::config::Config;
use crate::error::EngineError;
use crate::languages::{self, ExtensionFilter};
use crate::types::*;

/// Parse, validate and clamp an InboundSnapshot.
pub fn normalize(raw: &InboundSnapshot, config: &Config) -> Result<RepositorySnapshot, EngineError> {
  if raw.name.trim().is_empty() {
    return Err(EngineError::validation("name", "must not be empty"));
  }

  let created_at = parse_timestamp("created_at", &raw.created_at)?;
  let updated_at = parse_timestamp("updated_at", &raw.updated_at)?;
  let pushed_at = parse_timestamp("pushed_at", &raw.pushed_at)?;

  let commits = raw
    .commits
    .iter()
    .enumerate()
    .map(|(i, c)| {
      Ok(Commit {
        sha: c.sha.clone(),
        date: parse_timestamp(&format!("commits[{}].date", i), &c.date)?,
      })
    })
    .collect::<Result<Vec<_>, EngineError>>()?;

  let contributors: Vec<Contributor> = raw
    .contributors
    .iter()
    .map(|c| Contributor {
      login: c.login.clone(),
      commits: c.contributions,
      avatar_url: c.avatar_url.clone(),
    })
    .collect();

  // Derive sizes from the file tree only when a filter is requested.
  let languages = match raw.extension_filter.as_deref().map(ExtensionFilter::parse) {
    Some(filter) if filter.is_active() => {
      languages::language_sizes_from_tree(languages::filter_tree_entries(&raw.file_tree, &filter))
    }
    _ => raw.languages.clone(),
  };

  let scores = normalize_scores(&raw.scores, &contributors, config)?;

  let security = match &raw.security {
    Some(s) => Some(normalize_security(s)?),
    None => None,
  };

  let dependencies = raw.dependencies.as_ref().map(|d| DependencyAnalysis {
    has_lock_file: d.has_lock_file,
    total_dependencies: d.total_dependencies,
    outdated_count: d.outdated_count,
    lock_files: d.lock_files.clone(),
  });

  Ok(RepositorySnapshot {
    name: raw.name.trim().to_string(),
    owner: raw
      .owner
      .as_deref()
      .map(str::trim)
      .filter(|o| !o.is_empty())
      .map(String::from),
    description: raw.description.clone().unwrap_or_default(),
    stars: raw.stars,
    forks: raw.forks,
    open_issues: raw.open_issues,
    created_at,
    updated_at,
    pushed_at,
    default_branch: raw
      .default_branch
      .clone()
      .unwrap_or_else(|| "main".to_string()),
    language: raw.language.clone(),
    languages,
    commits,
    contributors,
    scores,
    security,
    dependencies,
  })
}

/// Parse an optional "analyzed_at" override.
pub fn parse_analyzed_at(raw: &InboundSnapshot) -> Result<Option<DateTime<Utc>>, EngineError> {
  raw
    .analyzed_at
    .as_deref()
    .map(|t| parse_timestamp("analyzed_at", t))
    .transpose()
}

fn normalize_scores(
  raw: &InboundScores,
  contributors: &[Contributor],
  config: &Config,
) -> Result<ScoreInputs, EngineError> {
  let bus_factor = raw
    .bus_factor
    .unwrap_or_else(|| bus_factor::compute_bus_factor(contributors, config.bus_factor_threshold));

  let bus_risk = match raw.bus_risk.as_deref() {
    Some(label) => BusRisk::from_str_loose(label)
      .ok_or_else(|| EngineError::validation("scores.bus_risk", "expected low|medium|high"))?,
    None => bus_factor::bus_risk(bus_factor),
  };

  Ok(ScoreInputs {
    health: clamp_score("scores.health_score", raw.health_score),
    maturity: clamp_score("scores.maturity_score", raw.maturity_score),
    maturity_level: raw.maturity_level.trim().to_string(),
    bus_factor,
    bus_risk,
  })
}

fn normalize_security(raw: &InboundSecurity) -> Result<SecurityScanResult, EngineError> {
  let vulnerabilities = raw
    .vulnerabilities
    .iter()
    .enumerate()
    .map(|(i, v)| {
      let severity = Severity::from_str_loose(&v.severity).ok_or_else(|| {
        EngineError::validation(
          &format!("security.vulnerabilities[{}].severity", i),
          "expected low|medium|high|critical",
        )
      })?;
      Ok(Vulnerability {
        id: v.id.clone(),
        package: v.package.clone(),
        severity,
        summary: v.summary.clone(),
        fixed_version: v.fixed_version.clone(),
      })
    })
    .collect::<Result<Vec<_>, EngineError>>()?;

  Ok(SecurityScanResult {
    security_score: clamp_score("security.security_score", raw.security_score),
    critical_count: raw.critical_count,
    high_count: raw.high_count,
    medium_count: raw.medium_count,
    low_count: raw.low_count,
    scanned_packages: raw.scanned_packages,
    vulnerabilities,
  })
}

fn parse_timestamp(field: &str, value: &str) -> Result<DateTime<Utc>, EngineError> {
  DateTime::parse_from_rfc3339(value)
    .map(|t| t.with_timezone(&Utc))
    .map_err(|e| EngineError::validation(field, &format!("invalid RFC3339: {}", e)))
}

fn clamp_score(field: &str, value: i64) -> u8 {
  let clamped = value.clamp(0, 100);
  if clamped != value {
    tracing::warn!(field, value, clamped, "score out of range, clamped");
  }
  clamped as u8
}
