//! Problem hotspots: independent rules, each appending at most one hotspot,
//! then ordered by severity (Critical first).

use crate::types::{ProblemHotspot, SecurityScanResult, Severity, SubScores};

/// Evaluate every hotspot rule.
///
/// `recent_commits` is the naive supplied-commit signal, not a dated window.
/// Equal severities keep rule order: security, bus factor, activity, health, dependencies.
pub fn identify_problem_hotspots(
  scores: &SubScores,
  recent_commits: usize,
  security_result: Option<&SecurityScanResult>,
) -> Vec<ProblemHotspot> {
  let mut hotspots = Vec::new();

  if scores.security < 60 {
    let severity = if scores.security < 30 {
      Severity::Critical
    } else {
      Severity::High
    };
    hotspots.push(hotspot(
      "Security",
      severity,
      format!("Security score is {}/100", scores.security),
      "Potential vulnerabilities may expose the project to security risks",
    ));
  }

  if scores.bus_factor <= 1 {
    hotspots.push(hotspot(
      "Bus Factor",
      Severity::Critical,
      "Single contributor dependency".into(),
      "Project is at risk if the main contributor becomes unavailable",
    ));
  } else if scores.bus_factor <= 2 {
    hotspots.push(hotspot(
      "Bus Factor",
      Severity::High,
      "Very low contributor diversity".into(),
      "Limited knowledge distribution across the team",
    ));
  }

  if recent_commits == 0 {
    hotspots.push(hotspot(
      "Activity",
      Severity::High,
      "No commits in the last 90 days".into(),
      "Project may be abandoned or inactive",
    ));
  }

  if scores.health < 40 {
    hotspots.push(hotspot(
      "Repository Health",
      Severity::High,
      format!("Health score is {}/100", scores.health),
      "Poor repository maintenance and documentation",
    ));
  }

  if let Some(result) = security_result.filter(|r| r.has_critical()) {
    hotspots.push(hotspot(
      "Dependencies",
      Severity::Critical,
      format!("{} critical vulnerabilities found", result.critical_count),
      "Critical security vulnerabilities in dependencies",
    ));
  }

  // Stable: ties stay in rule order.
  hotspots.sort_by(|a, b| b.severity.rank().cmp(&a.severity.rank()));
  hotspots
}

fn hotspot(area: &str, severity: Severity, description: String, impact: &str) -> ProblemHotspot {
  ProblemHotspot {
    area: area.to_string(),
    severity,
    description,
    impact: impact.to_string(),
  }
}
