//! Rule-ordered advisory text for the quality dashboard.
//!
//! Rules append in a fixed order and the list is cut to `max` afterwards, so a
//! late rule can fire and still be dropped.

use crate::types::{DependencyAnalysis, SecurityScanResult, SubScores};

pub const UPDATE_DEPENDENCIES: &str = "🔒 Update dependencies to fix security vulnerabilities";
pub const FIX_CRITICAL_NOW: &str = "🚨 Immediately address critical security vulnerabilities";
pub const MORE_CONTRIBUTORS: &str = "👥 Encourage more contributors to reduce bus factor risk";
pub const IMPROVE_DOCS: &str = "📚 Improve documentation to enable easier onboarding";
pub const RESUME_OR_ARCHIVE: &str = "🔄 Resume development activity or archive if project is complete";
pub const INCREASE_ACTIVITY: &str = "📈 Increase development activity and regular maintenance";
pub const ADD_README: &str = "📝 Add comprehensive README and project description";
pub const ADDRESS_ISSUES: &str = "🐛 Address open issues to improve repository health";
pub const ADD_LOCK_FILES: &str = "🔒 Add dependency lock files for reproducible builds";
pub const PROMOTE_PROJECT: &str = "🌟 Promote the project to attract more contributors";

/// Generate recommendations. `recent_commits` is the naive supplied-commit signal.
pub fn generate_recommendations(
  scores: &SubScores,
  recent_commits: usize,
  contributor_count: usize,
  security_result: Option<&SecurityScanResult>,
  dependencies: Option<&DependencyAnalysis>,
  max: usize,
) -> Vec<String> {
  let mut out: Vec<&str> = Vec::new();

  if scores.security < 70 {
    out.push(UPDATE_DEPENDENCIES);
    if security_result.is_some_and(|r| r.has_critical()) {
      out.push(FIX_CRITICAL_NOW);
    }
  }

  if scores.bus_factor <= 2 {
    out.push(MORE_CONTRIBUTORS);
    out.push(IMPROVE_DOCS);
  }

  if recent_commits == 0 {
    out.push(RESUME_OR_ARCHIVE);
  } else if recent_commits < 10 {
    out.push(INCREASE_ACTIVITY);
  }

  if scores.health < 60 {
    out.push(ADD_README);
    out.push(ADDRESS_ISSUES);
  }

  if dependencies.is_some_and(|d| !d.has_lock_file) {
    out.push(ADD_LOCK_FILES);
  }

  if contributor_count < 3 {
    out.push(PROMOTE_PROJECT);
  }

  out.truncate(max);
  out.into_iter().map(String::from).collect()
}
