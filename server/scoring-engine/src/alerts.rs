//! Hard risk alerts. `None` means "no risk detected", never an empty list.

use crate::types::RiskAlerts;

pub fn analyze_risk_alerts(
  bus_factor: u32,
  health_score: u8,
  commits_last_90_days: u32,
  has_critical_vulns: bool,
) -> Option<RiskAlerts> {
  let mut alerts = Vec::new();

  if bus_factor <= 1 {
    alerts.push("Low bus factor (single contributor dependency)".to_string());
  }
  if commits_last_90_days == 0 {
    alerts.push("No commit activity in the last 90 days".to_string());
  }
  if health_score < 40 {
    alerts.push("Very low repository health score".to_string());
  }
  if has_critical_vulns {
    alerts.push("Critical dependency vulnerabilities detected".to_string());
  }

  if alerts.is_empty() {
    None
  } else {
    Some(RiskAlerts { alerts })
  }
}
