//! Bus factor: raw contributor-concentration count, its risk label, and the
//! 20..100 normalization used by the dashboard scheme.

use crate::types::{BusRisk, Contributor};

/// Number of top contributors whose commits reach `threshold` (0..1) of all commits.
/// Zero contributors or zero commits yields 0.
pub fn compute_bus_factor(contributors: &[Contributor], threshold: f64) -> u32 {
  let total: u64 = contributors.iter().map(|c| c.commits as u64).sum();
  if total == 0 {
    return 0;
  }

  let mut counts: Vec<u64> = contributors.iter().map(|c| c.commits as u64).collect();
  counts.sort_unstable_by(|a, b| b.cmp(a));

  let target = total as f64 * threshold.clamp(0.0, 1.0);
  let mut covered = 0u64;
  let mut needed = 0u32;
  for count in counts {
    covered += count;
    needed += 1;
    if covered as f64 >= target {
      break;
    }
  }
  needed
}

/// ≤1 High, ≤3 Medium, otherwise Low.
pub fn bus_risk(bus_factor: u32) -> BusRisk {
  match bus_factor {
    0..=1 => BusRisk::High,
    2..=3 => BusRisk::Medium,
    _ => BusRisk::Low,
  }
}

/// Map the raw bus factor onto 20..100: ≥10 → 100, ≤1 → 20, linear (floored) between.
pub fn normalize_bus_factor(bus_factor: u32) -> u8 {
  if bus_factor >= 10 {
    return 100;
  }
  if bus_factor <= 1 {
    return 20;
  }
  (20 + ((bus_factor - 1) * 80) / 9) as u8
}

#[cfg(test)]
mod tests {
  use super::*;

  fn contributor(login: &str, commits: u32) -> Contributor {
    Contributor {
      login: login.into(),
      commits,
      avatar_url: None,
    }
  }

  #[test]
  fn normalize_fixed_points() {
    assert_eq!(normalize_bus_factor(0), 20);
    assert_eq!(normalize_bus_factor(1), 20);
    assert_eq!(normalize_bus_factor(2), 28);
    assert_eq!(normalize_bus_factor(5), 55);
    assert_eq!(normalize_bus_factor(9), 91);
    assert_eq!(normalize_bus_factor(10), 100);
    assert_eq!(normalize_bus_factor(15), 100);
  }

  #[test]
  fn single_dominant_contributor() {
    let cs = vec![contributor("a", 90), contributor("b", 10)];
    assert_eq!(compute_bus_factor(&cs, 0.5), 1);
  }

  #[test]
  fn even_split_needs_half_the_team() {
    let cs: Vec<_> = (0..6).map(|i| contributor(&format!("u{}", i), 10)).collect();
    assert_eq!(compute_bus_factor(&cs, 0.5), 3);
  }

  #[test]
  fn order_of_input_does_not_matter() {
    let cs = vec![contributor("small", 5), contributor("big", 60), contributor("mid", 35)];
    assert_eq!(compute_bus_factor(&cs, 0.5), 1);
    assert_eq!(compute_bus_factor(&cs, 0.9), 2);
  }

  #[test]
  fn empty_history_is_zero() {
    assert_eq!(compute_bus_factor(&[], 0.5), 0);
    assert_eq!(compute_bus_factor(&[contributor("a", 0)], 0.5), 0);
  }

  #[test]
  fn risk_labels() {
    assert_eq!(bus_risk(0), BusRisk::High);
    assert_eq!(bus_risk(1), BusRisk::High);
    assert_eq!(bus_risk(3), BusRisk::Medium);
    assert_eq!(bus_risk(4), BusRisk::Low);
  }
}
