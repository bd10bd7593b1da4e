//! Guarded percentage helper shared by language and vulnerability breakdowns.

/// `part / total` as a percentage rounded to two decimals; 0.0 when `total` is zero.
pub fn percent(part: u64, total: u64) -> f64 {
  if total == 0 {
    return 0.0;
  }
  let pct = part as f64 * 100.0 / total as f64;
  (pct * 100.0).round() / 100.0
}
