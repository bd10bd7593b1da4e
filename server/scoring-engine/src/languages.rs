//! Language breakdown: extension filtering over a file tree, per-extension sizes,
//! primary language pick, percentage shares.

use std::collections::{BTreeMap, BTreeSet};

use crate::ratio::percent;
use crate::types::{InboundTreeEntry, LanguageShare};

/// Restricts file analysis to a set of lower-cased, dot-prefixed extensions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionFilter {
  allowed: BTreeSet<String>,
}

impl ExtensionFilter {
  /// Parse "go, .MD,rs" into {".go", ".md", ".rs"}. Blank fragments are skipped.
  pub fn parse(value: &str) -> Self {
    let allowed = value
      .split(',')
      .map(|fragment| fragment.trim().to_ascii_lowercase())
      .filter(|ext| !ext.is_empty())
      .map(|ext| {
        if ext.starts_with('.') {
          ext
        } else {
          format!(".{}", ext)
        }
      })
      .collect();
    Self { allowed }
  }

  pub fn is_active(&self) -> bool {
    !self.allowed.is_empty()
  }

  /// An inactive filter matches everything.
  pub fn matches(&self, path: &str) -> bool {
    if !self.is_active() {
      return true;
    }
    match extension_of(path) {
      Some(ext) => self.allowed.contains(&format!(".{}", ext)),
      None => false,
    }
  }
}

/// Keep only blob entries matching the filter. An inactive filter returns the entries unchanged.
pub fn filter_tree_entries<'a>(
  entries: &'a [InboundTreeEntry],
  filter: &ExtensionFilter,
) -> Vec<&'a InboundTreeEntry> {
  if !filter.is_active() {
    return entries.iter().collect();
  }
  entries
    .iter()
    .filter(|e| e.kind == "blob" && filter.matches(&e.path))
    .collect()
}

/// Sum blob sizes per lower-cased extension; files without one land under "unknown".
pub fn language_sizes_from_tree<'a, I>(entries: I) -> BTreeMap<String, u64>
where
  I: IntoIterator<Item = &'a InboundTreeEntry>,
{
  let mut sizes = BTreeMap::new();
  for entry in entries {
    if entry.kind != "blob" {
      continue;
    }
    let ext = extension_of(&entry.path).unwrap_or_else(|| "unknown".to_string());
    *sizes.entry(ext).or_insert(0) += entry.size;
  }
  sizes
}

/// Largest language by bytes (ties go to the alphabetically first name), then the
/// declared repository language, then "Unknown".
pub fn primary_language(languages: &BTreeMap<String, u64>, declared: Option<&str>) -> String {
  let top = languages
    .iter()
    .filter(|&(_, &bytes)| bytes > 0)
    .fold(None::<(&String, u64)>, |best, (name, &bytes)| match best {
      Some((_, best_bytes)) if best_bytes >= bytes => best,
      _ => Some((name, bytes)),
    });

  match (top, declared) {
    (Some((name, _)), _) => name.clone(),
    (None, Some(lang)) if !lang.trim().is_empty() => lang.to_string(),
    _ => "Unknown".to_string(),
  }
}

/// Per-language share of total bytes, largest first.
pub fn language_shares(languages: &BTreeMap<String, u64>) -> Vec<LanguageShare> {
  let total: u64 = languages.values().sum();
  let mut shares: Vec<LanguageShare> = languages
    .iter()
    .map(|(name, &bytes)| LanguageShare {
      language: name.clone(),
      bytes,
      percent: percent(bytes, total),
    })
    .collect();
  shares.sort_by(|a, b| b.bytes.cmp(&a.bytes));
  shares
}

fn extension_of(path: &str) -> Option<String> {
  let file = path.rsplit('/').next().unwrap_or(path);
  match file.rfind('.') {
    Some(idx) if idx + 1 < file.len() => Some(file[idx + 1..].to_ascii_lowercase()),
    _ => None,
  }
}
