//! Small text helpers used across modules: templating and submission normalization.

/// Very small and safe string templating.
/// Replaces occurrences of `{key}` in the template with provided values.
pub fn fill_template(tpl: &str, pairs: &[(&str, &str)]) -> String {
  let mut out = tpl.to_string();
  for (k, v) in pairs {
    let needle = format!("{{{}}}", k);
    out = out.replace(&needle, v);
  }
  out
}

/// Canonical form of a submission used by the keyword and length checks.
///
/// Lowercases, turns every character that is not `a-z` or whitespace into a
/// space (digits, punctuation and apostrophes included, so "don't" becomes
/// "don t"), collapses whitespace runs and trims. Missing input is empty.
pub fn normalize(text: Option<&str>) -> String {
  let lowered = text.unwrap_or_default().to_lowercase();
  let replaced: String = lowered
    .chars()
    .map(|c| if c.is_ascii_lowercase() || c.is_whitespace() { c } else { ' ' })
    .collect();
  replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Words of an already normalized text.
pub fn words(normalized: &str) -> impl Iterator<Item = &str> {
  normalized.split(' ').filter(|w| !w.is_empty())
}
