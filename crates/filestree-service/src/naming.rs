//! Unique display names among siblings.

use std::collections::HashSet;

/// Return `base`, or the first of `"base 1"`, `"base 2"`, … that is not
/// already in `existing`.
///
/// Terminates after at most `existing.len() + 1` candidates.
pub fn make_unique<I, S>(base: &str, existing: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let taken: HashSet<String> = existing
        .into_iter()
        .map(|name| name.as_ref().to_string())
        .collect();

    if !taken.contains(base) {
        return base.to_string();
    }

    (1..)
        .map(|n| format!("{base} {n}"))
        .find(|candidate| !taken.contains(candidate))
        .unwrap_or_else(|| base.to_string())
}
