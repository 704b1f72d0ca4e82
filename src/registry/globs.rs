//! Glob generation: truncated spellings that may match several identifiers
//!
//! `GPL-3.0-only` is routinely abbreviated to `GPL-3`, `GPL3` or plain `GPL`.
//! Each of those is a glob: a partial identifier that stays ambiguous until
//! matched against a concrete expression.
//!
//! Every rule re-runs the whole generator on a strictly shorter string, so
//! recursion always terminates. Results for a given string never change, so
//! one generation run memoises intermediate strings; some rule combinations
//! (`1-2-3-4-5-...`) otherwise fan out exponentially.

use super::tables::DEPRECATED_PREFIX;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Suffixes whose removal yields a shorter, broader glob
const STRIPPED_SUFFIXES: &[&str] = &["-only", "-or-later", "-exception", "-note"];

/// Cumulative `-`-delimited prefixes of `s`, excluding `s` itself.
///
/// `"a-b-c-d"` → `["a", "a-b", "a-b-c"]`. A leading `-` never yields an empty
/// prefix.
pub fn hyphen_prefixes(s: &str) -> Vec<String> {
    s.char_indices()
        .filter(|&(i, c)| c == '-' && i > 0)
        .map(|(i, _)| s[..i].to_string())
        .collect()
}

/// Remove duplicates keeping the first occurrence of each element.
///
/// Works in the vector's own storage; the result is never longer than the
/// number of distinct inputs.
pub fn dedup_in_place<T: Eq + Hash + Clone>(items: &mut Vec<T>) {
    let mut seen = HashSet::with_capacity(items.len());
    items.retain(|item| seen.insert(item.clone()));
}

/// Globs an identifier should be registered under.
///
/// Only non-empty globs strictly shorter than the identifier are kept; the
/// dotted-zero rule can otherwise reproduce (or extend) the input.
pub fn canonical_to_globs(canonical: &str) -> Vec<String> {
    GlobGenerator::default()
        .generate(canonical)
        .into_iter()
        .filter(|glob| !glob.is_empty() && glob.len() < canonical.len())
        .collect()
}

/// One generation run with its memo table
#[derive(Debug, Default)]
pub(crate) struct GlobGenerator {
    memo: HashMap<String, Vec<String>>,
}

impl GlobGenerator {
    /// Unfiltered generator output for `s`, deduplicated in rule order
    pub(crate) fn generate(&mut self, s: &str) -> Vec<String> {
        if let Some(cached) = self.memo.get(s) {
            return cached.clone();
        }

        let mut globs = hyphen_prefixes(s);

        if let Some((left, _)) = s.split_once("-with") {
            let nested = self.generate(left);
            globs.extend(nested);
        }

        for suffix in STRIPPED_SUFFIXES {
            if let Some(trimmed) = s.strip_suffix(suffix) {
                self.push_and_recurse(&mut globs, trimmed);
            }
        }

        if let Some(trimmed) = s.strip_prefix(DEPRECATED_PREFIX) {
            self.push_and_recurse(&mut globs, trimmed);
        }

        for digit in '0'..='9' {
            let hyphenated = format!("-{}", digit);

            // `GPL-3.0` → `GPL`
            let dotted_zero = format!("-{}.0", digit);
            if let Some(trimmed) = s.strip_suffix(dotted_zero.as_str()) {
                self.push_and_recurse(&mut globs, trimmed);
            }

            // `GPL-3` → `GPL-`, and the reverse direction `GPL-3.0`
            if let Some(trimmed) = s.strip_suffix(digit) {
                globs.push(trimmed.to_string());
                globs.push(format!("{}.0", s));
                let nested = self.generate(trimmed);
                globs.extend(nested);
            }

            // truncate at the first version-looking digit
            if let Some((head, _)) = s.split_once(hyphenated.as_str()) {
                self.push_and_recurse(&mut globs, head);
            } else if let Some((head, _)) = s.split_once(digit) {
                self.push_and_recurse(&mut globs, head);
            }

            let dotted = format!(".{}", digit);
            if let Some(trimmed) = s.strip_suffix(dotted.as_str()) {
                self.push_and_recurse(&mut globs, trimmed);
            }

            // `GPL-3` → `GPL3` and `GPL`
            if let Some(trimmed) = s.strip_suffix(hyphenated.as_str()) {
                let joined = format!("{}{}", trimmed, digit);
                self.push_and_recurse(&mut globs, &joined);
                self.push_and_recurse(&mut globs, trimmed);
            }
        }

        dedup_in_place(&mut globs);
        self.memo.insert(s.to_string(), globs.clone());
        globs
    }

    fn push_and_recurse(&mut self, globs: &mut Vec<String>, trimmed: &str) {
        globs.push(trimmed.to_string());
        let nested = self.generate(trimmed);
        globs.extend(nested);
    }
}
