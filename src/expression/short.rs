//! Short forms: the briefest glob that stays unambiguous in context
//!
//! `GPL-3.0-or-later MIT` can be written `GPL MIT`, but next to
//! `GPL-2.0-only` the GPL needs its version back: `GPL3 GPL2`. A glob is only
//! safe if no *other* token of the same expression is registered under it.

use super::{join_collapsed, Keyword};
use crate::registry::Registry;
use std::collections::HashMap;

impl Registry {
    /// Shortest safe glob for every non-keyword token of a canonical list.
    ///
    /// Ties between equally short globs go to the byte-wise smallest, so the
    /// result never depends on hash-map iteration order. Tokens with no safe
    /// glob map to themselves.
    pub fn short_forms<S: AsRef<str>>(&self, tokens: &[S]) -> HashMap<String, String> {
        let others: Vec<&str> = tokens
            .iter()
            .map(AsRef::as_ref)
            .filter(|t| !Keyword::is_canonical(t))
            .collect();

        let mut mapping = HashMap::with_capacity(others.len());
        for &token in &others {
            let mut best: Option<&str> = None;
            for glob in self.globs_of(token) {
                if glob.len() >= token.len() {
                    continue;
                }
                if let Some(current) = best {
                    if (glob.len(), glob.as_str()) >= (current.len(), current) {
                        continue;
                    }
                }
                let shared = self.glob_matches(glob).map_or(false, |matches| {
                    others
                        .iter()
                        .any(|&other| other != token && matches.iter().any(|m| m == other))
                });
                if !shared {
                    best = Some(glob);
                }
            }
            mapping.insert(token.to_string(), best.unwrap_or(token).to_string());
        }
        mapping
    }

    /// Expression text rewritten with short forms, single-spaced
    pub fn to_short_text(&self, text: &str) -> String {
        let tokens = self.tokenize(text);
        let mapping = self.short_forms(&tokens);
        let shortened: Vec<&str> = tokens
            .iter()
            .map(|token| match mapping.get(token) {
                Some(short) if !Keyword::is_canonical(token) => short.as_str(),
                _ => token.as_str(),
            })
            .collect();
        join_collapsed(&shortened)
    }

    /// Every presentable abbreviation of one identifier, in generation order.
    ///
    /// Globs ending in `-`/`.` or carrying a doubled `.0.0` are generated for
    /// matching but never shown.
    pub fn short_forms_of(&self, id: &str) -> Vec<String> {
        let generated;
        let globs = if self.contains(id) {
            self.globs_of(id)
        } else {
            generated = crate::registry::canonical_to_globs(id);
            generated.as_slice()
        };
        globs
            .iter()
            .filter(|glob| is_presentable(glob))
            .cloned()
            .collect()
    }
}

fn is_presentable(glob: &str) -> bool {
    glob.chars().last().map_or(false, |c| c.is_ascii_alphanumeric()) && !glob.contains(".0.0")
}
