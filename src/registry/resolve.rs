//! Glob resolution: pick one concrete identifier for an ambiguous glob

use super::Registry;

impl Registry {
    /// First concrete identifier a glob stands for.
    ///
    /// Identifiers resolve to themselves. A glob resolves depth-first through
    /// its match list in source order; the first candidate that resolves to
    /// something other than the glob wins. Anything else comes back unchanged.
    pub fn resolve_glob(&self, glob: &str) -> String {
        self.resolve_glob_where(glob, &|id: &str| self.contains(id))
    }

    /// Like [`Registry::resolve_glob`], but only identifiers accepted by
    /// `known` stop the descent
    pub fn resolve_glob_where<F>(&self, glob: &str, known: &F) -> String
    where
        F: Fn(&str) -> bool,
    {
        if known(glob) {
            return glob.to_string();
        }
        let Some(candidates) = self.glob_matches(glob) else {
            return glob.to_string();
        };
        for candidate in candidates {
            let resolved = self.resolve_glob_where(candidate, known);
            if resolved != glob {
                return resolved;
            }
        }
        tracing::debug!("Glob '{}' did not resolve", glob);
        glob.to_string()
    }
}
