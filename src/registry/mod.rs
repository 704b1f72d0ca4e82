//! Identifier registry: the lookup tables every query reads from
//!
//! Built once from the closed list of canonical identifiers plus the static
//! tables in [`tables`]:
//!
//! - **Canonical**: form → identifier (many-to-one, never ambiguous)
//! - **Globs**: glob → identifiers (many-to-many, insertion-ordered)
//!
//! After [`Registry::build`] returns nothing is ever mutated, so a registry
//! can be shared across threads freely.

pub mod forms;
pub mod globs;
pub mod resolve;
pub mod tables;

pub use forms::canonical_to_forms;
pub use globs::{canonical_to_globs, dedup_in_place, hyphen_prefixes};
pub use tables::DEPRECATED_PREFIX;

use crate::config::LicenseDbConfig;
use crate::expression::Keyword;
use crate::{LicenseDbError, LicenseDbResult};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
pub struct Registry {
    /// Canonical identifiers in source order
    names: Vec<String>,
    name_set: HashSet<String>,
    canonical: HashMap<String, String>,
    globs: HashMap<String, Vec<String>>,
    /// identifier → globs it is registered under
    memberships: HashMap<String, Vec<String>>,
    deprecated: HashMap<String, Vec<String>>,
    exceptions: HashSet<String>,
    max_expansion_depth: usize,
}

impl Registry {
    /// Build all lookup tables for `names`.
    ///
    /// An empty identifier list is rejected: every table derives from it.
    pub fn build(mut names: Vec<String>, config: &LicenseDbConfig) -> LicenseDbResult<Self> {
        dedup_in_place(&mut names);
        if names.is_empty() {
            return Err(LicenseDbError::EmptySource("identifier list".into()));
        }

        let deprecated = build_deprecated(&names, config);

        let mut globs: HashMap<String, Vec<String>> = HashMap::new();
        let mut memberships = HashMap::with_capacity(names.len());
        for name in &names {
            let generated = canonical_to_globs(name);
            for glob in &generated {
                globs.entry(glob.clone()).or_default().push(name.clone());
            }
            memberships.insert(name.clone(), generated);
        }

        let mut canonical = HashMap::new();
        for keyword in Keyword::ALL {
            canonical.insert(keyword.as_str().to_lowercase(), keyword.as_str().to_string());
        }
        for (from, to) in tables::ALIASES {
            canonical.insert(from.to_string(), to.to_string());
        }
        for (from, to) in &config.aliases {
            canonical.insert(from.to_lowercase(), to.clone());
        }
        for name in &names {
            for form in canonical_to_forms(name) {
                canonical.insert(form, name.clone());
            }
        }
        // An identifier's own spelling always wins over a colliding form
        for name in &names {
            canonical.insert(name.to_lowercase(), name.clone());
        }

        let exceptions: HashSet<String> = tables::EXCEPTIONS
            .iter()
            .map(|e| e.to_string())
            .chain(config.exceptions.iter().cloned())
            .collect();

        tracing::info!(
            "Built license registry: {} identifiers, {} forms, {} globs, {} deprecated entries",
            names.len(),
            canonical.len(),
            globs.len(),
            deprecated.len()
        );

        Ok(Self {
            name_set: names.iter().cloned().collect(),
            names,
            canonical,
            globs,
            memberships,
            deprecated,
            exceptions,
            max_expansion_depth: config.max_expansion_depth,
        })
    }

    /// Canonical identifiers in source order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Exact identifier lookup (case-sensitive, prefixes included)
    pub fn contains(&self, id: &str) -> bool {
        self.name_set.contains(id)
    }

    /// Identifier a lower-case form resolves to
    pub fn canonical(&self, form: &str) -> Option<&str> {
        self.canonical.get(form).map(String::as_str)
    }

    /// Identifiers registered under `glob`, in source order
    pub fn glob_matches(&self, glob: &str) -> Option<&[String]> {
        self.globs.get(glob).map(Vec::as_slice)
    }

    pub fn is_glob(&self, glob: &str) -> bool {
        self.globs.contains_key(glob)
    }

    /// Globs `id` is registered under; empty for non-identifiers
    pub fn globs_of(&self, id: &str) -> &[String] {
        self.memberships.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Replacement tokens for a deprecated lower-case spelling
    pub fn deprecated(&self, token: &str) -> Option<&[String]> {
        self.deprecated.get(token).map(Vec::as_slice)
    }

    pub fn is_exception(&self, id: &str) -> bool {
        self.exceptions.contains(id)
    }

    pub fn max_expansion_depth(&self) -> usize {
        self.max_expansion_depth
    }

    pub fn form_count(&self) -> usize {
        self.canonical.len()
    }

    pub fn glob_count(&self) -> usize {
        self.globs.len()
    }
}

/// Explicit entries (built-in, then config) plus one implicit entry per
/// `deprecated_` identifier that has no explicit expansion.
fn build_deprecated(names: &[String], config: &LicenseDbConfig) -> HashMap<String, Vec<String>> {
    let mut deprecated: HashMap<String, Vec<String>> = tables::DEPRECATED
        .iter()
        .map(|(from, to)| {
            (
                from.to_string(),
                to.iter().map(|t| t.to_string()).collect(),
            )
        })
        .collect();

    for (from, to) in &config.deprecated {
        deprecated.insert(from.to_lowercase(), to.clone());
    }

    for name in names {
        if let Some(clean) = name.strip_prefix(DEPRECATED_PREFIX) {
            deprecated
                .entry(clean.to_lowercase())
                .or_insert_with(|| vec![name.clone()]);
        }
    }

    deprecated
}

/// Registry over the shared test fixture, built once per test binary
#[cfg(test)]
pub(crate) fn fixture() -> &'static Registry {
    use crate::source::{fixture_source, LicenseSource};
    use once_cell::sync::Lazy;

    static FIXTURE: Lazy<Registry> = Lazy::new(|| {
        let names = fixture_source().list().unwrap();
        Registry::build(names, &LicenseDbConfig::default()).unwrap()
    });
    &FIXTURE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_identifier_list_is_fatal() {
        let err = Registry::build(vec![], &LicenseDbConfig::default()).unwrap_err();
        assert!(matches!(err, LicenseDbError::EmptySource(_)));
    }

    #[test]
    fn test_every_identifier_maps_to_itself() {
        let registry = fixture();
        for name in registry.names() {
            assert_eq!(registry.canonical(&name.to_lowercase()), Some(name.as_str()));
        }
    }

    #[test]
    fn test_keywords_and_aliases_seeded() {
        let registry = fixture();
        assert_eq!(registry.canonical("with"), Some("WITH"));
        assert_eq!(registry.canonical("and"), Some("AND"));
        assert_eq!(registry.canonical("or"), Some("OR"));
        assert_eq!(registry.canonical("asl20"), Some("Apache-2.0"));
        assert_eq!(registry.canonical("gpl3"), Some("GPL-3.0"));
        assert_eq!(registry.canonical("gpl3+"), Some("GPL-3.0-or-later"));
    }

    #[test]
    fn test_glob_lists_follow_source_order() {
        let registry = fixture();
        let matches = registry.glob_matches("GPL-2.0").unwrap();
        assert_eq!(
            &matches[..3],
            &["GPL-2.0-only", "GPL-2.0-or-later", "deprecated_GPL-2.0"]
        );
        let gpl3 = registry.glob_matches("GPL3").unwrap();
        assert_eq!(gpl3[0], "GPL-3.0-389-ds-base-exception");
    }

    #[test]
    fn test_memberships_mirror_glob_table() {
        let registry = fixture();
        for name in registry.names() {
            for glob in registry.globs_of(name) {
                assert!(registry.glob_matches(glob).unwrap().contains(name));
            }
        }
        assert!(registry.globs_of("not-an-id").is_empty());
    }

    #[test]
    fn test_implicit_deprecated_entries_are_lowercase() {
        let registry = fixture();
        assert_eq!(
            registry.deprecated("nunit").unwrap(),
            &["deprecated_Nunit".to_string()]
        );
        assert_eq!(
            registry.deprecated("gpl-2.0").unwrap(),
            &["deprecated_GPL-2.0".to_string()]
        );
        assert!(registry.deprecated("Nunit").is_none());
    }

    #[test]
    fn test_explicit_deprecated_entry_wins() {
        let registry = fixture();
        assert_eq!(
            registry.deprecated("gpl-3.0-with-autoconf-exception").unwrap(),
            &["gpl-3.0-or-later", "with", "autoconf-exception-3.0"]
        );
        assert_eq!(
            registry.deprecated("gpl-3.0+").unwrap(),
            &["gpl-3.0-or-later"]
        );
    }

    #[test]
    fn test_config_tables_merge() {
        let mut config = LicenseDbConfig::default();
        config.aliases.insert("Expat".into(), "MIT".into());
        config.deprecated.insert("Nunit".into(), vec!["zlib".into()]);
        config.exceptions.push("Custom-exception".into());

        let names = vec![
            "MIT".to_string(),
            "Zlib".to_string(),
            "deprecated_Nunit".to_string(),
            "Custom-exception".to_string(),
        ];
        let registry = Registry::build(names, &config).unwrap();
        assert_eq!(registry.canonical("expat"), Some("MIT"));
        assert_eq!(registry.deprecated("nunit").unwrap(), &["zlib".to_string()]);
        assert!(registry.is_exception("Custom-exception"));
        assert!(registry.is_exception("GCC-exception-3.1"));
        assert!(!registry.is_exception("MIT"));
    }

    #[test]
    fn test_duplicate_names_collapse() {
        let names = vec!["MIT".to_string(), "ISC".to_string(), "MIT".to_string()];
        let registry = Registry::build(names, &LicenseDbConfig::default()).unwrap();
        assert_eq!(registry.names(), &["MIT", "ISC"]);
    }
}
