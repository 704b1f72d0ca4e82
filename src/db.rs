//! License database facade
//!
//! Ties a [`LicenseSource`] to the [`Registry`] built from its identifier
//! list and exposes the expression-level queries callers actually want:
//! normalise, shorten, extract, match, and fetch license files.

use crate::config::LicenseDbConfig;
use crate::expression::Keyword;
use crate::registry::Registry;
use crate::source::{DirSource, LicenseSource};
use crate::{LicenseDbError, LicenseDbResult};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

static GLOBAL: OnceCell<LicenseDb> = OnceCell::new();

// ─── Result Types ───────────────────────────────────────────────────

/// Tokens of one expression, partitioned by how they resolved.
///
/// Every non-keyword token lands in exactly one bucket; buckets keep first
/// occurrence order and hold no duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    /// Exact license identifiers
    pub licenses: Vec<String>,
    /// Exact exception identifiers
    pub exceptions: Vec<String>,
    /// Globs that stand for several identifiers
    pub ambiguous: Vec<String>,
    /// Tokens nothing is known about
    pub unknown: Vec<String>,
}

impl Extraction {
    pub fn is_empty(&self) -> bool {
        self.licenses.is_empty()
            && self.exceptions.is_empty()
            && self.ambiguous.is_empty()
            && self.unknown.is_empty()
    }

    pub fn to_json(&self) -> LicenseDbResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseFile {
    pub text: String,
    /// Shortest name that is unambiguous within the expression
    pub short_name: String,
}

/// License and exception texts an expression refers to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseFiles {
    pub licenses: BTreeMap<String, LicenseFile>,
    pub exceptions: BTreeMap<String, LicenseFile>,
    pub unknown: Vec<String>,
}

impl LicenseFiles {
    pub fn to_json(&self) -> LicenseDbResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// ─── Database ───────────────────────────────────────────────────────

pub struct LicenseDb {
    registry: Registry,
    source: Box<dyn LicenseSource>,
}

impl fmt::Debug for LicenseDb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LicenseDb")
            .field("identifiers", &self.registry.names().len())
            .field("forms", &self.registry.form_count())
            .field("globs", &self.registry.glob_count())
            .finish()
    }
}

impl LicenseDb {
    /// Build the registry from `source`'s identifier list.
    ///
    /// Failing to list identifiers is fatal: there is no usable database
    /// without them.
    pub fn from_source(
        source: impl LicenseSource + 'static,
        config: &LicenseDbConfig,
    ) -> LicenseDbResult<Self> {
        let names = source.list()?;
        let registry = Registry::build(names, config)?;
        Ok(Self {
            registry,
            source: Box::new(source),
        })
    }

    /// Open the text directory named by `config.data_dir`
    pub fn open(config: &LicenseDbConfig) -> LicenseDbResult<Self> {
        let dir = config
            .data_dir
            .as_deref()
            .ok_or(LicenseDbError::MissingDataDir)?;
        Self::from_source(DirSource::open(dir)?, config)
    }

    /// Open a text directory with the default tables
    pub fn open_dir(dir: &Path) -> LicenseDbResult<Self> {
        Self::from_source(DirSource::open(dir)?, &LicenseDbConfig::default())
    }

    /// Make `db` the process-wide instance. Only the first install succeeds;
    /// later ones hand their value back.
    pub fn install(db: LicenseDb) -> Result<&'static LicenseDb, LicenseDb> {
        GLOBAL.try_insert(db).map_err(|(_, rejected)| rejected)
    }

    /// The process-wide instance, if one was installed
    pub fn global() -> Option<&'static LicenseDb> {
        GLOBAL.get()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Canonical identifiers in source order
    pub fn list(&self) -> &[String] {
        self.registry.names()
    }

    /// Text of an exact identifier
    pub fn text(&self, id: &str) -> Option<String> {
        if !self.registry.contains(id) {
            return None;
        }
        self.source.text(id)
    }

    pub fn is_exception(&self, id: &str) -> bool {
        self.registry.is_exception(id)
    }

    pub fn canonicalize(&self, token: &str) -> String {
        self.registry.canonicalize_token(token)
    }

    /// Canonical rendering of an expression, single-spaced
    pub fn normalize(&self, text: &str) -> String {
        self.registry.normalize(text)
    }

    /// Expression rewritten with its shortest unambiguous globs
    pub fn to_short_text(&self, text: &str) -> String {
        self.registry.to_short_text(text)
    }

    /// Presentable abbreviations of a single identifier
    pub fn short_forms_of(&self, id: &str) -> Vec<String> {
        self.registry.short_forms_of(id)
    }

    /// Concrete identifier a glob stands for. Only identifiers whose text
    /// the source can provide count as resolved.
    pub fn resolve_glob(&self, glob: &str) -> String {
        let has_text = |id: &str| self.registry.contains(id) && self.source.has_text(id);
        self.registry.resolve_glob_where(glob, &has_text)
    }

    /// Symmetric spelling-insensitive equivalence of two expressions
    pub fn are_matching(&self, a: &str, b: &str) -> bool {
        self.registry.expressions_equivalent(a, b)
    }

    /// Partition an expression's tokens by resolution status
    pub fn extract(&self, expr: &str) -> Extraction {
        let mut extraction = Extraction::default();

        for token in self.registry.tokenize(expr) {
            if Keyword::is_canonical(&token) {
                continue;
            }
            let base = token.strip_suffix('+');
            let bucket = if self.registry.contains(&token) {
                self.identifier_bucket(&mut extraction, &token)
            } else if self.registry.is_glob(&token) {
                &mut extraction.ambiguous
            } else if let Some(base) = base.filter(|b| self.registry.contains(b)) {
                self.identifier_bucket(&mut extraction, base)
            } else if base.map_or(false, |b| self.registry.is_glob(b)) {
                &mut extraction.ambiguous
            } else {
                &mut extraction.unknown
            };
            if !bucket.contains(&token) {
                bucket.push(token);
            }
        }

        extraction
    }

    fn identifier_bucket<'e>(&self, extraction: &'e mut Extraction, id: &str) -> &'e mut Vec<String> {
        if self.registry.is_exception(id) {
            &mut extraction.exceptions
        } else {
            &mut extraction.licenses
        }
    }

    /// Resolve every token of an expression to a concrete identifier and
    /// load its text.
    ///
    /// Globs resolve to their first match. Short names are computed over the
    /// resolved identifiers together, so each is unambiguous among them.
    pub fn get_files(&self, expr: &str) -> LicenseFiles {
        let mut resolved: Vec<String> = Vec::new();
        let mut files = LicenseFiles::default();

        for token in self.registry.tokenize(expr) {
            if Keyword::is_canonical(&token) {
                continue;
            }
            let mut id = self.resolve_glob(&token);
            if !self.registry.contains(&id) {
                if let Some(base) = token.strip_suffix('+') {
                    id = self.resolve_glob(base);
                }
            }
            if self.registry.contains(&id) {
                if !resolved.contains(&id) {
                    resolved.push(id);
                }
            } else if !files.unknown.contains(&token) {
                files.unknown.push(token);
            }
        }

        let short_names = self.registry.short_forms(&resolved);
        for id in resolved {
            let Some(text) = self.source.text(&id) else {
                tracing::warn!("No text available for listed identifier '{}'", id);
                files.unknown.push(id);
                continue;
            };
            let short_name = short_names.get(&id).cloned().unwrap_or_else(|| id.clone());
            let file = LicenseFile { text, short_name };
            if self.registry.is_exception(&id) {
                files.exceptions.insert(id, file);
            } else {
                files.licenses.insert(id, file);
            }
        }

        files
    }
}
