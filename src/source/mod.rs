//! License text sources
//!
//! The registry only needs two things from the outside world: the closed list
//! of canonical identifiers, and the text body behind an exact identifier.
//! Both are provided through [`LicenseSource`].

pub mod dir;

pub use dir::DirSource;

use crate::LicenseDbResult;

/// Provider of canonical identifiers and their texts.
///
/// `list` is called once, before the registry is built. Its order is the
/// insertion order every glob match list inherits.
pub trait LicenseSource: Send + Sync {
    /// Every canonical identifier, verbatim (including `deprecated_` entries).
    fn list(&self) -> LicenseDbResult<Vec<String>>;

    /// Text body for an exact identifier, `None` for anything else.
    fn text(&self, id: &str) -> Option<String>;

    /// Whether `text(id)` would return a body
    fn has_text(&self, id: &str) -> bool {
        self.text(id).is_some()
    }
}

/// In-memory source, listed in insertion order
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    entries: Vec<(String, String)>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an identifier with its text. Re-inserting a name replaces its text
    /// but keeps its original position.
    pub fn insert(&mut self, id: impl Into<String>, text: impl Into<String>) {
        let id = id.into();
        let text = text.into();
        match self.entries.iter_mut().find(|(name, _)| *name == id) {
            Some(entry) => entry.1 = text,
            None => self.entries.push((id, text)),
        }
    }

    pub fn with(mut self, id: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(id, text);
        self
    }

    /// Build a source whose texts are placeholders naming the identifier
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut source = Self::new();
        for name in names {
            let name = name.into();
            let text = format!("{} license text", name);
            source.insert(name, text);
        }
        source
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LicenseSource for MemorySource {
    fn list(&self) -> LicenseDbResult<Vec<String>> {
        Ok(self.entries.iter().map(|(name, _)| name.clone()).collect())
    }

    fn text(&self, id: &str) -> Option<String> {
        self.entries
            .iter()
            .find(|(name, _)| name == id)
            .map(|(_, text)| text.clone())
    }

    fn has_text(&self, id: &str) -> bool {
        self.entries.iter().any(|(name, _)| name == id)
    }
}

/// Fixture source shared by unit tests: a sorted subset of real SPDX ids
#[cfg(test)]
pub(crate) fn fixture_source() -> MemorySource {
    MemorySource::from_names(
        include_str!("../../tests/fixtures/spdx-ids.txt")
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty()),
    )
}
