//! Expression tokenizing and canonicalization
//!
//! An expression is a flat, whitespace-separated token list such as
//! `asl20 oR gPl-3.0-wIth-autOconf-excEption`. Each token is expanded if
//! deprecated, then mapped to its canonical spelling:
//! `Apache-2.0 OR GPL-3.0-or-later WITH Autoconf-exception-3.0`.
//!
//! Grouping with parentheses is not modelled; only token identity matters.

pub mod matcher;
pub mod short;

use crate::registry::{Registry, DEPRECATED_PREFIX};
use std::fmt;

// ─── Keywords ───────────────────────────────────────────────────────

/// Structural connective, never a license or exception
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    With,
    And,
    Or,
}

impl Keyword {
    pub const ALL: [Keyword; 3] = [Keyword::With, Keyword::And, Keyword::Or];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::With => "WITH",
            Self::And => "AND",
            Self::Or => "OR",
        }
    }

    /// Case-insensitive keyword lookup
    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(token))
    }

    /// Exact match against the canonical (upper-case) spelling, the only
    /// spelling a canonicalized token list can contain
    pub fn is_canonical(token: &str) -> bool {
        Self::ALL.iter().any(|k| k.as_str() == token)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── Canonicalization ───────────────────────────────────────────────

/// How a single raw token is handled before lookup
enum Classified<'r> {
    Blank,
    Deprecated(&'r [String]),
    Plain,
}

impl Registry {
    fn classify<'r>(&'r self, token: &str) -> Classified<'r> {
        if token.trim().is_empty() {
            return Classified::Blank;
        }
        match self.deprecated(&token.to_lowercase()) {
            Some(replacement) => Classified::Deprecated(replacement),
            None => Classified::Plain,
        }
    }

    /// Canonical spelling of one token.
    ///
    /// Tries, in order: a known form, a known glob (returned upper-cased),
    /// then both again with a trailing `+` set aside and re-attached. Unknown
    /// tokens come back verbatim.
    pub fn canonicalize_token(&self, token: &str) -> String {
        let lower = token.to_lowercase();
        if let Some(canonical) = self.canonical(&lower) {
            return strip_deprecated(canonical).to_string();
        }

        let upper = token.to_uppercase();
        if self.is_glob(&upper) {
            return upper;
        }

        if let Some(trimmed) = lower.strip_suffix('+') {
            if let Some(canonical) = self.canonical(trimmed) {
                return format!("{}+", strip_deprecated(canonical));
            }
            let upper = trimmed.to_uppercase();
            if self.is_glob(&upper) {
                return upper + "+";
            }
        }

        token.to_string()
    }

    /// Canonicalize a token sequence, dropping blanks and splicing in the
    /// expansion of deprecated tokens (transitively)
    pub fn canonicalize_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        self.canonicalize_at_depth(tokens, 0)
    }

    fn canonicalize_at_depth<S: AsRef<str>>(&self, tokens: &[S], depth: usize) -> Vec<String> {
        let mut canon = Vec::with_capacity(tokens.len());
        for token in tokens {
            let token = token.as_ref();
            match self.classify(token) {
                Classified::Blank => {}
                Classified::Deprecated(replacement) if depth < self.max_expansion_depth() => {
                    tracing::debug!("Expanding deprecated '{}' to {:?}", token, replacement);
                    canon.extend(self.canonicalize_at_depth(replacement, depth + 1));
                }
                Classified::Deprecated(_) => {
                    tracing::warn!(
                        "Deprecated expansion of '{}' exceeded depth {}",
                        token,
                        self.max_expansion_depth()
                    );
                    canon.push(self.canonicalize_token(token));
                }
                Classified::Plain => canon.push(self.canonicalize_token(token)),
            }
        }
        canon
    }

    /// Split expression text on spaces (tabs and line breaks count as
    /// spaces) and canonicalize the result
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let text = text.replace(['\t', '\n', '\r'], " ");
        let raw: Vec<&str> = text.split(' ').collect();
        self.canonicalize_tokens(&raw)
    }

    /// Canonical rendering of an expression, single-spaced
    pub fn normalize(&self, text: &str) -> String {
        join_collapsed(&self.tokenize(text))
    }
}

fn strip_deprecated(id: &str) -> &str {
    id.strip_prefix(DEPRECATED_PREFIX).unwrap_or(id)
}

/// Join tokens with single spaces, collapsing any leftover whitespace
pub(crate) fn join_collapsed<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .flat_map(|t| t.as_ref().split_whitespace())
        .collect::<Vec<_>>()
        .join(" ")
}
