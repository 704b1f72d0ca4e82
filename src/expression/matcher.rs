//! Expression matching: do two expressions name the same licenses?
//!
//! Matching is set-based and spelling-insensitive: `GPL3 MIT` matches
//! `MIT GPL3+`. Globs make it deliberately loose (`GPL` matches `GPL3`), so
//! the relation is symmetric but not transitive.

use super::Keyword;
use crate::registry::Registry;

impl Registry {
    /// Split a canonical token list into (licenses, exceptions), dropping
    /// keywords and blanks
    pub fn separate<'t, S: AsRef<str>>(&self, tokens: &'t [S]) -> (Vec<&'t str>, Vec<&'t str>) {
        let mut licenses = Vec::with_capacity(tokens.len());
        let mut exceptions = Vec::new();
        for token in tokens {
            let token = token.as_ref();
            if token.trim().is_empty() || Keyword::parse(token).is_some() {
                continue;
            }
            if self.is_exception(token) {
                exceptions.push(token);
            } else {
                licenses.push(token);
            }
        }
        (licenses, exceptions)
    }

    /// Two tokens match when equal, when they differ only by a trailing `+`,
    /// or when their glob closures (the token plus everything its glob entry
    /// lists) intersect
    pub fn tokens_match(&self, a: &str, b: &str) -> bool {
        if a == b {
            return true;
        }
        if a.strip_suffix('+') == Some(b) || b.strip_suffix('+') == Some(a) {
            return true;
        }
        let closure_b = self.glob_closure(b);
        self.glob_closure(a).any(|va| closure_b.clone().any(|vb| vb == va))
    }

    fn glob_closure<'a>(&'a self, token: &'a str) -> impl Iterator<Item = &'a str> + Clone + 'a {
        std::iter::once(token).chain(
            self.glob_matches(token)
                .unwrap_or(&[])
                .iter()
                .map(String::as_str),
        )
    }

    /// Every element of `a` matches some element of `b`
    pub fn lists_match_one_way<A: AsRef<str>, B: AsRef<str>>(&self, a: &[A], b: &[B]) -> bool {
        a.iter().all(|ea| {
            b.iter()
                .any(|eb| self.tokens_match(ea.as_ref(), eb.as_ref()))
        })
    }

    fn token_lists_match_one_way<S: AsRef<str>>(&self, a: &[S], b: &[S]) -> bool {
        let (a_licenses, a_exceptions) = self.separate(a);
        let (b_licenses, b_exceptions) = self.separate(b);
        // exceptions only count when both sides name some
        if !a_exceptions.is_empty()
            && !b_exceptions.is_empty()
            && !self.lists_match_one_way(&a_exceptions, &b_exceptions)
        {
            return false;
        }
        self.lists_match_one_way(&a_licenses, &b_licenses)
    }

    /// Symmetric equivalence of two canonical token lists
    pub fn token_lists_match<S: AsRef<str>>(&self, a: &[S], b: &[S]) -> bool {
        self.token_lists_match_one_way(a, b) && self.token_lists_match_one_way(b, a)
    }

    /// Symmetric equivalence of two expression texts
    pub fn expressions_equivalent(&self, a: &str, b: &str) -> bool {
        let a = self.tokenize(a);
        let b = self.tokenize(b);
        self.token_lists_match(&a, &b)
    }
}
