use crate::constant::*;
use crate::model::Prefix;

/// A token that carries the option prefix, split at its first `=`.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct MatchToken<'t> {
    pub name: &'t str,
    pub value: Option<&'t str>,
}

#[derive(Debug)]
pub(crate) struct TokenMatcher {
    prefix: Prefix,
}

impl TokenMatcher {
    pub(crate) fn new(prefix: Prefix) -> Self {
        Self { prefix }
    }

    /// Match a single raw token, or `None` if it lacks the prefix.
    pub(crate) fn feed<'t>(&self, token: &'t str) -> Option<MatchToken<'t>> {
        let width = self.prefix.width();

        if token.chars().take(width).filter(|c| *c == PREFIX_MARKER).count() != width {
            return None;
        }

        // The marker is ascii, so `width` is a char boundary.
        let remainder = &token[width..];

        match remainder.split_once(VALUE_SEPARATOR) {
            Some((name, value)) => Some(MatchToken {
                name,
                value: Some(value),
            }),
            None => Some(MatchToken {
                name: remainder,
                value: None,
            }),
        }
    }
}
