use thiserror::Error;

use crate::matcher::*;
use crate::model::Prefix;
use crate::parser::ValueStore;
use crate::schema::SchemaRegistry;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The kind of a parse or configuration failure.
///
/// Success is represented by `Ok(..)`, so it has no code of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// A token lacks the option prefix.
    WrongParamFormat,
    /// A token names a parameter that is not registered.
    UnknownParameter,
    /// A flag parameter was given a value.
    FlagHasValue,
    /// A non-flag parameter was given without a value.
    MissingValue,
    /// A value cannot convert to the declared type.
    WrongValueType,
    /// A required parameter was not provided.
    MissingParameter,
    /// A parameter name was registered twice.
    AlreadyExists,
    /// An internally inconsistent parameter type.
    /// Never produced while [`crate::ValueType`] remains a closed set.
    UnknownParsingError,
}

/// The first error encountered while parsing.
///
/// The `Display` form is the human readable message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A token lacks the option prefix.
    #[error("Parse error: unknown input '{token}'; parameters are specified as '{prefix}NAME' or '{prefix}NAME=VALUE' (no spaces around '=').")]
    #[allow(missing_docs)]
    WrongParamFormat { token: String, prefix: Prefix },

    /// A token names a parameter that is not registered.
    #[error("Parse error: unknown parameter '{name}'.")]
    #[allow(missing_docs)]
    UnknownParameter { name: String, token: String },

    /// A flag parameter was given a value.
    #[error("Parse error: parameter '{name}' is a flag and does not take a value (received '{token}').")]
    #[allow(missing_docs)]
    FlagHasValue { name: String, token: String },

    /// A non-flag parameter was given without a value.
    #[error("Parse error: parameter '{name}' requires a value, specified as '{prefix}{name}=VALUE' (received '{token}').")]
    #[allow(missing_docs)]
    MissingValue {
        name: String,
        token: String,
        prefix: Prefix,
    },

    /// A value cannot convert to an integer.
    #[error("Parse error: '{value}' cannot convert to an integer for parameter '{name}' (received '{token}').")]
    #[allow(missing_docs)]
    WrongValueType {
        name: String,
        token: String,
        value: String,
    },

    /// A required parameter was not provided.
    #[error("Parse error: required parameter '{name}' was not provided.")]
    #[allow(missing_docs)]
    MissingParameter { name: String },
}

impl ParseError {
    fn coerce_error(error: CoerceError, name: &str, token: &str, prefix: Prefix) -> Self {
        let name = name.to_string();
        let token = token.to_string();

        match error {
            CoerceError::UnexpectedValue => ParseError::FlagHasValue { name, token },
            CoerceError::MissingValue => ParseError::MissingValue {
                name,
                token,
                prefix,
            },
            CoerceError::InvalidInteger(value) => ParseError::WrongValueType { name, token, value },
        }
    }

    /// The [`ErrorCode`] of this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::WrongParamFormat { .. } => ErrorCode::WrongParamFormat,
            ParseError::UnknownParameter { .. } => ErrorCode::UnknownParameter,
            ParseError::FlagHasValue { .. } => ErrorCode::FlagHasValue,
            ParseError::MissingValue { .. } => ErrorCode::MissingValue,
            ParseError::WrongValueType { .. } => ErrorCode::WrongValueType,
            ParseError::MissingParameter { .. } => ErrorCode::MissingParameter,
        }
    }

    /// The offending parameter name.
    /// When no name could be extracted (a token without the prefix), this is the raw token.
    pub fn parameter(&self) -> &str {
        match self {
            ParseError::WrongParamFormat { token, .. } => token,
            ParseError::UnknownParameter { name, .. }
            | ParseError::FlagHasValue { name, .. }
            | ParseError::MissingValue { name, .. }
            | ParseError::WrongValueType { name, .. }
            | ParseError::MissingParameter { name } => name,
        }
    }

    /// The full raw token, or the empty string when the error does not stem from a token.
    pub fn token(&self) -> &str {
        match self {
            ParseError::WrongParamFormat { token, .. }
            | ParseError::UnknownParameter { token, .. }
            | ParseError::FlagHasValue { token, .. }
            | ParseError::MissingValue { token, .. }
            | ParseError::WrongValueType { token, .. } => token,
            ParseError::MissingParameter { .. } => "",
        }
    }
}

pub(crate) struct Parser<'r> {
    prefix: Prefix,
    token_matcher: TokenMatcher,
    registry: &'r SchemaRegistry,
}

impl<'r> std::fmt::Debug for Parser<'r> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser{..}").finish()
    }
}

impl<'r> Parser<'r> {
    pub(crate) fn new(prefix: Prefix, registry: &'r SchemaRegistry) -> Self {
        Self {
            prefix,
            token_matcher: TokenMatcher::new(prefix),
            registry,
        }
    }

    /// Parse the option tokens (the invocation name excluded) into the store, stopping at the first error.
    ///
    /// Values stored before the failing token remain in the store.
    pub(crate) fn consume(&self, tokens: &[&str], store: &mut ValueStore) -> Result<(), ParseError> {
        for &token in tokens {
            // 1. Check the prefix, and split off the value.
            let MatchToken { name, value } =
                self.token_matcher
                    .feed(token)
                    .ok_or_else(|| ParseError::WrongParamFormat {
                        token: token.to_string(),
                        prefix: self.prefix,
                    })?;

            // 2. Find the declared parameter.
            let spec = self
                .registry
                .get(name)
                .ok_or_else(|| ParseError::UnknownParameter {
                    name: name.to_string(),
                    token: token.to_string(),
                })?;

            // 3. Convert the value into the declared type.
            let parsed = coerce(spec.value_type(), value)
                .map_err(|error| ParseError::coerce_error(error, name, token, self.prefix))?;

            #[cfg(feature = "tracing_debug")]
            {
                debug!("Matched '{token}' to {parsed:?}.");
            }

            // The last occurrence of a parameter wins.
            store.insert(name, parsed);
        }

        // Report the lexicographically first, so the outcome doesn't depend on map ordering.
        let missing = self
            .registry
            .iter()
            .filter(|spec| spec.required() && !store.contains(spec.name()))
            .min_by(|a, b| a.name().cmp(b.name()));

        if let Some(spec) = missing {
            return Err(ParseError::MissingParameter {
                name: spec.name().to_string(),
            });
        }

        Ok(())
    }
}
