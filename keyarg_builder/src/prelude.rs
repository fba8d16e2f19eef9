//! Traits which, typically, may be imported without concern: `use keyarg::prelude::*`.

use crate::model::ParsedValue;
use crate::schema::ParameterSpec;

/// Behaviour for a type `T` to be extracted from a parsed value via `GeneralParser::get::<T>`.
///
/// Extraction never converts across types: an integer parameter cannot be extracted as text, and so on.
// Needs to be imported in order to implement a custom `Extractable`.
pub trait Extractable: Sized {
    /// Extract from the value captured on the command line, or `None` if the tag doesn't match.
    fn extract(value: &ParsedValue) -> Option<Self>;

    /// The value for a declared parameter that was not captured.
    fn absent(_spec: &ParameterSpec) -> Option<Self> {
        None
    }
}
