//! Builder module for `keyarg`.
//! See [documentation root](https://docs.rs/keyarg/latest/keyarg/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod matcher;
mod model;
mod parser;
#[allow(missing_docs)]
pub mod prelude;
mod schema;

pub use api::*;
pub use model::*;
pub use parser::{ErrorCode, GeneralParser, ParseError};
pub use schema::{ConfigError, ParameterSpec};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
