mod base;
mod interface;
mod middleware;
mod printer;
mod store;

pub use base::{ErrorCode, ParseError};
pub use middleware::GeneralParser;

pub(crate) use interface::*;
pub(crate) use store::*;
