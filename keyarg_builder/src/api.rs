mod core;
mod extract;
mod parameter;

pub use self::core::*;
pub use parameter::*;
