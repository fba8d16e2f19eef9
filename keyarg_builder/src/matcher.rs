mod coerce;
mod model;

pub(crate) use coerce::*;
pub(crate) use model::*;
