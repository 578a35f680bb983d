#![forbid(unsafe_code)]

mod positions;
mod rows;
mod schema;

pub(super) use positions::*;
pub(super) use rows::*;
pub(super) use schema::prepare_schema;
