// Domain layer module exports
// Domain is independent of transport and storage concerns

pub mod errors;
pub mod repositories;
pub mod team;

pub use errors::{Error, ErrorKind, Result};
