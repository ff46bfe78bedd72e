//! Two independent PageRank estimators over a directed [`algograph`] graph:
//! a teleporting random walker ([`page_rank::RandomWalkPageRank`]) and power
//! iteration ([`page_rank::PowerIterationPageRank`]). Both produce a
//! [`ScoreMap`] with one entry per vertex.

mod common;
pub use self::common::*;
mod error;
pub use self::error::{Error, Result};

pub mod page_rank;

#[cfg(test)]
mod testing;
