//! The two estimators share [`PageRank`] and [`PageRankResult`], so a caller
//! can run both over the same graph and compare their [`ScoreMap`](crate::ScoreMap)s.

mod traits;
pub use self::traits::*;

pub mod power_iteration;
pub mod random_walk;
pub use self::power_iteration::PowerIterationPageRank;
pub use self::random_walk::RandomWalkPageRank;
