use crate::ScoreMap;
use algograph::graph::*;

pub trait PageRank {
    type Ranking: PageRankResult;

    fn calc(&self) -> Self::Ranking;
}

pub trait PageRankResult {
    fn page_rank(&self) -> &ScoreMap;
    fn debug<'a, G: QueryableGraph>(&'a self, graph: &'a G) -> impl std::fmt::Debug + 'a;
}
