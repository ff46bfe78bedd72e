//! PageRank as the visitation frequency of one teleporting random walker.
//!
//! At every step the walker records a visit to its current vertex, then with
//! probability `damping` follows a uniformly chosen out-edge and otherwise
//! teleports to a uniformly chosen vertex of the whole graph. Scores are the
//! visit counts divided by the number of steps, so they always sum to 1.
//!
//! The walker draws from a random source the caller hands over; seed it to
//! get reproducible runs.

use super::*;
use crate::{dangling_vertices, error::*, out_neighbors, ScoreMap};
use algograph::graph::{QueryableGraph, VertexId};
use rand::Rng;
use std::{cell::RefCell, collections::HashMap};
use tracing::debug;

/// What the walker does on a vertex without out-edges when the coin says
/// "follow an edge".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DanglingPolicy {
    /// Teleport regardless of the coin.
    #[default]
    Teleport,
    /// Stay on the dangling vertex for this step.
    SelfLoop,
    /// Refuse graphs with dangling vertices unless `damping` is 0.
    Reject,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    pub damping: f64,
    pub steps: usize,
    pub dangling: DanglingPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: 0.85,
            steps: 10_000,
            dangling: DanglingPolicy::default(),
        }
    }
}

pub struct RandomWalkPageRank<R: Rng> {
    damping: f64,
    steps: usize,
    dangling: DanglingPolicy,
    vertices: Vec<VertexId>,
    // indices into `vertices`, one per out-edge
    out_links: Vec<Vec<usize>>,
    rng: RefCell<R>,
}

#[derive(Debug, Clone)]
pub struct Ranking {
    pub page_rank: ScoreMap,
    pub visits: HashMap<VertexId, u64, ahash::RandomState>,
    pub steps: usize,
    /// Moves that jumped to a random vertex, forced ones included.
    pub teleports: usize,
}

impl<R: Rng> RandomWalkPageRank<R> {
    pub fn new<G: QueryableGraph>(g: &G, config: &Config, rng: R) -> Result<Self> {
        check_damping(config.damping)?;
        check_positive("steps", config.steps)?;
        check_vertex_size(g.vertex_size())?;

        let vertices: Vec<VertexId> = g.iter_vertices().collect();
        let index: HashMap<VertexId, usize, ahash::RandomState> =
            vertices.iter().enumerate().map(|(i, v)| (*v, i)).collect();
        let out_links: Vec<Vec<usize>> = vertices
            .iter()
            .map(|u| {
                out_neighbors(g, u)
                    .into_iter()
                    .filter_map(|v| index.get(&v).copied())
                    .collect()
            })
            .collect();

        if config.dangling == DanglingPolicy::Reject && config.damping > 0.0 {
            if let Some(v) = dangling_vertices(g).first() {
                return Err(Error::InvalidInput(format!(
                    "dangling vertex {v:?} is rejected"
                )));
            }
        }
        debug!(
            vertices = vertices.len(),
            steps = config.steps,
            damping = config.damping,
            "random walker ready"
        );
        Ok(Self {
            damping: config.damping,
            steps: config.steps,
            dangling: config.dangling,
            vertices,
            out_links,
            rng: RefCell::new(rng),
        })
    }
}

impl<R: Rng> PageRank for RandomWalkPageRank<R> {
    type Ranking = self::Ranking;

    fn calc(&self) -> Self::Ranking {
        let mut rng = self.rng.borrow_mut();
        let n = self.vertices.len();
        let mut visits = vec![0u64; n];
        let mut teleports = 0;
        let mut cur = rng.random_range(0..n);
        for _ in 0..self.steps {
            visits[cur] += 1;
            let follow = rng.random_bool(self.damping);
            let links = &self.out_links[cur];
            cur = match (follow, links.is_empty(), self.dangling) {
                (true, false, _) => links[rng.random_range(0..links.len())],
                (true, true, DanglingPolicy::SelfLoop) => cur,
                _ => {
                    teleports += 1;
                    rng.random_range(0..n)
                }
            };
        }

        let steps = self.steps as f64;
        let page_rank = self
            .vertices
            .iter()
            .zip(visits.iter())
            .map(|(v, k)| (*v, *k as f64 / steps))
            .collect();
        let visits = self.vertices.iter().copied().zip(visits).collect();
        debug!(steps = self.steps, teleports, "random walk finished");
        Self::Ranking {
            page_rank,
            visits,
            steps: self.steps,
            teleports,
        }
    }
}

/// One walk of `steps` steps over `graph`.
pub fn estimate<G, R>(graph: &G, damping: f64, steps: usize, rng: &mut R) -> Result<ScoreMap>
where
    G: QueryableGraph,
    R: Rng,
{
    let config = Config {
        damping,
        steps,
        ..Config::default()
    };
    let walker = RandomWalkPageRank::new(graph, &config, rng)?;
    Ok(walker.calc().page_rank)
}

impl PageRankResult for self::Ranking {
    fn page_rank(&self) -> &ScoreMap {
        &self.page_rank
    }

    fn debug<'a, G: QueryableGraph>(&'a self, graph: &'a G) -> impl std::fmt::Debug + 'a {
        RankingDebug {
            graph,
            ranking: self,
        }
    }
}

pub struct RankingDebug<'a, G: QueryableGraph> {
    graph: &'a G,
    ranking: &'a self::Ranking,
}

impl<G: QueryableGraph> std::fmt::Debug for RankingDebug<'_, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for v in self.graph.iter_vertices() {
            let p = self.ranking.page_rank.get(&v).copied().unwrap_or(0.0);
            let k = self.ranking.visits.get(&v).copied().unwrap_or(0);
            writeln!(f, "{v:?}: {p:?}, {k}")?;
        }
        Ok(())
    }
}
