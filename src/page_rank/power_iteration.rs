//! PageRank by synchronous power iteration.
//!
//! Starting from the uniform distribution, every iteration recomputes each
//! vertex from the previous snapshot only:
//!
//! ```text
//! new(i) = (1 - d) / n + d * sum(old(j) / out_degree(j) for every edge j -> i)
//! ```
//!
//! By default mass held by dangling vertices is not passed on and leaks out of
//! the distribution each iteration, so the scores only sum to 1 when every
//! vertex has an out-edge. [`DanglingMass::Redistribute`] spreads that mass
//! uniformly instead, which is the textbook formulation.

use super::*;
use crate::{error::*, in_neighbors, out_degree, ScoreMap};
use algograph::graph::{QueryableGraph, VertexId};
use std::collections::HashMap;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DanglingMass {
    #[default]
    Leak,
    Redistribute,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    pub damping: f64,
    pub iterations: usize,
    /// Stop before `iterations` once an iteration changes the scores by less
    /// than this in L1 norm.
    pub tolerance: Option<f64>,
    pub dangling: DanglingMass,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: 0.85,
            iterations: 100,
            tolerance: None,
            dangling: DanglingMass::default(),
        }
    }
}

pub struct PowerIterationPageRank {
    damping: f64,
    iterations: usize,
    tolerance: Option<f64>,
    dangling: DanglingMass,
    vertices: Vec<VertexId>,
    // per vertex: (index of the source, out-degree of the source), one per in-edge
    in_links: Vec<Vec<(usize, f64)>>,
    dangling_vertices: Vec<usize>,
}

#[derive(Debug, Clone)]
pub struct Ranking {
    pub page_rank: ScoreMap,
    /// Previous minus current score of the last iteration.
    pub delta: HashMap<VertexId, f64, ahash::RandomState>,
    pub iterations: usize,
}

impl PowerIterationPageRank {
    pub fn new<G: QueryableGraph>(g: &G, config: &Config) -> Result<Self> {
        check_damping(config.damping)?;
        check_positive("iterations", config.iterations)?;
        if let Some(tolerance) = config.tolerance {
            if !(tolerance.is_finite() && tolerance > 0.0) {
                return Err(Error::InvalidInput(format!("tolerance={tolerance}")));
            }
        }
        check_vertex_size(g.vertex_size())?;

        let vertices: Vec<VertexId> = g.iter_vertices().collect();
        let index: HashMap<VertexId, usize, ahash::RandomState> =
            vertices.iter().enumerate().map(|(i, v)| (*v, i)).collect();
        let out_degrees: Vec<usize> = vertices.iter().map(|u| out_degree(g, u)).collect();
        let in_links: Vec<Vec<(usize, f64)>> = vertices
            .iter()
            .map(|v| {
                in_neighbors(g, v)
                    .into_iter()
                    .filter_map(|u| index.get(&u).copied())
                    .map(|j| (j, out_degrees[j] as f64))
                    .collect()
            })
            .collect();
        let dangling_vertices: Vec<usize> = out_degrees
            .iter()
            .enumerate()
            .filter(|(_, k)| **k == 0)
            .map(|(i, _)| i)
            .collect();
        debug!(
            vertices = vertices.len(),
            dangling = dangling_vertices.len(),
            iterations = config.iterations,
            damping = config.damping,
            "power iteration ready"
        );
        Ok(Self {
            damping: config.damping,
            iterations: config.iterations,
            tolerance: config.tolerance,
            dangling: config.dangling,
            vertices,
            in_links,
            dangling_vertices,
        })
    }
}

impl PageRank for PowerIterationPageRank {
    type Ranking = self::Ranking;

    fn calc(&self) -> Self::Ranking {
        let n = self.vertices.len();
        if n == 1 {
            let v = self.vertices[0];
            return Self::Ranking {
                page_rank: [(v, 1.0)].into_iter().collect(),
                delta: [(v, 0.0)].into_iter().collect(),
                iterations: 0,
            };
        }

        let damping = self.damping;
        let n_f = n as f64;
        let mut p = vec![1.0 / n_f; n];
        let mut r = vec![0.0; n];
        let mut performed = 0;
        let mut change = 0.0;
        while performed < self.iterations {
            let teleport = (1.0 - damping) / n_f;
            let base = match self.dangling {
                DanglingMass::Leak => teleport,
                DanglingMass::Redistribute => {
                    let lost: f64 = self.dangling_vertices.iter().map(|j| p[*j]).sum();
                    teleport + damping * lost / n_f
                }
            };
            for (i, links) in self.in_links.iter().enumerate() {
                let sum: f64 = links.iter().map(|(j, k)| p[*j] / k).sum();
                r[i] = base + damping * sum;
            }
            performed += 1;

            change = p.iter().zip(r.iter()).map(|(a, b)| (a - b).abs()).sum();
            std::mem::swap(&mut p, &mut r);
            trace!(iteration = performed, change, "power iteration step");

            if self.tolerance.is_some_and(|eps| change < eps) {
                break;
            }
        }
        debug!(iterations = performed, change, "power iteration finished");

        // `p` holds the latest scores and `r` the ones before them
        let delta = self
            .vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (*v, r[i] - p[i]))
            .collect();
        let page_rank = self.vertices.iter().copied().zip(p).collect();
        Self::Ranking {
            page_rank,
            delta,
            iterations: performed,
        }
    }
}

/// `iterations` rounds of power iteration over `graph`.
pub fn estimate<G>(graph: &G, damping: f64, iterations: usize) -> Result<ScoreMap>
where
    G: QueryableGraph,
{
    let config = Config {
        damping,
        iterations,
        ..Config::default()
    };
    let pr = PowerIterationPageRank::new(graph, &config)?;
    Ok(pr.calc().page_rank)
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
            let d = self.ranking.delta.get(&v).copied().unwrap_or(0.0);
            writeln!(f, "{v:?}: {p:?}, {d:?}")?;
        }
        Ok(())
    }
}
