use algograph::graph::*;
use std::{collections::HashMap, hash::Hash};

/// Score of every vertex, as produced by one estimation.
pub type ScoreMap = HashMap<VertexId, f64, ahash::RandomState>;

pub fn norm_1<K: Ord + Hash>(v: &HashMap<K, f64, ahash::RandomState>) -> f64 {
    v.values().map(|x| x.abs()).sum()
}

pub fn total_mass(v: &ScoreMap) -> f64 {
    v.values().sum()
}

/// L1 distance between two rankings; a vertex missing on one side counts as 0.
pub fn l1_distance(a: &ScoreMap, b: &ScoreMap) -> f64 {
    let only_b: f64 = b
        .iter()
        .filter(|(v, _)| !a.contains_key(*v))
        .map(|(_, x)| x.abs())
        .sum();
    let both: f64 = a
        .iter()
        .map(|(v, x)| (x - b.get(v).copied().unwrap_or(0.0)).abs())
        .sum();
    both + only_b
}

pub fn out_degree<G: QueryableGraph>(graph: &G, v: &VertexId) -> usize {
    graph.out_edges(v).count()
}

/// Sinks of `v`'s out-edges. Parallel edges repeat their sink.
pub fn out_neighbors<G: QueryableGraph>(graph: &G, v: &VertexId) -> Vec<VertexId> {
    graph.out_edges(v).map(|e| e.sink).collect()
}

/// Sources of `v`'s in-edges. Parallel edges repeat their source.
pub fn in_neighbors<G: QueryableGraph>(graph: &G, v: &VertexId) -> Vec<VertexId> {
    graph.in_edges(v).map(|e| e.source).collect()
}

pub fn dangling_vertices<G: QueryableGraph>(graph: &G) -> Vec<VertexId> {
    graph
        .iter_vertices()
        .filter(|v| graph.out_edges(v).next().is_none())
        .collect()
}
