use algograph::graph::*;
use quickcheck::Arbitrary;

pub fn add_cycle<G: GrowableGraph>(g: &mut G, n: usize) -> Vec<VertexId> {
    assert!(n > 0, "{n}");
    let vs: Vec<_> = (0..n).map(|_| g.add_vertex()).collect();
    for (i, u) in vs.iter().enumerate() {
        g.add_edge(*u, vs[(i + 1) % n]);
    }
    vs
}

/// Vertices 0..5 with edges 0→1, 1→2, 2→0, 2→3, 3→4, 4→2.
pub fn five_vertices() -> (directed::TreeBackedGraph, Vec<VertexId>) {
    let mut g = directed::TreeBackedGraph::new();
    let vs: Vec<_> = (0..5).map(|_| g.add_vertex()).collect();
    for (u, v) in [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2)] {
        g.add_edge(vs[u], vs[v]);
    }
    (g, vs)
}

/// A→B, C→A; B is dangling.
pub fn one_dangling() -> (directed::TreeBackedGraph, [VertexId; 3]) {
    let mut g = directed::TreeBackedGraph::new();
    let a = g.add_vertex();
    let b = g.add_vertex();
    let c = g.add_vertex();
    g.add_edge(a, b);
    g.add_edge(c, a);
    (g, [a, b, c])
}

/// Non-empty, may contain dangling vertices, self-loops and parallel edges.
#[derive(Debug, Clone)]
pub struct RandomGraph {
    pub graph: directed::TreeBackedGraph,
}

impl Arbitrary for RandomGraph {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        const N: usize = 12;

        let n: usize = usize::arbitrary(g) % N + 1;
        let mut graph = directed::TreeBackedGraph::new();
        let vertices: Vec<_> = (0..n).map(|_| graph.add_vertex()).collect();
        for _ in 0..(usize::arbitrary(g) % (2 * n + 1)) {
            let v0 = vertices[usize::arbitrary(g) % vertices.len()];
            let v1 = vertices[usize::arbitrary(g) % vertices.len()];
            graph.add_edge(v0, v1);
        }
        Self { graph }
    }
}

/// Like [`RandomGraph`] but every vertex has at least one out-edge.
#[derive(Debug, Clone)]
pub struct NoDanglingGraph {
    pub graph: directed::TreeBackedGraph,
}

impl Arbitrary for NoDanglingGraph {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let RandomGraph { mut graph } = RandomGraph::arbitrary(g);
        let vertices: Vec<_> = graph.iter_vertices().collect();
        for u in vertices.iter() {
            if graph.out_edges(u).next().is_none() {
                let v = vertices[usize::arbitrary(g) % vertices.len()];
                graph.add_edge(*u, v);
            }
        }
        Self { graph }
    }
}
