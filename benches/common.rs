#![allow(dead_code)]

use digraph_walk::Graph;
use fastrand::Rng;
use petgraph::prelude::*;

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

/// Generator of random edges in the G(n, p) model, each pair `(v, w)` with
/// `w < v` being selected with probability `p`.
pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_count: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_count,
            p,
        }
    }

    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

        while *w >= *v && *v < n {
            *w -= *v;
            *v += 1;
        }

        if *v < n { Some((*v, *w)) } else { None }
    }
}

fn vertex_name(i: usize) -> String {
    format!("v{i:06}")
}

/// Random edges, each oriented either way if `acyclic` is false.
fn random_edges(
    vertex_count: usize,
    density: f32,
    acyclic: bool,
    rng: &mut Rng,
) -> Vec<(usize, usize)> {
    let mut edges = RandomEdges::new(vertex_count, density);
    let mut result = Vec::new();

    while let Some((u, v)) = edges.next_edge(rng) {
        if acyclic || rng.bool() {
            result.push((u, v));
        } else {
            result.push((v, u));
        }
    }

    result
}

pub fn digraph_walk_random(
    vertex_count: usize,
    density: f32,
    acyclic: bool,
    rng: &mut Rng,
) -> Graph {
    let mut adjacency = vec![Vec::new(); vertex_count];

    for (u, v) in random_edges(vertex_count, density, acyclic, rng) {
        adjacency[u].push(vertex_name(v));
    }

    Graph::from_adjacency(
        "random",
        adjacency
            .into_iter()
            .enumerate()
            .map(|(i, adjacents)| (vertex_name(i), adjacents)),
    )
}

pub fn petgraph_random(
    vertex_count: usize,
    density: f32,
    acyclic: bool,
    rng: &mut Rng,
) -> petgraph::Graph<String, (), petgraph::Directed> {
    let mut graph = petgraph::Graph::with_capacity(vertex_count, 0);

    for i in 0..vertex_count {
        graph.add_node(vertex_name(i));
    }

    for (u, v) in random_edges(vertex_count, density, acyclic, rng) {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
    }

    graph
}
