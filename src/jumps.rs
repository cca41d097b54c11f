/*
 * SPDX-FileCopyrightText: 2026 The multilayer-percolation Authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Quotient-graph construction and shortest-path jump counting for a single
//! spanning cluster, ported from `original_source/jumps.c`.
//!
//! A percolating cluster is collapsed into a graph: same-layer, same-cluster
//! runs of sites joined by an open in-plane bond are merged into one vertex
//! (a cheap reduction that keeps the graph small without changing the answer),
//! every remaining in-plane edge carries weight 0, and every inter-layer edge
//! carries weight 1. Two extra vertices, `SOURCE` and `SINK`, are wired to the
//! boundary the cluster spans; the minimum number of layer-to-layer jumps is
//! then the shortest path from `SOURCE` to `SINK`.

use std::cmp::Reverse;
use std::collections::HashMap;

use dary_heap::BinaryHeap;

use crate::cluster::ClusterField;
use crate::lattice::{Bonds, Direction};
use crate::permutation::histogram_index;

pub const SOURCE: u32 = 0;
pub const SINK: u32 = 1;

/// The axis along which a cluster spans the lattice, determining which faces
/// get wired to `SOURCE`/`SINK`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spanning {
    X,
    Y,
}

pub struct JumpResult {
    pub jumps: u64,
    /// Rank of the permutation obtained by sorting layers by how many of the
    /// cluster's sites they hold.
    pub permutation_bin: u64,
}

#[derive(Default)]
struct Adjacency {
    edges: Vec<HashMap<u32, u32>>,
}

impl Adjacency {
    fn new(n: usize) -> Self {
        Self {
            edges: (0..n).map(|_| HashMap::new()).collect(),
        }
    }

    fn add_edge(&mut self, a: u32, b: u32, weight: u32) {
        self.edges[a as usize].insert(b, weight);
        self.edges[b as usize].insert(a, weight);
    }
}

fn dijkstra(adj: &Adjacency, from: u32, to: u32) -> u64 {
    let n = adj.edges.len();
    let mut dist = vec![u64::MAX; n];
    dist[from as usize] = 0;

    let mut heap = BinaryHeap::new();
    heap.push(Reverse((0u64, from)));

    while let Some(Reverse((d, u))) = heap.pop() {
        if d > dist[u as usize] {
            continue;
        }
        for (&v, &w) in &adj.edges[u as usize] {
            let next = d + w as u64;
            if next < dist[v as usize] {
                dist[v as usize] = next;
                heap.push(Reverse((next, v)));
            }
        }
    }

    dist[to as usize]
}

/// Evaluates the minimum number of inter-layer jumps required to cross
/// cluster `id` along `spanning`, and the permutation-histogram bin the
/// cluster's per-layer site counts rank to.
pub fn evaluate(clusters: &ClusterField, bonds: &Bonds, id: u32, spanning: Spanning) -> JumpResult {
    let dims = clusters.dims();
    let (lx, ly, nl) = (dims.lx, dims.ly, dims.nrlayers);

    // vertex_id[l][x + lx*y]: None for sites outside the cluster, Some(v)
    // (v >= 2) for member sites, with same-layer runs collapsed to one id.
    let mut vertex_id: Vec<Vec<Option<u32>>> = (0..nl).map(|_| vec![None; lx * ly]).collect();
    let mut bins = vec![0u32; nl];
    let mut next_vertex = 2u32;

    let idx = |x: usize, y: usize| x + lx * y;

    for (x, y, l) in clusters.sites() {
        if clusters.get(x, y, l) != id {
            continue;
        }

        let reuse_from_x = x > 0
            && clusters.get(x - 1, y, l) == id
            && bonds.horizontal[l].get(x - 1, y, Direction::X);
        let reuse_from_y = y > 0
            && clusters.get(x, y - 1, l) == id
            && bonds.horizontal[l].get(x, y - 1, Direction::Y);

        let vid = if reuse_from_x {
            vertex_id[l][idx(x - 1, y)].expect("neighbor in same cluster must already have a vertex id")
        } else if reuse_from_y {
            vertex_id[l][idx(x, y - 1)].expect("neighbor in same cluster must already have a vertex id")
        } else {
            let v = next_vertex;
            next_vertex += 1;
            v
        };

        vertex_id[l][idx(x, y)] = Some(vid);
        bins[l] += 1;
    }

    let nr_vertices = next_vertex as usize;
    let mut adj = Adjacency::new(nr_vertices);

    for (x, y, l) in clusters.sites() {
        let Some(id_here) = vertex_id[l][idx(x, y)] else {
            continue;
        };

        if x != 0 && bonds.horizontal[l].get(x - 1, y, Direction::X) {
            if let Some(other) = vertex_id[l][idx(x - 1, y)] {
                adj.add_edge(id_here, other, 0);
            }
        }
        if y != 0 && bonds.horizontal[l].get(x, y - 1, Direction::Y) {
            if let Some(other) = vertex_id[l][idx(x, y - 1)] {
                adj.add_edge(id_here, other, 0);
            }
        }
        if l != 0 && bonds.vertical_open(l - 1, x, y) {
            if let Some(other) = vertex_id[l - 1][idx(x, y)] {
                adj.add_edge(id_here, other, 1);
            }
        }
        if x != lx - 1 && bonds.horizontal[l].get(x, y, Direction::X) {
            if let Some(other) = vertex_id[l][idx(x + 1, y)] {
                adj.add_edge(id_here, other, 0);
            }
        }
        if y != ly - 1 && bonds.horizontal[l].get(x, y, Direction::Y) {
            if let Some(other) = vertex_id[l][idx(x, y + 1)] {
                adj.add_edge(id_here, other, 0);
            }
        }
        if l != nl - 1 && bonds.vertical_open(l, x, y) {
            if let Some(other) = vertex_id[l + 1][idx(x, y)] {
                adj.add_edge(id_here, other, 1);
            }
        }
        if l == nl - 1 && bonds.pbcz && bonds.vertical_open(nl - 1, x, y) {
            if let Some(other) = vertex_id[0][idx(x, y)] {
                adj.add_edge(id_here, other, 1);
            }
        }

        match spanning {
            Spanning::X => {
                if x == 0 {
                    adj.add_edge(id_here, SOURCE, 0);
                }
                if x == lx - 1 {
                    adj.add_edge(id_here, SINK, 0);
                }
            }
            Spanning::Y => {
                if y == 0 {
                    adj.add_edge(id_here, SOURCE, 0);
                }
                if y == ly - 1 {
                    adj.add_edge(id_here, SINK, 0);
                }
            }
        }
    }

    let jumps = dijkstra(&adj, SOURCE, SINK);
    let permutation_bin = histogram_index(&bins);

    JumpResult { jumps, permutation_bin }
}
