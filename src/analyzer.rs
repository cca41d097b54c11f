/*
 * SPDX-FileCopyrightText: 2026 The multilayer-percolation Authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The Hoshen-Kopelman cluster sweep and percolation analysis, ported from
//! `original_source/clusters.c`'s `nclusters_identify_percolation`.

use rand::Rng;

use crate::cluster::ClusterField;
use crate::jumps::{self, Spanning};
use crate::lattice::{Bonds, Direction};
use crate::stats::RunOutcome;
use crate::unionfind::UnionFind;

/// Which of a run's two passes this sweep belongs to: `Multilayer` keeps
/// inter-layer bonds intact and looks for clusters spanning more than one
/// layer; `SingleLayer` runs after they've been severed and looks for
/// clusters confined to one layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    Multilayer,
    SingleLayer,
}

/// Runs one Hoshen-Kopelman sweep over `bonds`, normalizes the resulting
/// labels into `clusters`, and measures every spanning cluster it finds.
///
/// `compute_jumps` gates the quotient-graph jump count and the permutation
/// histogram bin, both of which are only ever computed for the first
/// spanning cluster encountered (an upstream limitation the original author
/// flagged but never lifted: jumps are evaluated once per run, not once per
/// percolating cluster).
pub fn analyze(
    bonds: &Bonds,
    clusters: &mut ClusterField,
    pass: Pass,
    compute_jumps: bool,
    rng: &mut impl Rng,
) -> RunOutcome {
    let dims = clusters.dims();
    let (lx, ly, nl) = (dims.lx, dims.ly, dims.nrlayers);

    let mut uf = UnionFind::new();

    for (x, y, l) in clusters.sites() {
        let mut neighbours = [0u32; 3];

        if x != 0 && bonds.horizontal[l].get(x - 1, y, Direction::X) {
            neighbours[0] = clusters.get(x - 1, y, l);
        }
        if y != 0 && bonds.horizontal[l].get(x, y - 1, Direction::Y) {
            neighbours[1] = clusters.get(x, y - 1, l);
        }
        if l != 0 && bonds.vertical_open(l - 1, x, y) {
            neighbours[2] = clusters.get(x, y, l - 1);
        }

        let maximum = neighbours.iter().copied().max().unwrap_or(0);

        let label = if maximum == 0 {
            uf.make_label()
        } else {
            for &n in &neighbours {
                if n != 0 && n != maximum {
                    uf.union(n, maximum);
                }
            }
            uf.find(maximum)
        };

        clusters.set(x, y, l, label);
    }

    if bonds.pbcz {
        for x in 0..lx {
            for y in 0..ly {
                if bonds.vertical_open(nl - 1, x, y) {
                    let a = clusters.get(x, y, 0);
                    let b = clusters.get(x, y, nl - 1);
                    uf.union(a, b);
                }
            }
        }
    }

    // Normalize: resolve every site's label to its union-find root, then
    // assign fresh contiguous ids in first-seen order while tracking each
    // new cluster's (x, y) bounding box across every layer it touches.
    let mut new_labels = vec![0u32; uf.len() + 1];
    let mut bbox: Vec<(usize, usize, usize, usize)> = Vec::new(); // (minx, maxx, miny, maxy), 1-indexed by id
    bbox.push((0, 0, 0, 0)); // unused slot 0

    for (x, y, l) in clusters.sites() {
        let root = uf.find(clusters.get(x, y, l));
        let id = if new_labels[root as usize] == 0 {
            let id = bbox.len() as u32;
            new_labels[root as usize] = id;
            bbox.push((x, x, y, y));
            id
        } else {
            let id = new_labels[root as usize];
            let (minx, maxx, miny, maxy) = bbox[id as usize];
            bbox[id as usize] = (minx.min(x), maxx.max(x), miny.min(y), maxy.max(y));
            id
        };
        clusters.set(x, y, l, id);
    }

    let maxid = (bbox.len() as u32).saturating_sub(1);

    // Random site tests: one global triple, then one pair per layer - drawn
    // in this exact order so independent runs sharing one RNG stream stay
    // reproducible.
    let rx = rng.random_range(0..lx);
    let ry = rng.random_range(0..ly);
    let rl = rng.random_range(0..nl);

    let mut rx_by_layer = vec![0usize; nl];
    let mut ry_by_layer = vec![0usize; nl];
    for z in 0..nl {
        rx_by_layer[z] = rng.random_range(0..lx);
        ry_by_layer[z] = rng.random_range(0..ly);
    }

    let mut outcome = RunOutcome {
        matches_multilayer_by_layer: vec![false; nl],
        matches_single_layer_by_layer: vec![false; nl],
        ..Default::default()
    };

    let mut nr_percolating = 0u64;
    let mut first_found = false;

    for id in 1..=maxid {
        let (minx, maxx, miny, maxy) = bbox[id as usize];
        let xlength = maxx - minx + 1;
        let ylength = maxy - miny + 1;

        let spanning = if xlength == lx {
            Some(Spanning::X)
        } else if ylength == ly {
            Some(Spanning::Y)
        } else {
            None
        };

        let Some(spanning) = spanning else {
            continue;
        };

        if !first_found {
            first_found = true;
            if compute_jumps {
                let result = jumps::evaluate(clusters, bonds, id, spanning);
                outcome.jumps = Some(result.jumps);
                outcome.permutation_bin = Some(result.permutation_bin);
            }
        }

        if clusters.get(rx, ry, rl) == id {
            match pass {
                Pass::Multilayer => outcome.matches_multilayer = true,
                Pass::SingleLayer => outcome.matches_single_layer = true,
            }
        }

        for z in 0..nl {
            if clusters.get(rx_by_layer[z], ry_by_layer[z], z) == id {
                match pass {
                    Pass::Multilayer => outcome.matches_multilayer_by_layer[z] = true,
                    Pass::SingleLayer => outcome.matches_single_layer_by_layer[z] = true,
                }
            }
        }

        nr_percolating += 1;
    }

    match pass {
        Pass::Multilayer => {
            outcome.percolates_multilayer = nr_percolating > 0;
            outcome.nr_percolating_multilayer = nr_percolating;
        }
        Pass::SingleLayer => {
            outcome.percolates_single_layer = nr_percolating > 0;
            outcome.nr_percolating_single_layer = nr_percolating;
        }
    }

    outcome
}
