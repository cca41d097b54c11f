/*
 * SPDX-FileCopyrightText: 2026 The multilayer-percolation Authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Orchestrates a single run: fill random bonds, analyze the multilayer
//! configuration, sever the inter-layer bonds, analyze again. Ported from
//! `original_source/main.c`'s `do_run`.

use rand::Rng;

use crate::analyzer::{self, Pass};
use crate::cluster::ClusterField;
use crate::lattice::{Bonds, Dims, Direction};
use crate::stats::RunOutcome;

/// Fills every in-plane and inter-layer bond independently with probability
/// `p` and `pperp` respectively, drawing from `rng` in lexicographic
/// `(layer, x, y)` order, X before Y at each site.
fn fill_random_bonds(bonds: &mut Bonds, dims: Dims, p: f64, pperp: f64, rng: &mut impl Rng) {
    for l in 0..dims.nrlayers {
        for x in 0..dims.lx {
            for y in 0..dims.ly {
                let open_x = rng.random_bool(p);
                let open_y = rng.random_bool(p);
                bonds.horizontal[l].set(x, y, Direction::X, open_x);
                bonds.horizontal[l].set(x, y, Direction::Y, open_y);
            }
        }
    }

    for field in &mut bonds.vertical {
        for x in 0..dims.lx {
            for y in 0..dims.ly {
                field.set(x, y, rng.random_bool(pperp));
            }
        }
    }
}

/// Runs one full multilayer-then-single-layer measurement at probabilities
/// `p` (in-plane) and `pperp` (inter-layer), drawing every random bond and
/// every site-test coordinate from `rng`.
pub fn run(dims: Dims, pbcz: bool, p: f64, pperp: f64, measure_jumps: bool, rng: &mut impl Rng) -> RunOutcome {
    let mut bonds = Bonds::new(dims, pbcz);
    fill_random_bonds(&mut bonds, dims, p, pperp, rng);

    let mut multilayer_clusters = ClusterField::new(dims);
    let multilayer = analyzer::analyze(&bonds, &mut multilayer_clusters, Pass::Multilayer, measure_jumps, rng);

    bonds.sever_vertical();

    let mut single_layer_clusters = ClusterField::new(dims);
    let single_layer = analyzer::analyze(&bonds, &mut single_layer_clusters, Pass::SingleLayer, false, rng);

    RunOutcome {
        percolates_multilayer: multilayer.percolates_multilayer,
        percolates_single_layer: single_layer.percolates_single_layer,
        nr_percolating_multilayer: multilayer.nr_percolating_multilayer,
        nr_percolating_single_layer: single_layer.nr_percolating_single_layer,
        jumps: multilayer.jumps,
        permutation_bin: multilayer.permutation_bin,
        matches_multilayer: multilayer.matches_multilayer,
        matches_single_layer: single_layer.matches_single_layer,
        matches_multilayer_by_layer: multilayer.matches_multilayer_by_layer,
        matches_single_layer_by_layer: single_layer.matches_single_layer_by_layer,
    }
}
