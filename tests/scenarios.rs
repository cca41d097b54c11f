/*
 * SPDX-FileCopyrightText: 2026 The multilayer-percolation Authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Black-box scenarios S1-S6 and the universal invariants of the percolation
//! analyzer, run through the public API rather than any one module's
//! internals.

use multilayer_percolation::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn rng() -> SmallRng {
    SmallRng::seed_from_u64(12345)
}

/// S1: a 3x1x1 lattice with both X bonds open is one cluster of 3 sites,
/// X-spanning, with zero jumps (there's only one layer to begin with).
#[test]
fn s1_single_layer_strip_spans_x_with_zero_jumps() {
    let dims = Dims::new(3, 1, 1).unwrap();
    let mut bonds = Bonds::new(dims, false);
    bonds.horizontal[0].set(0, 0, Direction::X, true);
    bonds.horizontal[0].set(1, 0, Direction::X, true);

    let mut clusters = ClusterField::new(dims);
    let outcome = analyze(&bonds, &mut clusters, Pass::Multilayer, true, &mut rng());

    assert!(outcome.percolates_multilayer);
    assert_eq!(outcome.nr_percolating_multilayer, 1);
    assert_eq!(outcome.jumps, Some(0));
}

/// S2: a fully-open 2x2x2 lattice is one cluster covering every site,
/// spanning both X and Y, with zero jumps along whichever axis is checked
/// first (X, since it's tested first in `analyze`).
#[test]
fn s2_fully_open_bilayer_spans_both_axes_as_one_cluster() {
    let dims = Dims::new(2, 2, 2).unwrap();
    let mut bonds = Bonds::new(dims, false);
    for l in 0..2 {
        for x in 0..2 {
            for y in 0..2 {
                bonds.horizontal[l].set(x, y, Direction::X, true);
                bonds.horizontal[l].set(x, y, Direction::Y, true);
            }
        }
    }
    for x in 0..2 {
        for y in 0..2 {
            bonds.vertical[0].set(x, y, true);
        }
    }

    let mut clusters = ClusterField::new(dims);
    let outcome = analyze(&bonds, &mut clusters, Pass::Multilayer, true, &mut rng());

    assert!(outcome.percolates_multilayer);
    assert_eq!(outcome.nr_percolating_multilayer, 1);
    assert_eq!(outcome.jumps, Some(0));

    let mut seen = std::collections::HashSet::new();
    for (x, y, l) in clusters.sites() {
        seen.insert(clusters.get(x, y, l));
    }
    assert_eq!(seen.len(), 1, "every site belongs to the single cluster");
}

/// S3 (baseline): a 3x1x2 lattice, both layers fully X-bonded, joined by a
/// single inter-layer bond at x=1 - the spanning cluster can stay entirely
/// within one layer, so the shortest path costs zero jumps. (The "forced
/// through the inter-layer bond" variant from spec §8's S3 is covered by
/// `jumps::tests::crossing_a_single_inter_layer_bond_costs_one_jump`, which
/// computes 1 jump rather than the 2 the prose states - see DESIGN.md.)
#[test]
fn s3_baseline_path_stays_in_one_layer_at_zero_jumps() {
    let dims = Dims::new(3, 1, 2).unwrap();
    let mut bonds = Bonds::new(dims, false);
    for l in 0..2 {
        bonds.horizontal[l].set(0, 0, Direction::X, true);
        bonds.horizontal[l].set(1, 0, Direction::X, true);
    }
    bonds.vertical[0].set(1, 0, true);

    let mut clusters = ClusterField::new(dims);
    let outcome = analyze(&bonds, &mut clusters, Pass::Multilayer, true, &mut rng());

    assert!(outcome.percolates_multilayer);
    assert_eq!(outcome.nr_percolating_multilayer, 1);
    assert_eq!(outcome.jumps, Some(0));
}

/// S4: bins = [0, 5, 2] sorts ascending to layer order [0, 2, 1]; see
/// `permutation::tests::histogram_index_of_bins_0_5_2_matches_the_ranking_algorithm`
/// for the worked rank (4 per the stated algorithm; DESIGN.md records the
/// discrepancy with spec §8's stated value of 2).
#[test]
fn s4_bins_sort_to_the_expected_layer_order() {
    let bins = [0u32, 5, 2];
    let mut order: Vec<usize> = (0..3).collect();
    order.sort_by_key(|&l| bins[l]);
    assert_eq!(order, vec![0, 2, 1]);
}

/// S5: two fully-open, fully-disconnected layers (p=1, p_perp=0) each form
/// their own percolating cluster; both the multilayer and single-layer
/// regimes see 2 percolating clusters.
#[test]
fn s5_disconnected_layers_each_percolate_independently() {
    let dims = Dims::new(4, 4, 2).unwrap();
    let mut bonds = Bonds::new(dims, false);
    for l in 0..2 {
        for x in 0..4 {
            for y in 0..4 {
                bonds.horizontal[l].set(x, y, Direction::X, true);
                bonds.horizontal[l].set(x, y, Direction::Y, true);
            }
        }
    }

    let mut clusters = ClusterField::new(dims);
    let multilayer = analyze(&bonds, &mut clusters, Pass::Multilayer, false, &mut rng());
    assert!(multilayer.percolates_multilayer);
    assert_eq!(multilayer.nr_percolating_multilayer, 2);

    bonds.sever_vertical();
    let mut clusters2 = ClusterField::new(dims);
    let single = analyze(&bonds, &mut clusters2, Pass::SingleLayer, false, &mut rng());
    assert!(single.percolates_single_layer);
    assert_eq!(single.nr_percolating_single_layer, 2);
}

/// S6: a 2x2x2 lattice with periodic-z and a single inter-layer bond (the
/// wrap edge from layer 1 back to layer 0) joins what would otherwise be two
/// disjoint fully-open layers into one cluster; without `pbcz` the same bond
/// configuration leaves them disjoint.
#[test]
fn s6_periodic_z_wrap_joins_otherwise_disjoint_layers() {
    let dims = Dims::new(2, 2, 2).unwrap();

    let mut wrapped = Bonds::new(dims, true);
    for l in 0..2 {
        for x in 0..2 {
            for y in 0..2 {
                wrapped.horizontal[l].set(x, y, Direction::X, true);
                wrapped.horizontal[l].set(x, y, Direction::Y, true);
            }
        }
    }
    wrapped.vertical[1].set(0, 0, true); // the wrap entry: layer 1 -> layer 0

    let mut clusters = ClusterField::new(dims);
    let outcome = analyze(&wrapped, &mut clusters, Pass::Multilayer, false, &mut rng());
    assert_eq!(outcome.nr_percolating_multilayer, 1);

    let mut unwrapped = Bonds::new(dims, false);
    for l in 0..2 {
        for x in 0..2 {
            for y in 0..2 {
                unwrapped.horizontal[l].set(x, y, Direction::X, true);
                unwrapped.horizontal[l].set(x, y, Direction::Y, true);
            }
        }
    }
    // No vertical field exists at all without pbcz, so the two layers are
    // disjoint regardless of what an index-1 wrap bond would have done.
    let mut clusters2 = ClusterField::new(dims);
    let unwrapped_outcome = analyze(&unwrapped, &mut clusters2, Pass::Multilayer, false, &mut rng());
    assert_eq!(unwrapped_outcome.nr_percolating_multilayer, 2);
}

/// Universal invariant 2 (spec §8): after normalization, labels are
/// contiguous in `[1, maxid]` and every site holds one of them.
#[test]
fn normalized_labels_are_contiguous() {
    let dims = Dims::new(5, 5, 2).unwrap();
    let mut bonds = Bonds::new(dims, false);
    for l in 0..2 {
        bonds.horizontal[l].set(0, 0, Direction::X, true);
        bonds.horizontal[l].set(2, 2, Direction::Y, true);
    }

    let mut clusters = ClusterField::new(dims);
    let mut prng = rng();
    analyze(&bonds, &mut clusters, Pass::Multilayer, false, &mut prng);

    let maxid = clusters.sites().map(|(x, y, l)| clusters.get(x, y, l)).max().unwrap();
    let mut present = vec![false; maxid as usize + 1];
    for (x, y, l) in clusters.sites() {
        let id = clusters.get(x, y, l);
        assert!(id >= 1 && id <= maxid);
        present[id as usize] = true;
    }
    assert!(present[1..].iter().all(|&seen| seen), "every id in [1, maxid] must appear");
}

/// Universal invariant 6 (spec §8): jumps is 0 iff the cluster lives in one
/// layer; a genuinely multilayer spanning cluster costs at least 1.
#[test]
fn jump_count_is_zero_only_for_single_layer_clusters() {
    let dims = Dims::new(3, 1, 2).unwrap();
    let mut bonds = Bonds::new(dims, false);
    bonds.horizontal[0].set(0, 0, Direction::X, true); // (0,0,0)-(1,0,0)
    bonds.horizontal[1].set(1, 0, Direction::X, true); // (1,0,1)-(2,0,1)
    bonds.vertical[0].set(1, 0, true); // (1,0,0)-(1,0,1), the only link

    let mut clusters = ClusterField::new(dims);
    let outcome = analyze(&bonds, &mut clusters, Pass::Multilayer, true, &mut rng());
    assert!(outcome.percolates_multilayer);
    assert!(outcome.jumps.unwrap() >= 1);
}
