/*
 * SPDX-FileCopyrightText: 2026 The multilayer-percolation Authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Monte Carlo simulator for bond percolation on multilayer two-dimensional
//! lattices.
//!
//! A stack of `nrlayers` square lattices, each `lx * ly` sites, is sampled
//! many times with independently random in-plane bonds (open with
//! probability `p`) and inter-layer bonds (open with probability `p_perp`).
//! Every sample is analyzed twice - once with inter-layer bonds intact, once
//! with them severed - by a Hoshen-Kopelman cluster sweep ([`analyzer`])
//! that detects spanning clusters, counts the minimum number of inter-layer
//! edges ("jumps") on a spanning path ([`jumps`]), and ranks the spanning
//! cluster's layer occupancy into a permutation histogram
//! ([`permutation`]). Averages over many runs are tabulated across a grid of
//! `(p, p_perp)` values by [`batch`].

pub mod analyzer;
pub mod batch;
pub mod cli;
pub mod cluster;
pub mod driver;
pub mod jumps;
pub mod lattice;
pub mod output;
pub mod permutation;
pub mod presets;
pub mod rng;
pub mod stats;
pub mod unionfind;

/// Re-exports the pieces most callers need: the lattice/bond/cluster types,
/// the analyzer and jump computer entry points, and the run/batch drivers.
pub mod prelude {
    pub use crate::analyzer::{analyze, Pass};
    pub use crate::cluster::ClusterField;
    pub use crate::driver;
    pub use crate::jumps::{self, Spanning};
    pub use crate::lattice::{BondField, Bonds, Dims, Direction, VerticalBondField};
    pub use crate::output::{CellResult, OutputWriter};
    pub use crate::permutation;
    pub use crate::presets::{self, Preset};
    pub use crate::rng;
    pub use crate::stats::{RunOutcome, RunStats};
    pub use crate::unionfind::UnionFind;
}
