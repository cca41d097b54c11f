/*
 * SPDX-FileCopyrightText: 2026 The multilayer-percolation Authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Named presets for batch runs.
//!
//! The legacy driver (`original_source/main.c`'s `go(int id)`) dispatched on
//! a numeric id through a ~200-line `switch`, each arm hand-assembling a
//! `config_t`. Here the same data lives in one table (`PRESETS`), built once
//! by [`all`], and looked up by [`find`] - adding a preset is a new table row,
//! not a new switch arm.

/// One named configuration for a full `(p, p_perp)` batch sweep.
#[derive(Debug, Clone)]
pub struct Preset {
    pub id: u32,
    pub pbcz: bool,
    pub xdim: usize,
    pub ydim: usize,
    pub nrlayers: usize,
    pub total_runs: u64,
    pub measure_jumps: bool,
    pub verbose: bool,
    /// `p` sweep bounds and step, in thousandths (a millip of 1 is p = 0.001).
    pub min_millip: u32,
    pub max_millip: u32,
    pub inc_millip: u32,
    /// `p_perp` sweep bounds and step, in thousandths.
    pub min_millipperp: u32,
    pub max_millipperp: u32,
    pub inc_millipperp: u32,
    pub outfile: &'static str,
}

const DEFAULT_TOTAL_RUNS: u64 = 100;
const FULL_SWEEP: (u32, u32, u32) = (0, 1000, 10); // (min, max, inc) millip/millipperp

fn full_sweep(
    id: u32,
    pbcz: bool,
    xdim: usize,
    ydim: usize,
    nrlayers: usize,
    outfile: &'static str,
) -> Preset {
    Preset {
        id,
        pbcz,
        xdim,
        ydim,
        nrlayers,
        total_runs: DEFAULT_TOTAL_RUNS,
        measure_jumps: false,
        verbose: false,
        min_millip: FULL_SWEEP.0,
        max_millip: FULL_SWEEP.1,
        inc_millip: FULL_SWEEP.2,
        min_millipperp: FULL_SWEEP.0,
        max_millipperp: FULL_SWEEP.1,
        inc_millipperp: FULL_SWEEP.2,
        outfile,
    }
}

/// A sweep over `p` alone at a fixed `p_perp = 0.5`, measuring jumps, at a
/// much higher `total_runs` than the coarse full-grid presets.
fn jump_sweep(id: u32, pbcz: bool, xdim: usize, ydim: usize, outfile: &'static str) -> Preset {
    Preset {
        min_millipperp: 500,
        max_millipperp: 500,
        total_runs: 1000,
        measure_jumps: true,
        ..full_sweep(id, pbcz, xdim, ydim, 2, outfile)
    }
}

/// A fine-grained sweep at a single fixed `p_perp`, stepping `p` by one
/// thousandth instead of ten, at a much larger `total_runs`.
#[allow(clippy::too_many_arguments)]
fn fine_sweep(
    id: u32,
    pbcz: bool,
    xdim: usize,
    ydim: usize,
    nrlayers: usize,
    total_runs: u64,
    fixed_millipperp: u32,
    verbose: bool,
    outfile: &'static str,
) -> Preset {
    Preset {
        total_runs,
        verbose,
        inc_millip: 1,
        min_millipperp: fixed_millipperp,
        max_millipperp: fixed_millipperp,
        ..full_sweep(id, pbcz, xdim, ydim, nrlayers, outfile)
    }
}

/// Every preset this binary knows about, in ascending id order.
pub fn all() -> Vec<Preset> {
    vec![
        full_sweep(1, false, 512, 512, 3, "trilayer512.dat"),
        full_sweep(2, false, 512, 512, 6, "esalayer512.dat"),
        full_sweep(3, false, 16, 16, 2, "bilayer16.dat"),
        full_sweep(4, false, 32, 32, 2, "bilayer32.dat"),
        full_sweep(5, false, 64, 64, 2, "bilayer64.dat"),
        full_sweep(6, false, 128, 128, 2, "bilayer128.dat"),
        full_sweep(7, false, 256, 256, 2, "bilayer256.dat"),
        full_sweep(8, false, 512, 512, 2, "bilayer512.dat"),
        jump_sweep(9, false, 16, 16, "jumps16.dat"),
        jump_sweep(10, false, 32, 32, "jumps32.dat"),
        jump_sweep(11, false, 64, 64, "jumps64.dat"),
        jump_sweep(12, false, 128, 128, "jumps128.dat"),
        jump_sweep(13, false, 256, 256, "jumps256.dat"),
        // Same presets again, with periodic boundary conditions along z.
        full_sweep(14, true, 512, 512, 3, "trilayer512_pbcz.dat"),
        full_sweep(15, true, 512, 512, 6, "esalayer512_pbcz.dat"),
        full_sweep(16, true, 16, 16, 2, "bilayer16_pbcz.dat"),
        full_sweep(17, true, 32, 32, 2, "bilayer32_pbcz.dat"),
        full_sweep(18, true, 64, 64, 2, "bilayer64_pbcz.dat"),
        full_sweep(19, true, 128, 128, 2, "bilayer128_pbcz.dat"),
        full_sweep(20, true, 256, 256, 2, "bilayer256_pbcz.dat"),
        full_sweep(21, true, 512, 512, 2, "bilayer512_pbcz.dat"),
        jump_sweep(22, true, 16, 16, "jumps16_pbcz.dat"),
        jump_sweep(23, true, 32, 32, "jumps32_pbcz.dat"),
        jump_sweep(24, true, 64, 64, "jumps64_pbcz.dat"),
        jump_sweep(25, true, 128, 128, "jumps128_pbcz.dat"),
        jump_sweep(26, true, 256, 256, "jumps256_pbcz.dat"),
        // Fine-grained single-p_perp sweeps, at a much larger total_runs.
        fine_sweep(40, false, 512, 512, 2, 10_000, 250, false, "bilayer512p25.dat"),
        fine_sweep(41, false, 512, 512, 2, 10_000, 500, false, "bilayer512p50.dat"),
        fine_sweep(42, false, 512, 512, 2, 10_000, 750, true, "bilayer512p75.dat"),
        fine_sweep(43, true, 512, 512, 2, 20_000, 250, false, "bilayer512p25_pbcz.dat"),
        fine_sweep(44, true, 512, 512, 2, 20_000, 500, false, "bilayer512p50_pbcz.dat"),
        fine_sweep(45, true, 512, 512, 2, 20_000, 750, false, "bilayer512p75_pbcz.dat"),
        fine_sweep(50, false, 256, 256, 3, 10_000, 500, false, "trilayer256p50.dat"),
        fine_sweep(51, true, 256, 256, 3, 10_000, 500, false, "trilayer256p50_pbcz.dat"),
        // Layer-count scans at a fixed lattice size.
        full_sweep(201, false, 256, 256, 2, "l2_256_pbcz.dat"),
        full_sweep(202, false, 256, 256, 3, "l3_256_pbcz.dat"),
        full_sweep(203, false, 256, 256, 4, "l4_256_pbcz.dat"),
        full_sweep(204, false, 256, 256, 5, "l5_256_pbcz.dat"),
        full_sweep(205, false, 256, 256, 6, "l6_256_pbcz.dat"),
        full_sweep(206, false, 256, 256, 7, "l7_256_pbcz.dat"),
        full_sweep(207, false, 256, 256, 8, "l8_256_pbcz.dat"),
        full_sweep(208, true, 256, 256, 2, "l2_256_pbcz.dat"),
        full_sweep(209, true, 256, 256, 3, "l3_256_pbcz.dat"),
        full_sweep(210, true, 256, 256, 4, "l4_256_pbcz.dat"),
        full_sweep(211, true, 256, 256, 5, "l5_256_pbcz.dat"),
        full_sweep(212, true, 256, 256, 6, "l6_256_pbcz.dat"),
        full_sweep(213, true, 256, 256, 7, "l7_256_pbcz.dat"),
        full_sweep(214, true, 256, 256, 8, "l8_256_pbcz.dat"),
    ]
}

/// Looks up a preset by id.
pub fn find(id: u32) -> Option<Preset> {
    all().into_iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_id_is_unique() {
        let ids: Vec<u32> = all().iter().map(|p| p.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(ids.len(), sorted.len());
    }

    #[test]
    fn unknown_id_returns_none() {
        assert!(find(9999).is_none());
    }

    #[test]
    fn preset_9_is_a_16x16_jump_sweep_with_fixed_pperp() {
        let p = find(9).unwrap();
        assert!(p.measure_jumps);
        assert_eq!(p.min_millipperp, 500);
        assert_eq!(p.max_millipperp, 500);
        assert_eq!(p.total_runs, 1000);
        assert_eq!((p.xdim, p.ydim, p.nrlayers), (16, 16, 2));
    }

    #[test]
    fn preset_42_is_verbose() {
        assert!(find(42).unwrap().verbose);
        assert!(!find(41).unwrap().verbose);
    }
}
