/*
 * SPDX-FileCopyrightText: 2026 The multilayer-percolation Authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Parallel `(p, p_perp)` grid sweep for a single preset, ported from
//! `original_source/main.c`'s `do_batch`.
//!
//! Each grid cell runs `total_runs` independent trials and is entirely
//! independent of every other cell, so cells are handed out to a `rayon`
//! thread pool one at a time; each cell gets its own PRNG, seeded
//! independently, so no state is shared between concurrently running cells.

use std::path::Path;

use anyhow::Result;
use dsi_progress_logger::{ProgressLog, ProgressLogger};
use rayon::prelude::*;

use crate::lattice::Dims;
use crate::output::{CellResult, OutputWriter};
use crate::presets::Preset;
use crate::rng;
use crate::stats::RunStats;

fn millip_steps(min: u32, max: u32, inc: u32) -> Vec<u32> {
    let mut v = Vec::new();
    let mut cur = min;
    while cur <= max {
        v.push(cur);
        cur += inc;
    }
    v
}

/// Runs every `(p, p_perp)` cell of `preset` and writes the result to
/// `outfile`, plus its `.bins.dat` companion when `preset.measure_jumps` is
/// set (spec §6: the histogram file exists only when jumps are measured).
pub fn run_batch(preset: &Preset, outfile: &Path) -> Result<()> {
    let dims = Dims::new(preset.xdim, preset.ydim, preset.nrlayers)?;

    let millips = millip_steps(preset.min_millip, preset.max_millip, preset.inc_millip);
    let millipperps = millip_steps(preset.min_millipperp, preset.max_millipperp, preset.inc_millipperp);

    let cells: Vec<(u32, u32)> = millipperps
        .iter()
        .flat_map(|&pperp| millips.iter().map(move |&p| (pperp, p)))
        .collect();

    let mut progress = ProgressLogger::default();
    progress.display_memory(false).item_name("cell");
    progress.expected_updates(Some(cells.len()));
    progress.start(format!("sweeping preset {}", preset.id));
    let progress = std::sync::Mutex::new(progress);

    let writer = OutputWriter::spawn(outfile, preset.measure_jumps)?;

    // A dedicated pool, sized off the machine's core count, so a batch run
    // doesn't contend with whatever else might be using rayon's global pool.
    let thread_pool = rayon::ThreadPoolBuilder::new().num_threads(num_cpus::get()).build()?;

    thread_pool.install(|| {
        cells.into_par_iter().for_each(|(millipperp, millip)| {
            let p = 0.001 * millip as f64;
            let pperp = 0.001 * millipperp as f64;

            let mut rng = rng::new_rng();
            let mut stats = RunStats::new(dims.nrlayers);

            for _ in 0..preset.total_runs {
                let outcome = crate::driver::run(dims, preset.pbcz, p, pperp, preset.measure_jumps, &mut rng);
                stats.record(&outcome);
            }

            if preset.verbose {
                log::debug!("{p:.3} {pperp:.3}");
            }

            writer.send(CellResult { p, pperp, stats });
            progress.lock().unwrap().update();
        });
    });

    progress.lock().unwrap().done();
    writer.join()
}
