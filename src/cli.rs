/*
 * SPDX-FileCopyrightText: 2026 The multilayer-percolation Authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The command-line surface, ported from `original_source/main.c`'s `main`
//! and `go(int id)`.
//!
//! The legacy driver reads exactly one integer argument and dispatches it
//! through a giant `switch`; any other argument count is a silent success
//! with no side effect (spec §6). REDESIGN FLAGS factors the switch itself
//! into the data-driven [`crate::presets`] table; this module keeps only the
//! argv parsing and dispatch, deliberately not routed through a strict
//! argument parser so the "wrong arg count -> exit 0" contract stays exact.

use std::path::Path;

use anyhow::Result;

use crate::{batch, presets};

/// Parses `args` (as `std::env::args().collect()` would produce it,
/// `args[0]` being the program name) and runs the selected preset, if any.
///
/// Returns `Ok(())` without running anything when `args` doesn't hold
/// exactly one trailing integer, or when that integer names no preset -
/// matching `original_source/main.c`'s `if(argc!=2) return 0;` and its
/// `switch`'s `default: break;` arm exactly. Only an I/O failure while
/// writing a preset's output is propagated as an error (spec §7: fatal for
/// the batch).
pub fn dispatch(args: &[String]) -> Result<()> {
    if args.len() != 2 {
        return Ok(());
    }

    let Ok(id) = args[1].parse::<u32>() else {
        log::warn!("argument {:?} is not an integer preset id", args[1]);
        return Ok(());
    };

    let Some(preset) = presets::find(id) else {
        log::warn!("no preset registered for id {id}");
        return Ok(());
    };

    log::info!(
        "running preset {id} ({}x{}x{}, {} runs/cell, pbcz={}) -> {}",
        preset.xdim,
        preset.ydim,
        preset.nrlayers,
        preset.total_runs,
        preset.pbcz,
        preset.outfile
    );
    batch::run_batch(&preset, Path::new(preset.outfile))
}
