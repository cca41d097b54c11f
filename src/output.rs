/*
 * SPDX-FileCopyrightText: 2026 The multilayer-percolation Authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Writes completed-cell results to a `.dat` file (and a companion
//! `.bins.dat` permutation histogram) off the worker threads, via a
//! message-passing channel instead of a shared file handle.
//!
//! The legacy driver opened the output file once, left it completely
//! unbuffered (`setvbuf(out, NULL, _IONBF, 0)`), and guarded every write with
//! an OpenMP critical section. A channel gives the same "one writer, many
//! producers, flushed promptly" behavior without a lock shared by the
//! worker pool.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::thread::JoinHandle;

use anyhow::{Context, Result};
use crossbeam_channel::{Receiver, Sender};

use crate::stats::RunStats;

/// One completed cell's result, in sweep order only loosely - cells may
/// arrive out of `(p, p_perp)` order since workers race to finish them.
pub struct CellResult {
    pub p: f64,
    pub pperp: f64,
    pub stats: RunStats,
}

/// Handle to the background writer thread; dropping the sender side and
/// calling [`OutputWriter::join`] flushes and closes both files.
pub struct OutputWriter {
    tx: Sender<CellResult>,
    handle: JoinHandle<Result<()>>,
}

impl OutputWriter {
    /// Spawns the writer thread, creating `path` and, only when
    /// `write_bins` is set (spec §6: the histogram file exists only "when
    /// jump measurement is enabled"), `path` with a `.bins.dat` suffix
    /// appended to the stem.
    pub fn spawn(path: &Path, write_bins: bool) -> Result<Self> {
        let dat = File::create(path).with_context(|| format!("could not create {}", path.display()))?;
        let bins = if write_bins {
            let bins_path = bins_path_for(path);
            Some(
                File::create(&bins_path)
                    .with_context(|| format!("could not create {}", bins_path.display()))?,
            )
        } else {
            None
        };

        let (tx, rx) = crossbeam_channel::unbounded();
        let handle = std::thread::spawn(move || write_loop(rx, dat, bins));

        Ok(Self { tx, handle })
    }

    pub fn send(&self, result: CellResult) {
        // The receiver only drops once this writer is joined, so a send
        // failure here would mean the writer thread panicked; propagating
        // that panic through join() is the appropriate failure path.
        let _ = self.tx.send(result);
    }

    /// Closes the channel and waits for every pending cell to be written.
    pub fn join(self) -> Result<()> {
        drop(self.tx);
        self.handle.join().expect("output writer thread panicked")
    }
}

fn bins_path_for(path: &Path) -> std::path::PathBuf {
    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    let ext = path.extension().map(|e| e.to_string_lossy()).unwrap_or_default();
    let name = if ext.is_empty() {
        format!("{stem}.bins.dat")
    } else {
        format!("{stem}.bins.{ext}")
    };
    path.with_file_name(name)
}

fn write_loop(rx: Receiver<CellResult>, dat: File, bins: Option<File>) -> Result<()> {
    let mut dat = BufWriter::new(dat);
    let mut bins = bins.map(BufWriter::new);

    for cell in rx {
        write_cell_line(&mut dat, &cell)?;
        dat.flush().context("could not flush the results file")?;

        if let Some(bins) = bins.as_mut() {
            write_bins_line(bins, &cell)?;
            bins.flush().context("could not flush the permutation histogram file")?;
        }
    }

    Ok(())
}

fn write_cell_line(out: &mut impl Write, cell: &CellResult) -> Result<()> {
    let s = &cell.stats;
    let n = s.total_runs.max(1) as f64;

    write!(out, "{:.6} {:.6} ", cell.p, cell.pperp)?;
    write!(out, "{:.6} ", s.cnt_multilayer as f64 / n)?;
    write!(out, "{:.6} ", s.cnt_single_layer as f64 / n)?;
    write!(out, "{:.6} ", s.sum_jumps as f64 / n)?;
    write!(out, "{:.6} ", s.sum_matches1 as f64 / n)?;
    write!(out, "{:.6} ", s.sum_matches2 as f64 / n)?;
    write!(out, "{:.6} ", s.sum_nr_percolating1 as f64 / n)?;
    write!(out, "{:.6} ", s.sum_nr_percolating2 as f64 / n)?;

    for &hits in &s.sum_matches1_by_layer {
        write!(out, "{:.6} ", hits as f64 / n)?;
    }
    for &hits in &s.sum_matches2_by_layer {
        write!(out, "{:.6} ", hits as f64 / n)?;
    }

    writeln!(out)?;
    Ok(())
}

fn write_bins_line(out: &mut impl Write, cell: &CellResult) -> Result<()> {
    write!(out, "{:.6} {:.6} ", cell.p, cell.pperp)?;
    for &count in &cell.stats.permutation_bins {
        write!(out, "{count} ")?;
    }
    writeln!(out)?;
    Ok(())
}
