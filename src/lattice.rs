/*
 * SPDX-FileCopyrightText: 2026 The multilayer-percolation Authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Dense buffers for the bond configuration of a single run.
//!
//! Layout follows the convention fixed by the external file format: a site
//! is a triple `(x, y, l)` and a flat index into a single-layer array is
//! `x + lx * y` (row-major in `y`).

use anyhow::{ensure, Result};

/// In-plane bond direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    X,
    Y,
}

/// Lattice dimensions, shared by every buffer allocated for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dims {
    pub lx: usize,
    pub ly: usize,
    pub nrlayers: usize,
}

impl Dims {
    pub fn new(lx: usize, ly: usize, nrlayers: usize) -> Result<Self> {
        ensure!(lx >= 1, "lx must be >= 1, got {lx}");
        ensure!(ly >= 1, "ly must be >= 1, got {ly}");
        ensure!(nrlayers >= 1, "nrlayers must be >= 1, got {nrlayers}");
        ensure!(
            nrlayers < 256,
            "nrlayers must be < 256 (got {nrlayers}), the permutation histogram is indexed by nrlayers!"
        );
        Ok(Self { lx, ly, nrlayers })
    }

    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.lx && y < self.ly);
        x + self.lx * y
    }

    #[inline]
    pub fn sites_per_layer(&self) -> usize {
        self.lx * self.ly
    }
}

/// The in-plane bonds of a single layer: for each `(x, y)`, whether the bond
/// in direction X joins `(x, y)` to `(x+1, y)`, and whether the bond in
/// direction Y joins `(x, y)` to `(x, y+1)`.
///
/// Entries at the far edges (`x == lx-1` for X, `y == ly-1` for Y) exist but
/// are never consulted: there is no in-plane wrap.
#[derive(Debug, Clone)]
pub struct BondField {
    dims: Dims,
    x_bonds: Vec<bool>,
    y_bonds: Vec<bool>,
}

impl BondField {
    pub fn new(dims: Dims) -> Self {
        let n = dims.sites_per_layer();
        Self {
            dims,
            x_bonds: vec![false; n],
            y_bonds: vec![false; n],
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize, direction: Direction) -> bool {
        let idx = self.dims.index(x, y);
        match direction {
            Direction::X => self.x_bonds[idx],
            Direction::Y => self.y_bonds[idx],
        }
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, direction: Direction, open: bool) {
        let idx = self.dims.index(x, y);
        match direction {
            Direction::X => self.x_bonds[idx] = open,
            Direction::Y => self.y_bonds[idx] = open,
        }
    }
}

/// The inter-layer bonds joining one layer to the next (or, for the wrap
/// entry, the last layer back to the first).
#[derive(Debug, Clone)]
pub struct VerticalBondField {
    dims: Dims,
    vals: Vec<bool>,
}

impl VerticalBondField {
    pub fn new(dims: Dims) -> Self {
        let n = dims.sites_per_layer();
        Self {
            dims,
            vals: vec![false; n],
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.vals[self.dims.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, open: bool) {
        let idx = self.dims.index(x, y);
        self.vals[idx] = open;
    }

    /// Severs every bond in this field, used when moving from the
    /// multilayer to the single-layer measurement within the same run.
    pub fn clear(&mut self) {
        self.vals.iter_mut().for_each(|v| *v = false);
    }
}

/// The complete bond configuration of a run: in-plane bonds for every layer,
/// and inter-layer bonds between every pair of adjacent layers (plus, when
/// `pbcz` is enabled, the wrap-around field joining layer `nrlayers-1` back
/// to layer `0`).
#[derive(Debug, Clone)]
pub struct Bonds {
    pub dims: Dims,
    pub pbcz: bool,
    pub horizontal: Vec<BondField>,
    /// `vertical[l]` joins layer `l` to layer `l+1`, for `l` in `0..nrlayers-1`.
    /// When `pbcz` is set, an extra entry at index `nrlayers-1` joins the
    /// last layer back to the first.
    pub vertical: Vec<VerticalBondField>,
}

impl Bonds {
    pub fn new(dims: Dims, pbcz: bool) -> Self {
        let horizontal = (0..dims.nrlayers).map(|_| BondField::new(dims)).collect();
        let vcount = if pbcz {
            dims.nrlayers
        } else {
            dims.nrlayers.saturating_sub(1)
        };
        let vertical = (0..vcount).map(|_| VerticalBondField::new(dims)).collect();
        Self {
            dims,
            pbcz,
            horizontal,
            vertical,
        }
    }

    /// Whether the vertical bond joining layer `l` to layer `l+1` (or, when
    /// `l == nrlayers-1` and `pbcz`, the wrap bond back to layer `0`) is
    /// open at `(x, y)`.
    #[inline]
    pub fn vertical_open(&self, l: usize, x: usize, y: usize) -> bool {
        match self.vertical.get(l) {
            Some(field) => field.get(x, y),
            None => false,
        }
    }

    /// Severs every inter-layer bond, turning the configuration into the
    /// single-layer regime.
    pub fn sever_vertical(&mut self) {
        self.vertical.iter_mut().for_each(VerticalBondField::clear);
    }
}
