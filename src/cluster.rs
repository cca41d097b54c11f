/*
 * SPDX-FileCopyrightText: 2026 The multilayer-percolation Authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The cluster-label field: an integer label at every lattice site, across
//! all layers. `0` means "not yet labeled"; after normalization labels are
//! contiguous in `[1, maxid]`.

use crate::lattice::Dims;

#[derive(Debug, Clone)]
pub struct ClusterField {
    dims: Dims,
    /// `labels[l][x + lx*y]`.
    labels: Vec<Vec<u32>>,
}

impl ClusterField {
    pub fn new(dims: Dims) -> Self {
        let n = dims.sites_per_layer();
        Self {
            dims,
            labels: (0..dims.nrlayers).map(|_| vec![0u32; n]).collect(),
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize, l: usize) -> u32 {
        self.labels[l][self.dims.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, l: usize, label: u32) {
        let idx = self.dims.index(x, y);
        self.labels[l][idx] = label;
    }

    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Iterates over every site in lexicographic `(x, y, l)` order, the
    /// traversal order the label sweep and normalization pass both use.
    pub fn sites(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        let (lx, ly, nl) = (self.dims.lx, self.dims.ly, self.dims.nrlayers);
        (0..lx).flat_map(move |x| (0..ly).flat_map(move |y| (0..nl).map(move |l| (x, y, l))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unlabeled() {
        let dims = Dims::new(2, 2, 2).unwrap();
        let cf = ClusterField::new(dims);
        for (x, y, l) in cf.sites() {
            assert_eq!(cf.get(x, y, l), 0);
        }
    }

    #[test]
    fn sites_iterate_in_lexicographic_order() {
        let dims = Dims::new(2, 2, 2).unwrap();
        let cf = ClusterField::new(dims);
        let order: Vec<_> = cf.sites().collect();
        assert_eq!(
            order,
            vec![
                (0, 0, 0),
                (0, 0, 1),
                (0, 1, 0),
                (0, 1, 1),
                (1, 0, 0),
                (1, 0, 1),
                (1, 1, 0),
                (1, 1, 1),
            ]
        );
    }
}
