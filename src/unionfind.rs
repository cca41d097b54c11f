/*
 * SPDX-FileCopyrightText: 2026 The multilayer-percolation Authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Union-find with path compression, backing the Hoshen-Kopelman label sweep.
//!
//! The legacy C implementation preallocates a ceiling of ~2 million labels
//! (`MAX_NR_OF_CLUSTERS` in `clusters.c`). A growable `Vec` gives the same
//! amortized behavior without hard-coding that ceiling, but we keep the
//! ceiling as a sanity check: exceeding it is a contract violation, not a
//! resizing opportunity.

/// Hard ceiling on distinct labels a single run may create. Exceeding it
/// indicates a pathological configuration or a sizing mistake.
pub const MAX_LABELS: usize = 2 * 1024 * 1024;

/// A union-find (disjoint-set) structure over label ids `1..=n`. Id `0` is
/// never assigned a root and must not be queried.
#[derive(Debug, Default)]
pub struct UnionFind {
    parent: Vec<u32>,
}

impl UnionFind {
    pub fn new() -> Self {
        Self { parent: Vec::new() }
    }

    /// Creates a fresh singleton label and returns its id.
    pub fn make_label(&mut self) -> u32 {
        let id = self.parent.len() as u32 + 1;
        assert!(
            (id as usize) < MAX_LABELS,
            "exceeded the {MAX_LABELS}-label ceiling for a single run"
        );
        self.parent.push(id);
        id
    }

    /// Finds the root of `x`, compressing the path traversed along the way.
    pub fn find(&mut self, x: u32) -> u32 {
        debug_assert!(x >= 1 && (x as usize) <= self.parent.len());
        let mut root = x;
        while self.parent[(root - 1) as usize] != root {
            root = self.parent[(root - 1) as usize];
        }

        let mut cur = x;
        while self.parent[(cur - 1) as usize] != root {
            let next = self.parent[(cur - 1) as usize];
            self.parent[(cur - 1) as usize] = root;
            cur = next;
        }

        root
    }

    /// Unions the classes of `x` and `y`, returning the new shared root.
    pub fn union(&mut self, x: u32, y: u32) -> u32 {
        let rx = self.find(x);
        let ry = self.find(y);
        self.parent[(rx - 1) as usize] = ry;
        ry
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singleton_is_its_own_root() {
        let mut uf = UnionFind::new();
        let a = uf.make_label();
        assert_eq!(uf.find(a), a);
    }

    #[test]
    fn union_merges_roots_and_compresses() {
        let mut uf = UnionFind::new();
        let a = uf.make_label();
        let b = uf.make_label();
        let c = uf.make_label();
        uf.union(a, b);
        uf.union(b, c);
        let ra = uf.find(a);
        let rb = uf.find(b);
        let rc = uf.find(c);
        assert_eq!(ra, rb);
        assert_eq!(rb, rc);
    }

    #[test]
    fn idempotent_union_of_same_root() {
        let mut uf = UnionFind::new();
        let a = uf.make_label();
        let b = uf.make_label();
        uf.union(a, b);
        let root_before = uf.find(a);
        uf.union(a, b);
        assert_eq!(uf.find(a), root_before);
    }
}
