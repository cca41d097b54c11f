/*
 * SPDX-FileCopyrightText: 2026 The multilayer-percolation Authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Myrvold-Ruskey permutation ranking and the layer-occupancy histogram.
//!
//! The rank of a permutation `π` of `{0, .., n-1}` is computed by the
//! linear-time algorithm of Myrvold and Ruskey, ported from
//! `original_source/jumps.c`'s `mr_rank1`/`permutation_to_rank`:
//!
//! ```text
//! rank(n, pi):
//!   if n < 2: return 0
//!   s = pi[n-1]
//!   swap pi[n-1] with pi[inv[n-1]]; update inv to match
//!   return s + n * rank(n-1, pi)
//! ```

/// Ranks `permutation` (a permutation of `0..permutation.len()`) in
/// `[0, n!)`. `permutation` itself is left untouched; scratch copies are
/// used internally.
pub fn rank(permutation: &[usize]) -> u64 {
    let n = permutation.len();
    let mut perm = permutation.to_vec();
    let mut inv = vec![0usize; n];
    for (i, &p) in perm.iter().enumerate() {
        inv[p] = i;
    }
    rank_inner(n, &mut perm, &mut inv)
}

fn rank_inner(n: usize, perm: &mut [usize], inv: &mut [usize]) -> u64 {
    if n < 2 {
        return 0;
    }
    let s = perm[n - 1];
    let j = inv[n - 1];
    perm.swap(n - 1, j);
    inv.swap(s, n - 1);
    s as u64 + n as u64 * rank_inner(n - 1, perm, inv)
}

/// The inverse of [`rank`]: given `n` and a rank in `[0, n!)`, reconstructs
/// the unique permutation of `{0, .., n-1}` with that rank.
///
/// `rank_inner` peels digits off from the top (length `n`) down to length
/// `2`, each digit `s_k` satisfying `s_k = (running rank) mod k` once the
/// contributions of all larger levels have been divided out. `unrank`
/// extracts those digits and replays the same swap the encoder performed,
/// but building the permutation up from length `1` instead of down from
/// length `n`.
pub fn unrank(n: usize, rank: u64) -> Vec<usize> {
    if n == 0 {
        return Vec::new();
    }

    let mut digits = vec![0usize; n + 1]; // digits[k] valid for k in 2..=n
    let mut r = rank;
    for k in (2..=n).rev() {
        digits[k] = (r % k as u64) as usize;
        r /= k as u64;
    }

    let mut perm = vec![0usize; n];
    let mut inv = vec![0usize; n];
    for k in 2..=n {
        perm[k - 1] = k - 1;
        inv[k - 1] = k - 1;
        let s = digits[k];
        let j = inv[s];
        perm.swap(k - 1, j);
        inv[s] = k - 1;
        inv[k - 1] = j;
    }
    perm
}

/// Sorts layer indices `0..bins.len()` ascending by `bins[layer]`, ties
/// broken by natural (increasing) layer order via a stable sort, then ranks
/// the resulting permutation.
pub fn histogram_index(bins: &[u32]) -> u64 {
    let mut order: Vec<usize> = (0..bins.len()).collect();
    order.sort_by_key(|&layer| bins[layer]);
    rank(&order)
}

/// `n!`, used to size the permutation histogram.
pub fn factorial(n: usize) -> u64 {
    (1..=n as u64).fold(1u64, u64::saturating_mul)
}
