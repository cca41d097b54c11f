/*
 * SPDX-FileCopyrightText: 2026 The multilayer-percolation Authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Entropy-device seeding, ported from `original_source/main.c`'s `seed_rng`.

use std::fs::File;
use std::io::Read;

use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Reads eight bytes from `/dev/urandom` and returns them as a seed. Returns
/// `None` (logging a warning, never failing the run) if the device can't be
/// opened or read, matching the original's "print a warning and carry on
/// with whatever the RNG library defaults to" behavior.
pub fn seed_from_urandom() -> Option<u64> {
    let mut file = match File::open("/dev/urandom") {
        Ok(f) => f,
        Err(e) => {
            log::warn!("couldn't open /dev/urandom to seed the RNG: {e}");
            return None;
        }
    };

    let mut buf = [0u8; 8];
    match file.read_exact(&mut buf) {
        Ok(()) => Some(u64::from_ne_bytes(buf)),
        Err(e) => {
            log::warn!("couldn't read from /dev/urandom to seed the RNG: {e}");
            None
        }
    }
}

/// The seed used when `/dev/urandom` can't be read, matching the original's
/// behavior of leaving the RNG at whatever fixed state its allocator default
/// left it in rather than reaching for another entropy source.
const FALLBACK_SEED: u64 = 0;

/// Builds a fresh [`SmallRng`], seeded from `/dev/urandom` when available and
/// falling back to a fixed deterministic seed otherwise (spec §6, §7).
pub fn new_rng() -> SmallRng {
    match seed_from_urandom() {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::seed_from_u64(FALLBACK_SEED),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeding_twice_gives_different_seeds() {
        let a = seed_from_urandom();
        let b = seed_from_urandom();
        // Vanishingly unlikely to collide; guards against a seed() that
        // always returns a fixed value.
        assert!(a.is_none() || b.is_none() || a != b);
    }
}
