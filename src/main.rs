/*
 * SPDX-FileCopyrightText: 2026 The multilayer-percolation Authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env().init();

    let args: Vec<String> = std::env::args().collect();
    multilayer_percolation::cli::dispatch(&args)
}
