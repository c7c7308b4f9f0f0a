// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! sumsearch CLI entrypoint

use clap::Parser;

use sum_search::cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.execute() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
