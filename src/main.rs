// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod cli;
mod config;
mod error;
mod fetch;
mod format;
mod inventory;
mod ui;

use config::RunConfig;
use error::Result;
use log::{debug, warn};
use std::fs::File;
use std::io::{self, BufWriter, Write};

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Resolve and validate the run configuration once
    let config = match config::build_run_config(&args) {
        Ok(c) => c,
        Err(e) => {
            ui::print_error(&e.to_string());
            if matches!(e, error::Error::Usage(_)) {
                eprintln!("{}", cli::CliArgs::usage());
            }
            std::process::exit(e.exit_code());
        }
    };

    if let Err(e) = run(&config) {
        ui::print_error(&e.to_string());
        std::process::exit(e.exit_code());
    }
}

/// Read, decode and print the inventory described by `config`
fn run(config: &RunConfig) -> Result<()> {
    let stream = fetch::open_inventory(&config.source)?;
    if !config.base_uri.is_empty() {
        ui::status(&format!("Using: {} as base HREF", config.base_uri));
    }

    let inventory = inventory::read_inventory(stream, &config.base_uri, inventory::posix_join)?;
    if inventory.is_empty() {
        warn!("inventory contains no entries");
    }
    debug!("rendering {} entries as {}", inventory.len(), config.mode.as_str());

    // Only create (and truncate) the output once there is something to write
    let mut out: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    format::format_inventory(&inventory, config.mode, &mut *out)?;

    Ok(())
}
