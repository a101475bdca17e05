// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::PathBuf;

use crate::helpers::telemetry::setup_simple_tracing;
use crate::solve;
use anyhow::Result;
use clap::{ArgAction, Parser};
use polyroot_config::{load_config, AppConfig, CliOverrides, OutputFormat};
use tracing::{info, instrument, Level};

#[derive(Parser, Debug)]
#[command(name = "polyroot")]
#[command(about = "Build the monic polynomial whose roots are the first k - 1 values of an input record", long_about = None)]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("POLYROOT_GIT_SHA"), ")")
)]
pub struct Cli {
    /// JSON input record. Defaults to `input.json`
    input: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Check that the polynomial vanishes at every chosen root before printing it
    #[arg(long, action = ArgAction::SetTrue)]
    verify: bool,

    /// Indicate error levels by adding additional `-v` arguments. Eg. `polyroot -vvv` will give you
    /// trace level output
    #[arg(
        short,
        long,
        action = ArgAction::Count,
    )]
    pub verbose: u8,

    /// Silence all logs. This argument cannot be used alongside `-v`
    #[arg(
        short,
        long,
        action = ArgAction::SetTrue,
        conflicts_with = "verbose",
    )]
    quiet: bool,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else {
            match self.verbose {
                0 => Level::WARN,  //
                1 => Level::INFO,  // -v
                2 => Level::DEBUG, // -vv
                _ => Level::TRACE, // -vvv
            }
        }
    }

    #[instrument(skip_all)]
    pub fn execute(self) -> Result<()> {
        setup_simple_tracing(self.log_level());

        let config = self.load_config()?;
        info!("Config loaded from: {:?}", config.config_file());

        solve::execute(&config, &mut std::io::stdout().lock())
    }

    pub fn load_config(&self) -> Result<AppConfig> {
        load_config(self.config.clone(), self.overrides())
    }

    /// Only flags that were actually given take part in the config merge.
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            input: self.input.clone(),
            format: self.format,
            verify: self.verify.then_some(true),
        }
    }
}
