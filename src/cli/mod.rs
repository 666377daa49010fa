// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Command-line interface code. Options specific to a subcommand live in
//! that subcommand's module.
//!
//! So that every argument can also come from an arguments file, argument
//! structs keep booleans `#[serde(default)]` and everything else `Option`al.
//!
//! Nothing here is public except `FinderChart`, `FinderChart::run` and
//! `FinderChartError`.

mod chart;
mod common;
mod error;
mod targets_verify;

pub(crate) use common::Warn;
pub use error::FinderChartError;

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use clap::{AppSettings, Args, Parser, Subcommand};
use log::info;

use crate::PROGRESS_BARS;

// Build-time information from the "built" crate.
include!(concat!(env!("OUT_DIR"), "/built.rs"));

#[derive(Debug, Parser)]
#[clap(
    version,
    author,
    about = r#"Finder-chart generation for astronomical observation planning.
Target names are resolved into positions with the CDS Sesame service, and
charts are cut from imaging surveys with the CDS hips2fits service."#
)]
#[clap(global_setting(AppSettings::DeriveDisplayOrder))]
#[clap(disable_help_subcommand = true)]
#[clap(infer_subcommands = true)]
#[clap(propagate_version = true)]
#[clap(infer_long_args = true)]
pub struct FinderChart {
    #[clap(flatten)]
    global_opts: GlobalArgs,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct GlobalArgs {
    /// Disable progress bars.
    #[clap(long)]
    #[clap(global = true)]
    no_progress_bars: bool,

    /// Raise the verbosity by specifying this multiple times (e.g. -vv). By
    /// default only high-level information is printed.
    #[clap(short, long, parse(from_occurrences))]
    #[clap(global = true)]
    verbosity: u8,

    /// Report what would be done, without contacting any service or writing
    /// any chart.
    #[clap(long)]
    #[clap(global = true)]
    dry_run: bool,

    /// Write the merged arguments to a TOML file that reproduces this run.
    #[clap(long)]
    #[clap(global = true)]
    save_toml: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
#[clap(arg_required_else_help = true)]
enum Command {
    #[clap(about = "Make a finder chart for each target in a list.")]
    Chart(chart::ChartArgs),

    TargetsVerify(targets_verify::TargetsVerifyArgs),
}

impl FinderChart {
    pub fn run(self) -> Result<(), FinderChartError> {
        let GlobalArgs {
            verbosity,
            dry_run,
            no_progress_bars,
            save_toml,
        } = self.global_opts;
        setup_logging(verbosity).expect("Failed to initialise logging.");
        // Progress bars are on unless the user opted out.
        if !no_progress_bars {
            PROGRESS_BARS.store(true);
        }

        let sub_command = match &self.command {
            Command::Chart(_) => "chart",
            Command::TargetsVerify(_) => "targets-verify",
        };
        info!("finderchart {sub_command} {}", env!("CARGO_PKG_VERSION"));
        display_build_info();

        match self.command {
            Command::Chart(args) => {
                let args = args.merge()?;
                if let Some(toml_file) = save_toml {
                    let toml_str = toml::to_string(&args).expect("toml serialisation error");
                    let mut f = BufWriter::new(File::create(toml_file)?);
                    f.write_all(toml_str.as_bytes())?;
                }
                args.run(dry_run)?;
            }

            Command::TargetsVerify(args) => args.run()?,
        }

        info!("finderchart {sub_command} complete.");
        Ok(())
    }
}

/// Route all log messages to `stdout`, filtered by the `-v` count.
/// `env_logger` only uses colours and fancy symbols on a tty, so piped output
/// stays plain. From verbosity 3 up, messages also carry their source line.
fn setup_logging(verbosity: u8) -> Result<(), log::SetLoggerError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.target(env_logger::Target::Stdout);
    builder.format_target(false);
    builder.filter_level(match verbosity {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    });
    if verbosity >= 3 {
        builder.format(|buf, record| {
            let timestamp = buf.timestamp();
            writeln!(
                buf,
                "[{timestamp} {} {}:{}] {}",
                record.level(),
                record.target(),
                record.line().unwrap_or(0),
                record.args()
            )
        });
    }
    builder.init();

    Ok(())
}

/// Log how this binary was compiled.
fn display_build_info() {
    match GIT_COMMIT_HASH_SHORT {
        Some(hash) => {
            let dirty = match GIT_DIRTY {
                Some(true) => " (dirty)",
                _ => "",
            };
            info!("Built from git commit {hash}{dirty}");
        }
        None => info!("Built without git information"),
    }
    if let Some(head_ref) = GIT_HEAD_REF {
        info!("  on ref {head_ref}");
    }
    info!("  at {BUILT_TIME_UTC}");
    info!("  with {RUSTC_VERSION}");
    info!("");
}
