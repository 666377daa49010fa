// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to verify target list files.

use std::path::{Path, PathBuf};

use clap::Parser;
use log::{debug, info};
use thiserror::Error;

use crate::{coord::radec_pairs_from_sexagesimal, targets::read_target_list_file, FinderChartError};

/// Verify that target lists can be read by finderchart.
///
/// Every list is read and reported on. Coordinate columns must be
/// colon-delimited sexagesimal and are converted to decimal degrees along
/// the way, so a list that verifies cleanly here will also chart cleanly in
/// coordinate mode.
#[derive(Parser, Debug)]
pub struct TargetsVerifyArgs {
    /// Path to the target list(s) to be verified.
    #[clap(name = "TARGET_LISTS", parse(from_os_str))]
    target_lists: Vec<PathBuf>,
}

impl TargetsVerifyArgs {
    pub fn run(&self) -> Result<(), FinderChartError> {
        verify(&self.target_lists)?;
        Ok(())
    }
}

/// Read and print stats out for each input target list. If a target list
/// couldn't be read, print the error, and continue trying to read the other
/// target lists.
fn verify<P: AsRef<Path>>(target_lists: &[P]) -> Result<(), TargetsVerifyError> {
    if target_lists.is_empty() {
        info!("No target lists were supplied!");
        std::process::exit(1);
    }

    let mut num_failed = 0;
    for target_list in target_lists {
        info!("{}:", target_list.as_ref().display());

        let targets = match read_target_list_file(target_list.as_ref()) {
            Ok(t) => t,
            Err(e) => {
                info!("    {e}");
                info!("");
                num_failed += 1;
                continue;
            }
        };

        // Coordinate columns must be colon-delimited sexagesimal; the first
        // bad pair fails the whole list.
        let pairs: Vec<(String, String)> = targets
            .iter()
            .filter_map(|target| target.coords.clone())
            .collect();
        let num_name_only = targets.len() - pairs.len();
        match radec_pairs_from_sexagesimal(&pairs) {
            Ok(positions) => {
                for (target, position) in targets
                    .iter()
                    .filter(|target| target.coords.is_some())
                    .zip(positions)
                {
                    debug!("    {} is at {position}", target.name);
                }
                info!(
                    "    {} target(s) ({} with coordinates, {num_name_only} name only)",
                    targets.len(),
                    pairs.len()
                );
            }
            Err(e) => {
                info!("    {e}");
                num_failed += 1;
            }
        }
        info!("");
    }

    if num_failed > 0 {
        return Err(TargetsVerifyError {
            num_failed,
            num_total: target_lists.len(),
        });
    }
    Ok(())
}

#[derive(Error, Debug)]
#[error("{num_failed} of {num_total} target list(s) failed verification")]
pub(super) struct TargetsVerifyError {
    num_failed: usize,
    num_total: usize,
}
