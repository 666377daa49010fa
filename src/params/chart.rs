// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use log::{debug, info, warn};
use thiserror::Error;

use crate::{
    cds::{hips2fits, sesame, ChartFormat, Hips2fitsError, SesameError, Survey},
    coord::{RADec, RADecParseError},
    targets::{Target, TargetList},
    PROGRESS_BARS,
};

/// Everything needed to make finder charts. Unlike the user's arguments,
/// these parameters have been validated.
pub(crate) struct ChartParams {
    /// The targets to chart, in the order they were given.
    pub(crate) targets: TargetList,

    /// Chart from the target list's coordinate columns instead of resolving
    /// target names.
    pub(crate) from_coords: bool,

    pub(crate) survey: Survey,

    pub(crate) format: ChartFormat,

    /// The width of each chart on the sky \[degrees\].
    pub(crate) fov_deg: f64,

    /// The width and height of each chart \[pixels\].
    pub(crate) size: u32,

    /// The directory charts are written into.
    pub(crate) output_dir: PathBuf,
}

impl ChartParams {
    /// Make a chart for every target. A failing target is skipped so the
    /// rest of the batch can proceed; if any failed, an error summarising
    /// them is returned at the end.
    pub(crate) fn run(&self) -> Result<(), ChartError> {
        std::fs::create_dir_all(&self.output_dir)?;

        let progress_bar = make_chart_progress_bar(self.targets.len());
        let mut failed_names = vec![];
        for target in self.targets.iter() {
            // Everything downstream wants the upper-cased name: the Sesame
            // query, the log lines and the output file name.
            let name = target.name.to_uppercase();
            progress_bar.set_message(name.clone());
            match self.make_chart(&name, target) {
                Ok(path) => info!("{name}: Wrote {}", path.display()),
                Err(err) => {
                    warn!("{name}: {err}");
                    failed_names.push(name);
                }
            }
            progress_bar.inc(1);
        }
        progress_bar.abandon_with_message("Finished charting");

        if !failed_names.is_empty() {
            return Err(ChartError::SomeTargetsFailed {
                failed_names,
                num_targets: self.targets.len(),
            });
        }
        Ok(())
    }

    fn make_chart(&self, name: &str, target: &Target) -> Result<PathBuf, ChartError> {
        let position = if self.from_coords {
            match target.coords.as_ref() {
                None => return Err(ChartError::NoCoords),
                Some((ra, dec)) => RADec::parse(ra, dec)?,
            }
        } else {
            let position = sesame::resolve(name)?;
            debug!("Sesame resolved {name} to {position}");
            position
        };

        let bytes = hips2fits::fetch_chart(
            position,
            self.survey,
            self.fov_deg,
            self.size,
            self.format,
        )?;
        let path = self.chart_path(name);
        std::fs::write(&path, bytes)?;
        Ok(path)
    }

    /// Where a target's chart lands on disk. `name` must already be
    /// upper-cased.
    fn chart_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(format!("{name}.{}", self.format))
    }
}

fn make_chart_progress_bar(num_targets: usize) -> ProgressBar {
    // Use stdout, not stderr, because the messages printed alongside the
    // progress bar are valuable.
    ProgressBar::with_draw_target(
        Some(num_targets as u64),
        if PROGRESS_BARS.load() {
            ProgressDrawTarget::stdout()
        } else {
            ProgressDrawTarget::hidden()
        },
    )
    .with_style(
        ProgressStyle::default_bar()
            .template("{msg}: [{wide_bar:.blue}] {pos:3}/{len:3} targets ({elapsed_precise}<{eta_precise})")
            .unwrap()
            .progress_chars("=> "),
    )
    .with_position(0)
}

#[derive(Error, Debug)]
pub(crate) enum ChartError {
    #[error("The target list has no coordinate columns for this target")]
    NoCoords,

    #[error(transparent)]
    BadCoords(#[from] RADecParseError),

    #[error(transparent)]
    Sesame(#[from] SesameError),

    #[error(transparent)]
    Hips2fits(#[from] Hips2fitsError),

    #[error("Couldn't chart {} of {num_targets} target(s): {}", .failed_names.len(), .failed_names.join(", "))]
    SomeTargetsFailed {
        failed_names: Vec<String>,
        num_targets: usize,
    },

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
