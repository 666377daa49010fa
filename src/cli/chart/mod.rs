// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Parse finder-chart arguments into parameters.


use std::{path::PathBuf, str::FromStr};

use clap::Parser;
use itertools::Itertools;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::common::{display_warnings, unpack_arg_file, InfoPrinter, Warn, ARG_FILE_HELP};
use crate::{
    cds::{ChartFormat, Survey, CHART_FORMATS_COMMA_SEPARATED, SURVEYS_COMMA_SEPARATED},
    params::ChartParams,
    targets::TargetListSource,
    FinderChartError,
};

/// The field of view of a chart when none is given [arcmin].
const DEFAULT_FOV_ARCMIN: f64 = 7.0;

/// The width and height of a chart when none is given [pixels].
const DEFAULT_SIZE: u32 = 1024;

const DEFAULT_SURVEY: Survey = Survey::Dss2Color;

const DEFAULT_FORMAT: ChartFormat = ChartFormat::Jpg;

lazy_static::lazy_static! {
    static ref SURVEY_HELP: String =
        format!("The imaging survey to source charts from. Supported surveys: {}. Default: {}", *SURVEYS_COMMA_SEPARATED, DEFAULT_SURVEY);

    static ref FORMAT_HELP: String =
        format!("The image format of the output charts. Supported formats: {}. Default: {}", *CHART_FORMATS_COMMA_SEPARATED, DEFAULT_FORMAT);

    static ref FOV_HELP: String =
        format!("The field of view of each chart [arcmin]. Default: {DEFAULT_FOV_ARCMIN}");

    static ref SIZE_HELP: String =
        format!("The width and height of each chart [pixels]. Default: {DEFAULT_SIZE}");
}

#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct ChartArgs {
    #[clap(name = "ARGUMENTS_FILE", help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    args_file: Option<PathBuf>,

    /// The targets to chart. Either the path to a target list file, or the
    /// name of a single target (e.g. M31).
    #[clap(short, long, help_heading = "INPUT TARGETS")]
    targets: Option<String>,

    /// Use the RA and Dec columns of the target list rather than resolving
    /// target names with Sesame.
    #[clap(long, help_heading = "INPUT TARGETS")]
    #[serde(default)]
    coords: bool,

    #[clap(long, help = SURVEY_HELP.as_str(), help_heading = "CHART")]
    survey: Option<String>,

    #[clap(long, help = FORMAT_HELP.as_str(), help_heading = "CHART")]
    format: Option<String>,

    #[clap(long, help = FOV_HELP.as_str(), help_heading = "CHART")]
    fov: Option<f64>,

    #[clap(long, help = SIZE_HELP.as_str(), help_heading = "CHART")]
    size: Option<u32>,

    /// The directory to write finder charts into. Missing directories are
    /// created. Default: the current directory.
    #[clap(short, long, help_heading = "OUTPUT FILES")]
    output_dir: Option<PathBuf>,
}

impl ChartArgs {
    /// Both command-line and file arguments overlap in terms of what is
    /// available; this function consolidates everything that was specified
    /// into a single struct. Where applicable, it will prefer CLI parameters
    /// over those in the file.
    ///
    /// This function should only ever merge arguments, and not try to make
    /// sense of them.
    pub(super) fn merge(self) -> Result<ChartArgs, FinderChartError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file {
            // Read in the file arguments. Ensure all of the file args are
            // accounted for by pattern matching.
            let ChartArgs {
                args_file: _,
                targets,
                coords,
                survey,
                format,
                fov,
                size,
                output_dir,
            } = unpack_arg_file(&arg_file)?;

            // Merge all the arguments, preferring the CLI args when available.
            Ok(ChartArgs {
                args_file: None,
                targets: cli_args.targets.or(targets),
                coords: cli_args.coords || coords,
                survey: cli_args.survey.or(survey),
                format: cli_args.format.or(format),
                fov: cli_args.fov.or(fov),
                size: cli_args.size.or(size),
                output_dir: cli_args.output_dir.or(output_dir),
            })
        } else {
            Ok(cli_args)
        }
    }

    /// Parse the arguments into parameters ready for charting.
    fn parse(self) -> Result<ChartParams, FinderChartError> {
        debug!("{:#?}", self);

        let ChartArgs {
            args_file: _,
            targets,
            coords,
            survey,
            format,
            fov,
            size,
            output_dir,
        } = self;

        let mut printer = InfoPrinter::new("Finder chart set up".into());

        let source = match targets {
            Some(t) => TargetListSource::from_arg(&t),
            None => return Err(ChartArgsError::NoTargets.into()),
        };
        if coords {
            if let TargetListSource::Single(name) = &source {
                return Err(ChartArgsError::SingleTargetWithCoords(name.clone()).into());
            }
        }
        match &source {
            TargetListSource::File(path) => {
                printer.push_line(format!("Reading targets from {}", path.display()).into())
            }
            TargetListSource::Single(name) => {
                printer.push_line(format!("Single target {name}").into())
            }
        }

        let targets = source.read()?;
        printer.push_block(vec![
            format!("{} target(s) to chart", targets.len()).into(),
            if coords {
                "Positions come from the target list's coordinate columns".into()
            } else {
                "Positions come from Sesame name resolution".into()
            },
        ]);

        let num_missing_coords = targets.iter().filter(|t| t.coords.is_none()).count();
        if coords && num_missing_coords > 0 {
            [
                format!(
                    "{num_missing_coords} of {} target(s) have no coordinate columns.",
                    targets.len()
                )
                .into(),
                "They cannot be charted in coordinate mode.".into(),
            ]
            .warn();
        }
        if !coords && num_missing_coords < targets.len() {
            "Coordinate columns are present but ignored; resolving target names with Sesame."
                .warn();
        }
        let duplicate_names = targets
            .iter()
            .map(|t| t.name.to_uppercase())
            .duplicates()
            .collect::<Vec<_>>();
        if !duplicate_names.is_empty() {
            format!(
                "Duplicate target name(s): {}; their charts will overwrite one another.",
                duplicate_names.join(", ")
            )
            .warn();
        }

        let survey = match survey.as_deref() {
            Some(s) => Survey::from_str(s)
                .map_err(|_| ChartArgsError::UnrecognisedSurvey(s.to_string()))?,
            None => DEFAULT_SURVEY,
        };
        let format = match format.as_deref() {
            Some(f) => ChartFormat::from_str(f)
                .map_err(|_| ChartArgsError::UnrecognisedFormat(f.to_string()))?,
            None => DEFAULT_FORMAT,
        };

        let fov_arcmin = fov.unwrap_or(DEFAULT_FOV_ARCMIN);
        // Also catches NaN.
        if !(fov_arcmin > 0.0) {
            return Err(ChartArgsError::NonPositiveFov(fov_arcmin).into());
        }
        let fov_deg = fov_arcmin / 60.0;

        let size = size.unwrap_or(DEFAULT_SIZE);
        if size == 0 {
            return Err(ChartArgsError::ZeroSize.into());
        }

        printer.push_block(vec![
            format!("Survey:        {survey} ({})", survey.hips_id()).into(),
            format!("Field of view: {fov_arcmin} arcmin").into(),
            format!("Chart size:    {size} x {size} pixels").into(),
            format!("Image format:  {format}").into(),
        ]);

        // The directory itself isn't created until charting actually runs, so
        // that a dry run leaves the filesystem untouched.
        let output_dir = output_dir.unwrap_or_else(|| PathBuf::from("."));
        if output_dir.exists() && !output_dir.is_dir() {
            return Err(ChartArgsError::OutputDirNotADirectory(output_dir).into());
        }
        printer.push_line(format!("Writing charts to {}", output_dir.display()).into());

        printer.display();
        display_warnings();

        Ok(ChartParams {
            targets,
            from_coords: coords,
            survey,
            format,
            fov_deg,
            size,
            output_dir,
        })
    }

    pub(super) fn run(self, dry_run: bool) -> Result<(), FinderChartError> {
        debug!("Converting arguments into parameters");
        trace!("{:#?}", self);
        let params = self.parse()?;

        if dry_run {
            info!("Dry run -- exiting now.");
            return Ok(());
        }

        params.run()?;
        Ok(())
    }
}

#[derive(Error, Debug)]
pub(super) enum ChartArgsError {
    #[error("No targets were specified; supply a target list file or a target name with -t")]
    NoTargets,

    #[error("'{0}' is a single target name, but --coords needs a target list with coordinate columns")]
    SingleTargetWithCoords(String),

    #[error("Unrecognised survey '{0}'; supported surveys are: {}", *SURVEYS_COMMA_SEPARATED)]
    UnrecognisedSurvey(String),

    #[error("Unrecognised chart format '{0}'; supported formats are: {}", *CHART_FORMATS_COMMA_SEPARATED)]
    UnrecognisedFormat(String),

    #[error("The field of view must be positive, but {0} arcmin was given")]
    NonPositiveFov(f64),

    #[error("The chart size must be at least 1 pixel")]
    ZeroSize,

    #[error("Output directory '{}' exists but is not a directory", .0.display())]
    OutputDirNotADirectory(PathBuf),
}
