// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all finderchart-related errors. This should be the *only*
//! error enum that is publicly visible.

use thiserror::Error;

use super::{chart::ChartArgsError, targets_verify::TargetsVerifyError};
use crate::{params::ChartError, targets::ReadTargetListError};

/// The *only* publicly visible error from finderchart.
#[derive(Error, Debug)]
pub enum FinderChartError {
    /// An error related to making charts.
    #[error("{0}")]
    Chart(String),

    /// An error related to target lists.
    #[error("{0}")]
    TargetList(String),

    /// An error from a CDS service (Sesame or hips2fits).
    #[error("{0}")]
    Cds(String),

    /// An error related to argument files.
    #[error("{0}")]
    ArgFile(String),

    /// A generic error that can't be clarified further, e.g. IO errors.
    #[error("{0}")]
    Generic(String),
}

// When changing the error propagation below, ensure `Self::from(e)` uses the
// correct `e`!

// Binary sub-command errors.

impl From<ChartArgsError> for FinderChartError {
    fn from(e: ChartArgsError) -> Self {
        match e {
            ChartArgsError::NoTargets
            | ChartArgsError::SingleTargetWithCoords(_)
            | ChartArgsError::UnrecognisedSurvey(_)
            | ChartArgsError::UnrecognisedFormat(_)
            | ChartArgsError::NonPositiveFov(_)
            | ChartArgsError::ZeroSize
            | ChartArgsError::OutputDirNotADirectory(_) => Self::Chart(e.to_string()),
        }
    }
}

impl From<TargetsVerifyError> for FinderChartError {
    fn from(e: TargetsVerifyError) -> Self {
        Self::TargetList(e.to_string())
    }
}

// Errors from the rest of the crate.

impl From<ChartError> for FinderChartError {
    fn from(e: ChartError) -> Self {
        let s = e.to_string();
        match e {
            ChartError::NoCoords
            | ChartError::BadCoords(_)
            | ChartError::SomeTargetsFailed { .. } => Self::Chart(s),
            ChartError::Sesame(_) | ChartError::Hips2fits(_) => Self::Cds(s),
            ChartError::IO(_) => Self::Generic(s),
        }
    }
}

impl From<ReadTargetListError> for FinderChartError {
    fn from(e: ReadTargetListError) -> Self {
        match e {
            ReadTargetListError::NoTargets | ReadTargetListError::MissingDec { .. } => {
                Self::TargetList(e.to_string())
            }
            ReadTargetListError::IO(e) => Self::from(e),
        }
    }
}

impl From<std::io::Error> for FinderChartError {
    fn from(e: std::io::Error) -> Self {
        Self::Generic(e.to_string())
    }
}
