// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Chart images from the CDS hips2fits service.

use itertools::Itertools;
use log::debug;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use thiserror::Error;

use super::REQUEST_TIMEOUT;
use crate::coord::RADec;

const HIPS2FITS_URL: &str = "https://alasky.cds.unistra.fr/hips-image-services/hips2fits";

lazy_static::lazy_static! {
    /// All of the supported surveys as a comma-separated string.
    pub(crate) static ref SURVEYS_COMMA_SEPARATED: String = Survey::iter().join(", ");

    /// All of the supported chart formats as a comma-separated string.
    pub(crate) static ref CHART_FORMATS_COMMA_SEPARATED: String = ChartFormat::iter().join(", ");
}

/// The imaging surveys that finderchart knows HiPS identifiers for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
pub(crate) enum Survey {
    /// Colour composite of the second Digitized Sky Survey.
    #[strum(serialize = "dss2-color")]
    Dss2Color,

    /// The red channel of the second Digitized Sky Survey.
    #[strum(serialize = "dss2-red")]
    Dss2Red,

    /// The blue channel of the second Digitized Sky Survey.
    #[strum(serialize = "dss2-blue")]
    Dss2Blue,

    /// The J band of the Two Micron All Sky Survey.
    #[strum(serialize = "2mass-j")]
    TwoMassJ,

    /// Colour composite of SDSS data release 9.
    #[strum(serialize = "sdss9-color")]
    Sdss9Color,
}

impl Survey {
    /// The HiPS identifier understood by hips2fits.
    pub(crate) fn hips_id(self) -> &'static str {
        match self {
            Survey::Dss2Color => "CDS/P/DSS2/color",
            Survey::Dss2Red => "CDS/P/DSS2/red",
            Survey::Dss2Blue => "CDS/P/DSS2/blue",
            Survey::TwoMassJ => "CDS/P/2MASS/J",
            Survey::Sdss9Color => "CDS/P/SDSS9/color",
        }
    }
}

/// Supported image formats for charts. The `Display` strings double as file
/// extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
pub(crate) enum ChartFormat {
    #[strum(serialize = "jpg")]
    Jpg,

    #[strum(serialize = "png")]
    Png,
}

/// Fetch a chart image centred on a position. `fov_deg` is the width of the
/// image on the sky \[degrees\].
pub(crate) fn fetch_chart(
    position: RADec,
    survey: Survey,
    fov_deg: f64,
    size: u32,
    format: ChartFormat,
) -> Result<Vec<u8>, Hips2fitsError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?;
    let url = build_query(position, survey, fov_deg, size, format);
    debug!("Fetching {url}");
    let response = client.get(url).send()?;
    if !response.status().is_success() {
        return Err(Hips2fitsError::Status {
            survey,
            status: response.status(),
        });
    }
    Ok(response.bytes()?.to_vec())
}

/// Charts are always gnomonic (TAN) projections in the ICRS frame.
fn build_query(
    position: RADec,
    survey: Survey,
    fov_deg: f64,
    size: u32,
    format: ChartFormat,
) -> String {
    format!(
        "{HIPS2FITS_URL}?hips={hips}&ra={ra}&dec={dec}&fov={fov_deg}&width={size}&height={size}&projection=TAN&coordsys=icrs&format={format}",
        hips = survey.hips_id(),
        ra = position.ra,
        dec = position.dec,
    )
}

#[derive(Error, Debug)]
pub(crate) enum Hips2fitsError {
    #[error("hips2fits request against {survey} failed with HTTP status {status}")]
    Status {
        survey: Survey,
        status: reqwest::StatusCode,
    },

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
