// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Sky positions as right ascension and declination pairs.

use std::fmt;

use thiserror::Error;

use crate::sexagesimal::{
    degrees_to_sexagesimal_dms, degrees_to_sexagesimal_hms, parse_dec_degrees, parse_ra_degrees,
    sexagesimal_dms_colon_str_to_degrees, sexagesimal_hms_colon_str_to_degrees, SexagesimalError,
};

/// A struct containing a Right Ascension and Declination \[degrees\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct RADec {
    /// Right ascension \[degrees\].
    pub(crate) ra: f64,
    /// Declination \[degrees\].
    pub(crate) dec: f64,
}

impl RADec {
    pub(crate) const fn from_degrees(ra: f64, dec: f64) -> RADec {
        Self { ra, dec }
    }

    /// Convert a colon-delimited sexagesimal pair to a position. The right
    /// ascension is "hours minutes seconds", the declination "degrees minutes
    /// seconds". The error reports which of the two elements was at fault.
    pub(crate) fn from_sexagesimal(ra: &str, dec: &str) -> Result<RADec, RADecParseError> {
        let ra_deg =
            sexagesimal_hms_colon_str_to_degrees(ra).map_err(|err| RADecParseError::Ra {
                string: ra.to_string(),
                err,
            })?;
        let dec_deg =
            sexagesimal_dms_colon_str_to_degrees(dec).map_err(|err| RADecParseError::Dec {
                string: dec.to_string(),
                err,
            })?;
        Ok(Self::from_degrees(ra_deg, dec_deg))
    }

    /// Parse a pair of coordinate strings, taking each element as decimal
    /// degrees where possible and falling back to sexagesimal. The error
    /// reports which of the two elements was at fault.
    pub(crate) fn parse(ra: &str, dec: &str) -> Result<RADec, RADecParseError> {
        let ra_deg = parse_ra_degrees(ra).map_err(|err| RADecParseError::Ra {
            string: ra.to_string(),
            err,
        })?;
        let dec_deg = parse_dec_degrees(dec).map_err(|err| RADecParseError::Dec {
            string: dec.to_string(),
            err,
        })?;
        Ok(Self::from_degrees(ra_deg, dec_deg))
    }
}

impl fmt::Display for RADec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "({}, {})",
            degrees_to_sexagesimal_hms(self.ra),
            degrees_to_sexagesimal_dms(self.dec)
        )
    }
}

/// Convert a slice of colon-delimited sexagesimal (RA, Dec) pairs to
/// positions, preserving the input order. The first pair that fails to
/// convert aborts the whole conversion and is named in the error.
pub(crate) fn radec_pairs_from_sexagesimal(
    pairs: &[(String, String)],
) -> Result<Vec<RADec>, PairConversionError> {
    pairs
        .iter()
        .enumerate()
        .map(|(index, (ra, dec))| {
            RADec::from_sexagesimal(ra, dec).map_err(|err| PairConversionError { index, err })
        })
        .collect()
}

/// Error when converting one (RA, Dec) string pair to a position.
#[derive(Error, Debug)]
pub(crate) enum RADecParseError {
    #[error("Couldn't parse RA string '{string}': {err}")]
    Ra { string: String, err: SexagesimalError },

    #[error("Couldn't parse Dec string '{string}': {err}")]
    Dec { string: String, err: SexagesimalError },
}

/// Error when converting a list of (RA, Dec) string pairs to positions.
#[derive(Error, Debug)]
#[error("Pair {index}: {err}")]
pub(crate) struct PairConversionError {
    pub(crate) index: usize,
    pub(crate) err: RADecParseError,
}
