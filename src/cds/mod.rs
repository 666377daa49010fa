// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Clients for the Strasbourg astronomical Data Centre (CDS) services:
//! Sesame for target name resolution and hips2fits for chart images.

pub(crate) mod hips2fits;
pub(crate) mod sesame;

pub(crate) use hips2fits::{
    ChartFormat, Hips2fitsError, Survey, CHART_FORMATS_COMMA_SEPARATED, SURVEYS_COMMA_SEPARATED,
};
pub(crate) use sesame::SesameError;

use std::time::Duration;

/// How long to wait on any one CDS request before giving up.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
