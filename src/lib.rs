// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Batch finder-chart generation for astronomical observation planning.
//!
//! Targets are read from plain-text lists (or given directly), their
//! positions resolved with the CDS Sesame service (or converted from
//! sexagesimal coordinate columns), and a chart image for each is fetched
//! from an imaging survey with the CDS hips2fits service.

mod cds;
mod cli;
mod coord;
mod params;
mod sexagesimal;
mod targets;

pub use cli::{FinderChart, FinderChartError};

use crossbeam_utils::atomic::AtomicCell;

/// Are progress bars being drawn? This should only ever be enabled by the
/// command-line interface, and before any charting starts.
static PROGRESS_BARS: AtomicCell<bool> = AtomicCell::new(false);
