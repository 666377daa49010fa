// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors associated with reading target lists.

use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum ReadTargetListError {
    #[error("The target list contained no targets")]
    NoTargets,

    #[error("Target list line {line_num}: Found an RA column but no Dec column")]
    MissingDec { line_num: u32 },

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
