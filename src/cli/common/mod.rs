// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code shared between the command-line subcommands.

mod printers;

pub(super) use printers::InfoPrinter;
pub(crate) use printers::{display_warnings, Warn};

use std::{path::Path, str::FromStr};

use itertools::Itertools;
use log::debug;
use serde::de::DeserializeOwned;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use super::error::FinderChartError;

lazy_static::lazy_static! {
    pub(super) static ref ARG_FILE_TYPES_COMMA_SEPARATED: String = ArgFileTypes::iter().join(", ");

    pub(super) static ref ARG_FILE_HELP: String =
        format!("A file supplying any of the other arguments. Arguments given on the command line take precedence. Supported formats: {}", *ARG_FILE_TYPES_COMMA_SEPARATED);
}

#[derive(Debug, Display, EnumIter, EnumString)]
pub(super) enum ArgFileTypes {
    #[strum(serialize = "toml")]
    Toml,
    #[strum(serialize = "json")]
    Json,
}

/// Deserialise an argument file into an arguments struct. The format is
/// decided by the file extension, before any reading happens.
pub(super) fn unpack_arg_file<T: DeserializeOwned>(arg_file: &Path) -> Result<T, FinderChartError> {
    debug!("Attempting to parse argument file {}", arg_file.display());

    let file_type = arg_file
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .and_then(|e| ArgFileTypes::from_str(&e).ok());
    let file_type = match file_type {
        Some(t) => t,
        None => {
            return Err(FinderChartError::ArgFile(format!(
                "Argument file '{:?}' doesn't have a recognised file extension! Valid extensions are: {}",
                arg_file, *ARG_FILE_TYPES_COMMA_SEPARATED
            )))
        }
    };

    let contents = std::fs::read_to_string(arg_file)?;
    match file_type {
        ArgFileTypes::Toml => {
            debug!("Parsing toml file...");
            toml::from_str(&contents).map_err(|err| {
                FinderChartError::ArgFile(format!(
                    "Couldn't decode toml structure from {arg_file:?}:\n{err}"
                ))
            })
        }
        ArgFileTypes::Json => {
            debug!("Parsing json file...");
            serde_json::from_str(&contents).map_err(|err| {
                FinderChartError::ArgFile(format!(
                    "Couldn't decode json structure from {arg_file:?}:\n{err}"
                ))
            })
        }
    }
}
