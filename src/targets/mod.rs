// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to handle lists of observing targets.
//!
//! A target list is a plain-text file with whitespace-delimited columns.
//! Lines starting with '#' and blank lines are ignored. A line with a single
//! column is a bare target name; a line with three or more columns is a name
//! followed by RA and Dec strings (any further columns are ignored). A line
//! with exactly two columns is malformed.

mod error;

pub(crate) use error::ReadTargetListError;

use std::{
    fs::File,
    io::BufReader,
    ops::Deref,
    path::{Path, PathBuf},
};

use log::{debug, trace};
use vec1::Vec1;

use crate::cli::Warn;

/// A single observing target: a name as it appeared in the target list, and
/// whatever coordinate strings accompanied it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Target {
    pub(crate) name: String,

    /// Raw (RA, Dec) strings from the list, exactly as they appeared. These
    /// are only parsed when charting from coordinates.
    pub(crate) coords: Option<(String, String)>,
}

/// A non-empty collection of observing targets, in the order they were read.
#[derive(Debug, Clone)]
pub(crate) struct TargetList(Vec1<Target>);

impl TargetList {
    /// A list holding one coordinate-free target, for when the user gives a
    /// single identifier instead of a file.
    pub(crate) fn single(name: String) -> TargetList {
        TargetList(Vec1::new(Target { name, coords: None }))
    }
}

impl Deref for TargetList {
    type Target = Vec1<Target>;

    fn deref(&self) -> &Vec1<Target> {
        &self.0
    }
}

/// Where targets come from: a file listing many of them, or a single
/// identifier given directly on the command line.
#[derive(Debug, Clone)]
pub(crate) enum TargetListSource {
    File(PathBuf),
    Single(String),
}

impl TargetListSource {
    /// An argument names a target list file if a file exists at that path;
    /// otherwise it names a single target.
    pub(crate) fn from_arg(arg: &str) -> TargetListSource {
        let path = Path::new(arg);
        if path.is_file() {
            TargetListSource::File(path.to_path_buf())
        } else {
            TargetListSource::Single(arg.to_string())
        }
    }

    pub(crate) fn read(self) -> Result<TargetList, ReadTargetListError> {
        match self {
            TargetListSource::File(path) => read_target_list_file(&path),
            TargetListSource::Single(name) => Ok(TargetList::single(name)),
        }
    }
}

/// Open and read a target list from a path.
pub(crate) fn read_target_list_file(path: &Path) -> Result<TargetList, ReadTargetListError> {
    debug!("Reading target list {}", path.display());
    let mut buf = BufReader::new(File::open(path)?);
    read_target_list(&mut buf)
}

/// Read a whitespace-delimited target list.
pub(crate) fn read_target_list<T: std::io::BufRead>(
    buf: &mut T,
) -> Result<TargetList, ReadTargetListError> {
    let mut targets = vec![];
    let mut line = String::new();
    let mut line_num: u32 = 0;
    let mut num_lines_with_extras = 0;

    while buf.read_line(&mut line)? > 0 {
        line_num += 1;
        if line.starts_with('#') {
            line.clear();
            continue;
        }

        let mut items = line.split_ascii_whitespace();
        let name = match items.next() {
            // A blank line.
            None => {
                line.clear();
                continue;
            }
            Some(name) => name.to_string(),
        };
        let coords = match (items.next(), items.next()) {
            (Some(ra), Some(dec)) => Some((ra.to_string(), dec.to_string())),
            (Some(_), None) => return Err(ReadTargetListError::MissingDec { line_num }),
            (None, _) => None,
        };
        if items.count() > 0 {
            debug!("Target list line {line_num}: extra column(s)");
            num_lines_with_extras += 1;
        }

        targets.push(Target { name, coords });
        line.clear();
    }

    if num_lines_with_extras > 0 {
        format!("{num_lines_with_extras} target list line(s) have extra columns; only the first three are used.").warn();
    }

    match Vec1::try_from_vec(targets) {
        Ok(targets) => {
            trace!("Read {} target(s)", targets.len());
            Ok(TargetList(targets))
        }
        Err(_) => Err(ReadTargetListError::NoTargets),
    }
}
