// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Target name resolution with the CDS Sesame service.

use lazy_static::lazy_static;
use log::{debug, trace};
use reqwest::Url;
use thiserror::Error;

use super::REQUEST_TIMEOUT;
use crate::coord::RADec;

lazy_static! {
    /// The Sesame endpoint. "-op" asks for plain-text output, and "SNV"
    /// queries the Simbad, NED and VizieR databases in that order.
    static ref SESAME_URL: Url =
        Url::parse("https://cds.unistra.fr/cgi-bin/nph-sesame/-op/SNV").unwrap();
}

/// Ask Sesame for the ICRS position of a named target.
pub(crate) fn resolve(name: &str) -> Result<RADec, SesameError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?;
    let url = sesame_url(name);
    debug!("Resolving '{name}' with {url}");
    let response = client.get(url).send()?;
    if !response.status().is_success() {
        return Err(SesameError::Status {
            name: name.to_string(),
            status: response.status(),
        });
    }
    let body = response.text()?;
    trace!("Sesame response:\n{body}");
    parse_sesame_response(name, &body)
}

/// Build the query URL for a target name; the name is the whole query
/// string. A literal '+' ("PSR B1919+21") has to be escaped by hand, as the
/// CGI would decode it as a space. `set_query` percent-encodes the rest.
fn sesame_url(name: &str) -> Url {
    let mut url = SESAME_URL.clone();
    url.set_query(Some(&name.replace('+', "%2B")));
    url
}

/// Pull the first J2000 position line ("%J <ra> <dec> ...", both in decimal
/// degrees) out of a plain-text Sesame response.
fn parse_sesame_response(name: &str, body: &str) -> Result<RADec, SesameError> {
    for line in body.lines() {
        let rest = match line.strip_prefix("%J ") {
            None => continue,
            Some(rest) => rest,
        };
        let mut fields = rest.split_ascii_whitespace();
        return match (
            fields.next().and_then(|ra| ra.parse::<f64>().ok()),
            fields.next().and_then(|dec| dec.parse::<f64>().ok()),
        ) {
            (Some(ra), Some(dec)) => Ok(RADec::from_degrees(ra, dec)),
            _ => Err(SesameError::MalformedPosition {
                name: name.to_string(),
                line: line.to_string(),
            }),
        };
    }

    Err(SesameError::Unresolved(name.to_string()))
}

#[derive(Error, Debug)]
pub(crate) enum SesameError {
    #[error("Sesame couldn't resolve the target name '{0}'")]
    Unresolved(String),

    #[error("Sesame returned a position line for '{name}' that couldn't be read: {line}")]
    MalformedPosition { name: String, line: String },

    #[error("Sesame request for '{name}' failed with HTTP status {status}")]
    Status {
        name: String,
        status: reqwest::StatusCode,
    },

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
