// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Conversion to and from sexagesimal-formatted angles.

use thiserror::Error;

/// Convert a colon-delimited sexagesimal string in "hours minutes seconds"
/// (e.g. "12:30:45") to a float \[degrees\].
pub(crate) fn sexagesimal_hms_colon_str_to_degrees(hms: &str) -> Result<f64, SexagesimalError> {
    let mut split = Vec::with_capacity(3);
    for elem in hms.split(':') {
        split.push(elem.parse()?);
    }
    if split.len() != 3 {
        return Err(SexagesimalError::WrongFieldCount(hms.to_string()));
    }
    Ok(sexagesimal_hms_to_degrees(split[0], split[1], split[2]))
}

/// Convert a colon-delimited sexagesimal string in "degrees minutes seconds"
/// (e.g. "-22:58:52.56") to a float \[degrees\].
pub(crate) fn sexagesimal_dms_colon_str_to_degrees(dms: &str) -> Result<f64, SexagesimalError> {
    let mut split = Vec::with_capacity(3);
    for elem in dms.split(':') {
        split.push(elem.parse()?);
    }
    if split.len() != 3 {
        return Err(SexagesimalError::WrongFieldCount(dms.to_string()));
    }
    Ok(sexagesimal_dms_to_degrees(split[0], split[1], split[2]))
}

/// Convert a letter-delimited sexagesimal string in "hours minutes seconds"
/// (e.g. "11h34m23.7854s") to a float \[degrees\].
pub(crate) fn sexagesimal_hms_string_to_degrees(hms: &str) -> Result<f64, SexagesimalError> {
    let mut split = hms.split('h');
    let h = match split.next() {
        None => return Err(SexagesimalError::MissingH(hms.to_string())),
        Some(h) => h.parse()?,
    };

    let mut split = match split.next() {
        None => return Err(SexagesimalError::MissingH(hms.to_string())),
        Some(s) => s.split('m'),
    };
    let m = match split.next() {
        None => return Err(SexagesimalError::MissingM(hms.to_string())),
        Some(m) => m.parse()?,
    };

    let mut split = match split.next() {
        None => return Err(SexagesimalError::MissingM(hms.to_string())),
        Some(s) => s.split('s'),
    };
    let s = match split.next() {
        None => return Err(SexagesimalError::MissingS(hms.to_string())),
        Some(s) => s.parse()?,
    };
    if split.next().is_none() {
        return Err(SexagesimalError::MissingS(hms.to_string()));
    }

    Ok(sexagesimal_hms_to_degrees(h, m, s))
}

/// Convert a letter-delimited sexagesimal string in "degrees minutes seconds"
/// (e.g. "-11d49m01.062s") to a float \[degrees\].
pub(crate) fn sexagesimal_dms_string_to_degrees(dms: &str) -> Result<f64, SexagesimalError> {
    let mut split = dms.split('d');
    let d = match split.next() {
        None => return Err(SexagesimalError::MissingD(dms.to_string())),
        Some(d) => d.parse()?,
    };

    let mut split = match split.next() {
        None => return Err(SexagesimalError::MissingD(dms.to_string())),
        Some(s) => s.split('m'),
    };
    let m = match split.next() {
        None => return Err(SexagesimalError::MissingM(dms.to_string())),
        Some(m) => m.parse()?,
    };

    let mut split = match split.next() {
        None => return Err(SexagesimalError::MissingM(dms.to_string())),
        Some(s) => s.split('s'),
    };
    let s = match split.next() {
        None => return Err(SexagesimalError::MissingS(dms.to_string())),
        Some(s) => s.parse()?,
    };
    if split.next().is_none() {
        return Err(SexagesimalError::MissingS(dms.to_string()));
    }

    Ok(sexagesimal_dms_to_degrees(d, m, s))
}

pub(crate) fn sexagesimal_hms_to_degrees(h: f64, m: f64, s: f64) -> f64 {
    sexagesimal_dms_to_degrees(15.0 * h, 15.0 * m, 15.0 * s)
}

pub(crate) fn sexagesimal_dms_to_degrees(d: f64, m: f64, s: f64) -> f64 {
    // The sign bit, not a comparison; a negative zero in the degrees field
    // ("-00:30:00") must still negate the whole angle.
    let negative = d.is_sign_negative();
    let num = d.abs() + m / 60.0 + s / 3600.0;
    if negative {
        -num
    } else {
        num
    }
}

/// Parse a right ascension into degrees. A plain number is taken as decimal
/// degrees already; a colon-delimited string as sexagesimal hours; anything
/// else as "12h30m00s"-style sexagesimal hours.
pub(crate) fn parse_ra_degrees(ra: &str) -> Result<f64, SexagesimalError> {
    if let Ok(deg) = ra.parse::<f64>() {
        return Ok(deg);
    }
    if ra.contains(':') {
        sexagesimal_hms_colon_str_to_degrees(ra)
    } else {
        sexagesimal_hms_string_to_degrees(ra)
    }
}

/// Parse a declination into degrees. A plain number is taken as decimal
/// degrees already; a colon-delimited string as sexagesimal degrees; anything
/// else as "-11d49m01.062s"-style sexagesimal degrees.
pub(crate) fn parse_dec_degrees(dec: &str) -> Result<f64, SexagesimalError> {
    if let Ok(deg) = dec.parse::<f64>() {
        return Ok(deg);
    }
    if dec.contains(':') {
        sexagesimal_dms_colon_str_to_degrees(dec)
    } else {
        sexagesimal_dms_string_to_degrees(dec)
    }
}

/// Convert a number in degrees to a sexagesimal-formatted string in "degrees
/// minutes seconds", e.g. "-165d01m01.0628s".
pub(crate) fn degrees_to_sexagesimal_dms(f: f64) -> String {
    let negative = f < 0.0;
    let f_abs = f.abs();
    let degrees = f_abs.floor();
    let minutes = (f_abs - degrees) * 60.0;
    let seconds = (minutes - minutes.floor()) * 60.0;

    format!(
        "{sign}{deg}d{min:02}m{sec:02}.{frac:04}s",
        sign = if negative { "-" } else { "" },
        deg = degrees as u16,
        min = minutes.floor() as u8,
        sec = seconds.floor() as u8,
        // The 4 in 1e4 gives that many decimal places.
        frac = ((seconds - seconds.floor()) * 1e4) as u32,
    )
}

/// Convert a number in degrees to a sexagesimal-formatted string in "hours
/// minutes seconds", e.g. "-11h49m01.0619s".
pub(crate) fn degrees_to_sexagesimal_hms(f: f64) -> String {
    let negative = f < 0.0;
    let f_abs = f.abs();
    let hours = (f_abs / 15.0).floor();
    let minutes = ((f_abs / 15.0 - hours) * 60.0).floor();
    let seconds = (((f_abs / 15.0 - hours) * 60.0) - minutes) * 60.0;

    format!(
        "{sign}{hrs}h{min:02}m{sec:02}.{frac:04}s",
        sign = if negative { "-" } else { "" },
        hrs = hours as u16,
        min = minutes as u8,
        sec = seconds.floor() as u8,
        // The 4 in 1e4 gives that many decimal places.
        frac = ((seconds - seconds.floor()) * 1e4) as u32,
    )
}

#[derive(Error, Debug)]
pub(crate) enum SexagesimalError {
    /// Three numbers (fields) are expected; this error is used when the number
    /// of fields is not three.
    #[error("Did not get three sexagesimal fields: {0}")]
    WrongFieldCount(String),

    #[error("Did not find 'h' when reading sexagesimal string: {0}")]
    MissingH(String),

    #[error("Did not find 'd' when reading sexagesimal string: {0}")]
    MissingD(String),

    #[error("Did not find 'm' when reading sexagesimal string: {0}")]
    MissingM(String),

    #[error("Did not find 's' when reading sexagesimal string: {0}")]
    MissingS(String),

    #[error("{0}")]
    ParseFloat(#[from] std::num::ParseFloatError),
}
