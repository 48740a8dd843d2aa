//! Text parsing for [`Complex64`].
//!
//! Accepted forms, case-insensitive, optionally wrapped in parentheses:
//! `a + bi`, `a - bi`, `a`, `bi`. Components use the usual decimal and
//! exponent notation plus `inf`, `infinity` and `nan`.

use crate::complex64::Complex64;
use once_cell::sync::Lazy;
use regex::Regex;
use simple_error::{bail, SimpleError};
use std::str::FromStr;

const NUM: &str = r"(?:(?:\d+(?:\.\d*)?|\.\d+)(?:e[+-]?\d+)?|inf(?:inity)?|nan)";

static RE_FULL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)^(?P<re>[+-]?{NUM})\s*(?P<op>[+-])\s*(?P<im>{NUM})\s*i$"
    ))
    .expect("Invalid regex!")
});

static RE_IMAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"(?i)^(?P<im>[+-]?{NUM})\s*i$")).expect("Invalid regex!"));

static RE_REAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"(?i)^(?P<re>[+-]?{NUM})$")).expect("Invalid regex!"));

fn component(text: &str, input: &str) -> Result<f32, SimpleError> {
    match text.parse::<f32>() {
        Ok(v) => Ok(v),
        Err(_) => bail!("invalid component '{}' in complex number '{}'", text, input),
    }
}

fn strip_parens(s: &str) -> &str {
    match s.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
        Some(inner) => inner.trim(),
        None => s,
    }
}

impl FromStr for Complex64 {
    type Err = SimpleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = strip_parens(s.trim());

        if let Some(caps) = RE_FULL.captures(body) {
            let re = component(&caps["re"], s)?;
            let im = component(&caps["im"], s)?;
            let im = if &caps["op"] == "-" { -im } else { im };
            return Ok(Complex64::new(re, im));
        }
        if let Some(caps) = RE_IMAG.captures(body) {
            return Ok(Complex64::new(0.0, component(&caps["im"], s)?));
        }
        if let Some(caps) = RE_REAL.captures(body) {
            return Ok(Complex64::new(component(&caps["re"], s)?, 0.0));
        }

        bail!("string '{}' is not a valid complex number", s)
    }
}
