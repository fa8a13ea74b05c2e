//! Reads strings produced by [`format_multiple_errors`] back into numbers.
//!
//! Every template written by the assembler is understood, in both plain text
//! and LaTeX, with or without an exponent. Abbreviated error digits are scaled
//! by the number of decimal places in the central value, so `1.234(56)` reads
//! as `1.234` with an error of `0.056`.
//!
//! [`format_multiple_errors`]: crate::format::format_multiple_errors

use regex::Regex;
use crate::{
    digits::scale_by_power_of_ten,
    error::{ FormatError, FormatResult },
    term::{ ErrorTerm, Term },
};

const NUMBER: &str = r"-?\d+(?:\.\d+)?";

/// The numbers recovered from a formatted string.
#[derive(Clone, Debug, PartialEq)]
pub struct Parsed {
    /// Central value, without the exponent applied.
    pub value: f64,

    /// Errors in order, without the exponent applied.
    pub errors: Vec<ErrorTerm>,

    /// Power of ten multiplying everything (0 if absent).
    pub exponent: i32,
}

impl Parsed {
    /// Return the central value and errors with the exponent applied.
    pub fn scaled(&self) -> (f64, Vec<ErrorTerm>) {
        let unscale = |x: f64| scale_by_power_of_ten(x, -self.exponent);
        return (
            unscale(self.value),
            self.errors.iter().map(|e| (*e).map(unscale)).collect(),
        );
    }
}

#[derive(Copy, Clone, Debug)]
enum Piece {
    Full,
    Abbreviated,
}

fn decimal_places(s: &str) -> i32 {
    return s.split_once('.').map(|(_, frac)| frac.len() as i32).unwrap_or(0);
}

// abbreviated digits without a decimal point count from the last digit of the
// value; anything with a decimal point is taken literally
fn read_abbreviated(s: &str, value_dp: i32) -> FormatResult<f64> {
    let x: f64 = s.parse()?;
    return Ok(
        if s.contains('.') { x } else { scale_by_power_of_ten(x, value_dp) }
    );
}

/// Parse a formatted number.
///
/// ```
/// use format_multiple_errors::{ parse::parse_formatted, term::Term };
///
/// let p = parse_formatted("1.2345(67)(+89/-1011)e3").unwrap();
/// assert_eq!(p.value, 1.2345);
/// assert_eq!(p.exponent, 3);
/// assert_eq!(p.errors.len(), 2);
/// assert!(matches!(p.errors[1], Term::Asymmetric(_, _)));
/// ```
pub fn parse_formatted(s: &str) -> FormatResult<Parsed> {
    let malformed = || FormatError::MalformedInput(s.to_string());
    let exp_pat = Regex::new(
        r"^(.*?)(?:e(-?\d+)| \\times 10\^\{(-?\d+)\})$")?;
    let (mut body, exponent): (&str, i32)
        = match exp_pat.captures(s) {
            Some(cap) => {
                let e: &str
                    = cap.get(2).or_else(|| cap.get(3))
                    .map(|m| m.as_str())
                    .ok_or_else(malformed)?;
                (cap.get(1).map(|m| m.as_str()).unwrap_or(""), e.parse()?)
            },
            None => (s, 0),
        };
    if let Some(inner) = body.strip_prefix('(') {
        body = inner.strip_suffix(')').ok_or_else(malformed)?;
    }

    let value_pat = Regex::new(&format!(r"^({})", NUMBER))?;
    let value_str: &str
        = value_pat.captures(body)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
        .ok_or_else(malformed)?;
    let value: f64 = value_str.parse()?;
    let value_dp: i32 = decimal_places(value_str);
    let mut rest: &str = &body[value_str.len()..];

    let n = NUMBER;
    let patterns: Vec<(Regex, Piece)> = vec![
        (Regex::new(&format!(r"^ (?:±|\\pm) ({n})"))?, Piece::Full),
        (Regex::new(&format!(r"^ \(\+({n}) / -({n})\)"))?, Piece::Full),
        (Regex::new(&format!(r"^ \{{\}}\^\{{\+({n})\}}_\{{-({n})\}}"))?, Piece::Full),
        (Regex::new(&format!(r"^\(({n})\)"))?, Piece::Abbreviated),
        (Regex::new(&format!(r"^\(\+({n})/-({n})\)"))?, Piece::Abbreviated),
        (Regex::new(&format!(r"^\(\{{\}}\^\{{({n})\}}_\{{({n})\}}\)"))?, Piece::Abbreviated),
    ];

    let mut errors: Vec<ErrorTerm> = Vec::new();
    'outer: while !rest.is_empty() {
        for (pat, piece) in patterns.iter() {
            let Some(cap) = pat.captures(rest) else { continue; };
            let read = |k: usize| -> FormatResult<f64> {
                let text: &str = cap.get(k).map(|m| m.as_str()).ok_or_else(malformed)?;
                return match piece {
                    Piece::Full => Ok(text.parse()?),
                    Piece::Abbreviated => read_abbreviated(text, value_dp),
                };
            };
            let term: ErrorTerm
                = if cap.get(2).is_some() {
                    Term::Asymmetric(read(1)?, read(2)?)
                } else {
                    Term::Symmetric(read(1)?)
                };
            errors.push(term);
            let matched: usize = cap.get(0).map(|m| m.end()).unwrap_or(0);
            rest = &rest[matched..];
            continue 'outer;
        }
        return Err(malformed());
    }
    return Ok(Parsed { value, errors, exponent });
}
