//! Decides how many decimal places every number in a single formatting call
//! is rounded to.

use std::{
    fmt,
    str::FromStr,
};
#[cfg(feature = "config")]
use serde::{ Deserialize, Serialize };
use crate::{
    digits::{ first_digit_index, round_to },
    error::{ FormatError, FormatResult },
    term::{ self, ErrorTerm },
};

/// Which quantity is printed with the requested number of significant
/// figures. Everything else is printed to the same number of decimal places.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "lowercase"))]
pub enum LengthControl {
    /// The smallest nonzero uncertainty.
    #[default]
    Smallest,

    /// The central value.
    Central,
}

impl FromStr for LengthControl {
    type Err = FormatError;

    fn from_str(s: &str) -> FormatResult<Self> {
        return match s {
            "smallest" => Ok(Self::Smallest),
            "central" => Ok(Self::Central),
            _ => Err(FormatError::InvalidLengthControl(s.to_string())),
        };
    }
}

impl fmt::Display for LengthControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str(
            match self {
                Self::Smallest => "smallest",
                Self::Central => "central",
            }
        );
    }
}

/// Rounding state shared by every element of a formatting call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Precision {
    /// Position of the leading digit of the length-controlling value after
    /// rounding.
    pub first_digit_index: i32,

    /// Number of decimal places to keep; may be zero or negative.
    pub decimal_places: i32,
}

/// Pick the number whose significant figures control the output length.
///
/// With [`LengthControl::Smallest`] and no nonzero errors, falls back to the
/// central value.
pub fn length_controlling_value(
    value: f64,
    errors: &[ErrorTerm],
    control: LengthControl,
) -> f64
{
    return match control {
        LengthControl::Central => value,
        LengthControl::Smallest => term::smallest(errors).unwrap_or(value),
    };
}

/// Find the first digit of `length_value` and the number of decimal places
/// that leave it with `significant_figures` significant figures.
///
/// The computation is done twice, with the second pass acting on the rounded
/// value, since rounding can carry into the next power of ten (e.g. `9.96` to
/// two significant figures is `10`, not `9.9`).
pub fn rounding_indices(length_value: f64, significant_figures: u32)
    -> Precision
{
    let sf: i32 = significant_figures as i32;
    let mut v: f64 = length_value;
    let mut first_digit: i32 = 0;
    let mut decimal_places: i32 = 0;
    for _ in 0..2 {
        first_digit = first_digit_index(v);
        decimal_places = sf - first_digit - 1;
        v = round_to(v, decimal_places);
    }
    return Precision { first_digit_index: first_digit, decimal_places };
}

/// Return `true` if numbers need a decimal point at this precision.
///
/// Exponential notation puts the leading digit in the ones place, so it
/// always keeps the fractional part.
pub fn decimals_required(
    first_digit_index: i32,
    significant_figures: u32,
    exponential: bool,
) -> bool
{
    return first_digit_index + 1 < significant_figures as i32 || exponential;
}
