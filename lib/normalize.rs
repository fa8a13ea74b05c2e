//! Rescales a value and its errors by a common power of ten for exponential
//! notation.

use crate::{
    digits::{ first_digit_index, scale_by_power_of_ten },
    error::{ FormatError, FormatResult },
    term::{ self, ErrorTerm },
};

/// A value and its errors after division by `10^exponent`.
#[derive(Clone, Debug, PartialEq)]
pub struct Normalized {
    pub value: f64,
    pub errors: Vec<ErrorTerm>,
    pub exponent: i32,
}

/// Divide `value` and every component of `errors` by the power of ten that
/// brings `value` into `[1, 10)`.
///
/// A zero `value` has no magnitude of its own, so the largest error is used
/// to pick the exponent instead; this fails if there are no errors at all.
pub fn normalize(value: f64, errors: &[ErrorTerm]) -> FormatResult<Normalized> {
    let exponent: i32
        = if value == 0.0 {
            let largest: f64
                = term::largest(errors).ok_or(FormatError::NoMagnitude)?;
            first_digit_index(largest)
        } else {
            first_digit_index(value)
        };
    return Ok(Normalized {
        value: scale_by_power_of_ten(value, exponent),
        errors: term::map_terms(errors, |e| scale_by_power_of_ten(e, exponent)),
        exponent,
    });
}
