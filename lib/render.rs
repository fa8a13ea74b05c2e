//! Turns individual numbers into strings at a fixed number of decimal places.

use crate::{
    digits::{ fixed, round_to },
    precision::Precision,
    term::{ self, ErrorTerm, RenderedTerm },
};

/// Render a central value with exactly `decimal_places` fractional digits.
pub fn render_value(value: f64, decimal_places: i32) -> String {
    return fixed(value, decimal_places);
}

/// Render an error in full, e.g. `0.0067`.
///
/// An error that rounds to zero is printed as `0.0` (or `0` when there are no
/// decimal places) rather than a run of zeros.
pub fn render_full(error: f64, decimal_places: i32) -> String {
    let rounded: f64 = round_to(error, decimal_places);
    if rounded == 0.0 {
        return String::from(if decimal_places > 0 { "0.0" } else { "0" });
    }
    return fixed(rounded, decimal_places);
}

/// Render only the digits of an error that line up with the last
/// `decimal_places` digits of the value, e.g. `67` for `0.0067` at four
/// decimal places.
///
/// Errors of magnitude one or more keep their decimal point, since dropping it
/// would make `1.2(12)` mean something else.
pub fn render_abbreviated(error: f64, decimal_places: i32) -> String {
    if error.abs() >= 1.0 {
        return fixed(error, decimal_places);
    }
    let digits: f64 = (error * 10.0_f64.powi(decimal_places)).round_ties_even();
    return integer_string(digits);
}

/// Render a number rounded to `decimal_places` (which should be non-positive)
/// as a bare integer.
pub fn render_integer(x: f64, decimal_places: i32) -> String {
    return integer_string(round_to(x, decimal_places));
}

fn integer_string(x: f64) -> String {
    return if x == 0.0 { "0".to_string() } else { format!("{:.0}", x.trunc()) };
}

/// The strings for a value and all of its errors, ready for assembly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rendered {
    pub value: String,
    pub errors: Vec<RenderedTerm>,
}

/// Render a value and its errors at `precision`.
///
/// If `decimals` is `false`, everything is printed as an integer and
/// `abbreviate` has no effect.
pub fn render(
    value: f64,
    errors: &[ErrorTerm],
    precision: Precision,
    decimals: bool,
    abbreviate: bool,
) -> Rendered
{
    let dp: i32 = precision.decimal_places;
    let rendered: Rendered
        = if !decimals {
            Rendered {
                value: render_integer(value, dp),
                errors: term::map_terms(errors, |e| render_integer(e, dp)),
            }
        } else if abbreviate {
            Rendered {
                value: render_value(value, dp),
                errors: term::map_terms(errors, |e| render_abbreviated(e, dp)),
            }
        } else {
            Rendered {
                value: render_value(value, dp),
                errors: term::map_terms(errors, |e| render_full(e, dp)),
            }
        };
    log::trace!("rendered {:?}", rendered);
    return rendered;
}
