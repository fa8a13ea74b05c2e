#![allow(clippy::needless_return)]

//! Format a central value together with any number of symmetric or asymmetric
//! uncertainties, rounding everything to the same number of decimal places.
//!
//! ```
//! use format_multiple_errors::format_errors;
//!
//! assert_eq!(
//!     format_errors!(12345, 6789, (1011, 1213)).unwrap(),
//!     "12300 ± 6800 (+1000 / -1200)",
//! );
//! assert_eq!(
//!     format_errors!(0.0012345, 0.0006789, (0.0001011, 0.0000121); abbreviate: true)
//!         .unwrap(),
//!     "0.001234(679)(+101/-12)",
//! );
//! ```
//!
//! The number of decimal places is set by giving one number (by default the
//! smallest nonzero error, see [`LengthControl`]) a fixed number of
//! significant figures. Output can be plain text or LaTeX, in full
//! (`1.234 ± 0.056`) or abbreviated (`1.234(56)`) form, and optionally in
//! exponential notation.

pub mod error;
pub mod digits;
pub mod term;
pub mod value;
pub mod precision;
pub mod normalize;
pub mod render;
pub mod assemble;
pub mod format;
pub mod parse;
pub mod table;

pub use crate::{
    error::{ ErrorKind, FormatError, FormatResult },
    format::{ format_multiple_errors, FormatOptions },
    precision::LengthControl,
    term::{ ErrorTerm, Term },
    value::Value,
};
