//! Provides [`Value`], a central value that may carry its own uncertainty.

use crate::{
    error::{ FormatError, FormatResult },
    term::ErrorTerm,
};

/// A central value to be formatted.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Value {
    /// A bare number.
    Plain(f64),

    /// A nominal value with a standard deviation, as produced by
    /// error-propagating number types.
    WithStdDev { nominal: f64, std_dev: f64 },

    /// A value with an uncertainty that is computed after the fact (e.g. by an
    /// autocorrelation analysis). A zero `dvalue` means the uncertainty has not
    /// been computed yet.
    WithComputedError { value: f64, dvalue: f64 },
}

impl Value {
    /// Create a new `Value::WithStdDev`.
    pub fn with_std_dev(nominal: f64, std_dev: f64) -> Self {
        return Self::WithStdDev { nominal, std_dev };
    }

    /// Create a new `Value::WithComputedError`.
    pub fn with_computed_error(value: f64, dvalue: f64) -> Self {
        return Self::WithComputedError { value, dvalue };
    }

    /// Get the bare number.
    pub fn nominal(&self) -> f64 {
        return match *self {
            Self::Plain(x) => x,
            Self::WithStdDev { nominal, .. } => nominal,
            Self::WithComputedError { value, .. } => value,
        };
    }

    /// Split `self` into a bare number and the full list of errors, with any
    /// carried uncertainty placed before `errors`.
    ///
    /// Fails if `self` is a `WithComputedError` whose uncertainty is still
    /// zero.
    pub fn integrate(self, errors: &[ErrorTerm])
        -> FormatResult<(f64, Vec<ErrorTerm>)>
    {
        let carried: Option<f64>
            = match self {
                Self::Plain(_) => None,
                Self::WithStdDev { std_dev, .. } => Some(std_dev),
                Self::WithComputedError { dvalue, .. } => {
                    if dvalue == 0.0 {
                        return Err(FormatError::UncomputedUncertainty);
                    }
                    Some(dvalue)
                },
            };
        let all: Vec<ErrorTerm>
            = carried.into_iter()
            .map(ErrorTerm::Symmetric)
            .chain(errors.iter().copied())
            .collect();
        return Ok((self.nominal(), all));
    }
}

macro_rules! impl_value_from_num {
    ( $( $t:ty ),+ $(,)? ) => {
        $(
            impl From<$t> for Value {
                fn from(x: $t) -> Self { Self::Plain(x as f64) }
            }
        )+
    }
}
impl_value_from_num!(f64, i32);
