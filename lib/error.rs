//! Provides `FormatError`, the error type shared by every fallible operation
//! in the crate, `ErrMsg`, a simple trait to associate a constant string with
//! an error type, and `mkerr`, a macro to easily implement it and error traits.

use thiserror::Error;

/// Simple trait to associate a constant string with an error type.
pub trait ErrMsg {
    fn msg(&self) -> &'static str;
}

/// Simple macro to implement `ErrMsg`, `Display`, and `Error` for an error
/// type.
#[macro_export]
macro_rules! mkerr {
    ( $name:ident : { $( $var:ident => $msg:literal ),+ $(,)? } ) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub enum $name {
            $( $var, )+
        }

        impl $crate::error::ErrMsg for $name {
            fn msg(&self) -> &'static str {
                return match *self {
                    $( $name::$var => $msg, )+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                return f.write_str($crate::error::ErrMsg::msg(self));
            }
        }

        impl std::error::Error for $name { }
    }
}

/// Broad classification of a [`FormatError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The requested options can't describe any output.
    InvalidConfiguration,

    /// The input is well-formed but not ready to be formatted.
    PreconditionNotMet,

    /// The input has no magnitude to derive an exponent from.
    Degenerate,

    /// Some text couldn't be read as numbers.
    Parse,
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("'{0}' is not a valid length control (available options are \"smallest\", \"central\")")]
    InvalidLengthControl(String),

    #[error("significant figures must be positive")]
    ZeroSignificantFigures,

    #[error("uncertainty has not been computed yet (delta value is zero)")]
    UncomputedUncertainty,

    #[error("cannot normalize a zero central value without any errors")]
    NoMagnitude,

    #[error("can't parse '{0}' as a number or pair of numbers")]
    MalformedError(String),

    #[error("malformed formatted number '{0}'")]
    MalformedInput(String),

    #[error("couldn't parse number: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),

    #[error("couldn't parse exponent: {0}")]
    ParseInt(#[from] std::num::ParseIntError),

    #[error("bad pattern: {0}")]
    Regex(#[from] regex::Error),
}
pub type FormatResult<T> = Result<T, FormatError>;

impl FormatError {
    pub fn kind(&self) -> ErrorKind {
        return match self {
            Self::InvalidLengthControl(_)
            | Self::ZeroSignificantFigures
                => ErrorKind::InvalidConfiguration,
            Self::UncomputedUncertainty => ErrorKind::PreconditionNotMet,
            Self::NoMagnitude => ErrorKind::Degenerate,
            Self::MalformedError(_)
            | Self::MalformedInput(_)
            | Self::ParseFloat(_)
            | Self::ParseInt(_)
            | Self::Regex(_)
                => ErrorKind::Parse,
        };
    }
}
