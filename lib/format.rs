//! The top-level formatting call and its options.

#[cfg(feature = "config")]
use std::{ fs, path::Path };
#[cfg(feature = "config")]
use serde::{ Deserialize, Serialize };
use crate::{
    assemble,
    error::{ FormatError, FormatResult },
    normalize::{ normalize, Normalized },
    precision::{
        decimals_required,
        length_controlling_value,
        rounding_indices,
        LengthControl,
        Precision,
    },
    render,
    term::ErrorTerm,
    value::Value,
};

/// Options controlling the output of [`format_multiple_errors`].
///
/// With the `config` feature these can be read from a TOML table, where
/// missing keys take their default values:
/// ```toml
/// length_control = "central"
/// significant_figures = 3
/// abbreviate = true
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct FormatOptions {
    /// Which number gets `significant_figures` significant figures (default:
    /// the smallest error).
    pub length_control: LengthControl,

    /// Number of significant figures for the length-controlling number
    /// (default: 2). Other numbers may show more, but never fewer.
    pub significant_figures: u32,

    /// Use bracketed notation, e.g. `1.234(56)` rather than `1.234 ± 0.056`.
    pub abbreviate: bool,

    /// Use standard form (`1.2e-3`) rather than leading or trailing zeros.
    pub exponential: bool,

    /// Produce LaTeX rather than plain text.
    pub latex: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        return Self {
            length_control: LengthControl::Smallest,
            significant_figures: 2,
            abbreviate: false,
            exponential: false,
            latex: false,
        };
    }
}

impl FormatOptions {
    pub fn length_control(mut self, length_control: LengthControl) -> Self {
        self.length_control = length_control;
        return self;
    }

    pub fn significant_figures(mut self, significant_figures: u32) -> Self {
        self.significant_figures = significant_figures;
        return self;
    }

    pub fn abbreviate(mut self, abbreviate: bool) -> Self {
        self.abbreviate = abbreviate;
        return self;
    }

    pub fn exponential(mut self, exponential: bool) -> Self {
        self.exponential = exponential;
        return self;
    }

    pub fn latex(mut self, latex: bool) -> Self {
        self.latex = latex;
        return self;
    }

    /// Check that the options describe some output.
    pub fn validate(&self) -> FormatResult<()> {
        if self.significant_figures == 0 {
            return Err(FormatError::ZeroSignificantFigures);
        }
        return Ok(());
    }

    /// Shortcut for [`format_multiple_errors`] with these options.
    pub fn format<V>(&self, value: V, errors: &[ErrorTerm])
        -> FormatResult<String>
    where V: Into<Value>
    {
        return format_multiple_errors(value, errors, self);
    }
}

#[cfg(feature = "config")]
impl FormatOptions {
    /// Parse options from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        return toml::from_str(s);
    }

    /// Serialize options to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        return toml::to_string(self);
    }

    /// Read options from a TOML file.
    pub fn load<P>(path: P) -> Result<Self, OptionsFileError>
    where P: AsRef<Path>
    {
        let path: &Path = path.as_ref();
        let text: String
            = fs::read_to_string(path)
            .map_err(|e| {
                OptionsFileError::FileRead(path.display().to_string(), e)
            })?;
        return Ok(Self::from_toml_str(&text)?);
    }
}

#[cfg(feature = "config")]
#[derive(Debug, thiserror::Error)]
pub enum OptionsFileError {
    #[error("options: couldn't read file '{0}': {1}")]
    FileRead(String, std::io::Error),

    #[error("options: TOML error '{0}'")]
    Toml(#[from] toml::de::Error),
}

/// Format `value` and `errors` to a common number of decimal places.
///
/// `value` may carry its own uncertainty (see [`Value`]), in which case that
/// uncertainty is placed before `errors`. Each error is either symmetric or an
/// `(upper, lower)` pair and is printed in the order given.
///
/// ```
/// use format_multiple_errors::{ format_multiple_errors, ErrorTerm, FormatOptions };
///
/// let errors: Vec<ErrorTerm> = vec![6789.0.into(), (1011.0, 1213.0).into()];
/// let opts = FormatOptions::default();
/// assert_eq!(
///     format_multiple_errors(12345.0, &errors, &opts).unwrap(),
///     "12300 ± 6800 (+1000 / -1200)",
/// );
/// let opts = opts.abbreviate(true);
/// assert_eq!(
///     format_multiple_errors(12345.0, &errors, &opts).unwrap(),
///     "12300(6800)(+1000/-1200)",
/// );
/// ```
pub fn format_multiple_errors<V>(
    value: V,
    errors: &[ErrorTerm],
    options: &FormatOptions,
) -> FormatResult<String>
where V: Into<Value>
{
    options.validate()?;
    let (value, errors): (f64, Vec<ErrorTerm>)
        = value.into().integrate(errors)?;
    let Normalized { value, errors, exponent }
        = if options.exponential {
            normalize(value, &errors)?
        } else {
            Normalized { value, errors, exponent: 0 }
        };
    let length_value: f64
        = length_controlling_value(value, &errors, options.length_control);
    let precision: Precision
        = rounding_indices(length_value, options.significant_figures);
    let decimals: bool
        = decimals_required(
            precision.first_digit_index,
            options.significant_figures,
            options.exponential,
        );
    log::debug!(
        "length value {} -> {:?} (decimals: {}, exponent: {})",
        length_value, precision, decimals, exponent,
    );
    let rendered = render::render(
        value, &errors, precision, decimals, options.abbreviate);
    return Ok(
        assemble::join(&rendered, options.abbreviate, options.latex, exponent)
    );
}

/// Macro form of [`format_multiple_errors`] with options defaulted.
///
/// Errors are listed after the value and may be anything convertible to an
/// [`ErrorTerm`][crate::term::ErrorTerm]; options follow a `;` as
/// `name: value` pairs, each calling the [`FormatOptions`] method of the same
/// name.
///
/// ```
/// use format_multiple_errors::format_errors;
///
/// assert_eq!(
///     format_errors!(12345, 6789, (1011, 1213); abbreviate: true, latex: true)
///         .unwrap(),
///     r"12300(6800)({}^{1000}_{1200})",
/// );
/// assert_eq!(format_errors!(1.234, 0.012).unwrap(), "1.234 ± 0.012");
/// ```
#[macro_export]
macro_rules! format_errors {
    (
        $value:expr $(, $err:expr )* $(,)?
        $( ; $( $opt:ident : $val:expr ),* $(,)? )?
    ) => {
        $crate::format::format_multiple_errors(
            $value,
            &[ $( $crate::term::ErrorTerm::from($err) ),* ],
            &$crate::format::FormatOptions::default()
                $( $( .$opt($val) )* )?,
        )
    }
}
