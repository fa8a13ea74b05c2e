//! Provides [`Term`], the shape of a single uncertainty (symmetric or an
//! asymmetric upper/lower pair), along with reductions over collections of
//! them.
//!
//! A `Term` is generic over its contents so that the shape survives every
//! step of the pipeline: errors start out as `Term<f64>`, get rescaled as
//! `Term<f64>`, and are rendered into `Term<String>` before assembly.

use std::str::FromStr;
use crate::{
    digits::FExtremum,
    error::{ FormatError, FormatResult },
};

/// A single uncertainty.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Term<T> {
    /// The same uncertainty in both directions.
    Symmetric(T),

    /// Separate `(upper, lower)` uncertainties.
    Asymmetric(T, T),
}

/// A numerical uncertainty.
pub type ErrorTerm = Term<f64>;

/// An uncertainty after rendering.
pub type RenderedTerm = Term<String>;

impl<T> Term<T> {
    /// Return `true` if `self` holds a single value.
    pub fn is_symmetric(&self) -> bool { matches!(self, Self::Symmetric(_)) }

    /// Apply `f` to every component, keeping the shape.
    pub fn map<U, F>(self, mut f: F) -> Term<U>
    where F: FnMut(T) -> U
    {
        return match self {
            Self::Symmetric(x) => Term::Symmetric(f(x)),
            Self::Asymmetric(u, l) => Term::Asymmetric(f(u), f(l)),
        };
    }

    /// Borrow the components.
    pub fn as_ref(&self) -> Term<&T> {
        return match self {
            Self::Symmetric(x) => Term::Symmetric(x),
            Self::Asymmetric(u, l) => Term::Asymmetric(u, l),
        };
    }

    /// Iterate over the components in order (`upper` before `lower`).
    pub fn components(&self) -> impl Iterator<Item = &T> + '_ {
        let (first, second): (&T, Option<&T>)
            = match self {
                Self::Symmetric(x) => (x, None),
                Self::Asymmetric(u, l) => (u, Some(l)),
            };
        return std::iter::once(first).chain(second);
    }
}

macro_rules! impl_term_from_num {
    ( $( $t:ty ),+ $(,)? ) => {
        $(
            impl From<$t> for ErrorTerm {
                fn from(x: $t) -> Self { Self::Symmetric(x as f64) }
            }

            impl From<($t, $t)> for ErrorTerm {
                fn from(ul: ($t, $t)) -> Self {
                    Self::Asymmetric(ul.0 as f64, ul.1 as f64)
                }
            }
        )+
    }
}
impl_term_from_num!(f64, i32);

/// Parse either a single number or a comma-separated `upper,lower` pair.
impl FromStr for ErrorTerm {
    type Err = FormatError;

    fn from_str(s: &str) -> FormatResult<Self> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        return match parts.as_slice() {
            [x] => Ok(Self::Symmetric(x.parse()?)),
            [u, l] => Ok(Self::Asymmetric(u.parse()?, l.parse()?)),
            _ => Err(FormatError::MalformedError(s.to_string())),
        };
    }
}

/// Collect every component of every term, skipping any equal to a member of
/// `exclude`.
pub fn flatten(errors: &[ErrorTerm], exclude: &[f64]) -> Vec<f64> {
    return errors.iter()
        .flat_map(|term| term.components())
        .filter(|x| !exclude.contains(x))
        .copied()
        .collect();
}

/// Find the smallest nonzero component, or `None` if there isn't one.
pub fn smallest(errors: &[ErrorTerm]) -> Option<f64> {
    return flatten(errors, &[0.0]).fmin();
}

/// Find the largest component, or `None` if there are no errors.
pub fn largest(errors: &[ErrorTerm]) -> Option<f64> {
    return flatten(errors, &[]).fmax();
}

/// Apply `f` to every component of every term, keeping all shapes.
pub fn map_terms<U, F>(errors: &[ErrorTerm], mut f: F) -> Vec<Term<U>>
where F: FnMut(f64) -> U
{
    return errors.iter()
        .map(|term| (*term).map(&mut f))
        .collect();
}
