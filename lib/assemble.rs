//! Joins rendered numbers into the final string.

use crate::{
    render::Rendered,
    term::{ RenderedTerm, Term },
};

/// Wrap a single rendered error in the punctuation for the current style.
pub fn wrap_error(error: &RenderedTerm, abbreviate: bool, latex: bool) -> String {
    return match (abbreviate, latex, error) {
        (true, true, Term::Symmetric(e)) => format!("({})", e),
        (true, true, Term::Asymmetric(u, l)) => format!("({{}}^{{{}}}_{{{}}})", u, l),
        (true, false, Term::Symmetric(e)) => format!("({})", e),
        (true, false, Term::Asymmetric(u, l)) => format!("(+{}/-{})", u, l),
        (false, true, Term::Symmetric(e)) => format!(r" \pm {}", e),
        (false, true, Term::Asymmetric(u, l)) => format!(" {{}}^{{+{}}}_{{-{}}}", u, l),
        (false, false, Term::Symmetric(e)) => format!(" ± {}", e),
        (false, false, Term::Asymmetric(u, l)) => format!(" (+{} / -{})", u, l),
    };
}

/// Build the final string from a rendered value and its errors.
///
/// A nonzero `exponent` is appended as `e{exponent}` or
/// ` \times 10^{exponent}`; outside of abbreviated mode the value and errors
/// are first grouped in parentheses so that the exponent applies to all of
/// them.
pub fn join(rendered: &Rendered, abbreviate: bool, latex: bool, exponent: i32)
    -> String
{
    let mut out: String = rendered.value.clone();
    for error in rendered.errors.iter() {
        out += &wrap_error(error, abbreviate, latex);
    }
    if exponent != 0 {
        if !abbreviate {
            out = format!("({})", out);
        }
        if latex {
            out += &format!(r" \times 10^{{{}}}", exponent);
        } else {
            out += &format!("e{}", exponent);
        }
    }
    return out;
}
