//! Pure numeric helpers: digit positions, powers of ten, and decimal rounding.

use num_traits::Float;

/// Trait to find the max or min of a collection of floating-point values
/// (since `f64` does not implement `Ord`).
pub trait FExtremum<F> {
    fn fmax(&self) -> Option<F>;

    fn fmin(&self) -> Option<F>;
}

macro_rules! impl_fextremum {
    ( $hasiter:ty, $f:ty ) => {
        impl FExtremum<$f> for $hasiter {
            fn fmax(&self) -> Option<$f> {
                return self.iter()
                    .max_by(|l, r| {
                        l.partial_cmp(r)
                            .unwrap_or(std::cmp::Ordering::Greater)
                    })
                    .copied();
            }

            fn fmin(&self) -> Option<$f> {
                return self.iter()
                    .min_by(|l, r| {
                        l.partial_cmp(r)
                            .unwrap_or(std::cmp::Ordering::Less)
                    })
                    .copied();
            }
        }
    }
}

impl_fextremum!(Vec<f64>, f64);

fn ten<T: Float>() -> T {
    return T::one() + T::one() + T::one() + T::one() + T::one()
        + T::one() + T::one() + T::one() + T::one() + T::one();
}

/// Return the position of the first significant digit of `x`.
///
/// Position 0 is the digit just before the decimal point; digits to the right
/// of the decimal point have negative positions. Zero has no magnitude and
/// returns 0, as do non-finite numbers.
pub fn first_digit_index<T: Float>(x: T) -> i32 {
    if x.is_zero() || !x.is_finite() {
        return 0;
    }
    return x.abs().log10().floor().to_i32().unwrap_or(0);
}

/// Compute `x / 10^exponent`.
pub fn scale_by_power_of_ten<T: Float>(x: T, exponent: i32) -> T {
    return x / ten::<T>().powi(exponent);
}

/// Round `x` to `decimals` places after the decimal point. Negative `decimals`
/// round to tens, hundreds, etc.
///
/// Ties go to even on the exact binary value of `x`, so e.g. `0.125` rounds
/// to `0.12` but `0.15` (which is really `0.1499999...`) rounds to `0.1`.
pub fn round_to(x: f64, decimals: i32) -> f64 {
    if !x.is_finite() {
        return x;
    }
    if decimals >= 0 {
        // float formatting is exact, so re-parsing gives the correctly rounded
        // value
        return format!("{:.*}", decimals as usize, x).parse().unwrap_or(x);
    }
    let scale: f64 = 10.0_f64.powi(-decimals);
    return (x / scale).round_ties_even() * scale;
}

/// Render `x` in fixed-point notation with exactly `decimals` fractional
/// digits. Negative `decimals` round to the corresponding integer place and
/// print no fractional part.
pub fn fixed(x: f64, decimals: i32) -> String {
    return if decimals >= 0 {
        format!("{:.*}", decimals as usize, x)
    } else {
        format!("{:.0}", round_to(x, decimals))
    };
}
