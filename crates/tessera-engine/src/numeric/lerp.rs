use super::Frac;

/// Linear interpolation toward another value of the same type.
///
/// `at = 0` yields `self`, `at = 1` yields `to`. Values outside the unit
/// interval extrapolate.
pub trait Interpolate: Sized {
    fn interpolate(&self, to: &Self, at: Frac) -> Self;
}

impl Interpolate for f64 {
    #[inline]
    fn interpolate(&self, to: &f64, at: Frac) -> f64 {
        self + (to - self) * at
    }
}

/// Maps `x` from the interval `a ..= b` into `0 ..= 1` (`a` may exceed `b`).
#[inline]
pub fn lerp_to_frac(x: f64, a: f64, b: f64) -> Frac {
    debug_assert!(a != b, "degenerate interval");
    (a - x) / (a - b)
}

/// Maps `t` from `0 ..= 1` into the interval `a ..= b`.
#[inline]
pub fn lerp_from_frac(t: Frac, a: f64, b: f64) -> f64 {
    t * (b - a) + a
}

/// Maps `x` from the interval `from` into the interval `to`.
#[inline]
pub fn lerp(x: f64, from: (f64, f64), to: (f64, f64)) -> f64 {
    to.0 + ((to.1 - to.0) * (x - from.0)) / (from.1 - from.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolate_endpoints_and_middle() {
        assert_eq!(2.0_f64.interpolate(&4.0, 0.0), 2.0);
        assert_eq!(2.0_f64.interpolate(&4.0, 1.0), 4.0);
        assert_eq!(2.0_f64.interpolate(&4.0, 0.5), 3.0);
    }

    #[test]
    fn lerp_between_intervals() {
        assert_eq!(lerp(5.0, (0.0, 10.0), (0.0, 100.0)), 50.0);
        assert_eq!(lerp(0.0, (-1.0, 1.0), (0.0, 40.0)), 20.0);
    }

    #[test]
    fn frac_round_trip() {
        let t = lerp_to_frac(7.5, 5.0, 10.0);
        assert_eq!(t, 0.5);
        assert_eq!(lerp_from_frac(t, 5.0, 10.0), 7.5);
    }
}
