/// A `f64` that should stay inside the closed interval `0.0 ..= 1.0`.
///
/// This is a plain alias, so the range is a convention rather than something
/// the type checks. It documents color channels, interpolation amounts and
/// normalized positions.
pub type Frac = f64;

/// Asserts (debug builds only) that `n` lies in `0.0 ..= 1.0`.
#[inline]
pub fn assert_frac(n: f64) {
    debug_assert!((0.0..=1.0).contains(&n), "fraction out of range: {n}");
}

/// Clamps `x` into `0.0 ..= 1.0`.
#[inline]
pub fn clamped(x: f64) -> f64 {
    x.min(1.0).max(0.0)
}

#[inline]
pub fn clamped_to(x: f64, lo: f64, hi: f64) -> f64 {
    x.min(hi).max(lo)
}

/// `x` minus its integral part (sign follows `x`).
#[inline]
pub fn fractional_part(x: f64) -> f64 {
    x - x.trunc()
}

/// Snaps `x` to the center of the pixel it falls in.
#[inline]
pub fn snapped(x: f64) -> f64 {
    x.floor() + 0.5
}

/// `true` when `x` is in the lower half of the unit interval.
#[inline]
pub fn ledge(x: f64) -> bool {
    x < 0.5
}

/// Integer modulo with a result in `0 .. n`.
///
/// # Panics
/// Panics when `n <= 0`.
#[inline]
pub fn imod(a: i64, n: i64) -> i64 {
    assert!(n > 0, "modulus must be positive");
    let r = a % n;
    if r >= 0 { r } else { r + n }
}

/// Float modulo with a result in `0.0 .. n`.
#[inline]
pub fn fmod(a: f64, n: f64) -> f64 {
    let r = a % n;
    if r < 0.0 { r + n } else { r }
}

#[inline]
pub fn is_even(n: i64) -> bool {
    n & 1 == 0
}

#[inline]
pub fn is_odd(n: i64) -> bool {
    n & 1 == 1
}
