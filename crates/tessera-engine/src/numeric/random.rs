use rand::Rng;

use super::Frac;

/// A uniformly distributed fraction in `0.0 .. 1.0`.
#[inline]
pub fn random_frac<R: Rng + ?Sized>(rng: &mut R) -> Frac {
    rng.gen_range(0.0..1.0)
}

/// A random index into a collection of `len` elements, or `None` when empty.
#[inline]
pub fn random_index<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Option<usize> {
    if len == 0 {
        None
    } else {
        Some(rng.gen_range(0..len))
    }
}

/// A random element of `choices`, or `None` when empty.
pub fn random_choice<'a, T, R: Rng + ?Sized>(rng: &mut R, choices: &'a [T]) -> Option<&'a T> {
    random_index(rng, choices.len()).map(|i| &choices[i])
}
