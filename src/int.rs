use crate::{Error, Result};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

/// Returns the non-negative GCD of two integers.
///
/// `gcd(0, 0)` is 0; callers dividing by the result must guard against it.
pub fn gcd(u: &BigInt, v: &BigInt) -> BigInt {
    u.gcd(v)
}

/// Returns `a * b / gcd(a, b)`, carrying the sign of the product.
///
/// Fails with [`Error::DivisionByZero`] when both arguments are 0.
pub fn lcm(a: &BigInt, b: &BigInt) -> Result<BigInt> {
    let g = gcd(a, b);
    if g.is_zero() {
        return Err(Error::DivisionByZero);
    }
    Ok(a / g * b)
}

/// Folds [`gcd`] over a sequence.
///
/// A single element is returned unchanged (sign included), and an empty
/// sequence gives 0, the identity of `gcd`.
pub fn gcd_all(nums: &[BigInt]) -> BigInt {
    nums.iter()
        .cloned()
        .reduce(|acc, n| gcd(&acc, &n))
        .unwrap_or_else(BigInt::zero)
}

/// Folds [`lcm`] over a sequence, returning 1 for an empty one.
pub fn lcm_all(nums: &[BigInt]) -> Result<BigInt> {
    match nums.split_first() {
        Some((first, rest)) => rest.iter().try_fold(first.clone(), |acc, n| lcm(&acc, n)),
        None => Ok(BigInt::one()),
    }
}
