use crate::{int, Error, Result};
use num_bigint::{BigInt, Sign};
use num_traits::{One, Signed, Zero};
use std::{
    cmp::Ordering,
    ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// An exact fraction, always in lowest terms with a positive denominator.
///
/// Zero is stored as `0/1`, so two values are equal exactly when their
/// numerators and denominators are. Both parts are unbounded integers, so
/// no operation can overflow.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numer: BigInt,
    denom: BigInt,
}

impl Rational {
    /// Creates a fraction reduced to lowest terms.
    pub fn new(numer: impl Into<BigInt>, denom: impl Into<BigInt>) -> Result<Self> {
        let denom = denom.into();
        if denom.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self::reduced(numer.into(), denom))
    }

    pub fn from_integer(n: impl Into<BigInt>) -> Self {
        Rational {
            numer: n.into(),
            denom: BigInt::one(),
        }
    }

    /// Normalizes a pair whose denominator is known to be nonzero.
    fn reduced(numer: BigInt, denom: BigInt) -> Self {
        if numer.is_zero() {
            return Self::zero();
        }
        let gcd = int::gcd(&numer, &denom);
        let (numer, denom) = (numer / &gcd, denom / gcd);
        if denom.is_negative() {
            Rational {
                numer: -numer,
                denom: -denom,
            }
        } else {
            Rational { numer, denom }
        }
    }

    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    /// Replaces both parts of this fraction, reducing the result.
    pub fn set_values(&mut self, numer: impl Into<BigInt>, denom: impl Into<BigInt>) -> Result<()> {
        *self = Self::new(numer, denom)?;
        Ok(())
    }

    pub fn is_negative(&self) -> bool {
        self.numer.is_negative()
    }

    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    pub fn signum(&self) -> Sign {
        self.numer.sign()
    }

    pub fn abs(&self) -> Self {
        Rational {
            numer: self.numer.abs(),
            denom: self.denom.clone(),
        }
    }

    /// Returns the reciprocal, failing on zero.
    pub fn inv(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self::reduced(self.denom.clone(), self.numer.clone()))
    }

    pub fn checked_div(&self, rhs: &Self) -> Result<Self> {
        Ok(self * rhs.inv()?)
    }

    /// Returns the greatest fraction dividing both values into integers:
    /// the GCD of the numerators over the LCM of the denominators.
    pub fn gcd(&self, other: &Self) -> Self {
        let denom = &self.denom / int::gcd(&self.denom, &other.denom) * &other.denom;
        Self::reduced(int::gcd(&self.numer, &other.numer), denom)
    }

    /// Returns the least fraction both values divide into an integer:
    /// the LCM of the numerators over the GCD of the denominators.
    ///
    /// Fails when both values are zero.
    pub fn lcm(&self, other: &Self) -> Result<Self> {
        let numer = int::lcm(&self.numer, &other.numer)?;
        Ok(Self::reduced(numer, int::gcd(&self.denom, &other.denom)))
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::from_integer(0)
    }

    fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::from_integer(1)
    }
}

impl From<BigInt> for Rational {
    fn from(n: BigInt) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(n)
    }
}

impl Add<&Rational> for &Rational {
    type Output = Rational;

    fn add(self, rhs: &Rational) -> Rational {
        let gcd = int::gcd(&self.denom, &rhs.denom);
        let denom = &self.denom / &gcd * &rhs.denom;
        let numer = &self.numer * (&denom / &self.denom) + &rhs.numer * (&denom / &rhs.denom);
        Rational::reduced(numer, denom)
    }
}

impl Sub<&Rational> for &Rational {
    type Output = Rational;

    fn sub(self, rhs: &Rational) -> Rational {
        self + &-rhs
    }
}

impl Mul<&Rational> for &Rational {
    type Output = Rational;

    fn mul(self, rhs: &Rational) -> Rational {
        // Cancel crosswise first to keep the products small.
        let g1 = int::gcd(&self.numer, &rhs.denom);
        let g2 = int::gcd(&rhs.numer, &self.denom);
        let numer = (&self.numer / &g1) * (&rhs.numer / &g2);
        let denom = (&self.denom / &g2) * (&rhs.denom / &g1);
        Rational::reduced(numer, denom)
    }
}

/// Panics on a zero divisor, as integer division does.
/// Use [`Rational::checked_div`] to get an error instead.
impl Div<&Rational> for &Rational {
    type Output = Rational;

    fn div(self, rhs: &Rational) -> Rational {
        match self.checked_div(rhs) {
            Ok(q) => q,
            Err(_) => panic!("attempt to divide by a zero fraction"),
        }
    }
}

/// Implements a binary operator for every mix of owned and borrowed
/// operands in terms of the borrowed one.
macro_rules! forward_binop {
    ($($trait:ident $method:ident),*) => {$(
        impl $trait for Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Rational {
                (&self).$method(&rhs)
            }
        }

        impl $trait<&Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Rational {
                (&self).$method(rhs)
            }
        }

        impl $trait<Rational> for &Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Rational {
                self.$method(&rhs)
            }
        }
    )*};
}

forward_binop!(Add add, Sub sub, Mul mul, Div div);

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            numer: -&self.numer,
            denom: self.denom.clone(),
        }
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            numer: -self.numer,
            denom: self.denom,
        }
    }
}

impl AddAssign<&Rational> for Rational {
    fn add_assign(&mut self, rhs: &Rational) {
        *self = &*self + rhs;
    }
}

impl SubAssign<&Rational> for Rational {
    fn sub_assign(&mut self, rhs: &Rational) {
        *self = &*self - rhs;
    }
}

impl MulAssign<&Rational> for Rational {
    fn mul_assign(&mut self, rhs: &Rational) {
        *self = &*self * rhs;
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, so cross-multiplying keeps the order.
        (&self.numer * &other.denom).cmp(&(&other.numer * &self.denom))
    }
}
