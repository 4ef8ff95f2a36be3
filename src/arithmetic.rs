//! This module contains the basic arithmetic operations: addition,
//! subtraction, multiplication and division.

use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign,
};

use super::error::Status;
use super::float::{
    trim_trailing_limbs, Category, Float, Precision, MAX_EXPONENT_GAP,
};
use super::magnitude::{add_shifted, sub_shifted, Magnitude};
use super::sign::Sign;

impl Float {
    /// Returns the distance between the exponents of two numbers, in limbs,
    /// or None if the gap is too wide to write out.
    fn exponent_gap(a: &Self, b: &Self) -> Option<usize> {
        let gap = usize::try_from(a.get_exp().abs_diff(b.get_exp())).ok()?;
        (gap <= MAX_EXPONENT_GAP).then_some(gap)
    }

    /// The result of adding or subtracting numbers whose exponents are too
    /// far apart.
    fn gap_overflow(a: &Self, b: &Self) -> Self {
        tracing::debug!(
            lhs = a.get_exp(),
            rhs = b.get_exp(),
            "exponent gap is too wide"
        );
        Self::nan(Sign::Positive).with_status(Status::Error)
    }

    /// Aligns the mantissas of two normal numbers on the smaller of the two
    /// exponents. Returns the scaled mantissas and the common exponent.
    fn align(a: &Self, b: &Self, gap: usize) -> (Magnitude, Magnitude, i64) {
        if a.get_exp() >= b.get_exp() {
            let mut am = a.get_mantissa().clone();
            am.shift_limbs_left(gap);
            (am, b.get_mantissa().clone(), b.get_exp())
        } else {
            let mut bm = b.get_mantissa().clone();
            bm.shift_limbs_left(gap);
            (a.get_mantissa().clone(), bm, a.get_exp())
        }
    }

    /// An inner function that adds two normal numbers (no NaN, Inf, Zeros).
    fn add_normals(a: &Self, b: &Self) -> Self {
        if a.get_sign() != b.get_sign() {
            return Self::sub_normals(a, &b.neg());
        }

        let status = a.get_status().combine(b.get_status());
        let Some(gap) = Self::exponent_gap(a, b) else {
            return Self::gap_overflow(a, b);
        };

        // Scale up the operand with the larger exponent, and keep the smaller
        // exponent.
        let (mantissa, exp) = if a.get_exp() >= b.get_exp() {
            (add_shifted(a.get_mantissa(), b.get_mantissa(), gap), b.get_exp())
        } else {
            (add_shifted(b.get_mantissa(), a.get_mantissa(), gap), a.get_exp())
        };

        if mantissa.is_zero() {
            return Self::zero(Sign::Positive).with_status(status);
        }
        Self::new(a.get_sign(), exp, mantissa).with_status(status)
    }

    /// An inner function that subtracts two normal numbers (no NaN, Inf,
    /// Zeros).
    fn sub_normals(a: &Self, b: &Self) -> Self {
        if a.get_sign() != b.get_sign() {
            return Self::add_normals(a, &b.neg());
        }

        let status = a.get_status().combine(b.get_status());
        let Some(gap) = Self::exponent_gap(a, b) else {
            return Self::gap_overflow(a, b);
        };
        let (am, bm, exp) = Self::align(a, b, gap);

        // Figure out which mantissa is larger, to make sure that we don't
        // overflow the subtraction. The sign flips if rhs is larger.
        let (mantissa, sign) = match am.cmp(&bm) {
            core::cmp::Ordering::Equal => {
                return Self::zero(Sign::Positive).with_status(status);
            }
            core::cmp::Ordering::Greater => {
                (sub_shifted(&am, &bm, 0), a.get_sign())
            }
            core::cmp::Ordering::Less => {
                (sub_shifted(&bm, &am, 0), a.get_sign().invert())
            }
        };
        Self::new(sign, exp, mantissa).with_status(status)
    }

    /// Computes a+b. The result is exact.
    pub fn add_values(a: &Self, b: &Self) -> Self {
        let status = a.get_status().combine(b.get_status());
        match (a.get_category(), b.get_category()) {
            (Category::NaN, Category::Infinity)
            | (Category::NaN, Category::NaN)
            | (Category::NaN, Category::Normal)
            | (Category::NaN, Category::Zero)
            | (Category::Infinity, Category::Normal)
            | (Category::Infinity, Category::Zero)
            | (Category::Normal, Category::Zero) => a.clone(),

            (Category::Zero, Category::NaN)
            | (Category::Normal, Category::NaN)
            | (Category::Infinity, Category::NaN)
            | (Category::Zero, Category::Infinity)
            | (Category::Normal, Category::Infinity)
            | (Category::Zero, Category::Normal) => b.clone(),

            (Category::Zero, Category::Zero) => {
                let both_negative = a.is_negative() && b.is_negative();
                Self::zero(Sign::from_negative(both_negative))
                    .with_status(status)
            }

            (Category::Infinity, Category::Infinity) => {
                if a.get_sign() == b.get_sign() {
                    return a.clone();
                }
                tracing::trace!("inf + -inf is undefined");
                Self::nan(a.get_sign()).with_status(status)
            }

            (Category::Normal, Category::Normal) => Self::add_normals(a, b),
        }
    }

    /// Computes a-b. The result is exact.
    pub fn sub_values(a: &Self, b: &Self) -> Self {
        let status = a.get_status().combine(b.get_status());
        match (a.get_category(), b.get_category()) {
            (Category::NaN, Category::Infinity)
            | (Category::NaN, Category::NaN)
            | (Category::NaN, Category::Normal)
            | (Category::NaN, Category::Zero)
            | (Category::Infinity, Category::Normal)
            | (Category::Infinity, Category::Zero)
            | (Category::Normal, Category::Zero) => a.clone(),

            (Category::Zero, Category::NaN)
            | (Category::Normal, Category::NaN)
            | (Category::Infinity, Category::NaN) => b.clone(),

            (Category::Zero, Category::Infinity)
            | (Category::Normal, Category::Infinity)
            | (Category::Zero, Category::Normal) => b.neg(),

            (Category::Zero, Category::Zero) => {
                let negative = a.is_negative() && !b.is_negative();
                Self::zero(Sign::from_negative(negative)).with_status(status)
            }

            (Category::Infinity, Category::Infinity) => {
                if a.get_sign() != b.get_sign() {
                    return a.clone();
                }
                tracing::trace!("inf - inf is undefined");
                Self::nan(a.get_sign()).with_status(status)
            }

            (Category::Normal, Category::Normal) => Self::sub_normals(a, b),
        }
    }

    /// Computes a*b. The result is exact, unless the exponent overflows.
    pub fn mul_values(a: &Self, b: &Self) -> Self {
        let sign = Sign::product(a.get_sign(), b.get_sign());
        let status = a.get_status().combine(b.get_status());

        match (a.get_category(), b.get_category()) {
            (Category::NaN, Category::Infinity)
            | (Category::NaN, Category::NaN)
            | (Category::NaN, Category::Normal)
            | (Category::NaN, Category::Zero) => a.clone(),

            (Category::Zero, Category::NaN)
            | (Category::Normal, Category::NaN)
            | (Category::Infinity, Category::NaN) => b.clone(),

            (Category::Zero, Category::Infinity)
            | (Category::Infinity, Category::Zero) => {
                tracing::trace!("0 * inf is undefined");
                Self::nan(sign).with_status(status)
            }

            (Category::Normal, Category::Zero)
            | (Category::Zero, Category::Normal)
            | (Category::Zero, Category::Zero) => {
                Self::zero(sign).with_status(status)
            }

            (Category::Normal, Category::Infinity)
            | (Category::Infinity, Category::Normal)
            | (Category::Infinity, Category::Infinity) => {
                Self::inf(sign).with_status(status)
            }

            (Category::Normal, Category::Normal) => {
                Self::mul_normals(a, b, sign)
            }
        }
    }

    fn mul_normals(a: &Self, b: &Self, sign: Sign) -> Self {
        let status = a.get_status().combine(b.get_status());
        let mut mantissa = a.get_mantissa().clone();
        mantissa.inplace_mul(b.get_mantissa());
        let exp = a.get_exp() as i128 + b.get_exp() as i128;
        Self::from_wide_exp(sign, exp, mantissa, status)
    }

    /// Computes a/b, and keeps `precision` limbs below the integer part of
    /// the quotient of the mantissas. The quotient is truncated toward zero.
    pub fn div_with_precision(a: &Self, b: &Self, precision: Precision) -> Self {
        let sign = Sign::product(a.get_sign(), b.get_sign());
        let status = a.get_status().combine(b.get_status());

        match (a.get_category(), b.get_category()) {
            (Category::NaN, Category::Infinity)
            | (Category::NaN, Category::NaN)
            | (Category::NaN, Category::Normal)
            | (Category::NaN, Category::Zero) => a.clone(),

            (Category::Zero, Category::NaN)
            | (Category::Normal, Category::NaN)
            | (Category::Infinity, Category::NaN) => b.clone(),

            (Category::Zero, Category::Zero)
            | (Category::Infinity, Category::Infinity) => {
                tracing::trace!("0/0 and inf/inf are undefined");
                Self::nan(sign).with_status(status)
            }

            (Category::Zero, Category::Normal)
            | (Category::Zero, Category::Infinity)
            | (Category::Normal, Category::Infinity) => {
                Self::zero(sign).with_status(status)
            }

            (Category::Normal, Category::Zero)
            | (Category::Infinity, Category::Zero)
            | (Category::Infinity, Category::Normal) => {
                Self::inf(sign).with_status(status)
            }

            (Category::Normal, Category::Normal) => {
                Self::div_normals(a, b, sign, precision)
            }
        }
    }

    /// Computes a/b with the default precision.
    pub fn div_values(a: &Self, b: &Self) -> Self {
        Self::div_with_precision(a, b, Precision::default())
    }

    /// Compute a/b, where both `a` and `b` are normals.
    /// This implementation uses a regular integer division for the mantissa.
    /// The dividend is scaled up so that the quotient has at least
    /// `precision` fractional limbs.
    fn div_normals(a: &Self, b: &Self, sign: Sign, precision: Precision) -> Self {
        let status = a.get_status().combine(b.get_status());
        let divisor = b.get_mantissa();
        let k = precision.get_limbs() + divisor.limb_count();

        let mut quotient = a.get_mantissa().clone();
        quotient.shift_limbs_left(k);
        let rem = quotient.inplace_div(divisor);
        if !rem.is_zero() {
            tracing::debug!(limbs = k, "inexact division");
        }

        let exp = a.get_exp() as i128 - b.get_exp() as i128 - k as i128;
        let (quotient, exp) = trim_trailing_limbs(quotient, exp);
        Self::from_wide_exp(sign, exp, quotient, status)
    }
}

impl Neg for &Float {
    type Output = Float;
    fn neg(self) -> Float {
        Float::neg(self)
    }
}

macro_rules! declare_operator {
    ($trait_name:ident,
     $func_name:ident,
     $func_impl_name:ident) => {
        // Self + Self
        impl $trait_name for Float {
            type Output = Self;
            fn $func_name(self, rhs: Self) -> Self {
                Self::$func_impl_name(&self, &rhs)
            }
        }

        // &Self + &Self
        impl $trait_name<Self> for &Float {
            type Output = Float;
            fn $func_name(self, rhs: Self) -> Self::Output {
                Float::$func_impl_name(self, rhs)
            }
        }

        // &Self + Self
        impl $trait_name<Float> for &Float {
            type Output = Float;
            fn $func_name(self, rhs: Float) -> Self::Output {
                Float::$func_impl_name(self, &rhs)
            }
        }

        // Self + &Self
        impl $trait_name<&Float> for Float {
            type Output = Float;
            fn $func_name(self, rhs: &Float) -> Self::Output {
                Float::$func_impl_name(&self, rhs)
            }
        }
    };
}

declare_operator!(Add, add, add_values);
declare_operator!(Sub, sub, sub_values);
declare_operator!(Mul, mul, mul_values);
declare_operator!(Div, div, div_values);

macro_rules! declare_assign_operator {
    ($trait_name:ident,
     $func_name:ident,
     $func_impl_name:ident) => {
        impl $trait_name for Float {
            fn $func_name(&mut self, rhs: Self) {
                *self = Self::$func_impl_name(self, &rhs);
            }
        }

        impl $trait_name<&Float> for Float {
            fn $func_name(&mut self, rhs: &Self) {
                *self = Self::$func_impl_name(self, rhs);
            }
        }
    };
}

declare_assign_operator!(AddAssign, add_assign, add_values);
declare_assign_operator!(SubAssign, sub_assign, sub_values);
declare_assign_operator!(MulAssign, mul_assign, mul_values);
declare_assign_operator!(DivAssign, div_assign, div_values);

#[cfg(test)]
fn num(val: u64, exp: i64, negative: bool) -> Float {
    Float::new(Sign::from_negative(negative), exp, Magnitude::from_u64(val))
}

#[cfg(test)]
fn assert_value(x: &Float, negative: bool, exp: i64, parts: &[u64]) {
    assert!(x.is_normal());
    assert_eq!(x.is_negative(), negative);
    assert_eq!(x.get_exp(), exp);
    assert_eq!(x.get_mantissa(), &Magnitude::from_parts(parts));
}

#[test]
fn test_add_same_exponent() {
    let c = Float::add_values(&num(100, 0, false), &num(200, 0, false));
    assert_value(&c, false, 0, &[300]);

    let c = Float::add_values(&num(100, 3, true), &num(200, 3, true));
    assert_value(&c, true, 3, &[300]);

    // Carry into a new limb.
    let c = Float::add_values(&num(u64::MAX, 0, false), &num(1, 0, false));
    assert_value(&c, false, 0, &[0, 1]);
}

#[test]
fn test_add_aligns_exponents() {
    let a = num(50, 5, false);
    let b = num(50, 2, false);
    let c = Float::add_values(&a, &b);
    assert!(!c.is_nan());
    assert_value(&c, false, 2, &[50, 0, 0, 50]);
    assert!(c != a && c != b);

    // The operand order does not matter.
    let d = Float::add_values(&b, &a);
    assert_value(&d, false, 2, &[50, 0, 0, 50]);

    // Negative exponents.
    let c = Float::add_values(&num(1, -1, false), &num(1, 1, false));
    assert_value(&c, false, -1, &[1, 0, 1]);
}

#[test]
fn test_add_different_signs() {
    let c = Float::add_values(&num(100, 0, false), &num(300, 0, true));
    assert_value(&c, true, 0, &[200]);

    let c = Float::add_values(&num(300, 0, false), &num(100, 0, true));
    assert_value(&c, false, 0, &[200]);

    let c = Float::add_values(&num(7, 2, true), &num(7, 2, false));
    assert!(c.is_zero() && !c.is_negative());
}

#[test]
fn test_sub() {
    let c = Float::sub_values(&num(100, 0, false), &num(200, 0, false));
    assert_value(&c, true, 0, &[100]);

    let c = Float::sub_values(&num(200, 0, false), &num(100, 0, false));
    assert_value(&c, false, 0, &[100]);

    // Borrow across limbs: R - 1.
    let c = Float::sub_values(&num(1, 1, false), &num(1, 0, false));
    assert_value(&c, false, 0, &[u64::MAX]);

    // The operand with the smaller exponent can have the larger mantissa
    // after alignment.
    let c = Float::sub_values(&num(1, 0, false), &num(1, 1, false));
    assert_value(&c, true, 0, &[u64::MAX]);

    // Negative operands.
    let c = Float::sub_values(&num(10, 0, true), &num(3, 0, true));
    assert_value(&c, true, 0, &[7]);
    let c = Float::sub_values(&num(3, 0, true), &num(10, 0, true));
    assert_value(&c, false, 0, &[7]);

    // Different signs turn into additions.
    let c = Float::sub_values(&num(10, 0, false), &num(3, 0, true));
    assert_value(&c, false, 0, &[13]);
    let c = Float::sub_values(&num(10, 0, true), &num(3, 0, false));
    assert_value(&c, true, 0, &[13]);
}

#[test]
fn test_sub_self_is_positive_zero() {
    for x in [num(5, 0, false), num(5, 3, true), num(u64::MAX, -7, true)] {
        let c = Float::sub_values(&x, &x);
        assert!(c.is_zero());
        assert!(!c.is_negative());
    }

    // Equal values with different representations.
    let a = num(7, 1, false);
    let b = Float::new(Sign::Positive, 0, Magnitude::from_parts(&[0, 7]));
    let c = Float::sub_values(&a, &b);
    assert!(c.is_zero() && !c.is_negative());
}

#[test]
fn test_far_apart_exponents() {
    // Gaps that can't be written out as zero limbs evaluate to NaN.
    let top = num(1, i64::MAX, false);
    let bottom = num(1, i64::MIN, false);
    for c in [
        Float::add_values(&top, &bottom),
        Float::add_values(&bottom, &top),
        Float::sub_values(&top, &bottom),
        Float::add_values(&top, &bottom.neg()),
        Float::sub_values(&num(1, 1 << 62, false), &num(1, -(1 << 62), false)),
    ] {
        assert!(c.is_nan());
        assert!(c.get_status().is_error());
    }

    let c = num(1, MAX_EXPONENT_GAP as i64 + 1, true) - num(1, 0, false);
    assert!(c.is_nan() && c.get_status().is_error());

    // Wide gaps below the limit stay exact.
    let c = Float::add_values(&num(3, 1000, false), &num(4, -1000, false));
    assert_eq!(c.get_exp(), -1000);
    assert_eq!(c.get_mantissa().limb_count(), 2001);
    assert_eq!(c.get_mantissa().get_part(0), 4);
    assert_eq!(c.get_mantissa().get_part(2000), 3);
}

#[test]
fn test_add_sub_special_values() {
    let nan = Float::nan(Sign::Positive);
    let inf = Float::inf(Sign::Positive);
    let ninf = Float::inf(Sign::Negative);
    let zero = Float::zero(Sign::Positive);
    let nzero = Float::zero(Sign::Negative);
    let five = num(5, 0, false);

    for x in [&nan, &inf, &ninf, &zero, &nzero, &five] {
        assert!(Float::add_values(&nan, x).is_nan());
        assert!(Float::add_values(x, &nan).is_nan());
        assert!(Float::sub_values(&nan, x).is_nan());
        assert!(Float::sub_values(x, &nan).is_nan());
    }

    // inf + -inf is undefined.
    assert!(Float::add_values(&inf, &ninf).is_nan());
    assert!(Float::add_values(&ninf, &inf).is_nan());
    let c = Float::add_values(&inf, &inf);
    assert!(c.is_inf() && !c.is_negative());
    let c = Float::add_values(&ninf, &ninf);
    assert!(c.is_inf() && c.is_negative());

    // inf - inf is undefined.
    assert!(Float::sub_values(&inf, &inf).is_nan());
    assert!(Float::sub_values(&ninf, &ninf).is_nan());
    let c = Float::sub_values(&inf, &ninf);
    assert!(c.is_inf() && !c.is_negative());
    let c = Float::sub_values(&ninf, &inf);
    assert!(c.is_inf() && c.is_negative());

    // Finite values vanish next to infinity.
    assert!(Float::add_values(&five, &ninf).is_negative());
    assert!(Float::add_values(&inf, &five).is_inf());
    let c = Float::sub_values(&five, &inf);
    assert!(c.is_inf() && c.is_negative());
    let c = Float::sub_values(&zero, &ninf);
    assert!(c.is_inf() && !c.is_negative());
    let c = Float::sub_values(&ninf, &five);
    assert!(c.is_inf() && c.is_negative());

    // Zero is the identity.
    assert_value(&Float::add_values(&zero, &five), false, 0, &[5]);
    assert_value(&Float::add_values(&five, &nzero), false, 0, &[5]);
    assert_value(&Float::sub_values(&five, &zero), false, 0, &[5]);
    assert_value(&Float::sub_values(&zero, &five), true, 0, &[5]);
}

#[test]
fn test_signed_zero_sums() {
    let p = Float::zero(Sign::Positive);
    let n = Float::zero(Sign::Negative);
    let neg = |x: &Float| x.is_zero() && x.is_negative();
    let pos = |x: &Float| x.is_zero() && !x.is_negative();

    assert!(pos(&Float::add_values(&p, &p)));
    assert!(pos(&Float::add_values(&p, &n)));
    assert!(pos(&Float::add_values(&n, &p)));
    assert!(neg(&Float::add_values(&n, &n)));

    assert!(pos(&Float::sub_values(&p, &p)));
    assert!(pos(&Float::sub_values(&p, &n)));
    assert!(neg(&Float::sub_values(&n, &p)));
    assert!(pos(&Float::sub_values(&n, &n)));
}

#[test]
fn test_mul() {
    let c = Float::mul_values(&num(5, 0, false), &num(10, 0, false));
    assert_value(&c, false, 0, &[50]);

    let c = Float::mul_values(&num(5, 2, false), &num(10, 4, false));
    assert_value(&c, false, 6, &[50]);

    let c = Float::mul_values(&num(5, -2, true), &num(10, 4, false));
    assert_value(&c, true, 2, &[50]);

    let c = Float::mul_values(&num(5, 0, true), &num(10, 0, true));
    assert_value(&c, false, 0, &[50]);

    // The product grows into a second limb.
    let c = Float::mul_values(&num(u64::MAX, 0, false), &num(2, 0, false));
    assert_value(&c, false, 0, &[u64::MAX - 1, 1]);

    // Identity.
    let x = num(1234, -9, true);
    let c = Float::mul_values(&x, &Float::one(Sign::Positive));
    assert_value(&c, true, -9, &[1234]);
}

#[test]
fn test_mul_special_values() {
    let nan = Float::nan(Sign::Positive);
    let inf = Float::inf(Sign::Positive);
    let zero = Float::zero(Sign::Positive);
    let nzero = Float::zero(Sign::Negative);
    let five = num(5, 0, true);

    for x in [&nan, &inf, &zero, &five] {
        assert!(Float::mul_values(&nan, x).is_nan());
        assert!(Float::mul_values(x, &nan).is_nan());
    }

    // 0 * inf is undefined.
    assert!(Float::mul_values(&zero, &inf).is_nan());
    assert!(Float::mul_values(&nzero, &inf).is_nan());
    assert!(Float::mul_values(&inf, &nzero).is_nan());

    let c = Float::mul_values(&zero, &five);
    assert!(c.is_zero() && c.is_negative());
    let c = Float::mul_values(&nzero, &nzero);
    assert!(c.is_zero() && !c.is_negative());
    let c = Float::mul_values(&inf, &five);
    assert!(c.is_inf() && c.is_negative());
    let c = Float::mul_values(&inf, &inf.neg());
    assert!(c.is_inf() && c.is_negative());
}

#[test]
fn test_mul_exponent_overflow() {
    let big = num(3, i64::MAX - 1, false);
    let c = Float::mul_values(&big, &big);
    assert!(c.is_inf() && !c.is_negative());

    let small = num(3, i64::MIN + 1, true);
    let c = Float::mul_values(&small, &small.neg());
    assert!(c.is_zero() && c.is_negative());
}

#[test]
fn test_div_exact() {
    // 50 / 10 = 5, trailing zero limbs are folded into the exponent.
    let c = Float::div_values(&num(50, 0, false), &num(10, 0, false));
    assert_value(&c, false, 0, &[5]);

    let c = Float::div_values(&num(50, 6, true), &num(10, 4, false));
    assert_value(&c, true, 2, &[5]);

    // 1 / 2 = 2^63 * R^-1.
    let c = Float::div_values(&num(1, 0, false), &num(2, 0, false));
    assert_value(&c, false, -1, &[1 << 63]);

    // Multi-limb divisor.
    let x = Float::new(Sign::Positive, 0, Magnitude::from_parts(&[6, 9, 3]));
    let y = Float::new(Sign::Positive, 0, Magnitude::from_parts(&[2, 3, 1]));
    assert_value(&Float::div_values(&x, &y), false, 0, &[3]);
}

#[test]
fn test_div_inexact() {
    // 1/3 with 2 limbs of precision: 0x5555... repeated.
    let c = Float::div_values(&num(1, 0, false), &num(3, 0, false));
    let third = 0x5555_5555_5555_5555;
    assert_value(&c, false, -3, &[third, third, third]);

    // More precision keeps more limbs.
    let c = Float::div_with_precision(
        &num(1, 0, false),
        &num(3, 0, false),
        Precision::new(5),
    );
    assert_eq!(c.get_exp(), -6);
    assert_eq!(c.get_mantissa().limb_count(), 6);

    // The truncated quotient times the divisor is below the dividend.
    let three = num(3, 0, false);
    let one = num(1, 0, false);
    let back = Float::mul_values(&c, &three);
    assert!(back < one);
}

#[test]
fn test_div_special_values() {
    let nan = Float::nan(Sign::Positive);
    let inf = Float::inf(Sign::Positive);
    let zero = Float::zero(Sign::Positive);
    let five = num(5, 0, false);
    let nfive = num(5, 0, true);

    for x in [&nan, &inf, &zero, &five] {
        assert!(Float::div_values(&nan, x).is_nan());
        assert!(Float::div_values(x, &nan).is_nan());
    }

    assert!(Float::div_values(&zero, &zero).is_nan());
    assert!(Float::div_values(&inf, &inf.neg()).is_nan());

    let c = Float::div_values(&five, &zero);
    assert!(c.is_inf() && !c.is_negative());
    let c = Float::div_values(&nfive, &zero);
    assert!(c.is_inf() && c.is_negative());
    let c = Float::div_values(&inf, &nfive);
    assert!(c.is_inf() && c.is_negative());
    let c = Float::div_values(&nfive, &inf);
    assert!(c.is_zero() && c.is_negative());
    let c = Float::div_values(&zero, &nfive);
    assert!(c.is_zero() && c.is_negative());
    let c = Float::div_values(&zero, &inf);
    assert!(c.is_zero() && !c.is_negative());
}

#[test]
fn test_status_forwarding() {
    let bad = num(5, 0, false).with_status(Status::Error);
    let good = num(7, 0, false);

    assert!(Float::add_values(&bad, &good).get_status().is_error());
    assert!(Float::sub_values(&good, &bad).get_status().is_error());
    assert!(Float::mul_values(&good, &bad).get_status().is_error());
    assert!(Float::div_values(&bad, &good).get_status().is_error());
    assert!(Float::add_values(&good, &good).get_status().is_ok());

    // Returning an operand keeps that operand's status.
    let zero = Float::zero(Sign::Positive);
    assert!(Float::add_values(&bad, &zero).get_status().is_error());
    assert!(Float::add_values(&zero, &good).get_status().is_ok());
}

#[test]
fn test_operators() {
    let a = num(8, 0, false);
    let b = num(2, 0, false);
    assert_value(&(&a + &b), false, 0, &[10]);
    assert_value(&(&a - &b), false, 0, &[6]);
    assert_value(&(&a * &b), false, 0, &[16]);
    assert_value(&(&a / &b), false, 0, &[4]);
    assert_value(&(-&a), true, 0, &[8]);

    let mut c = a.clone() + b.clone();
    c -= &b;
    c *= b.clone();
    c /= &b;
    c += a.clone();
    assert_value(&c, false, 0, &[16]);
    assert_value(&(-&c), true, 0, &[16]);
}
