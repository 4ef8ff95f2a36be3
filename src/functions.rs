use super::float::{trim_trailing_limbs, Category, Float, Precision};
use super::sign::Sign;

impl Float {
    /// Returns a new float with the sign forced to positive.
    pub fn abs(&self) -> Self {
        Self::raw(
            Sign::Positive,
            self.get_exp(),
            self.get_mantissa().clone(),
            self.get_category(),
            self.get_status(),
        )
    }

    /// Returns the larger of the two numbers. If one of the numbers is NaN,
    /// the other number is returned.
    pub fn max(&self, other: &Self) -> Self {
        if self.is_nan() {
            return other.clone();
        }
        if other.is_nan() || !self.is_lower(other) {
            return self.clone();
        }
        other.clone()
    }

    /// Returns the smaller of the two numbers. If one of the numbers is NaN,
    /// the other number is returned.
    pub fn min(&self, other: &Self) -> Self {
        if self.is_nan() {
            return other.clone();
        }
        if other.is_nan() || !self.is_greater(other) {
            return self.clone();
        }
        other.clone()
    }

    /// Raise the number to the integer power `exp` using repeated squaring.
    /// The result is exact. `x^0` is one.
    pub fn powi(&self, mut exp: u64) -> Self {
        let mut v = Self::one(Sign::Positive);
        let mut base = self.clone();
        loop {
            if exp & 0x1 == 1 {
                v = Self::mul_values(&v, &base);
            }
            exp >>= 1;
            if exp == 0 {
                break;
            }
            base = Self::mul_values(&base, &base);
        }
        v
    }

    /// Calculate the square root of the number with the default precision.
    pub fn sqrt(&self) -> Self {
        self.sqrt_with_precision(Precision::default())
    }

    /// Calculate the square root of the number, keeping `precision` limbs
    /// below the integer part of the root of the mantissa. The root is
    /// truncated toward zero.
    pub fn sqrt_with_precision(&self, precision: Precision) -> Self {
        match self.get_category() {
            Category::NaN | Category::Zero => self.clone(), // NaN, (+/-) zero.
            Category::Infinity => {
                if self.is_negative() {
                    tracing::trace!("sqrt of -inf is undefined");
                    return Self::nan(Sign::Negative)
                        .with_status(self.get_status());
                }
                self.clone()
            }
            Category::Normal => {
                if self.is_negative() {
                    tracing::trace!("sqrt of a negative number is undefined");
                    return Self::nan(Sign::Negative)
                        .with_status(self.get_status());
                }
                self.sqrt_normal(precision)
            }
        }
    }

    fn sqrt_normal(&self, precision: Precision) -> Self {
        let mut mantissa = self.get_mantissa().clone();
        let mut exp = self.get_exp() as i128;

        // Make the exponent even, so that it can be halved.
        if exp.rem_euclid(2) == 1 {
            mantissa.shift_limbs_left(1);
            exp -= 1;
        }

        // Each fractional limb of the root needs two limbs in the operand.
        let frac = 2 * precision.get_limbs();
        mantissa.shift_limbs_left(frac);
        exp -= frac as i128;

        let root = mantissa.isqrt();
        let mut square = root.clone();
        square.inplace_mul(&root);
        if square != mantissa {
            tracing::debug!(limbs = precision.get_limbs(), "inexact sqrt");
        }

        let (root, exp) = trim_trailing_limbs(root, exp / 2);
        Self::from_wide_exp(Sign::Positive, exp, root, self.get_status())
    }
}

#[cfg(test)]
use super::magnitude::Magnitude;

#[cfg(test)]
fn num(val: u64, exp: i64, negative: bool) -> Float {
    Float::new(Sign::from_negative(negative), exp, Magnitude::from_u64(val))
}

#[test]
fn test_abs() {
    let a = num(5, 3, true).abs();
    assert!(!a.is_negative());
    assert_eq!(a.get_exp(), 3);
    assert_eq!(a.get_mantissa().to_u64(), Some(5));

    assert!(!Float::zero(Sign::Negative).abs().is_negative());
    let i = Float::inf(Sign::Negative).abs();
    assert!(i.is_inf() && !i.is_negative());
    assert!(Float::nan(Sign::Negative).abs().is_nan());
}

#[test]
fn test_sqrt_exact() {
    // Try a few perfect squares.
    for i in 1..256u64 {
        let r = num(i * i, 0, false).sqrt();
        assert!(r.is_equal(&num(i, 0, false)));
    }

    // Odd exponents: sqrt(4 * R^3) = 2 * R^1.5 = 2^33 * R^1.
    let r = num(4, 3, false).sqrt();
    assert!(r.is_equal(&num(1 << 33, 1, false)));

    // Even exponents are halved.
    let r = num(9, -4, false).sqrt();
    assert!(r.is_equal(&num(3, -2, false)));
    assert_eq!(r.get_exp(), -2);
}

#[test]
fn test_sqrt_inexact() {
    // sqrt(2) truncated: r*r <= 2 < (r + ulp)^2.
    let two = num(2, 0, false);
    let r = two.sqrt();
    assert!(r.is_normal());
    assert!(Float::mul_values(&r, &r) < two);
    assert_eq!(r.get_exp(), -2);
    let ulp = Float::new(Sign::Positive, -2, Magnitude::one());
    let next = Float::add_values(&r, &ulp);
    assert!(Float::mul_values(&next, &next) > two);

    // Higher precision keeps more limbs.
    let r = two.sqrt_with_precision(Precision::new(4));
    assert_eq!(r.get_exp(), -4);
    assert!(Float::mul_values(&r, &r) < two);
}

#[test]
fn test_sqrt_special_values() {
    use super::utils;
    for v in utils::get_special_test_values() {
        let r = v.sqrt();
        match v.get_category() {
            Category::NaN => assert!(r.is_nan()),
            Category::Zero => {
                assert!(r.is_zero());
                assert_eq!(r.is_negative(), v.is_negative());
            }
            Category::Infinity => {
                assert_eq!(r.is_nan(), v.is_negative());
                assert_eq!(r.is_inf(), !v.is_negative());
            }
            Category::Normal => {
                assert_eq!(r.is_nan(), v.is_negative());
                assert_eq!(r.is_normal(), !v.is_negative());
            }
        }
    }
}

#[test]
fn test_max_min() {
    let nan = Float::nan(Sign::Positive);
    let a = num(5, 0, true);
    let b = num(7, 1, false);

    assert!(a.max(&b).is_equal(&b));
    assert!(b.max(&a).is_equal(&b));
    assert!(a.min(&b).is_equal(&a));
    assert!(b.min(&a).is_equal(&a));

    assert!(nan.max(&a).is_equal(&a));
    assert!(a.max(&nan).is_equal(&a));
    assert!(nan.min(&b).is_equal(&b));
    assert!(nan.min(&nan).is_nan());

    let inf = Float::inf(Sign::Positive);
    assert!(inf.max(&b).is_inf());
    assert!(inf.neg().min(&a).is_inf());
}

#[test]
fn test_powi() {
    let r = num(3, 1, false).powi(5);
    assert!(r.is_equal(&num(243, 5, false)));

    let r = num(2, 0, true).powi(3);
    assert!(r.is_equal(&num(8, 0, true)));
    let r = num(2, 0, true).powi(4);
    assert!(r.is_equal(&num(16, 0, false)));

    assert!(num(9, 4, true).powi(0).is_equal(&Float::one(Sign::Positive)));
    assert!(Float::zero(Sign::Positive).powi(3).is_zero());

    // 2^64 is exactly one limb.
    let r = num(2, 0, false).powi(64);
    assert!(r.is_equal(&num(1, 1, false)));
}
