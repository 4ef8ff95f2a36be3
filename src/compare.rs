//! This module contains the total-order comparison of floats.

use core::cmp::Ordering;

use super::float::{Category, Float};
use super::magnitude::Magnitude;

/// The outcome of comparing two floats. Any comparison that involves a NaN is
/// `Unordered`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Greater,
    Equal,
    Lower,
    Unordered,
}

impl Comparison {
    /// Returns the comparison with the sides swapped.
    pub fn reverse(self) -> Self {
        match self {
            Comparison::Greater => Comparison::Lower,
            Comparison::Lower => Comparison::Greater,
            Comparison::Equal => Comparison::Equal,
            Comparison::Unordered => Comparison::Unordered,
        }
    }

    fn from_ordering(ord: Ordering) -> Self {
        match ord {
            Ordering::Less => Comparison::Lower,
            Ordering::Equal => Comparison::Equal,
            Ordering::Greater => Comparison::Greater,
        }
    }
}

impl From<Comparison> for Option<Ordering> {
    fn from(value: Comparison) -> Self {
        match value {
            Comparison::Greater => Some(Ordering::Greater),
            Comparison::Equal => Some(Ordering::Equal),
            Comparison::Lower => Some(Ordering::Less),
            Comparison::Unordered => None,
        }
    }
}

impl Float {
    /// Compare this number to `other`.
    pub fn compare(&self, other: &Self) -> Comparison {
        // Returns Greater for a positive value and Lower for a negative one.
        let by_sign = |x: &Float| -> Comparison {
            if x.is_negative() {
                Comparison::Lower
            } else {
                Comparison::Greater
            }
        };

        match (self.get_category(), other.get_category()) {
            (Category::NaN, Category::NaN)
            | (Category::NaN, Category::Infinity)
            | (Category::NaN, Category::Normal)
            | (Category::NaN, Category::Zero)
            | (Category::Infinity, Category::NaN)
            | (Category::Normal, Category::NaN)
            | (Category::Zero, Category::NaN) => Comparison::Unordered,

            (Category::Zero, Category::Zero) => Comparison::Equal,

            (Category::Infinity, Category::Infinity) => {
                if self.get_sign() == other.get_sign() {
                    Comparison::Equal
                } else {
                    by_sign(self)
                }
            }

            (Category::Infinity, Category::Normal)
            | (Category::Infinity, Category::Zero)
            | (Category::Normal, Category::Zero) => by_sign(self),

            (Category::Normal, Category::Infinity)
            | (Category::Zero, Category::Infinity)
            | (Category::Zero, Category::Normal) => by_sign(other).reverse(),

            (Category::Normal, Category::Normal) => {
                Self::compare_normals(self, other)
            }
        }
    }

    /// Compare two normal numbers: first by sign, then by the order of
    /// magnitude and finally by the exponent-aligned mantissa.
    fn compare_normals(a: &Self, b: &Self) -> Comparison {
        if a.get_sign() != b.get_sign() {
            return if a.is_negative() {
                Comparison::Lower
            } else {
                Comparison::Greater
            };
        }

        let abs_cmp = match a.order_of_magnitude().cmp(&b.order_of_magnitude())
        {
            Ordering::Equal => Self::compare_aligned_mantissa(a, b),
            ord => ord,
        };

        let res = Comparison::from_ordering(abs_cmp);
        if a.is_negative() {
            res.reverse()
        } else {
            res
        }
    }

    /// Compare the mantissas of two numbers after scaling the one with the
    /// larger exponent down to the smaller exponent. When the orders of
    /// magnitude match the exponent gap is bounded by the mantissa length.
    fn compare_aligned_mantissa(a: &Self, b: &Self) -> Ordering {
        let (a_exp, b_exp) = (a.get_exp(), b.get_exp());
        let gap = a_exp.abs_diff(b_exp) as usize;
        match a_exp.cmp(&b_exp) {
            Ordering::Equal => a.get_mantissa().cmp(b.get_mantissa()),
            Ordering::Greater => {
                let mut am: Magnitude = a.get_mantissa().clone();
                am.shift_limbs_left(gap);
                am.cmp(b.get_mantissa())
            }
            Ordering::Less => {
                let mut bm: Magnitude = b.get_mantissa().clone();
                bm.shift_limbs_left(gap);
                a.get_mantissa().cmp(&bm)
            }
        }
    }

    /// Returns true if the numbers are equal. NaN is not equal to anything,
    /// and the two zeros are equal.
    pub fn is_equal(&self, other: &Self) -> bool {
        self.compare(other) == Comparison::Equal
    }

    /// Returns true if this number is greater than `other`.
    pub fn is_greater(&self, other: &Self) -> bool {
        self.compare(other) == Comparison::Greater
    }

    /// Returns true if this number is lower than `other`.
    pub fn is_lower(&self, other: &Self) -> bool {
        self.compare(other) == Comparison::Lower
    }
}

impl PartialEq for Float {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl PartialOrd for Float {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).into()
    }
}

#[cfg(test)]
fn num(val: u64, exp: i64, negative: bool) -> Float {
    use crate::Sign;
    Float::new(Sign::from_negative(negative), exp, Magnitude::from_u64(val))
}

#[test]
fn test_compare_normals() {
    // Different signs.
    assert!(num(1, 0, false).is_greater(&num(500, 0, true)));
    assert!(num(500, 0, true).is_lower(&num(1, 0, false)));

    // Same exponent.
    assert!(num(200, 0, false).is_greater(&num(100, 0, false)));
    assert!(num(100, 0, false).is_lower(&num(200, 0, false)));
    assert!(num(100, 0, false).is_equal(&num(100, 0, false)));

    // Negative numbers flip the order.
    assert!(num(456, 0, true).is_lower(&num(123, 0, true)));
    assert!(num(123, 0, true).is_greater(&num(456, 0, true)));
    assert!(num(123, 0, true).is_equal(&num(123, 0, true)));

    // A larger exponent wins over a larger mantissa.
    assert!(num(1, 3, false).is_greater(&num(u64::MAX, 2, false)));
    assert!(num(1, 3, true).is_lower(&num(u64::MAX, 2, true)));
    assert!(num(50, 2, false).is_lower(&num(50, 5, false)));
}

#[test]
fn test_compare_different_representations() {
    // 7 * 2^64 written with exponent 1 and with exponent 0.
    let a = num(7, 1, false);
    let b = Float::new(crate::Sign::Positive, 0, Magnitude::from_parts(&[0, 7]));
    assert!(a.is_equal(&b));
    assert!(b.is_equal(&a));

    // Same order of magnitude, the aligned mantissa decides.
    let c = Float::new(crate::Sign::Positive, 0, Magnitude::from_parts(&[3, 7]));
    assert!(c.is_greater(&a));
    assert!(a.is_lower(&c));
    assert!(c.neg().is_lower(&a.neg()));
}

#[test]
fn test_compare_special_table() {
    use crate::Sign;
    let nan = Float::nan(Sign::Positive);
    let zero = Float::zero(Sign::Positive);
    let neg_zero = Float::zero(Sign::Negative);
    let inf = Float::inf(Sign::Positive);
    let neg_inf = Float::inf(Sign::Negative);
    let pos = num(5, 0, false);
    let neg = num(5, 0, true);

    for x in [&nan, &zero, &inf, &neg_inf, &pos, &neg] {
        assert_eq!(nan.compare(x), Comparison::Unordered);
        assert_eq!(x.compare(&nan), Comparison::Unordered);
    }

    assert_eq!(zero.compare(&neg_zero), Comparison::Equal);
    assert_eq!(zero.compare(&inf), Comparison::Lower);
    assert_eq!(zero.compare(&neg_inf), Comparison::Greater);
    assert_eq!(zero.compare(&pos), Comparison::Lower);
    assert_eq!(zero.compare(&neg), Comparison::Greater);

    assert_eq!(inf.compare(&zero), Comparison::Greater);
    assert_eq!(inf.compare(&inf), Comparison::Equal);
    assert_eq!(inf.compare(&neg_inf), Comparison::Greater);
    assert_eq!(inf.compare(&neg), Comparison::Greater);

    assert_eq!(neg_inf.compare(&zero), Comparison::Lower);
    assert_eq!(neg_inf.compare(&inf), Comparison::Lower);
    assert_eq!(neg_inf.compare(&neg_inf), Comparison::Equal);
    assert_eq!(neg_inf.compare(&pos), Comparison::Lower);

    assert_eq!(pos.compare(&zero), Comparison::Greater);
    assert_eq!(neg.compare(&zero), Comparison::Lower);
    assert_eq!(pos.compare(&inf), Comparison::Lower);
    assert_eq!(neg.compare(&neg_inf), Comparison::Greater);
}

#[test]
fn test_nan_is_never_ordered() {
    use crate::Sign;
    let nan = Float::nan(Sign::Positive);
    assert!(!nan.is_equal(&nan));
    assert!(!nan.is_greater(&nan));
    assert!(!nan.is_lower(&nan));
    assert!(nan != nan);
    assert!(nan.partial_cmp(&nan).is_none());
}

#[test]
fn test_comparison_operators() {
    use crate::Sign;
    let values = [
        Float::inf(Sign::Negative),
        num(456, 1, true),
        num(123, 0, true),
        Float::zero(Sign::Negative),
        num(1, -2, false),
        num(100, 0, false),
        num(100, 3, false),
        Float::inf(Sign::Positive),
    ];

    // The list is sorted; exactly one relation holds for each pair.
    for (i, a) in values.iter().enumerate() {
        for (j, b) in values.iter().enumerate() {
            assert_eq!(a < b, i < j);
            assert_eq!(a == b, i == j);
            assert_eq!(a > b, i > j);
        }
    }
    assert!(Float::zero(Sign::Positive) == Float::zero(Sign::Negative));
}
