//! Algebraic laws of the float operations, checked on random inputs.

use proptest::prelude::*;
use scalefloat::{Category, Float, Magnitude, Sign};

/// Random normal numbers with a few limbs and a small exponent.
fn normal() -> impl Strategy<Value = Float> {
    (
        any::<bool>(),
        -6i64..6,
        prop::collection::vec(any::<u64>(), 1..4),
        1u64..=u64::MAX,
    )
        .prop_map(|(negative, exp, mut parts, top)| {
            // Make sure that the mantissa is not zero.
            parts.push(top);
            Float::new(Sign::from_negative(negative), exp, Magnitude::from_parts(&parts))
        })
}

/// Random numbers from every category.
fn any_float() -> impl Strategy<Value = Float> {
    prop_oneof![
        6 => normal(),
        1 => any::<bool>().prop_map(|n| Float::zero(Sign::from_negative(n))),
        1 => any::<bool>().prop_map(|n| Float::inf(Sign::from_negative(n))),
        1 => any::<bool>().prop_map(|n| Float::nan(Sign::from_negative(n))),
    ]
}

fn nan() -> Float {
    Float::nan(Sign::Positive)
}

/// Returns true if the two floats are the same value, including the sign of
/// zero and infinity. NaNs are identical to each other.
fn identical(a: &Float, b: &Float) -> bool {
    match (a.get_category(), b.get_category()) {
        (Category::NaN, Category::NaN) => true,
        (Category::Zero, Category::Zero) | (Category::Infinity, Category::Infinity) => {
            a.get_sign() == b.get_sign()
        }
        (Category::Normal, Category::Normal) => a == b,
        _ => false,
    }
}

proptest! {
    #[test]
    fn add_commutes(a in any_float(), b in any_float()) {
        prop_assert!(identical(&(&a + &b), &(&b + &a)));
    }

    #[test]
    fn mul_commutes(a in any_float(), b in any_float()) {
        prop_assert!(identical(&(&a * &b), &(&b * &a)));
    }

    #[test]
    fn add_is_associative_on_normals(a in normal(), b in normal(), c in normal()) {
        let left = &(&a + &b) + &c;
        let right = &a + &(&b + &c);
        prop_assert!(left.is_equal(&right) || (left.is_zero() && right.is_zero()));
    }

    #[test]
    fn zero_is_additive_identity(a in any_float()) {
        let sum = &a + &Float::zero(Sign::Positive);
        if a.is_zero() {
            prop_assert!(sum.is_zero() && !sum.is_negative());
        } else {
            prop_assert!(identical(&sum, &a));
        }
    }

    #[test]
    fn one_is_multiplicative_identity(a in any_float()) {
        prop_assert!(identical(&(&a * &Float::one(Sign::Positive)), &a));
    }

    #[test]
    fn self_subtraction_is_positive_zero(a in normal()) {
        let diff = &a - &a;
        prop_assert!(diff.is_zero());
        prop_assert!(!diff.is_negative());
    }

    #[test]
    fn sub_is_antisymmetric(a in normal(), b in normal()) {
        let ab = &a - &b;
        let ba = &b - &a;
        prop_assert!(ab.is_equal(&ba.neg()));
    }

    #[test]
    fn sub_is_add_of_negation(a in normal(), b in normal()) {
        prop_assert!((&a - &b).is_equal(&(&a + &b.neg())));
    }

    #[test]
    fn add_then_sub_restores(a in normal(), b in normal()) {
        let sum = &a + &b;
        prop_assert!((&sum - &b).is_equal(&a));
    }

    #[test]
    fn nan_absorbs(x in any_float()) {
        let n = nan();
        prop_assert!((&n + &x).is_nan());
        prop_assert!((&x + &n).is_nan());
        prop_assert!((&n - &x).is_nan());
        prop_assert!((&x - &n).is_nan());
        prop_assert!((&n * &x).is_nan());
        prop_assert!((&x * &n).is_nan());
        prop_assert!((&n / &x).is_nan());
        prop_assert!((&x / &n).is_nan());
    }

    #[test]
    fn nan_is_unordered(x in any_float()) {
        let n = nan();
        prop_assert!(!n.is_equal(&x) && !n.is_greater(&x) && !n.is_lower(&x));
        prop_assert!(!x.is_equal(&n) && !x.is_greater(&n) && !x.is_lower(&n));
    }

    #[test]
    fn order_is_total(a in any_float(), b in any_float()) {
        prop_assume!(!a.is_nan() && !b.is_nan());
        let relations = [a.is_equal(&b), a.is_greater(&b), a.is_lower(&b)];
        prop_assert_eq!(relations.iter().filter(|r| **r).count(), 1);
        prop_assert_eq!(a.is_greater(&b), b.is_lower(&a));
    }

    #[test]
    fn order_matches_difference(a in normal(), b in normal()) {
        let diff = &a - &b;
        if a.is_greater(&b) {
            prop_assert!(diff.is_normal() && !diff.is_negative());
        } else if a.is_lower(&b) {
            prop_assert!(diff.is_normal() && diff.is_negative());
        } else {
            prop_assert!(diff.is_zero());
        }
    }

    #[test]
    fn exact_division_inverts_multiplication(a in normal(), b in normal()) {
        let product = &a * &b;
        prop_assert!((&product / &b).is_equal(&a));
    }

    #[test]
    fn truncated_division_is_below(a in normal(), b in normal()) {
        let q = (&a / &b).abs();
        let back = &q * &b.abs();
        prop_assert!(!back.is_greater(&a.abs()));
    }

    #[test]
    fn sqrt_is_truncated_root(a in normal()) {
        let a = a.abs();
        let root = a.sqrt();
        prop_assert!(root.is_normal() && !root.is_negative());
        prop_assert!(!(&root * &root).is_greater(&a));
    }

    #[test]
    fn native_integers_round_trip(v in any::<i64>()) {
        let x = Float::from_i64(v);
        prop_assert_eq!(i64::try_from(&x), Ok(v));
    }

    #[test]
    fn native_addition_agrees(a in any::<i64>(), b in any::<i64>()) {
        let sum = &Float::from_i64(a) + &Float::from_i64(b);
        let expected = a as i128 + b as i128;
        let expected = if expected < 0 {
            Float::from_u128(expected.unsigned_abs()).neg()
        } else {
            Float::from_u128(expected as u128)
        };
        prop_assert!(sum.is_equal(&expected));
    }

    #[test]
    fn native_float_order_agrees(a in any::<f64>(), b in any::<f64>()) {
        let fa = Float::from_f64(a);
        let fb = Float::from_f64(b);
        prop_assert_eq!(fa.partial_cmp(&fb), a.partial_cmp(&b));
    }
}

#[test]
fn signed_zero_laws() {
    let p = Float::zero(Sign::Positive);
    let n = Float::zero(Sign::Negative);
    let sum = &p + &n;
    assert!(sum.is_zero() && !sum.is_negative());
    assert!(p.is_equal(&n));
}
