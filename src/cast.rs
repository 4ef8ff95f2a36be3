use super::error::ConversionError;
use super::float::{trim_trailing_limbs, Category, Float};
use super::magnitude::{Magnitude, LIMB_BITS};
use super::sign::Sign;

impl Float {
    /// Load the integer `val` into the float. The conversion is exact.
    pub fn from_u64(val: u64) -> Self {
        Self::new(Sign::Positive, 0, Magnitude::from_u64(val))
    }

    /// Load the integer `val` into the float. The conversion is exact.
    pub fn from_i64(val: i64) -> Self {
        let sign = Sign::from_negative(val < 0);
        Self::new(sign, 0, Magnitude::from_u64(val.unsigned_abs()))
    }

    /// Load the integer `val` into the float. The conversion is exact.
    pub fn from_u128(val: u128) -> Self {
        Self::new(Sign::Positive, 0, Magnitude::from_u128(val))
    }

    /// Load the native double `float` into the float. The conversion is
    /// exact, and preserves NaN, infinity and the sign of zero.
    pub fn from_f64(float: f64) -> Self {
        let sign = Sign::from_negative(float.is_sign_negative());
        if float.is_nan() {
            return Self::nan(sign);
        }
        if float.is_infinite() {
            return Self::inf(sign);
        }
        if float == 0.0 {
            return Self::zero(sign);
        }

        // Split the IEEE encoding to a 53-bit integer and a binary exponent.
        let bits = float.to_bits();
        let biased = ((bits >> 52) & 0x7ff) as i64;
        let frac = bits & ((1 << 52) - 1);
        let (mantissa, exp2) = if biased == 0 {
            (frac, -1074) // Denormal.
        } else {
            (frac | (1 << 52), biased - 1075)
        };

        // The float exponent counts limbs. Move the in-limb part of the binary
        // exponent into the mantissa.
        let limbs = exp2.div_euclid(LIMB_BITS as i64);
        let shift = exp2.rem_euclid(LIMB_BITS as i64) as u32;
        let mantissa = Magnitude::from_u128((mantissa as u128) << shift);
        let (mantissa, exp) = trim_trailing_limbs(mantissa, limbs as i128);
        Self::from_wide_exp(sign, exp, mantissa, Default::default())
    }

    /// Returns a value that is rounded to the nearest integer that's not
    /// larger in magnitude than this float.
    pub fn trunc(&self) -> Self {
        // Only handle normal numbers (don't do anything to NaN, Inf, Zero).
        if !self.is_normal() || self.get_exp() >= 0 {
            return self.clone();
        }

        let mut mantissa = self.get_mantissa().clone();
        let limbs = usize::try_from(self.get_exp().unsigned_abs());
        mantissa.shift_limbs_right(limbs.unwrap_or(usize::MAX));
        Self::new(self.get_sign(), 0, mantissa).with_status(self.get_status())
    }

    /// Returns the sign and the absolute value of the number as an integer,
    /// or an error if the number is not an integer.
    fn to_integer(&self) -> Result<(Sign, Magnitude), ConversionError> {
        match self.get_category() {
            Category::NaN => Err(ConversionError::NaN),
            Category::Infinity => Err(ConversionError::Infinite),
            Category::Zero => Ok((self.get_sign(), Magnitude::zero())),
            Category::Normal => {
                let whole = self.trunc();
                if !whole.is_equal(self) {
                    return Err(ConversionError::Fractional);
                }
                if whole.is_zero() {
                    return Ok((self.get_sign(), Magnitude::zero()));
                }
                // Anything at or above R^2 can't fit in the native types.
                let exp = whole.get_exp();
                if exp as i128 + whole.get_mantissa().limb_count() as i128 > 2 {
                    return Err(ConversionError::Overflow);
                }
                let mut mantissa = whole.get_mantissa().clone();
                mantissa.shift_limbs_left(exp as usize);
                Ok((whole.get_sign(), mantissa))
            }
        }
    }
}

impl From<u64> for Float {
    fn from(val: u64) -> Self {
        Self::from_u64(val)
    }
}

impl From<i64> for Float {
    fn from(val: i64) -> Self {
        Self::from_i64(val)
    }
}

impl From<u128> for Float {
    fn from(val: u128) -> Self {
        Self::from_u128(val)
    }
}

impl From<f64> for Float {
    fn from(val: f64) -> Self {
        Self::from_f64(val)
    }
}

impl TryFrom<&Float> for u64 {
    type Error = ConversionError;

    fn try_from(value: &Float) -> Result<Self, Self::Error> {
        let (sign, mantissa) = value.to_integer()?;
        if mantissa.is_zero() {
            return Ok(0);
        }
        if sign.is_negative() {
            return Err(ConversionError::Overflow);
        }
        mantissa.to_u64().ok_or(ConversionError::Overflow)
    }
}

impl TryFrom<&Float> for i64 {
    type Error = ConversionError;

    fn try_from(value: &Float) -> Result<Self, Self::Error> {
        let (sign, mantissa) = value.to_integer()?;
        let val = mantissa.to_u64().ok_or(ConversionError::Overflow)? as i128;
        let val = if sign.is_negative() { -val } else { val };
        i64::try_from(val).map_err(|_| ConversionError::Overflow)
    }
}

#[test]
fn test_from_integers() {
    let a = Float::from_u64(90210);
    assert!(a.is_normal() && !a.is_negative());
    assert_eq!(a.get_exp(), 0);
    assert_eq!(a.get_mantissa().to_u64(), Some(90210));

    assert!(Float::from_u64(0).is_zero());

    let b = Float::from_i64(-17);
    assert!(b.is_negative());
    assert_eq!(b.get_mantissa().to_u64(), Some(17));

    let c = Float::from_i64(i64::MIN);
    assert_eq!(c.get_mantissa().to_u64(), Some(1 << 63));

    let d = Float::from_u128(u128::MAX);
    assert_eq!(d.get_mantissa().to_u128(), Some(u128::MAX));
    assert_eq!(d.get_mantissa().limb_count(), 2);
}

#[test]
fn test_from_f64() {
    // Integers land at exponent zero.
    let a = Float::from_f64(8.0);
    assert!(a.is_equal(&Float::from_u64(8)));

    // 0.5 is 2^63 * R^-1.
    let h = Float::from_f64(0.5);
    assert_eq!(h.get_exp(), -1);
    assert_eq!(h.get_mantissa().to_u64(), Some(1 << 63));

    // -1.5 = -3/2.
    let x = Float::from_f64(-1.5);
    let y = Float::div_values(&Float::from_i64(-3), &Float::from_u64(2));
    assert!(x.is_equal(&y));

    // 2^64 is a single limb at exponent one.
    let r = Float::from_f64(18446744073709551616.0);
    assert_eq!(r.get_exp(), 1);
    assert_eq!(r.get_mantissa().to_u64(), Some(1));

    // Extreme values.
    let m = Float::from_f64(f64::MAX);
    assert!(m.is_normal());
    assert!(m.is_greater(&Float::from_u128(u128::MAX)));
    let tiny = Float::from_f64(f64::from_bits(1));
    assert!(tiny.is_normal());
    assert!(tiny.is_greater(&Float::zero(Sign::Positive)));
    assert!(tiny.is_lower(&Float::from_f64(f64::EPSILON)));
}

#[test]
fn test_from_f64_special_values() {
    assert!(Float::from_f64(f64::NAN).is_nan());
    let i = Float::from_f64(f64::NEG_INFINITY);
    assert!(i.is_inf() && i.is_negative());
    let z = Float::from_f64(-0.0);
    assert!(z.is_zero() && z.is_negative());
    let z = Float::from_f64(0.0);
    assert!(z.is_zero() && !z.is_negative());
}

#[test]
fn test_from_f64_preserves_order() {
    let values = [-1e300, -3.5, -1.0, -1e-300, 0.0, 1e-20, 0.1, 1.0, 1e19, 1e300];
    for a in values {
        for b in values {
            let fa = Float::from_f64(a);
            let fb = Float::from_f64(b);
            assert_eq!(fa.partial_cmp(&fb), a.partial_cmp(&b));
        }
    }
}

#[test]
fn test_trunc() {
    // 7.5 -> 7.
    let x = Float::from_f64(7.5);
    assert!(x.trunc().is_equal(&Float::from_u64(7)));

    // -0.25 -> -0.
    let x = Float::from_f64(-0.25).trunc();
    assert!(x.is_zero() && x.is_negative());

    // Integers and special values are unchanged.
    assert!(Float::from_u64(12).trunc().is_equal(&Float::from_u64(12)));
    assert!(Float::inf(Sign::Positive).trunc().is_inf());
    assert!(Float::nan(Sign::Positive).trunc().is_nan());
}

#[test]
fn test_to_integers() {
    assert_eq!(u64::try_from(&Float::from_u64(90210)), Ok(90210));
    assert_eq!(i64::try_from(&Float::from_i64(-90210)), Ok(-90210));
    assert_eq!(i64::try_from(&Float::from_i64(i64::MIN)), Ok(i64::MIN));
    assert_eq!(u64::try_from(&Float::zero(Sign::Negative)), Ok(0));

    // An integer written with a negative exponent.
    let x = Float::new(Sign::Positive, -1, Magnitude::from_parts(&[0, 7]));
    assert_eq!(u64::try_from(&x), Ok(7));

    let fails = |x: Float, e: ConversionError| {
        assert_eq!(u64::try_from(&x), Err(e));
        assert_eq!(i64::try_from(&x), Err(e));
    };
    fails(Float::nan(Sign::Positive), ConversionError::NaN);
    fails(Float::inf(Sign::Negative), ConversionError::Infinite);
    fails(Float::from_f64(2.5), ConversionError::Fractional);
    fails(Float::from_u128(1 << 64), ConversionError::Overflow);
    fails(Float::new(Sign::Positive, 3, Magnitude::one()), ConversionError::Overflow);

    assert_eq!(u64::try_from(&Float::from_i64(-1)), Err(ConversionError::Overflow));
    assert_eq!(
        i64::try_from(&Float::from_u64(u64::MAX)),
        Err(ConversionError::Overflow)
    );
}
