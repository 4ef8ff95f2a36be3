use super::error::Status;
use super::magnitude::Magnitude;
use super::sign::Sign;

/// Declare the different categories of the floating point number. These
/// categories are internal to the float, and can be accessed by the accessors:
/// is_inf, is_zero, is_nan, is_normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Infinity,
    NaN,
    Normal,
    Zero,
}

/// Defines how many digits the inexact operations (division and square root)
/// keep. The precision is counted in limbs, the radix-2^64 digits of the
/// mantissa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precision {
    limbs: usize,
}

impl Precision {
    pub const fn new(limbs: usize) -> Self {
        Precision { limbs }
    }
    /// Returns the number of extra limbs that are kept.
    pub fn get_limbs(&self) -> usize {
        self.limbs
    }
}

impl Default for Precision {
    fn default() -> Self {
        DEFAULT_PRECISION
    }
}

/// The precision that the `/` operator and `Float::sqrt` use.
pub const DEFAULT_PRECISION: Precision = Precision::new(2);

/// The largest distance between two exponents, in limbs, that addition and
/// subtraction will bridge. The gap is written out as zero limbs, so operands
/// that are further apart evaluate to NaN with an `Error` status.
pub const MAX_EXPONENT_GAP: usize = 1 << 24;

/// This is the main data structure of this library. It represents an
/// arbitrary-precision floating-point number as a scaled integer:
/// sign * mantissa * 2^(64 * exp). The mantissa is never rounded by addition,
/// subtraction or multiplication.
///
/// Floats are values: every operation returns a new float and leaves its
/// inputs untouched.
#[derive(Debug, Clone)]
pub struct Float {
    // The sign. Zero and infinity are signed too.
    sign: Sign,
    // The exponent, counted in limbs.
    exp: i64,
    // The significand, in canonical form. Only meaningful for normal numbers.
    mantissa: Magnitude,
    // The kind of number this float represents.
    category: Category,
    // Advisory status that is forwarded by the arithmetic.
    status: Status,
}

impl Float {
    /// Create a new normal floating point number. A zero mantissa creates a
    /// zero.
    pub fn new(sign: Sign, exp: i64, mantissa: Magnitude) -> Self {
        if mantissa.is_zero() {
            return Float::zero(sign);
        }
        Float {
            sign,
            exp,
            mantissa,
            category: Category::Normal,
            status: Status::Ok,
        }
    }

    /// Create a float from its raw parts, without any normalization.
    pub fn raw(
        sign: Sign,
        exp: i64,
        mantissa: Magnitude,
        category: Category,
        status: Status,
    ) -> Self {
        Float {
            sign,
            exp,
            mantissa,
            category,
            status,
        }
    }

    /// Returns a new zero float.
    pub fn zero(sign: Sign) -> Self {
        Self::special(Category::Zero, sign)
    }

    /// Returns a new float with the value one.
    pub fn one(sign: Sign) -> Self {
        Self::new(sign, 0, Magnitude::one())
    }

    /// Returns a new infinity float.
    pub fn inf(sign: Sign) -> Self {
        Self::special(Category::Infinity, sign)
    }

    /// Returns a new NaN float.
    pub fn nan(sign: Sign) -> Self {
        Self::special(Category::NaN, sign)
    }

    fn special(category: Category, sign: Sign) -> Self {
        Float {
            sign,
            exp: 0,
            mantissa: Magnitude::zero(),
            category,
            status: Status::Ok,
        }
    }

    /// Returns this float, carrying the status `status`.
    pub fn with_status(self, status: Status) -> Self {
        Float { status, ..self }
    }

    /// Returns true if the Float is negative
    pub fn is_negative(&self) -> bool {
        self.sign.is_negative()
    }

    /// Returns true if the Float is +-inf.
    pub fn is_inf(&self) -> bool {
        matches!(self.category, Category::Infinity)
    }

    /// Returns true if the Float is a +- NaN.
    pub fn is_nan(&self) -> bool {
        matches!(self.category, Category::NaN)
    }

    /// Returns true if the Float is a +- zero.
    pub fn is_zero(&self) -> bool {
        matches!(self.category, Category::Zero)
    }

    /// Returns true if this number is normal (not Zero, Nan, Inf).
    pub fn is_normal(&self) -> bool {
        matches!(self.category, Category::Normal)
    }

    /// Returns true if this number is Zero, Nan or Inf. The mantissa and the
    /// exponent of such numbers carry no value.
    pub fn is_special(&self) -> bool {
        !self.is_normal()
    }

    /// Returns the sign of the float.
    pub fn get_sign(&self) -> Sign {
        self.sign
    }

    /// Returns the mantissa of the float.
    pub fn get_mantissa(&self) -> &Magnitude {
        &self.mantissa
    }

    /// Returns the exponent of the float, in limbs.
    pub fn get_exp(&self) -> i64 {
        self.exp
    }

    /// Returns the category of the float.
    pub fn get_category(&self) -> Category {
        self.category
    }

    /// Returns the status of the float.
    pub fn get_status(&self) -> Status {
        self.status
    }

    /// Returns the exponent plus the number of limbs in the mantissa. For
    /// normal numbers the absolute value lies in
    /// [2^(64*(order-1)), 2^(64*order)), so two normal numbers with different
    /// orders of magnitude are ordered by this number alone.
    pub fn order_of_magnitude(&self) -> i128 {
        self.exp as i128 + self.mantissa.limb_count() as i128
    }

    /// Returns a new float which has a flipped sign (negated value).
    pub fn neg(&self) -> Self {
        Self::raw(
            self.sign.invert(),
            self.exp,
            self.mantissa.clone(),
            self.category,
            self.status,
        )
    }

    /// Creates a normal number from a mantissa and an exponent that was
    /// computed in a wider type. Exponents that don't fit become infinity
    /// (too large) or zero (too small), and a zero mantissa becomes zero.
    pub(crate) fn from_wide_exp(
        sign: Sign,
        exp: i128,
        mantissa: Magnitude,
        status: Status,
    ) -> Self {
        if mantissa.is_zero() {
            return Self::zero(sign).with_status(status);
        }
        match i64::try_from(exp) {
            Ok(exp) => Self::new(sign, exp, mantissa).with_status(status),
            Err(_) if exp > 0 => {
                tracing::debug!(%exp, "exponent overflow");
                Self::inf(sign).with_status(status)
            }
            Err(_) => {
                tracing::debug!(%exp, "exponent underflow");
                Self::zero(sign).with_status(status)
            }
        }
    }

    /// Prints the number using the internal representation.
    #[cfg(feature = "std")]
    pub fn dump(&self) {
        use std::println;
        let sign = if self.is_negative() { "-" } else { "+" };
        match self.category {
            Category::NaN => {
                println!("[{}NaN]", sign);
            }
            Category::Infinity => {
                println!("[{}Inf]", sign);
            }
            Category::Zero => {
                println!("[{}0.0]", sign);
            }
            Category::Normal => {
                let m = self.mantissa.as_decimal();
                println!("FP[{} E={:4} M = {}]", sign, self.exp, m.as_str());
            }
        }
    }
}

/// Moves the zero limbs at the bottom of `mantissa` into the exponent.
pub(crate) fn trim_trailing_limbs(
    mut mantissa: Magnitude,
    exp: i128,
) -> (Magnitude, i128) {
    let zeros = mantissa.trailing_zero_limbs();
    mantissa.shift_limbs_right(zeros);
    (mantissa, exp + zeros as i128)
}

impl Default for Float {
    fn default() -> Self {
        Self::zero(Sign::Positive)
    }
}

#[test]
fn test_special_constructors() {
    let z = Float::zero(Sign::Negative);
    assert!(z.is_zero() && z.is_special() && z.is_negative());
    assert!(z.get_mantissa().is_zero());
    assert_eq!(z.get_exp(), 0);
    assert!(z.get_status().is_ok());

    let i = Float::inf(Sign::Positive);
    assert!(i.is_inf() && i.is_special() && !i.is_negative());

    let n = Float::nan(Sign::Positive).with_status(Status::Error);
    assert!(n.is_nan() && n.is_special());
    assert!(n.get_status().is_error());

    let d = Float::default();
    assert!(d.is_zero() && !d.is_negative());
}

#[test]
fn test_new_retags_zero() {
    let x = Float::new(Sign::Negative, 7, Magnitude::zero());
    assert!(x.is_zero());
    assert!(x.is_negative());

    let y = Float::new(Sign::Positive, -3, Magnitude::from_u64(9));
    assert!(y.is_normal() && !y.is_special());
    assert_eq!(y.get_exp(), -3);
    assert_eq!(y.get_mantissa().to_u64(), Some(9));
    assert_eq!(y.get_category(), Category::Normal);
}

#[test]
fn test_order_of_magnitude() {
    let a = Float::new(Sign::Positive, 5, Magnitude::from_u64(50));
    assert_eq!(a.order_of_magnitude(), 6);

    let b = Float::new(Sign::Negative, -2, Magnitude::from_parts(&[1, 2, 3]));
    assert_eq!(b.order_of_magnitude(), 1);

    // Extreme exponents don't overflow.
    let c = Float::new(Sign::Positive, i64::MAX, Magnitude::from_u128(1 << 70));
    assert_eq!(c.order_of_magnitude(), i64::MAX as i128 + 2);
}

#[test]
fn test_neg_keeps_fields() {
    let a = Float::new(Sign::Positive, 4, Magnitude::from_u64(11))
        .with_status(Status::Error);
    let b = a.neg();
    assert!(b.is_negative());
    assert_eq!(b.get_exp(), 4);
    assert_eq!(b.get_mantissa(), a.get_mantissa());
    assert_eq!(b.get_category(), Category::Normal);
    assert!(b.get_status().is_error());
    assert!(!b.neg().is_negative());

    assert!(Float::zero(Sign::Positive).neg().is_negative());
    assert!(Float::inf(Sign::Negative).neg().get_sign().is_positive());
}

#[test]
fn test_wide_exponents() {
    let m = Magnitude::from_u64(3);
    let big = Float::from_wide_exp(
        Sign::Negative,
        i64::MAX as i128 + 1,
        m.clone(),
        Status::Ok,
    );
    assert!(big.is_inf() && big.is_negative());

    let small =
        Float::from_wide_exp(Sign::Positive, i64::MIN as i128 - 1, m.clone(), Status::Error);
    assert!(small.is_zero() && !small.is_negative());
    assert!(small.get_status().is_error());

    let fits = Float::from_wide_exp(Sign::Positive, -12, m, Status::Ok);
    assert!(fits.is_normal());
    assert_eq!(fits.get_exp(), -12);
}

#[test]
fn test_trim_trailing_limbs() {
    let (m, e) = trim_trailing_limbs(Magnitude::from_parts(&[0, 0, 5]), -4);
    assert_eq!(m.to_u64(), Some(5));
    assert_eq!(e, -2);

    let (m, e) = trim_trailing_limbs(Magnitude::from_u64(5), 1);
    assert_eq!(m.to_u64(), Some(5));
    assert_eq!(e, 1);
}

#[test]
fn test_precision_config() {
    let p = Precision::default();
    assert_eq!(p, DEFAULT_PRECISION);
    assert_eq!(p.get_limbs(), 2);
    assert_eq!(Precision::new(7).get_limbs(), 7);
}
