//! The sign of a float, kept apart from the magnitude so that zero and
//! infinity can carry a sign too.

use core::ops::Neg;

/// The polarity of a float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    pub const fn positive() -> Self {
        Sign::Positive
    }

    pub const fn negative() -> Self {
        Sign::Negative
    }

    /// Maps the "is negative" flag that native floats use to a sign.
    pub const fn from_negative(negative: bool) -> Self {
        if negative {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }

    pub const fn is_positive(self) -> bool {
        matches!(self, Sign::Positive)
    }

    pub const fn is_negative(self) -> bool {
        matches!(self, Sign::Negative)
    }

    /// Returns the opposite sign.
    pub const fn invert(self) -> Self {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }

    /// Returns the sign of a product or quotient of two numbers with the
    /// signs `a` and `b`: positive if they agree, negative otherwise.
    pub const fn product(a: Sign, b: Sign) -> Self {
        match (a, b) {
            (Sign::Positive, Sign::Positive)
            | (Sign::Negative, Sign::Negative) => Sign::Positive,
            (Sign::Positive, Sign::Negative)
            | (Sign::Negative, Sign::Positive) => Sign::Negative,
        }
    }
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        self.invert()
    }
}

#[test]
fn test_sign_algebra() {
    let p = Sign::positive();
    let n = Sign::negative();
    assert_ne!(p, n);
    assert!(p.is_positive() && !p.is_negative());
    assert!(n.is_negative() && !n.is_positive());
    assert_eq!(p.invert(), n);
    assert_eq!(p.invert().invert(), p);
    assert_eq!(-n, p);
    assert_eq!(Sign::default(), p);
    assert_eq!(Sign::from_negative(true), n);
    assert_eq!(Sign::from_negative(false), p);
}

#[test]
fn test_sign_product() {
    let p = Sign::Positive;
    let n = Sign::Negative;
    assert_eq!(Sign::product(p, p), p);
    assert_eq!(Sign::product(n, n), p);
    assert_eq!(Sign::product(p, n), n);
    assert_eq!(Sign::product(n, p), n);
}
