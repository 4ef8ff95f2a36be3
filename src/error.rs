//! Status tags carried by every float, and the errors of the fallible
//! conversions.

use thiserror::Error;

/// An advisory tag that travels with every float. Results that are one of the
/// operands keep that operand's status, and freshly computed results inherit
/// an `Error` from either input. Addition and subtraction also report
/// `Error` when the exponents are too far apart to align.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Ok,
    Error,
}

impl Status {
    pub fn is_ok(&self) -> bool {
        matches!(self, Status::Ok)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Status::Error)
    }

    /// Returns the status of a value computed from two inputs.
    pub fn combine(self, other: Status) -> Status {
        match (self, other) {
            (Status::Ok, Status::Ok) => Status::Ok,
            (Status::Error, _) | (_, Status::Error) => Status::Error,
        }
    }
}

/// Reports why a float could not be converted to a native integer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionError {
    #[error("cannot convert NaN to an integer")]
    NaN,

    #[error("cannot convert an infinite value to an integer")]
    Infinite,

    #[error("value has a fractional part")]
    Fractional,

    #[error("value does not fit in the target type")]
    Overflow,
}

#[test]
fn test_status_combine() {
    assert!(Status::default().is_ok());
    assert!(Status::Error.is_error());
    assert_eq!(Status::Ok.combine(Status::Ok), Status::Ok);
    assert_eq!(Status::Ok.combine(Status::Error), Status::Error);
    assert_eq!(Status::Error.combine(Status::Ok), Status::Error);
    assert_eq!(Status::Error.combine(Status::Error), Status::Error);
}
