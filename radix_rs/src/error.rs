use crate::Base;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// `ch` (uppercased) is not a digit of `base`. `position` is the char index in the input.
    InvalidDigit{ch: char, base: Base, position: usize},
    /// `value` can't be written as a single digit (or digit string) of `base`.
    ValueOutOfRange{value: f64, base: Base},
    InvalidBase(u32),
    MultiplePoints(String),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidDigit{ch, ..}
                => write!(f, "Character '{}' is not valid in the given base.", ch),
            Error::ValueOutOfRange{value, base}
                => write!(f, "The value {} is invalid in base {}.", value, base.radix()),
            Error::InvalidBase(radix) => write!(f, "Invalid base: {}.", radix),
            Error::MultiplePoints(digits)
                => write!(f, "Value has more than one decimal point: {}.", digits),
        }
    }
}
