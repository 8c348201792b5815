use crate::constants;
use crate::error::Error;
use std::fmt;

/// Positional number bases supported by the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl Base {
    pub const ALL: [Base; 4] = [Base::Binary, Base::Octal, Base::Decimal, Base::Hexadecimal];

    pub fn radix(self: Self) -> u32 {
        return match self {
            Base::Binary => 2,
            Base::Octal => 8,
            Base::Decimal => 10,
            Base::Hexadecimal => 16,
        };
    }

    /// Returns the base whose radix is `radix`.
    ///
    /// # Example
    /// ```
    /// assert_eq!(radix_rs::Base::Octal, radix_rs::Base::from_radix(8).unwrap());
    /// assert!(radix_rs::Base::from_radix(3).is_err());
    /// ```
    pub fn from_radix(radix: u32) -> Result<Self, Error> {
        return Base::ALL.iter()
            .copied()
            .find(|b| b.radix() == radix)
            .ok_or(Error::InvalidBase(radix));
    }

    /// Command line flag letter of this base, e.g. `h` for `-h`.
    pub fn flag(self: Self) -> char {
        return match self {
            Base::Binary => 'b',
            Base::Octal => 'o',
            Base::Decimal => 'd',
            Base::Hexadecimal => 'h',
        };
    }

    /// Maps a command line flag letter (`h`, `d`, `o` or `b`, any case) to a base.
    pub fn from_flag(flag: char) -> Option<Self> {
        let flag = flag.to_ascii_lowercase();
        return Base::ALL.iter()
            .copied()
            .find(|b| b.flag() == flag);
    }

    /// Digits valid in this base, in ascending order of value.
    pub fn alphabet(self: Self) -> &'static str {
        return &constants::ALPHABET[..self.radix() as usize];
    }

    pub fn max_input_digits(self: Self) -> usize {
        if self == Base::Hexadecimal {
            return constants::MAX_HEX_DIGITS;
        }
        return constants::MAX_DIGITS;
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Base::Binary => "Binary",
            Base::Octal => "Octal",
            Base::Decimal => "Decimal",
            Base::Hexadecimal => "Hexadecimal",
        };
        return write!(f, "{}", name);
    }
}
