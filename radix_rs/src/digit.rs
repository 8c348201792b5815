//! Mapping between single digit characters and their values.

use crate::Base;
use crate::error::Error;

/// Returns the value of the digit `c` in `base`. Letters are case-insensitive.
/// `position` is only used to locate the character in the returned error.
///
/// # Example
/// ```
/// assert_eq!(Ok(10), radix_rs::value_of('a', radix_rs::Base::Hexadecimal, 0));
/// assert!(radix_rs::value_of('8', radix_rs::Base::Octal, 0).is_err());
/// ```
pub fn value_of(c: char, base: Base, position: usize) -> Result<u32, Error> {
    let upper = c.to_ascii_uppercase();
    return base.alphabet()
        .find(upper)
        .map(|i| i as u32)
        .ok_or(Error::InvalidDigit{ch: upper, base, position});
}

/// Returns the digit character whose value is `value` in `base`.
pub fn char_of(value: u32, base: Base) -> Result<char, Error> {
    if value >= base.radix() {
        return Err(Error::ValueOutOfRange{value: value as f64, base});
    }
    let i = value as usize;
    return Ok(base.alphabet().as_bytes()[i] as char);
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_value_of {
        ($name:ident, $c:expr, $base:expr, $expected:expr) => {
            #[test]
            fn $name() {
                assert_eq!($expected, value_of($c, $base, 0).ok());
            }
        };
    }

    test_value_of!(value_bin_0      , '0' , Base::Binary      , Some(0));
    test_value_of!(value_bin_1      , '1' , Base::Binary      , Some(1));
    test_value_of!(value_bin_2      , '2' , Base::Binary      , None);
    test_value_of!(value_oct_7      , '7' , Base::Octal       , Some(7));
    test_value_of!(value_oct_8      , '8' , Base::Octal       , None);
    test_value_of!(value_dec_9      , '9' , Base::Decimal     , Some(9));
    test_value_of!(value_dec_a      , 'A' , Base::Decimal     , None);
    test_value_of!(value_hex_a      , 'a' , Base::Hexadecimal , Some(10));
    test_value_of!(value_hex_f      , 'F' , Base::Hexadecimal , Some(15));
    test_value_of!(value_hex_g      , 'g' , Base::Hexadecimal , None);
    test_value_of!(value_hex_point  , '.' , Base::Hexadecimal , None);
    test_value_of!(value_non_ascii  , 'Ａ', Base::Hexadecimal , None);

    #[test]
    fn invalid_digit_is_uppercased() {
        let err = value_of('z', Base::Hexadecimal, 3).unwrap_err();
        assert_eq!(Error::InvalidDigit{ch: 'Z', base: Base::Hexadecimal, position: 3}, err);
        assert_eq!("Character 'Z' is not valid in the given base.", err.to_string());
    }

    #[test]
    fn char_of_every_digit() {
        for base in Base::ALL.iter() {
            for (v, c) in base.alphabet().chars().enumerate() {
                assert_eq!(Ok(c), char_of(v as u32, *base));
                assert_eq!(Ok(v as u32), value_of(c, *base, 0));
            }
        }
    }

    #[test]
    fn char_of_out_of_range() {
        assert!(char_of(2, Base::Binary).is_err());
        assert!(char_of(8, Base::Octal).is_err());
        assert!(char_of(16, Base::Hexadecimal).is_err());
        assert_eq!(Ok('F'), char_of(15, Base::Hexadecimal));
    }
}
