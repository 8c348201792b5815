//! Parsing digit strings into values and rendering values as digit strings.

use crate::Base;
use crate::constants;
use crate::digit;
use crate::error::Error;

/// Result of `parse()`.
/// Invalid characters don't stop parsing. They count as zero and are collected in `invalid_digits`.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    pub value: f64,
    pub invalid_digits: Vec<Error>,
}

/// Result of `Converter::convert()`.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub output: String,
    pub invalid_digits: Vec<Error>,
}

/// Converts digit strings from a source base to a destination base.
pub struct Converter {
    src: Base,
    dst: Base,
    max_fraction_digits: usize,
}

impl Converter {

    /// Creates a new `Converter`.
    /// At most 8 fractional digits are rendered by default.
    ///
    /// # Example
    /// ```
    /// let converter = radix_rs::Converter::new(
    ///     radix_rs::Base::Hexadecimal,
    ///     radix_rs::Base::Decimal,
    ///     );
    /// assert_eq!("26", converter.convert("1A").unwrap().output);
    /// ```
    pub fn new(src: Base, dst: Base) -> Self {
        return Converter {
            src,
            dst,
            max_fraction_digits: constants::DEFAULT_MAX_FRACTION_DIGITS,
        };
    }

    /// Sets the maximum number of fractional digits to render.
    /// Fractions that don't terminate within this many digits are truncated.
    pub fn max_fraction_digits(mut self: Self, num: usize) -> Self {
        self.max_fraction_digits = num;
        return self;
    }

    pub fn convert(self: &Self, digits: &str) -> Result<Conversion, Error> {
        let Parsed{ value, invalid_digits } = parse(digits, self.src)?;
        let output = render(value, self.dst, self.max_fraction_digits)?;
        return Ok(Conversion { output, invalid_digits });
    }
}

/// Parses `digits` written in `base`. A single `.` separates the integer part from the fraction.
pub fn parse(digits: &str, base: Base) -> Result<Parsed, Error> {
    let mut parts = digits.split('.');
    let integer_part = parts.next().unwrap_or("");
    let fraction_part = parts.next().unwrap_or("");
    if parts.next().is_some() {
        return Err(Error::MultiplePoints(digits.into()));
    }

    let mut invalid_digits = Vec::new();
    let integer = accumulate(integer_part, base, 0, &mut invalid_digits);
    let fraction_offset = integer_part.chars().count() + 1;
    let mantissa = accumulate(fraction_part, base, fraction_offset, &mut invalid_digits);
    let fraction_len = fraction_part.chars().count() as i32;
    let value = integer + mantissa / power(base.radix(), fraction_len);
    return Ok(Parsed { value, invalid_digits });
}

// Horner accumulation of a run of digits, as if it were an integer.
fn accumulate(digits: &str, base: Base, offset: usize, invalid_digits: &mut Vec<Error>) -> f64 {
    let radix = base.radix() as f64;
    let mut sum = 0.0;
    for (i, c) in digits.chars().enumerate() {
        let value = match digit::value_of(c, base, offset + i) {
            Ok(v) => v,
            Err(err) => {
                invalid_digits.push(err);
                0
            },
        };
        sum = sum * radix + value as f64;
    }
    return sum;
}

/// Renders `value` as a digit string of `base`.
/// The fraction is rendered by repeated multiplication until the residue is zero within the
/// floating point error of `value`, or `max_fraction_digits` digits are written.
/// Fractions that don't terminate are truncated.
///
/// # Example
/// ```
/// assert_eq!("1010.1", radix_rs::render(10.5, radix_rs::Base::Binary, 8).unwrap());
/// assert_eq!("0.0001", radix_rs::render(0.1, radix_rs::Base::Binary, 4).unwrap());
/// assert_eq!("12.34", radix_rs::render(12.34, radix_rs::Base::Decimal, 8).unwrap());
/// ```
pub fn render(value: f64, base: Base, max_fraction_digits: usize) -> Result<String, Error> {
    if !value.is_finite() || value < 0.0 || value >= u64::MAX as f64 {
        return Err(Error::ValueOutOfRange{value, base});
    }
    let radix = base.radix() as u64;
    let (mut integer, fraction) = fraction_digits(value, base.radix(), max_fraction_digits);

    let mut digits = Vec::new();
    loop {
        digits.push(digit::char_of((integer % radix) as u32, base)?);
        integer /= radix;
        if integer == 0 {
            break;
        }
    }
    digits.reverse();
    let mut output: String = digits.into_iter().collect();

    if fraction.is_empty() {
        return Ok(output);
    }
    output.push('.');
    for value in fraction {
        output.push(digit::char_of(value, base)?);
    }
    return Ok(output);
}

// Splits `value` into its integer part and fractional digit values, most significant first.
// `tolerance` bounds the error `value` carries, scaled along with the residue. A residue within
// it of zero ends the fraction and one within it of a whole unit is carried into the last digit.
fn fraction_digits(value: f64, radix: u32, max_digits: usize) -> (u64, Vec<u32>) {
    let mut integer = value.trunc() as u64;
    let mut digits: Vec<u32> = Vec::new();
    let mut residue = value.fract();
    let mut tolerance = 2.0 * value.max(1.0) * f64::EPSILON;
    let mut carry = residue >= 1.0 - tolerance;
    while ! carry && residue > tolerance && digits.len() < max_digits {
        residue *= radix as f64;
        tolerance = (tolerance + f64::EPSILON) * radix as f64;
        let digit = residue.trunc();
        digits.push(digit as u32);
        residue -= digit;
        carry = residue >= 1.0 - tolerance;
    }
    if carry {
        loop {
            match digits.last_mut() {
                Some(d) if *d + 1 == radix => {
                    digits.pop();
                },
                Some(d) => {
                    *d += 1;
                    break;
                },
                None => {
                    integer += 1;
                    break;
                },
            }
        }
    }
    return (integer, digits);
}

/// Calculates `radix` raised to `exponent`. Negative exponents are supported.
///
/// # Example
/// ```
/// assert_eq!(256.0, radix_rs::power(16, 2));
/// assert_eq!(0.125, radix_rs::power(2, -3));
/// assert_eq!(1.0, radix_rs::power(10, 0));
/// ```
pub fn power(radix: u32, exponent: i32) -> f64 {
    let mut product = 1.0;
    for _ in 0..exponent.unsigned_abs() {
        product *= radix as f64;
    }
    if exponent < 0 {
        return 1.0 / product;
    }
    return product;
}
