//! This is a radix conversion library.
//! Radix conversion here means parsing a digit string written in one base and rendering
//! the same value as a digit string of another base.
//!
//! Four bases are supported: binary, octal, decimal and hexadecimal.
//! Both integer and fractional literals are accepted, e.g. `1A.8` in hexadecimal.
//!
//! ```
//! use radix_rs::{Base, Converter};
//! let conversion = Converter::new(Base::Decimal, Base::Binary).convert("10.5").unwrap();
//! assert_eq!("1010.1", conversion.output);
//! ```

mod base;
mod constants;
mod converter;
mod digit;
mod error;

pub use base::Base;
pub use constants::{ALPHABET, DEFAULT_MAX_FRACTION_DIGITS, MAX_DIGITS, MAX_HEX_DIGITS};
pub use converter::{parse, power, render, Conversion, Converter, Parsed};
pub use digit::{char_of, value_of};
pub use error::Error;
