/// Digits of every supported base. A base uses the first `radix` characters.
pub const ALPHABET: &str = "0123456789ABCDEF";

/// Maximum number of digits accepted as input, decimal point excluded.
pub const MAX_DIGITS: usize = 8;
/// Same as `MAX_DIGITS` but for hexadecimal input.
pub const MAX_HEX_DIGITS: usize = 4;

/// Fractional digits rendered at most, unless the residue reaches zero earlier.
pub const DEFAULT_MAX_FRACTION_DIGITS: usize = 8;
