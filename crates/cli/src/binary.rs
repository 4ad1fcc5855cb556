//! Decimal and binary conversions for the `to-binary` / `from-binary` commands.

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConversionError {
    #[error("binary input is empty")]
    Empty,
    #[error("invalid binary digit {digit:?} at position {position}")]
    InvalidDigit { digit: char, position: usize },
    #[error("binary value does not fit in 64 bits")]
    Overflow,
}

/// Base-2 digits of `n`, most significant first, without leading zeros.
pub fn decimal_to_binary(n: u64) -> String {
    format!("{n:b}")
}

/// Parse a string of `0`/`1` digits, most significant first.
///
/// Surrounding whitespace is ignored.
pub fn binary_to_decimal(bits: &str) -> Result<u64, ConversionError> {
    let bits = bits.trim();
    if bits.is_empty() {
        return Err(ConversionError::Empty);
    }

    bits.chars().enumerate().try_fold(0u64, |acc, (position, digit)| {
        let value = match digit {
            '0' => 0,
            '1' => 1,
            _ => return Err(ConversionError::InvalidDigit { digit, position }),
        };
        acc.checked_mul(2)
            .and_then(|shifted| shifted.checked_add(value))
            .ok_or(ConversionError::Overflow)
    })
}
