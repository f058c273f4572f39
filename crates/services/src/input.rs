//! Parsing and validation of the two raw form fields.

use std::fmt;

use crate::error::InvalidInputError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Coins,
    Heads,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputField::Coins => write!(f, "coin flips"),
            InputField::Heads => write!(f, "heads"),
        }
    }
}

/// Form values that passed every check and can go straight to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedInput {
    pub coins: u32,
    pub heads: u32,
}

/// Read the leading base-10 integer of `raw`.
///
/// Leading whitespace and one optional sign are skipped, then digits are read
/// until the first non-digit, so `"10.0"` and `"4."` read as `10` and `4`.
/// Values beyond `i64` saturate; range checks happen later.
///
/// # Errors
///
/// Returns `InvalidInputError::NotAnInteger` when no digit follows the sign.
pub fn parse_integer(field: InputField, raw: &str) -> Result<i64, InvalidInputError> {
    let text = raw.trim_start();
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let digits_len = unsigned
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return Err(InvalidInputError::NotAnInteger {
            field,
            raw: raw.to_owned(),
        });
    }

    let value = unsigned[..digits_len]
        .bytes()
        .fold(0_i64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
        });
    Ok(if negative { -value } else { value })
}

/// Validate raw coin and head fields.
///
/// Checks run in order: both fields parse, `coins >= 1`, `heads >= 0`,
/// `heads <= coins`, and finally that both fit the engine's range.
///
/// # Errors
///
/// Returns the first `InvalidInputError` encountered.
pub fn validate_input(coins_raw: &str, heads_raw: &str) -> Result<ValidatedInput, InvalidInputError> {
    let coins = parse_integer(InputField::Coins, coins_raw)?;
    let heads = parse_integer(InputField::Heads, heads_raw)?;

    if coins < 1 {
        return Err(InvalidInputError::CoinsBelowOne { coins });
    }
    if heads < 0 {
        return Err(InvalidInputError::NegativeHeads { heads });
    }
    if heads > coins {
        return Err(InvalidInputError::HeadsExceedCoins { heads, coins });
    }

    let coins = u32::try_from(coins).map_err(|_| InvalidInputError::OutOfRange {
        field: InputField::Coins,
        value: coins,
    })?;
    // heads <= coins, so this cannot fail once coins fits.
    let heads = u32::try_from(heads).map_err(|_| InvalidInputError::OutOfRange {
        field: InputField::Heads,
        value: heads,
    })?;

    Ok(ValidatedInput { coins, heads })
}
