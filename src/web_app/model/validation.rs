// web_app/model/validation.rs - Turns a draft into an item or a reason why not
//
// Rules are checked in a fixed order and the first failure wins:
// name present, name unique, category chosen, price present and >= 0,
// and finally an id left to assign.

use std::str::FromStr;

use rust_decimal::Decimal;

use super::store::next_id;
use super::{Draft, Item};

/// Why a draft was rejected. `Display` is the message shown under the table.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Item name must not be empty")]
    EmptyName,
    #[error("Item must not be duplicated")]
    DuplicateName,
    #[error("Please select a category")]
    MissingCategory,
    #[error("Price must not be less than 0")]
    NegativePrice,
    #[error("Price must be a valid number")]
    InvalidPrice,
    #[error("Price is too large")]
    PriceTooLarge,
    #[error("No item id is left to assign")]
    IdsExhausted,
}

/// Validate `draft` against the items already listed.
///
/// On success the returned item has a trimmed name and the next free id;
/// nothing is added anywhere.
pub fn validate(draft: &Draft, items: &[Item]) -> Result<Item, ValidationError> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    if items.iter().any(|item| item.has_name(name)) {
        return Err(ValidationError::DuplicateName);
    }

    let category = draft.category.ok_or(ValidationError::MissingCategory)?;
    let price = parse_price(&draft.price)?;
    let id = next_id(items).ok_or(ValidationError::IdsExhausted)?;

    Ok(Item {
        id,
        name: name.to_string(),
        category,
        price,
    })
}

/// Parse the price field.
///
/// Accepts what a number input sends: an optional sign, digits with at most
/// one decimal point, and an optional `e`/`E` exponent. Values below
/// `Decimal`'s smallest step round to 0; values above its range are
/// reported as too large.
pub fn parse_price(raw: &str) -> Result<Decimal, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::NegativePrice);
    }

    let number = PriceText::parse(raw).ok_or(ValidationError::InvalidPrice)?;
    if number.negative && !number.is_zero() {
        return Err(ValidationError::NegativePrice);
    }

    number.to_decimal()
}

/// Most fractional digits a `Decimal` can hold
const MAX_SCALE: i64 = 28;

/// Most integer digits a `Decimal` can hold
const MAX_INTEGER_DIGITS: i64 = 29;

/// A price split into its syntactic parts, digits not yet interpreted
#[derive(Debug, PartialEq, Eq)]
struct PriceText<'a> {
    negative: bool,
    integer: &'a str,
    fraction: &'a str,
    exponent: i64,
}

impl<'a> PriceText<'a> {
    fn parse(raw: &'a str) -> Option<Self> {
        let (negative, unsigned) = split_sign(raw);
        let (mantissa, exponent) = match unsigned.find(|c: char| c == 'e' || c == 'E') {
            Some(at) => (&unsigned[..at], Some(&unsigned[at + 1..])),
            None => (unsigned, None),
        };

        let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        if integer.is_empty() && fraction.is_empty() {
            return None;
        }
        if !all_digits(integer) || !all_digits(fraction) {
            return None;
        }

        let exponent = match exponent {
            Some(text) => parse_exponent(text)?,
            None => 0,
        };

        Some(Self {
            negative,
            integer,
            fraction,
            exponent,
        })
    }

    fn is_zero(&self) -> bool {
        self.integer.bytes().chain(self.fraction.bytes()).all(|b| b == b'0')
    }

    fn to_decimal(&self) -> Result<Decimal, ValidationError> {
        if self.is_zero() {
            return Ok(Decimal::ZERO);
        }

        // value = digits * 10^power, with no leading or trailing zeros in digits
        let mut digits = format!("{}{}", self.integer, self.fraction);
        let mut power = self.exponent.saturating_sub(self.fraction.len() as i64);
        let trimmed = digits.trim_end_matches('0').len();
        power = power.saturating_add((digits.len() - trimmed) as i64);
        digits.truncate(trimmed);
        let digits = digits.trim_start_matches('0');
        let len = digits.len() as i64;

        let integer_digits = len.saturating_add(power);
        if integer_digits > MAX_INTEGER_DIGITS {
            return Err(ValidationError::PriceTooLarge);
        }
        if integer_digits < -MAX_SCALE {
            return Ok(Decimal::ZERO);
        }

        let plain = if power >= 0 {
            format!("{}{}", digits, "0".repeat(power as usize))
        } else if integer_digits > 0 {
            let (whole, fraction) = digits.split_at(integer_digits as usize);
            format!("{}.{}", whole, fraction)
        } else {
            format!("0.{}{}", "0".repeat(integer_digits.unsigned_abs() as usize), digits)
        };

        // Only the integer part can overflow; surplus fraction digits are rounded
        let price = Decimal::from_str(&plain).map_err(|_| ValidationError::PriceTooLarge)?;
        Ok(if price.is_zero() { Decimal::ZERO } else { price })
    }
}

fn split_sign(raw: &str) -> (bool, &str) {
    if let Some(rest) = raw.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = raw.strip_prefix('+') {
        (false, rest)
    } else {
        (false, raw)
    }
}

fn all_digits(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}

fn parse_exponent(text: &str) -> Option<i64> {
    let (negative, digits) = split_sign(text);
    if digits.is_empty() || !all_digits(digits) {
        return None;
    }
    // All digits, so parsing only fails on overflow; such exponents saturate
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
