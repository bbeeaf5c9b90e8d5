use crate::errors::{Field, ValidationError};

/// A submitted entry whose numeric fields have been parsed and truncated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInput {
    pub food: String,
    pub amount: u64,
    pub kcal_per_unit: u64,
}

impl EntryInput {
    /// Parses raw form text. Fractional parts are dropped, so `"12.9"` reads as `12`.
    pub fn parse(food: &str, amount: &str, kcal_per_unit: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            food: food.trim().to_string(),
            amount: parse_quantity(Field::Amount, amount)?,
            kcal_per_unit: parse_quantity(Field::KcalPerUnit, kcal_per_unit)?,
        })
    }

    /// Calories in hundredths: `amount * kcal_per_unit`, exact.
    pub fn centikcal(&self) -> u64 {
        self.amount.saturating_mul(self.kcal_per_unit)
    }
}

/// Accepts plain decimal text (`digits[.digits]`) only. Exponents, sign
/// prefixes and words like `inf` are not numbers here; a leading `-` on an
/// otherwise valid number is reported as out of range.
fn parse_quantity(field: Field, raw: &str) -> Result<u64, ValidationError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(ValidationError::Missing { field });
    }

    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if whole.is_empty() || !is_digits(whole) || !is_digits(fraction) {
        return Err(ValidationError::NotANumber {
            field,
            value: text.to_string(),
        });
    }
    if negative {
        return Err(ValidationError::OutOfRange { field });
    }

    match whole.parse::<u32>() {
        Ok(value) => Ok(u64::from(value)),
        Err(_) => Err(ValidationError::OutOfRange { field }),
    }
}
