use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;

/// Currencies the bank gateway is configured for, with their minor-unit scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    /// Russian Ruble (100 kopecks)
    RUB,
}

impl Currency {
    /// Returns the decimal scale for this currency
    pub fn scale(&self) -> u32 {
        match self {
            Currency::RUB => 2,
        }
    }

    /// Validates that a major-unit amount is positive and representable
    /// in minor units without rounding
    pub fn validate_amount(&self, amount: Decimal) -> Result<(), String> {
        if amount <= Decimal::ZERO {
            return Err(format!("{} amount must be greater than 0", self));
        }

        let scale = amount.normalize().scale();
        let expected_scale = self.scale();

        if scale > expected_scale {
            return Err(format!(
                "{} amounts must have at most {} decimal places, got {}",
                self, expected_scale, scale
            ));
        }

        Ok(())
    }

    /// Converts a major-unit amount (rubles) to minor units (kopecks).
    ///
    /// Amounts with more fractional digits than the currency allows are
    /// rejected instead of rounded.
    pub fn to_minor_units(&self, amount: Decimal) -> Result<i64, String> {
        self.validate_amount(amount)?;

        let factor = Decimal::from(10_i64.pow(self.scale()));
        amount
            .checked_mul(factor)
            .and_then(|minor| minor.trunc().to_i64())
            .ok_or_else(|| format!("{} amount {} is too large", self, amount))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::RUB => write!(f, "RUB"),
        }
    }
}
