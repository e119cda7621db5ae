use std::fmt;

use rust_decimal::{Decimal, prelude::ToPrimitive};

use crate::EngineError;

/// Money amount represented as **integer cents**.
///
/// Use this type for **all** monetary values in the engine (transaction
/// amounts, summary columns) to avoid floating-point drift. Values enter and
/// leave the engine as [`Decimal`] and are rejected when they carry more than
/// two fractional digits.
///
/// # Examples
///
/// ```rust
/// use engine::MoneyCents;
/// use rust_decimal::Decimal;
///
/// let amount = MoneyCents::try_from(Decimal::new(7550, 2)).unwrap();
/// assert_eq!(amount.cents(), 7550);
/// assert_eq!(amount.to_string(), "75.50");
/// assert!(MoneyCents::try_from(Decimal::new(12345, 3)).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct MoneyCents(i64);

impl MoneyCents {
    pub const ZERO: MoneyCents = MoneyCents(0);

    /// Largest storable amount: 18 digits, two of them fractional.
    pub const MAX: MoneyCents = MoneyCents(999_999_999_999_999_999);

    /// Creates a new amount from integer cents.
    #[must_use]
    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    /// Returns the raw value in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Returns `true` if the amount is positive.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Checked addition (returns `None` on overflow).
    #[must_use]
    pub fn checked_add(self, rhs: MoneyCents) -> Option<MoneyCents> {
        self.0.checked_add(rhs.0).map(MoneyCents)
    }

    /// Checked subtraction (returns `None` on overflow).
    #[must_use]
    pub fn checked_sub(self, rhs: MoneyCents) -> Option<MoneyCents> {
        self.0.checked_sub(rhs.0).map(MoneyCents)
    }

    /// Exact decimal value with a scale of 2.
    #[must_use]
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, 2)
    }
}

impl fmt::Display for MoneyCents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let units = abs / 100;
        let cents = abs % 100;
        write!(f, "{sign}{units}.{cents:02}")
    }
}

impl From<MoneyCents> for i64 {
    fn from(value: MoneyCents) -> Self {
        value.0
    }
}

impl TryFrom<Decimal> for MoneyCents {
    type Error = EngineError;

    /// Validation rules:
    /// - max 2 fractional digits once trailing zeros are dropped (`12.340` is fine)
    /// - the value in cents must fit the storage range
    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value.normalize().scale() > 2 {
            return Err(EngineError::InvalidInput(
                "amount must have at most 2 decimal places".to_string(),
            ));
        }
        let cents = value
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|cents| cents.to_i64())
            .filter(|cents| cents.unsigned_abs() <= Self::MAX.0.unsigned_abs())
            .ok_or_else(|| EngineError::InvalidInput("amount too large".to_string()))?;
        Ok(MoneyCents(cents))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_two_decimals() {
        assert_eq!(MoneyCents::new(0).to_string(), "0.00");
        assert_eq!(MoneyCents::new(1).to_string(), "0.01");
        assert_eq!(MoneyCents::new(10).to_string(), "0.10");
        assert_eq!(MoneyCents::new(1050).to_string(), "10.50");
        assert_eq!(MoneyCents::new(-1050).to_string(), "-10.50");
    }

    #[test]
    fn decimal_conversion_is_exact() {
        let amount = MoneyCents::try_from(Decimal::new(7550, 2)).unwrap();
        assert_eq!(amount.cents(), 7550);
        assert_eq!(amount.to_decimal(), Decimal::new(7550, 2));

        let trailing_zero = MoneyCents::try_from(Decimal::new(12340, 3)).unwrap();
        assert_eq!(trailing_zero.cents(), 1234);

        let float_like: Decimal = "0.1".parse().unwrap();
        assert_eq!(MoneyCents::try_from(float_like).unwrap().cents(), 10);
    }

    #[test]
    fn decimal_conversion_rejects_more_than_two_decimals() {
        assert!(MoneyCents::try_from(Decimal::new(12345, 3)).is_err());
        assert!(MoneyCents::try_from(Decimal::new(1, 3)).is_err());
    }

    #[test]
    fn decimal_conversion_rejects_out_of_range() {
        let too_big: Decimal = "10000000000000000.00".parse().unwrap();
        assert!(MoneyCents::try_from(too_big).is_err());

        let max: Decimal = "9999999999999999.99".parse().unwrap();
        assert_eq!(MoneyCents::try_from(max).unwrap(), MoneyCents::MAX);
    }

    #[test]
    fn checked_arithmetic_reports_overflow() {
        assert_eq!(MoneyCents::new(i64::MAX).checked_add(MoneyCents::new(1)), None);
        assert_eq!(
            MoneyCents::new(100).checked_sub(MoneyCents::new(40)),
            Some(MoneyCents::new(60))
        );
    }
}
