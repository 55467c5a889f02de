//! [`Price`]-related definitions.

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;

use crate::Percent;

/// Price of a product in a currency-agnostic decimal unit.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(try_from = "Decimal")
)]
pub struct Price(Decimal);

impl Price {
    /// Creates a new [`Price`] by checking the provided value is not
    /// negative.
    #[must_use]
    pub fn new(val: Decimal) -> Option<Self> {
        (val >= Decimal::ZERO).then_some(Self(val))
    }

    /// Returns the [`Price`] this one was before the provided discount was
    /// applied.
    ///
    /// [`None`] is returned when there is no discount to undo (zero), or the
    /// discount consumes the whole price (one hundred percent).
    #[must_use]
    pub fn before_discount(&self, discount: Percent) -> Option<Self> {
        let remainder = Decimal::ONE - discount.as_fraction();
        if discount.is_zero() || remainder.is_zero() {
            return None;
        }
        Some(Self((self.0 / remainder).round_dp(2)))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0.round_dp(2))
    }
}

impl FromStr for Price {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s)
            .ok()
            .and_then(Self::new)
            .ok_or("invalid price value")
    }
}

impl TryFrom<Decimal> for Price {
    type Error = String;

    fn try_from(val: Decimal) -> Result<Self, Self::Error> {
        Self::new(val).ok_or_else(|| format!("`{val}` is not a valid `Price`"))
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use super::{Percent, Price};

    fn price(s: &str) -> Price {
        s.parse().unwrap()
    }

    #[test]
    fn rejects_negative_values() {
        assert!(Price::from_str("0").is_ok());
        assert!(Price::from_str("9.99").is_ok());
        assert!(Price::from_str("-9.99").is_err());
    }

    #[test]
    fn displays_with_two_decimals() {
        assert_eq!(price("9.99").to_string(), "9.99");
        assert_eq!(price("1549").to_string(), "1549.00");
        assert_eq!(price("0.5").to_string(), "0.50");
    }

    #[test]
    fn undoes_discount() {
        let discounted = price("80");
        let discount = Percent::from_str("20").unwrap();

        assert_eq!(
            discounted.before_discount(discount),
            Some(price("100.00")),
        );
    }

    #[test]
    fn has_no_price_before_zero_or_full_discount() {
        assert_eq!(price("80").before_discount(Percent::ZERO), None);
        assert_eq!(
            price("80").before_discount(Percent::from_str("100").unwrap()),
            None,
        );
    }

    #[test]
    fn orders_by_amount() {
        assert!(price("9.99") < price("10"));
        assert!(price("10.00") == price("10"));
    }
}
