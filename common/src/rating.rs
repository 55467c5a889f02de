//! [`Rating`]-related definitions.

use std::{fmt, str::FromStr};

use rust_decimal::{prelude::ToPrimitive as _, Decimal};

/// Aggregate customer rating on a five-star scale.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(try_from = "Decimal")
)]
pub struct Rating(Decimal);

/// Number of stars a [`Rating`] is expressed in.
pub const MAX_STARS: u8 = 5;

impl Rating {
    /// Creates a new [`Rating`] by checking the provided value fits the
    /// five-star scale.
    #[must_use]
    pub fn new(val: Decimal) -> Option<Self> {
        (val >= Decimal::ZERO && val <= Decimal::from(MAX_STARS))
            .then_some(Self(val))
    }

    /// Returns the number of fully earned stars of this [`Rating`].
    #[expect(clippy::missing_panics_doc, reason = "bounds checked already")]
    #[must_use]
    pub fn stars(&self) -> u8 {
        self.0.floor().to_u8().expect("within the five-star scale")
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0.round_dp(1))
    }
}

impl FromStr for Rating {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s)
            .ok()
            .and_then(Self::new)
            .ok_or("invalid rating value")
    }
}

impl TryFrom<Decimal> for Rating {
    type Error = String;

    fn try_from(val: Decimal) -> Result<Self, Self::Error> {
        Self::new(val).ok_or_else(|| format!("`{val}` is not a valid `Rating`"))
    }
}
