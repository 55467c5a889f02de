//! [`Stock`]-related definitions.

use std::fmt;

use derive_more::{Display, From, Into};

/// Number of units of a product left in stock.
#[derive(
    Clone, Copy, Debug, Display, Eq, From, Hash, Into, Ord, PartialEq,
    PartialOrd,
)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(transparent))]
pub struct Stock(u32);

/// Number of units below which a [`Stock`] is considered low.
pub const LOW_THRESHOLD: u32 = 10;

impl Stock {
    /// Returns [`Availability`] banding of this [`Stock`].
    #[must_use]
    pub fn availability(self) -> Availability {
        match self.0 {
            0 => Availability::OutOfStock,
            left if left < LOW_THRESHOLD => Availability::LowStock { left },
            _ => Availability::InStock,
        }
    }
}

/// Availability banding of a [`Stock`].
///
/// The single source of this banding: every render site derives its badge
/// from here.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Availability {
    /// No units left.
    OutOfStock,

    /// Less than [`LOW_THRESHOLD`] units left.
    LowStock {
        /// Number of units left.
        left: u32,
    },

    /// [`LOW_THRESHOLD`] or more units left.
    InStock,
}

impl Availability {
    /// Returns [`Tone`] of this [`Availability`].
    #[must_use]
    pub fn tone(&self) -> Tone {
        match self {
            Self::OutOfStock => Tone::Danger,
            Self::LowStock { .. } => Tone::Warning,
            Self::InStock => Tone::Success,
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfStock => write!(f, "Out of Stock"),
            Self::LowStock { left } => write!(f, "Low Stock ({left} left)"),
            Self::InStock => write!(f, "In Stock"),
        }
    }
}

/// Visual tone of an [`Availability`] badge.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Tone {
    /// Red.
    #[display("danger")]
    Danger,

    /// Orange.
    #[display("warning")]
    Warning,

    /// Green.
    #[display("success")]
    Success,
}

#[cfg(test)]
mod spec {
    use super::{Availability, Stock, Tone};

    #[test]
    fn bands_zero_as_out_of_stock() {
        let availability = Stock::from(0).availability();

        assert_eq!(availability, Availability::OutOfStock);
        assert_eq!(availability.to_string(), "Out of Stock");
        assert_eq!(availability.tone(), Tone::Danger);
    }

    #[test]
    fn bands_below_ten_as_low() {
        let availability = Stock::from(5).availability();

        assert_eq!(availability, Availability::LowStock { left: 5 });
        assert_eq!(availability.to_string(), "Low Stock (5 left)");
        assert_eq!(availability.tone(), Tone::Warning);

        assert_eq!(
            Stock::from(9).availability(),
            Availability::LowStock { left: 9 },
        );
    }

    #[test]
    fn bands_ten_and_above_as_in_stock() {
        for units in [10, 50] {
            let availability = Stock::from(units).availability();

            assert_eq!(availability, Availability::InStock);
            assert_eq!(availability.to_string(), "In Stock");
            assert_eq!(availability.tone(), Tone::Success);
        }
    }
}
