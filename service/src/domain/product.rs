//! [`Product`] definitions.

use common::{Percent, Price, Rating, Stock};
use derive_more::{AsRef, Display, From, FromStr, Into};
use serde::Deserialize;

use super::category;

/// Product of the catalog.
///
/// Immutable once fetched: owned by the page render that fetched it and never
/// persisted.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Product {
    /// ID of this [`Product`].
    pub id: Id,

    /// [`Title`] of this [`Product`].
    pub title: Title,

    /// [`Description`] of this [`Product`].
    pub description: Description,

    /// [`category::Slug`] this [`Product`] belongs to.
    pub category: category::Slug,

    /// [`Price`] of this [`Product`].
    pub price: Price,

    /// Discount applied to the [`Price`] of this [`Product`].
    #[serde(rename = "discountPercentage")]
    pub discount: Percent,

    /// [`Rating`] of this [`Product`].
    pub rating: Rating,

    /// Number of units of this [`Product`] left in [`Stock`].
    pub stock: Stock,

    /// [`Brand`] of this [`Product`], if it has one.
    #[serde(default)]
    pub brand: Option<Brand>,

    /// Thumbnail image of this [`Product`].
    pub thumbnail: ImageUrl,

    /// Gallery images of this [`Product`], in display order.
    #[serde(default)]
    pub images: Vec<ImageUrl>,
}

/// ID of a [`Product`], assigned by the upstream catalog.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
)]
pub struct Id(u64);

/// Title of a [`Product`].
#[derive(AsRef, Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
#[serde(try_from = "String")]
pub struct Title(String);

impl Title {
    /// Creates a new [`Title`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `title` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    /// Creates a new [`Title`] if the given `title` is valid.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Option<Self> {
        let title = title.into();
        Self::check(&title).then_some(Self(title))
    }

    /// Checks whether the given `title` is a valid [`Title`].
    fn check(title: impl AsRef<str>) -> bool {
        let title = title.as_ref();
        title.trim() == title && !title.is_empty() && title.len() <= 256
    }
}

impl std::str::FromStr for Title {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Title`")
    }
}

impl TryFrom<String> for Title {
    type Error = &'static str;

    fn try_from(title: String) -> Result<Self, Self::Error> {
        Self::new(title).ok_or("invalid `Title`")
    }
}

/// Description of a [`Product`].
#[derive(AsRef, Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
#[serde(try_from = "String")]
pub struct Description(String);

impl Description {
    /// Creates a new [`Description`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `description` matches the
    /// format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(description: impl Into<String>) -> Self {
        Self(description.into())
    }

    /// Creates a new [`Description`] if the given `description` is valid.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Option<Self> {
        let description = description.into();
        Self::check(&description).then_some(Self(description))
    }

    /// Checks whether the given `description` is a valid [`Description`].
    fn check(description: impl AsRef<str>) -> bool {
        let description = description.as_ref();
        !description.is_empty() && description.len() <= 4096
    }
}

impl TryFrom<String> for Description {
    type Error = &'static str;

    fn try_from(description: String) -> Result<Self, Self::Error> {
        Self::new(description).ok_or("invalid `Description`")
    }
}

/// Brand of a [`Product`].
#[derive(AsRef, Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
#[serde(try_from = "String")]
pub struct Brand(String);

impl Brand {
    /// Creates a new [`Brand`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `brand` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(brand: impl Into<String>) -> Self {
        Self(brand.into())
    }

    /// Creates a new [`Brand`] if the given `brand` is valid.
    #[must_use]
    pub fn new(brand: impl Into<String>) -> Option<Self> {
        let brand = brand.into();
        Self::check(&brand).then_some(Self(brand))
    }

    /// Checks whether the given `brand` is a valid [`Brand`].
    fn check(brand: impl AsRef<str>) -> bool {
        let brand = brand.as_ref();
        brand.trim() == brand && !brand.is_empty() && brand.len() <= 128
    }
}

impl TryFrom<String> for Brand {
    type Error = &'static str;

    fn try_from(brand: String) -> Result<Self, Self::Error> {
        Self::new(brand).ok_or("invalid `Brand`")
    }
}

/// URL of a [`Product`] image.
#[derive(AsRef, Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
#[serde(try_from = "String")]
pub struct ImageUrl(String);

impl ImageUrl {
    /// Creates a new [`ImageUrl`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `url` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Creates a new [`ImageUrl`] if the given `url` is valid.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Option<Self> {
        let url = url.into();
        Self::check(&url).then_some(Self(url))
    }

    /// Checks whether the given `url` is a valid [`ImageUrl`].
    fn check(url: impl AsRef<str>) -> bool {
        let url = url.as_ref();
        !url.is_empty()
            && url.len() <= 2048
            && !url.bytes().any(|c| c.is_ascii_whitespace() || c.is_ascii_control())
    }
}

impl TryFrom<String> for ImageUrl {
    type Error = &'static str;

    fn try_from(url: String) -> Result<Self, Self::Error> {
        Self::new(url).ok_or("invalid `ImageUrl`")
    }
}
