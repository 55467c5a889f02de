//! [`Category`] definitions.

use std::str::FromStr;

use derive_more::{AsRef, Display};
use serde::Deserialize;

/// Category of products in the catalog.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq)]
pub struct Category {
    /// [`Slug`] identifying this [`Category`].
    pub slug: Slug,

    /// Human-readable [`Name`] of this [`Category`].
    pub name: Name,
}

/// Slug uniquely identifying a [`Category`].
#[derive(AsRef, Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
#[serde(try_from = "String")]
pub struct Slug(String);

impl Slug {
    /// Creates a new [`Slug`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `slug` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Creates a new [`Slug`] if the given `slug` is valid.
    #[must_use]
    pub fn new(slug: impl Into<String>) -> Option<Self> {
        let slug = slug.into();
        Self::check(&slug).then_some(Self(slug))
    }

    /// Checks whether the given `slug` is a valid [`Slug`].
    fn check(slug: impl AsRef<str>) -> bool {
        let slug = slug.as_ref();
        !slug.is_empty()
            && slug.len() <= 64
            && slug
                .bytes()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == b'-')
    }
}

impl FromStr for Slug {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Slug`")
    }
}

impl TryFrom<String> for Slug {
    type Error = &'static str;

    fn try_from(slug: String) -> Result<Self, Self::Error> {
        Self::new(slug).ok_or("invalid `Slug`")
    }
}

/// Human-readable name of a [`Category`].
#[derive(AsRef, Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
#[serde(try_from = "String")]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `name` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a new [`Name`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Name`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 128
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

impl TryFrom<String> for Name {
    type Error = &'static str;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::new(name).ok_or("invalid `Name`")
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use super::Slug;

    #[test]
    fn slug_accepts_lowercase_dashed_only() {
        assert!(Slug::from_str("beauty").is_ok());
        assert!(Slug::from_str("mens-shirts").is_ok());
        assert!(Slug::from_str("home-decoration-2").is_ok());

        assert!(Slug::from_str("").is_err());
        assert!(Slug::from_str("Beauty").is_err());
        assert!(Slug::from_str("mens shirts").is_err());
    }
}
