//! [`Product`]-related read definitions.

#[cfg(doc)]
use crate::domain::Product;

pub mod list {
    //! [`Product`] list definitions.

    use serde::Deserialize;

    use crate::domain::{category, Product};

    /// Batch of [`Product`]s returned by a single upstream request.
    #[derive(Clone, Debug, Deserialize)]
    pub struct Batch {
        /// [`Product`]s of this [`Batch`], in upstream order.
        pub products: Vec<Product>,

        /// Total number of [`Product`]s the upstream holds for the selection.
        pub total: usize,

        /// Number of [`Product`]s skipped before this [`Batch`].
        pub skip: usize,

        /// Maximum number of [`Product`]s this [`Batch`] was limited to.
        pub limit: usize,
    }

    /// Selector of a [`Batch`].
    #[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
    pub struct Selector {
        /// [`category::Slug`] to narrow the selection to, if any.
        pub category: Option<category::Slug>,

        /// [`Slice`] of the upstream collection to select.
        pub slice: Slice,
    }

    /// Contiguous slice of the upstream collection.
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    pub struct Slice {
        /// Maximum number of items to return.
        pub limit: usize,

        /// Number of items to skip from the beginning.
        pub skip: usize,
    }

    impl Default for Slice {
        fn default() -> Self {
            Self {
                limit: 100,
                skip: 0,
            }
        }
    }
}
