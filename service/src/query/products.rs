//! [`Query`] collection related to the multiple [`Product`]s.

use common::operations::By;

use crate::read;
#[cfg(doc)]
use crate::{domain::Product, Query};

use super::CatalogQuery;

/// Queries a [`read::product::list::Batch`] of [`Product`]s.
pub type List = CatalogQuery<
    By<read::product::list::Batch, read::product::list::Selector>,
>;
