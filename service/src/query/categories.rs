//! [`Query`] collection related to [`Category`]s.

use common::operations::By;

use crate::domain::Category;
#[cfg(doc)]
use crate::Query;

use super::CatalogQuery;

/// Queries all the known [`Category`]s.
pub type List = CatalogQuery<By<Vec<Category>, ()>>;
