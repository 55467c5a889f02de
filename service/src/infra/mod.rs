//! Infrastructure layer.

pub mod catalog;

pub use self::catalog::{revalidate, upstream, Catalog, Revalidate, Upstream};
