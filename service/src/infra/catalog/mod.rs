//! [`Catalog`]-related implementations.

pub mod revalidate;
pub mod upstream;

use derive_more::{Display, Error as StdError, From};

pub use self::{revalidate::Revalidate, upstream::Upstream};

/// Catalog operation.
pub use common::Handler as Catalog;

/// [`Catalog`] error.
#[derive(Clone, Copy, Debug, Display, From, StdError)]
pub enum Error {
    /// [`Upstream`] error.
    Upstream(upstream::Error),
}
