//! Product list controller.
//!
//! Owns the filter/sort/pagination state of an already fetched product
//! collection for the duration of one page visit: derives the visible
//! subset, reveals it incrementally and keeps the navigable URL query in
//! sync. No network calls happen here — the whole collection is resident.

pub mod controller;
pub mod query;
pub mod state;

pub use self::{
    controller::{Config, Controller, Viewport, Visibility},
    query::Params,
    state::{derive, Selection, SortOrder, State},
};
