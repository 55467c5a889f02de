//! Background [`Task`]s definitions.

mod background;
pub mod sweep_stale_entries;

pub use common::Handler as Task;

pub use self::{
    background::Background, sweep_stale_entries::SweepStaleEntries,
};
