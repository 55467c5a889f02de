//! Marker types.

/// Marker type describing an entity being fetched from an upstream source.
#[derive(Clone, Copy, Debug)]
pub struct Fetch;
