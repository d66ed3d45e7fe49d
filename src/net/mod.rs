//! Network boundary: wire types and the identity check.

pub mod api;
pub mod types;
