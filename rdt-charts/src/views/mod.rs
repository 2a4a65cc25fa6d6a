//! Chart view builders, one module per dashboard section.
//!
//! Each builder takes the loaded [`crate::DataBundle`] plus a
//! [`rdt_data::filter::Filters`] snapshot and returns a typed, serializable
//! payload for the D3 renderer.

pub mod composition;
pub mod geography;
pub mod summary;
pub mod trend;
