//! Chart-facing layer: per-source schemas, the loaded data bundle, and the
//! view builders that turn canonical records plus the current filters into
//! serializable chart payloads.
//!
//! Every view is rebuilt in full on each filter change; rendering is a
//! full redraw from the payload, so recomputation is idempotent and a new
//! filter change simply supersedes the previous render.

pub mod bundle;
pub mod schemas;
pub mod views;

pub use bundle::{DataBundle, Source};
