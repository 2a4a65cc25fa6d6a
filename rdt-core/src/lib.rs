//! Domain model for Australian roadside drug testing (RDT) data.
//!
//! This crate holds the closed enumerations (jurisdictions, drug types),
//! the canonical drug-name mapping for inconsistent export spellings,
//! the shared chart color palette, and display formatting helpers.

pub mod drug_type;
pub mod format;
pub mod jurisdiction;
pub mod palette;

pub use drug_type::{normalize_drug_type, DrugType};
pub use jurisdiction::Jurisdiction;
