//! Purchase-order model, builders, and reference-data code lists.
//!
//! This module provides the read-only aggregate the order formatter works
//! on: the order, its trading parties, addresses, lines and products.

mod address;
mod builder;
pub mod codes;
mod error;
mod types;

pub use address::*;
pub use builder::*;
pub use codes::{edi_contact_code, edi_unit_code};
pub use error::*;
pub use types::*;
