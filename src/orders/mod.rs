//! EANCOM ORDERS order-file generation.
//!
//! Serializes a confirmed [`PurchaseOrder`](crate::core::PurchaseOrder) into
//! the pipe-delimited ORDERS D.96A (EAN008) layout read by the supplier's
//! order intake, and writes it as `order_<id>.PLA`.
//!
//! # Example
//!
//! ```ignore
//! use edi_orders::orders::*;
//!
//! let config = EdiConfigBuilder::new().output_dir("/srv/edi/out").build();
//!
//! // On confirmation of a batch of purchase orders:
//! let written = proceed(&confirmed, &config)?;
//! ```

mod config;
mod file;
mod format;
mod segments;

pub use config::{EdiConfig, EdiConfigBuilder};
pub use file::{file_name, proceed, write, write_to_dir};
pub use format::transliterate;
pub use segments::{HEADER, SEGMENT_SEPARATOR, render, segments};
