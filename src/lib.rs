//! # edi-orders
//!
//! EANCOM ORDERS (D.96A) order files for confirmed purchase orders.
//!
//! The crate serializes a purchase order, its trading parties and lines into
//! the pipe-delimited segment format read by the supplier's order intake,
//! and writes it as `order_<id>.PLA` to a configured directory.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use edi_orders::core::*;
//! use edi_orders::orders;
//! use rust_decimal_macros::dec;
//!
//! let company = PartyBuilder::new("Bodegas Norte SL")
//!     .operational_point("8400000000017")
//!     .vat_code("ESB12345678")
//!     .address(
//!         AddressBuilder::new("Calle Mayor 1", "Bilbao", "48001")
//!             .invoice()
//!             .delivery()
//!             .edi_ean("8400000000031")
//!             .build(),
//!     )
//!     .build();
//! let supplier = PartyBuilder::new("Harinas del Sur SA")
//!     .operational_point("8400000000024")
//!     .allow_edi(true)
//!     .build();
//!
//! let order = PurchaseOrderBuilder::new(7, "PO-0007", NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
//!     .company(company)
//!     .supplier(supplier.clone())
//!     .invoice_address(AddressBuilder::new("Av. Andalucia 9", "Sevilla", "41001").build())
//!     .add_line(
//!         OrderLineBuilder::new(
//!             Product::new("HAR-01", "Harina").ean13("8412345678905"),
//!             dec!(25),
//!             "kg",
//!             dec!(0.85),
//!         )
//!         .build()
//!         .unwrap(),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let text = orders::render(&order).unwrap();
//! assert!(text.starts_with("ORDERS_D_96A_UN_EAN008\r\nORD|PO-0007|220|9\r\n"));
//! assert!(text.ends_with("MOARES|21.25\r\n"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Purchase-order types, builders, code lists |
//! | `orders` (default) | ORDERS segment rendering and order-file writing |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "orders")]
pub mod orders;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
