//! lob-protocol
//!
//! The text boundary of the order book:
//! - [`csv_codec`] : order-line parsing and trade-line formatting
//! - [`render`]    : the fixed-width book snapshot table
//!
//! This crate turns lines into `lob_core` values and back; the core
//! crate itself knows nothing about any text format.

pub mod csv_codec;
pub mod error;
pub mod render;

pub use csv_codec::{format_trade, parse_order_line};
pub use error::ParseError;
pub use render::render_book;
