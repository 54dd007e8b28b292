// crates/lob-protocol/src/csv_codec.rs

//! CSV order-line codec.
//!
//! Input format (one order per line, no whitespace):
//!
//! - Limit order:   `<B|S>,<id:u32>,<price:i16>,<quantity:u32>`
//! - Iceberg order: `<B|S>,<id:u32>,<price:i16>,<quantity:u32>,<peak:u32>`
//!
//! Lines that are empty or whose first character is neither `B` nor
//! `S` are not orders and parse to `Ok(None)`. A recognized line with
//! malformed fields is a [`ParseError`].
//!
//! Output format (one line per aggregated trade):
//!
//! `<buy_id>,<sell_id>,<price>,<quantity>`
//!
//! Trade lines use bare decimals; thousands separators appear only in
//! the rendered book table (see [`crate::render`]).

use std::num::ParseIntError;
use std::str::FromStr;

use lob_core::{Order, Side, Trade};

use crate::error::ParseError;

/// Parse a single input line into a side and an order.
///
/// Returns `Ok(None)` for lines the order stream simply ignores.
pub fn parse_order_line(line: &str) -> Result<Option<(Side, Order)>, ParseError> {
    let side = match line.chars().next().and_then(Side::from_char) {
        Some(side) => side,
        None => return Ok(None),
    };

    let mut fields = line.split(',');
    fields.next(); // the side marker, already consumed

    let id: u32 = parse_field(&mut fields, "id")?;
    if id == 0 {
        return Err(ParseError::NonPositive("id"));
    }
    let price: i16 = parse_field(&mut fields, "price")?;
    if price <= 0 {
        return Err(ParseError::NonPositive("price"));
    }
    let quantity: u32 = parse_field(&mut fields, "quantity")?;
    if quantity == 0 {
        return Err(ParseError::NonPositive("quantity"));
    }

    let order = match fields.next() {
        None => Order::limit(id, price, quantity),
        Some(value) => {
            let peak: u32 = parse_value(value, "peak")?;
            if peak == 0 {
                return Err(ParseError::NonPositive("peak"));
            }
            if fields.next().is_some() {
                return Err(ParseError::TrailingField);
            }
            Order::iceberg(id, price, quantity, peak)
        }
    };

    Ok(Some((side, order)))
}

/// Format an aggregated trade as a bare-decimal line (no newline).
pub fn format_trade(trade: &Trade) -> String {
    format!(
        "{},{},{},{}",
        trade.buy_id, trade.sell_id, trade.price, trade.quantity
    )
}

// -----------------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------------

fn parse_field<'a, T>(
    fields: &mut impl Iterator<Item = &'a str>,
    name: &'static str,
) -> Result<T, ParseError>
where
    T: FromStr<Err = ParseIntError>,
{
    match fields.next() {
        Some(value) => parse_value(value, name),
        None => Err(ParseError::MissingField(name)),
    }
}

fn parse_value<T>(value: &str, name: &'static str) -> Result<T, ParseError>
where
    T: FromStr<Err = ParseIntError>,
{
    value.parse().map_err(|source| ParseError::InvalidNumber {
        field: name,
        value: value.to_string(),
        source,
    })
}
