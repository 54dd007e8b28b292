//! Fixed-width rendering of the resting book.
//!
//! The snapshot is a 67-column ASCII table: bids on the left listed
//! top-down in priority order (highest price first), asks on the right
//! (lowest price first), orders within a level oldest first. Icebergs
//! display only their visible slice. Volumes and prices carry US-style
//! thousands separators here and nowhere else.

use lob_core::{Order, OrderBook};

const ID_WIDTH: usize = 10;
const VOLUME_WIDTH: usize = 13;
const PRICE_WIDTH: usize = 7;
const HALF_WIDTH: usize = 32;

const SEPARATOR: &str = "+----------+-------------+-------+-------+-------------+----------+";

/// Render both sides of the book as the fixed-width snapshot table.
///
/// Every row, including the closing border, ends in a newline.
pub fn render_book(book: &OrderBook) -> String {
    let mut bids = book.bids().orders().map(buy_cell);
    let mut asks = book.asks().orders().map(sell_cell);

    let border = format!("+{}+", "-".repeat(65));
    let mut table = String::new();

    table.push_str(&border);
    table.push('\n');
    table.push_str(&format!(
        "|{}|{}|\n",
        pad_right(" BUY", HALF_WIDTH),
        pad_right(" SELL", HALF_WIDTH)
    ));
    table.push_str(&format!(
        "|{}|{}|{}|{}|{}|{}|\n",
        pad_right(" Id", ID_WIDTH),
        pad_right(" Volume", VOLUME_WIDTH),
        pad_right(" Price", PRICE_WIDTH),
        pad_right(" Price", PRICE_WIDTH),
        pad_right(" Volume", VOLUME_WIDTH),
        pad_right(" Id", ID_WIDTH)
    ));
    table.push_str(SEPARATOR);
    table.push('\n');

    loop {
        let (bid, ask) = (bids.next(), asks.next());
        if bid.is_none() && ask.is_none() {
            break;
        }
        let bid = bid.unwrap_or_else(blank_buy_cell);
        let ask = ask.unwrap_or_else(blank_sell_cell);
        table.push_str(&format!("|{}|{}|\n", bid, ask));
    }

    table.push_str(&border);
    table.push('\n');
    table
}

fn buy_cell(order: &Order) -> String {
    format!(
        "{}|{}|{}",
        pad_left(&order.id().to_string(), ID_WIDTH),
        pad_left(&group_digits(order.visible() as i64), VOLUME_WIDTH),
        pad_left(&group_digits(order.price() as i64), PRICE_WIDTH)
    )
}

fn sell_cell(order: &Order) -> String {
    format!(
        "{}|{}|{}",
        pad_left(&group_digits(order.price() as i64), PRICE_WIDTH),
        pad_left(&group_digits(order.visible() as i64), VOLUME_WIDTH),
        pad_left(&order.id().to_string(), ID_WIDTH)
    )
}

fn blank_buy_cell() -> String {
    format!(
        "{}|{}|{}",
        pad_left("", ID_WIDTH),
        pad_left("", VOLUME_WIDTH),
        pad_left("", PRICE_WIDTH)
    )
}

fn blank_sell_cell() -> String {
    format!(
        "{}|{}|{}",
        pad_left("", PRICE_WIDTH),
        pad_left("", VOLUME_WIDTH),
        pad_left("", ID_WIDTH)
    )
}

/// Decimal rendering with a comma every three digits (`1234567` →
/// `"1,234,567"`).
fn group_digits(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if n < 0 {
        grouped.insert(0, '-');
    }
    grouped
}

fn pad_left(s: &str, width: usize) -> String {
    format!("{s:>width$}")
}

fn pad_right(s: &str, width: usize) -> String {
    format!("{s:<width$}")
}
