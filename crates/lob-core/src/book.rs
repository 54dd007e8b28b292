//! The order book: two sides plus the price-priority matching loop.

use tracing::trace;

use crate::book_side::BookSide;
use crate::order::Order;
use crate::side::Side;
use crate::trade::Trade;

/// A single-instrument order book.
///
/// - Bids: descending by price (best = highest).
/// - Asks: ascending by price (best = lowest).
/// - FIFO (time priority) within each price level.
#[derive(Debug)]
pub struct OrderBook {
    bids: BookSide,
    asks: BookSide,
}

impl Default for OrderBook {
    fn default() -> Self {
        OrderBook::new()
    }
}

impl OrderBook {
    /// Create a new, empty order book.
    pub fn new() -> Self {
        OrderBook {
            bids: BookSide::new(Side::Buy),
            asks: BookSide::new(Side::Sell),
        }
    }

    pub fn bids(&self) -> &BookSide {
        &self.bids
    }

    pub fn asks(&self) -> &BookSide {
        &self.asks
    }

    /// Best bid price, if any bid is resting.
    pub fn best_bid(&self) -> Option<i16> {
        self.bids.best_price()
    }

    /// Best ask price, if any ask is resting.
    pub fn best_ask(&self) -> Option<i16> {
        self.asks.best_price()
    }

    /// Process an incoming order.
    ///
    /// Matches it against the opposite side in price priority (best
    /// level first, stopping once prices no longer cross), then rests
    /// any remainder at its own price. Trades always execute at the
    /// resting order's price, never at the aggressor's limit.
    ///
    /// Returns the aggregated trades in emission order: better prices
    /// first, first-touched counterparty first within a price.
    pub fn submit(&mut self, side: Side, mut order: Order) -> Vec<Trade> {
        let mut trades = Vec::new();

        let opposite = match side {
            Side::Buy => &mut self.asks,
            Side::Sell => &mut self.bids,
        };

        loop {
            if order.is_filled() {
                break;
            }
            let best = match opposite.best_price() {
                Some(price) => price,
                None => break,
            };
            if !side.crosses(order.price(), best) {
                break;
            }

            if let Some(level) = opposite.level_mut(best) {
                level.match_aggressor(side, &mut order, best, &mut trades);
            }
            opposite.remove_if_empty(best);
        }

        if !order.is_filled() {
            trace!(
                "resting order {} at {} ({} displayed, {} hidden)",
                order.id(),
                order.price(),
                order.visible(),
                order.hidden()
            );
            let own = match side {
                Side::Buy => &mut self.bids,
                Side::Sell => &mut self.asks,
            };
            own.insert(order);
        }

        trades
    }
}
