//! Trade events and per-pass aggregation.

use indexmap::IndexMap;

use crate::side::Side;

/// An aggregated trade between a buyer and a seller.
///
/// `buy_id` always identifies the buy-side participant and `sell_id`
/// the sell-side, regardless of which of the two was aggressing. The
/// price is always the resting order's price.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Trade {
    pub buy_id: u32,
    pub sell_id: u32,
    pub price: i16,
    pub quantity: u32,
}

impl Trade {
    pub fn new(buy_id: u32, sell_id: u32, price: i16, quantity: u32) -> Self {
        Trade {
            buy_id,
            sell_id,
            price,
            quantity,
        }
    }
}

/// Collects the fills of one aggressor pass over one price level.
///
/// Repeated fills against the same resting order (an iceberg hit again
/// after replenishing its slice) merge into a single trade. Emission
/// order is the order in which resting counterparties were first
/// touched, which an insertion-ordered map preserves.
#[derive(Debug)]
pub(crate) struct TradeCollector {
    aggressor_side: Side,
    aggressor_id: u32,
    price: i16,
    fills: IndexMap<u32, u32>,
}

impl TradeCollector {
    pub(crate) fn new(aggressor_side: Side, aggressor_id: u32, price: i16) -> Self {
        TradeCollector {
            aggressor_side,
            aggressor_id,
            price,
            fills: IndexMap::new(),
        }
    }

    pub(crate) fn record(&mut self, resting_id: u32, amount: u32) {
        *self.fills.entry(resting_id).or_insert(0) += amount;
    }

    pub(crate) fn into_trades(self) -> impl Iterator<Item = Trade> {
        let TradeCollector {
            aggressor_side,
            aggressor_id,
            price,
            fills,
        } = self;

        fills
            .into_iter()
            .map(move |(resting_id, quantity)| match aggressor_side {
                Side::Buy => Trade::new(aggressor_id, resting_id, price, quantity),
                Side::Sell => Trade::new(resting_id, aggressor_id, price, quantity),
            })
    }
}
