//! A single price level: FIFO queue of resting orders.

use std::collections::VecDeque;

use crate::order::Order;
use crate::side::Side;
use crate::trade::{Trade, TradeCollector};

/// The resting orders at one exact price on one side of the book.
///
/// Queue position is time priority: earliest arrival at the head. New
/// orders append to the tail; a replenished iceberg re-queues behind
/// the orders it was walked past (see [`PriceLevel::match_aggressor`]).
#[derive(Debug, Default)]
pub struct PriceLevel {
    orders: VecDeque<Order>,
}

impl PriceLevel {
    pub fn new() -> Self {
        PriceLevel::default()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Resting orders in time-priority order.
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    pub(crate) fn push_back(&mut self, order: Order) {
        self.orders.push_back(order);
    }

    /// Match `aggressor` against this level until one of the two is
    /// exhausted, appending the aggregated trades to `trades`.
    ///
    /// Each pass walks head-to-tail. When the aggressor exhausts
    /// mid-walk the queue is rotated so the last-touched order becomes
    /// the head; purging fully-consumed orders then leaves a partially
    /// filled order at the head with its priority intact, while a
    /// replenished iceberg that was walked past ends up behind every
    /// untouched order. While the aggressor has quantity left the walk
    /// repeats, so a replenishing iceberg is hit again within the same
    /// pass and its fills aggregate into one trade.
    pub(crate) fn match_aggressor(
        &mut self,
        aggressor_side: Side,
        aggressor: &mut Order,
        price: i16,
        trades: &mut Vec<Trade>,
    ) {
        let mut fills = TradeCollector::new(aggressor_side, aggressor.id(), price);

        while !self.orders.is_empty() && !aggressor.is_filled() {
            let mut touched = 0;
            for resting in self.orders.iter_mut() {
                touched += 1;
                let amount = aggressor.match_against(resting);
                assert!(amount > 0, "zero fill against a displayed quantity");
                fills.record(resting.id(), amount);
                if aggressor.is_filled() {
                    break;
                }
            }

            if aggressor.is_filled() {
                // last-touched order becomes the head before the purge
                self.orders.rotate_left(touched - 1);
            }
            self.orders.retain(|order| !order.is_filled());
        }

        trades.extend(fills.into_trades());
    }
}
