//! One side of the book: price levels sorted by priority.

use std::collections::BTreeMap;

use crate::order::Order;
use crate::price_level::PriceLevel;
use crate::side::Side;

/// Price-indexed collection of levels for one side of the book.
///
/// Backed by a `BTreeMap` keyed by price; the bid side treats the
/// highest key as best, the ask side the lowest. A level is removed as
/// soon as it empties, so every stored level holds at least one order.
#[derive(Debug)]
pub struct BookSide {
    side: Side,
    levels: BTreeMap<i16, PriceLevel>,
}

impl BookSide {
    pub fn new(side: Side) -> Self {
        BookSide {
            side,
            levels: BTreeMap::new(),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Number of distinct price levels currently resting.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Best price of this side: highest bid, lowest ask.
    pub fn best_price(&self) -> Option<i16> {
        match self.side {
            Side::Buy => self.levels.keys().next_back().copied(),
            Side::Sell => self.levels.keys().next().copied(),
        }
    }

    /// Levels in priority order, best first.
    pub fn levels(&self) -> Box<dyn Iterator<Item = (i16, &PriceLevel)> + '_> {
        match self.side {
            Side::Buy => Box::new(self.levels.iter().rev().map(|(p, l)| (*p, l))),
            Side::Sell => Box::new(self.levels.iter().map(|(p, l)| (*p, l))),
        }
    }

    /// All resting orders in priority order: best price first, oldest
    /// first within a price.
    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.levels().flat_map(|(_, level)| level.iter())
    }

    pub(crate) fn level_mut(&mut self, price: i16) -> Option<&mut PriceLevel> {
        self.levels.get_mut(&price)
    }

    /// Append an order to the tail of its price level, creating the
    /// level if needed.
    pub(crate) fn insert(&mut self, order: Order) {
        self.levels.entry(order.price()).or_default().push_back(order);
    }

    pub(crate) fn remove_if_empty(&mut self, price: i16) {
        if self.levels.get(&price).is_some_and(PriceLevel::is_empty) {
            self.levels.remove(&price);
        }
    }
}
