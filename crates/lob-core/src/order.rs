//! Order representation and the two-party fill protocol.
//!
//! An order is either a plain limit order or an iceberg order that
//! displays at most `peak` units at a time while holding the rest in
//! hidden reserve. Fills are driven through two operations:
//!
//! - [`Order::match_against`] - called on the incoming aggressor with a
//!   resting order from the opposite side.
//! - [`Order::request_trade`] - applied to the resting order; this is
//!   where an iceberg discloses a fresh slice once its displayed
//!   quantity is exhausted.

/// Which flavour of order this is.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OrderKind {
    /// Plain limit order; the whole remaining quantity is displayed.
    Limit,

    /// Iceberg order: at most `peak` units are displayed at a time,
    /// `hidden` units are held in reserve.
    Iceberg { peak: u32, hidden: u32 },
}

/// A single order, incoming or resting.
///
/// `visible` is the quantity counterparties can trade against right
/// now. For a limit order that is everything left; for an iceberg the
/// remainder sits in [`OrderKind::Iceberg::hidden`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: u32,
    price: i16,
    visible: u32,
    kind: OrderKind,
}

impl Order {
    /// Create a plain limit order.
    pub fn limit(id: u32, price: i16, quantity: u32) -> Self {
        Order {
            id,
            price,
            visible: quantity,
            kind: OrderKind::Limit,
        }
    }

    /// Create an iceberg order.
    ///
    /// The initial displayed quantity is `min(peak, quantity)`; the rest
    /// starts out hidden.
    pub fn iceberg(id: u32, price: i16, quantity: u32, peak: u32) -> Self {
        let visible = quantity.min(peak);
        Order {
            id,
            price,
            visible,
            kind: OrderKind::Iceberg {
                peak,
                hidden: quantity - visible,
            },
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn price(&self) -> i16 {
        self.price
    }

    /// Quantity currently displayed to the market.
    pub fn visible(&self) -> u32 {
        self.visible
    }

    /// Reserve quantity not displayed to the market (0 for limit orders).
    pub fn hidden(&self) -> u32 {
        match self.kind {
            OrderKind::Limit => 0,
            OrderKind::Iceberg { hidden, .. } => hidden,
        }
    }

    /// Total unfilled quantity, displayed plus hidden.
    pub fn remaining(&self) -> u32 {
        self.visible + self.hidden()
    }

    /// Returns `true` once nothing is left to fill.
    pub fn is_filled(&self) -> bool {
        self.remaining() == 0
    }

    pub fn kind(&self) -> OrderKind {
        self.kind
    }

    /// Trade this (aggressing) order against a resting one.
    ///
    /// The fill amount is `min(self.remaining(), resting.visible())`: an
    /// aggressor works down its total remaining quantity, so an incoming
    /// iceberg sweeps the opposite side without being throttled to its
    /// own peak. Afterwards an iceberg aggressor re-derives its display
    /// as `min(peak, remaining)` so it rests showing a full slice.
    ///
    /// Returns the filled amount; 0 means no further trade is possible.
    pub fn match_against(&mut self, resting: &mut Order) -> u32 {
        let amount = self.remaining().min(resting.visible);
        if amount == 0 {
            return 0;
        }

        match self.kind {
            OrderKind::Limit => self.visible -= amount,
            OrderKind::Iceberg { peak, hidden } => {
                let left = self.visible + hidden - amount;
                self.visible = left.min(peak);
                self.kind = OrderKind::Iceberg {
                    peak,
                    hidden: left - self.visible,
                };
            }
        }

        resting.request_trade(amount);
        amount
    }

    /// Fill this (resting) order by `amount`.
    ///
    /// `amount` must not exceed the displayed quantity. When a fill
    /// empties an iceberg's displayed slice while reserve remains, a new
    /// slice of `min(peak, hidden)` is disclosed; the caller is
    /// responsible for the resulting loss of time priority.
    pub fn request_trade(&mut self, amount: u32) {
        assert!(
            amount <= self.visible,
            "fill of {} exceeds displayed quantity {} on order {}",
            amount,
            self.visible,
            self.id
        );
        self.visible -= amount;

        if let OrderKind::Iceberg { peak, hidden } = self.kind {
            if self.visible == 0 && hidden > 0 {
                self.visible = hidden.min(peak);
                self.kind = OrderKind::Iceberg {
                    peak,
                    hidden: hidden - self.visible,
                };
            }
        }
    }
}
