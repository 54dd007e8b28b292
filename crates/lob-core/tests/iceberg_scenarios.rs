// crates/lob-core/tests/iceberg_scenarios.rs

use lob_core::{Order, OrderBook, Side, Trade};

#[test]
fn iceberg_discloses_at_most_its_peak() {
    let mut book = OrderBook::new();
    book.submit(Side::Sell, Order::iceberg(7, 100, 1000, 100));

    let ask = book.asks().orders().next().expect("iceberg should rest");
    assert_eq!(ask.visible(), 100);
    assert_eq!(ask.hidden(), 900);
    assert_eq!(ask.remaining(), 1000);
}

#[test]
fn small_iceberg_displays_its_whole_quantity() {
    let mut book = OrderBook::new();
    book.submit(Side::Sell, Order::iceberg(7, 100, 60, 100));

    let ask = book.asks().orders().next().expect("iceberg should rest");
    assert_eq!(ask.visible(), 60);
    assert_eq!(ask.hidden(), 0);
}

#[test]
fn replenished_fills_aggregate_into_one_trade() {
    let mut book = OrderBook::new();
    book.submit(Side::Sell, Order::iceberg(7, 100, 1000, 100));

    // 250 consumes two full slices and half of a third.
    let trades = book.submit(Side::Buy, Order::limit(8, 100, 250));

    assert_eq!(trades, vec![Trade::new(8, 7, 100, 250)]);

    // A slice replenishes only when a fill empties it completely; the
    // final 50-lot fill leaves the third slice half displayed.
    let ask = book.asks().orders().next().expect("iceberg still resting");
    assert_eq!(ask.visible(), 50);
    assert_eq!(ask.hidden(), 700);
}

#[test]
fn refreshed_slice_loses_time_priority() {
    let mut book = OrderBook::new();
    book.submit(Side::Sell, Order::iceberg(7, 100, 500, 100));
    book.submit(Side::Sell, Order::limit(9, 100, 100));

    let trades = book.submit(Side::Buy, Order::limit(10, 100, 150));
    assert_eq!(
        trades,
        vec![Trade::new(10, 7, 100, 100), Trade::new(10, 9, 100, 50)]
    );

    // The refreshed slice queues behind the untouched order's remainder.
    let asks: Vec<(u32, u32, u32)> = book
        .asks()
        .orders()
        .map(|o| (o.id(), o.visible(), o.hidden()))
        .collect();
    assert_eq!(asks, vec![(9, 50, 0), (7, 100, 300)]);

    // Probe: the next aggressor trades with the plain order, not the iceberg.
    let trades = book.submit(Side::Buy, Order::limit(11, 100, 50));
    assert_eq!(trades, vec![Trade::new(11, 9, 100, 50)]);
}

#[test]
fn aggressor_iceberg_sweeps_by_total_remaining() {
    let mut book = OrderBook::new();
    book.submit(Side::Sell, Order::limit(2, 100, 300));

    // Peak 100, but the sweep is bounded by the 1000 total, so the
    // 300-lot ask clears in a single fill.
    let trades = book.submit(Side::Buy, Order::iceberg(4, 100, 1000, 100));
    assert_eq!(trades, vec![Trade::new(4, 2, 100, 300)]);

    assert!(book.asks().is_empty());
    let bid = book.bids().orders().next().expect("remainder should rest");
    assert_eq!(bid.id(), 4);
    assert_eq!(bid.visible(), 100);
    assert_eq!(bid.hidden(), 600);
}

#[test]
fn exactly_consumed_slice_replenishes_in_place() {
    let mut book = OrderBook::new();
    book.submit(Side::Sell, Order::iceberg(7, 100, 400, 150));

    // Consume the first 150 slice exactly.
    let trades = book.submit(Side::Buy, Order::limit(8, 100, 150));
    assert_eq!(trades, vec![Trade::new(8, 7, 100, 150)]);

    let ask = book.asks().orders().next().expect("iceberg still resting");
    assert_eq!(ask.visible(), 150);
    assert_eq!(ask.hidden(), 100);
}

#[test]
fn quantity_is_conserved_across_fills() {
    let mut book = OrderBook::new();
    book.submit(Side::Sell, Order::iceberg(7, 100, 600, 150));

    let mut filled = 0;
    for trade in book.submit(Side::Buy, Order::limit(8, 100, 400)) {
        assert_eq!(trade.sell_id, 7);
        filled += trade.quantity;
    }
    for trade in book.submit(Side::Buy, Order::limit(9, 101, 100)) {
        assert_eq!(trade.sell_id, 7);
        filled += trade.quantity;
    }

    let ask = book.asks().orders().next().expect("iceberg still resting");
    assert_eq!(filled + ask.remaining(), 600);
    assert_eq!(ask.visible(), 100);
    assert_eq!(ask.hidden(), 0);
}
