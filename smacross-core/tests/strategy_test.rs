//! End-to-end scenarios for the crossover strategy, driven through the
//! public facade exactly the way a host would drive it.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use smacross_core::config::StrategySettings;
use smacross_core::domain::{OrderRequest, OrderSide, Position};
use smacross_core::host::{HostedStrategy, NotificationSink, OrderSink, PositionProvider};
use smacross_core::signals::OrderIntent;
use smacross_core::strategy::CrossoverStrategy;

fn settings_2_4() -> StrategySettings {
    StrategySettings {
        short_period: 2,
        long_period: 4,
        base_volume: dec!(1),
        close_on_stop: true,
    }
}

#[test]
fn price_jump_fires_crossover_up_exactly_once() {
    let mut strategy = CrossoverStrategy::new(settings_2_4());

    let prices = [1, 1, 1, 1, 10, 10, 10, 10];
    let mut fired_at = Vec::new();
    for (i, price) in prices.into_iter().enumerate() {
        let obs = strategy.on_observation(i, Decimal::from(price)).unwrap();
        if obs.intent == OrderIntent::EnterLong {
            fired_at.push(i);
        }
        assert_ne!(obs.intent, OrderIntent::EnterShort);
    }

    // Bar 4 is the first bar whose short average exceeds the long average;
    // the signal is emitted by the delivery that finalizes it.
    assert_eq!(fired_at, vec![5]);
}

#[test]
fn symmetric_price_drop_fires_crossover_down_exactly_once() {
    let mut strategy = CrossoverStrategy::new(settings_2_4());

    let prices = [10, 10, 10, 10, 1, 1, 1, 1];
    let mut fired_at = Vec::new();
    for (i, price) in prices.into_iter().enumerate() {
        let obs = strategy.on_observation(i, Decimal::from(price)).unwrap();
        if obs.intent == OrderIntent::EnterShort {
            fired_at.push(i);
        }
        assert_ne!(obs.intent, OrderIntent::EnterLong);
    }

    assert_eq!(fired_at, vec![5]);
}

#[test]
fn repeated_delivery_of_the_live_bar_is_idempotent() {
    let mut strategy = CrossoverStrategy::new(settings_2_4());

    for (i, price) in [1, 1, 1, 1, 10].into_iter().enumerate() {
        strategy.on_observation(i, Decimal::from(price)).unwrap();
    }

    // The delivery that finalizes bar 4 fires the signal.
    let first = strategy.on_observation(5, dec!(10)).unwrap();
    assert_eq!(first.intent, OrderIntent::EnterLong);

    // Revising bar 5 returns the same averages and never re-fires.
    let second = strategy.on_observation(5, dec!(10)).unwrap();
    assert_eq!(second.short_avg, first.short_avg);
    assert_eq!(second.long_avg, first.long_avg);
    assert_eq!(second.intent, OrderIntent::None);
}

// ── Hosted pipeline: sizing and shutdown ─────────────────────────────

struct FixedPosition(Decimal);

impl PositionProvider for FixedPosition {
    fn current_position(&self) -> Position {
        Position(self.0)
    }
}

#[derive(Default)]
struct RecordingOrders(Vec<OrderRequest>);

impl OrderSink for RecordingOrders {
    fn submit(&mut self, order: OrderRequest) {
        self.0.push(order);
    }
}

#[derive(Default)]
struct RecordingNotifications(Vec<String>);

impl NotificationSink for RecordingNotifications {
    fn notify(&mut self, message: &str) {
        self.0.push(message.to_string());
    }
}

fn run_cross_up(
    position: Decimal,
) -> HostedStrategy<FixedPosition, RecordingOrders, RecordingNotifications> {
    let mut hosted = HostedStrategy::new(
        CrossoverStrategy::new(settings_2_4()),
        FixedPosition(position),
        RecordingOrders::default(),
        RecordingNotifications::default(),
    );
    for (i, price) in [1, 1, 1, 1, 10, 10, 10, 10].into_iter().enumerate() {
        hosted.on_bar(i, Decimal::from(price)).unwrap();
    }
    hosted
}

#[test]
fn entry_from_flat_uses_base_volume() {
    let hosted = run_cross_up(dec!(0));
    let orders = &hosted.orders().0;
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].side, OrderSide::Buy);
    assert_eq!(orders[0].quantity, dec!(1));
}

#[test]
fn entry_reversing_a_short_covers_it() {
    let hosted = run_cross_up(dec!(-3));
    let orders = &hosted.orders().0;
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].side, OrderSide::Buy);
    assert_eq!(orders[0].quantity, dec!(4));
}

#[test]
fn stop_without_close_flag_emits_nothing() {
    let settings = StrategySettings {
        close_on_stop: false,
        ..settings_2_4()
    };
    let strategy = CrossoverStrategy::new(settings);
    assert_eq!(strategy.on_stop(Position(dec!(5))), None);
}

#[test]
fn stop_with_open_short_buys_it_back() {
    let strategy = CrossoverStrategy::new(settings_2_4());
    let order = strategy.on_stop(Position(dec!(-2))).unwrap();
    assert_eq!(order.side, OrderSide::Buy);
    assert_eq!(order.quantity, dec!(2));
}

#[test]
fn hosted_stop_warns_before_closing() {
    let mut hosted = HostedStrategy::new(
        CrossoverStrategy::new(settings_2_4()),
        FixedPosition(dec!(-2)),
        RecordingOrders::default(),
        RecordingNotifications::default(),
    );
    hosted.stop();

    assert_eq!(
        hosted.notifications().0,
        vec!["Closing current position -2 on stopping.".to_string()]
    );
    let orders = &hosted.orders().0;
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].side, OrderSide::Buy);
    assert_eq!(orders[0].quantity, dec!(2));
}
