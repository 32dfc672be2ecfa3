//! Host collaborator seam.
//!
//! Everything the core needs from its host runtime, expressed as three
//! narrow traits: a fresh position snapshot per decision, a fire-and-forget
//! order sink, and an informational notification sink. `HostedStrategy`
//! wires a [`CrossoverStrategy`] to the three collaborators so a host only
//! has to forward its bar and shutdown callbacks.

use crate::domain::{OrderRequest, Position};
use crate::sizing;
use crate::strategy::{CrossoverStrategy, Observation, StrategyError};
use rust_decimal::Decimal;

/// Read-only access to the host-owned position.
///
/// Queried fresh at every decision point; the core never caches the result.
pub trait PositionProvider {
    fn current_position(&self) -> Position;
}

/// Sink for order requests.
///
/// Fire-and-forget: the core never inspects fills, rejections, or partial
/// executions.
pub trait OrderSink {
    fn submit(&mut self, order: OrderRequest);
}

/// Sink for human-readable, purely informational warnings.
pub trait NotificationSink {
    fn notify(&mut self, message: &str);
}

/// A crossover strategy wired to its host collaborators.
pub struct HostedStrategy<P, O, N> {
    strategy: CrossoverStrategy,
    positions: P,
    orders: O,
    notifications: N,
}

impl<P, O, N> HostedStrategy<P, O, N>
where
    P: PositionProvider,
    O: OrderSink,
    N: NotificationSink,
{
    pub fn new(strategy: CrossoverStrategy, positions: P, orders: O, notifications: N) -> Self {
        Self {
            strategy,
            positions,
            orders,
            notifications,
        }
    }

    pub fn strategy(&self) -> &CrossoverStrategy {
        &self.strategy
    }

    pub fn strategy_mut(&mut self) -> &mut CrossoverStrategy {
        &mut self.strategy
    }

    pub fn orders(&self) -> &O {
        &self.orders
    }

    pub fn notifications(&self) -> &N {
        &self.notifications
    }

    /// Host bar callback: observe, derive an intent, size it against a
    /// fresh position snapshot, and submit the resulting order.
    pub fn on_bar(&mut self, index: usize, price: Decimal) -> Result<Observation, StrategyError> {
        let observation = self.strategy.on_observation(index, price)?;

        if observation.intent.is_actionable() {
            let position = self.positions.current_position();
            let base_volume = self.strategy.settings().base_volume;
            if let Some(order) = sizing::entry_order(observation.intent, position, base_volume) {
                self.orders.submit(order);
            }
        }

        Ok(observation)
    }

    /// Host shutdown callback: flatten the open position if configured to,
    /// warning the host first.
    pub fn stop(&mut self) {
        let position = self.positions.current_position();
        if let Some(order) = self.strategy.on_stop(position) {
            self.notifications
                .notify(&format!("Closing current position {position} on stopping."));
            self.orders.submit(order);
        }
    }
}
