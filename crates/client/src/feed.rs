// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Polling synchronization feed for order state.
//!
//! This module keeps a remote client's view of the order set in sync by
//! periodic fetching. Events represent facts about what changed between
//! snapshots, not directives or domain logic.
//!
//! # Architecture
//!
//! - Events are broadcast to all subscribers
//! - The last-known-good snapshot is retained across fetch failures
//! - A failed fetch never clears state; it surfaces a retry affordance
//! - The loop is cancellable via a watch channel; no orphaned timers

use crate::gateway::GatewayError;
use comanda_api::OrderInfo;
use std::collections::HashSet;
use std::time::Duration;
use tokio::sync::{broadcast, watch};
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

/// Poll interval for staff dashboards.
pub const DASHBOARD_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Poll interval for customer order trackers.
pub const TRACKER_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Maximum number of events to buffer in the broadcast channel.
/// If subscribers cannot keep up, older events will be dropped.
const EVENT_BUFFER_SIZE: usize = 100;

/// Feed event types.
///
/// These events are derived from snapshot diffs and are purely
/// informational; the snapshot itself stays on the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEvent {
    /// A fetch succeeded and the snapshot was replaced.
    SnapshotUpdated {
        /// Number of orders in the new snapshot.
        order_count: usize,
    },
    /// Orders appeared that were not in the previous snapshot.
    ///
    /// The surrounding UI uses this to trigger its new-order alert.
    NewOrders {
        /// The newly seen order numbers.
        order_numbers: Vec<String>,
    },
    /// A fetch failed; the previous snapshot is still in effect.
    FetchFailed {
        /// Description of the failure.
        error: String,
        /// Failures since the last successful fetch.
        consecutive_failures: u32,
    },
}

/// Polling feed over the order set.
///
/// One feed instance serves one consumer (a staff dashboard or a customer
/// tracker); the fetch closure decides which endpoint backs it.
#[derive(Debug)]
pub struct OrderFeed {
    tx: broadcast::Sender<FeedEvent>,
    snapshot: Vec<OrderInfo>,
    consecutive_failures: u32,
}

impl OrderFeed {
    /// Creates a feed with an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(EVENT_BUFFER_SIZE);
        Self {
            tx,
            snapshot: Vec::new(),
            consecutive_failures: 0,
        }
    }

    /// Subscribes to the event stream.
    ///
    /// Events broadcast before subscription are not received.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<FeedEvent> {
        self.tx.subscribe()
    }

    /// The last-known-good order snapshot.
    #[must_use]
    pub fn snapshot(&self) -> &[OrderInfo] {
        &self.snapshot
    }

    /// Failures since the last successful fetch.
    #[must_use]
    pub const fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }

    /// Folds one fetch result into the feed.
    ///
    /// A successful fetch diffs the new order set against the previous
    /// snapshot by order number, broadcasting [`FeedEvent::NewOrders`] for
    /// newly present orders before replacing the snapshot. A failure
    /// retains the snapshot and broadcasts [`FeedEvent::FetchFailed`].
    pub fn ingest(&mut self, fetched: Result<Vec<OrderInfo>, GatewayError>) {
        match fetched {
            Ok(orders) => {
                let known: HashSet<&str> = self
                    .snapshot
                    .iter()
                    .map(|o| o.order_number.as_str())
                    .collect();
                let new_numbers: Vec<String> = orders
                    .iter()
                    .filter(|o| !known.contains(o.order_number.as_str()))
                    .map(|o| o.order_number.clone())
                    .collect();

                if !new_numbers.is_empty() {
                    self.broadcast(FeedEvent::NewOrders {
                        order_numbers: new_numbers,
                    });
                }

                self.broadcast(FeedEvent::SnapshotUpdated {
                    order_count: orders.len(),
                });
                self.snapshot = orders;
                self.consecutive_failures = 0;
            }
            Err(e) => {
                self.consecutive_failures += 1;
                warn!(
                    error = %e,
                    failures = self.consecutive_failures,
                    "Order fetch failed, keeping last snapshot"
                );
                self.broadcast(FeedEvent::FetchFailed {
                    error: e.to_string(),
                    consecutive_failures: self.consecutive_failures,
                });
            }
        }
    }

    /// Runs the polling loop until the shutdown channel fires.
    ///
    /// The first fetch happens immediately, then once per interval. The
    /// loop also stops if the shutdown sender is dropped, so an abandoned
    /// feed cannot leave a timer running.
    pub async fn run<F, Fut>(
        &mut self,
        poll_interval: Duration,
        fetch: F,
        mut shutdown: watch::Receiver<bool>,
    ) where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<Vec<OrderInfo>, GatewayError>>,
    {
        let mut ticker = tokio::time::interval(poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let result = fetch().await;
                    self.ingest(result);
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        debug!("Order feed shutting down");
                        break;
                    }
                }
            }
        }
    }

    fn broadcast(&self, event: FeedEvent) {
        match self.tx.send(event) {
            Ok(count) => {
                debug!(receivers = count, "Broadcast feed event");
            }
            Err(_) => {
                // No receivers, which is fine
                debug!("No receivers for feed event");
            }
        }
    }
}

impl Default for OrderFeed {
    fn default() -> Self {
        Self::new()
    }
}
