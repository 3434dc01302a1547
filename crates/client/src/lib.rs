// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Consumer edge of the comanda ordering system.
//!
//! This crate talks to the external ordering endpoints on behalf of the
//! engines: it submits prepared orders, issues lifecycle-checked status
//! updates, fetches catalog options under the selection engine's
//! generation guard, and keeps dashboards and trackers in sync through a
//! cancellable polling feed. All synchronization is client polling; there
//! is no push channel.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod feed;
mod flows;
mod gateway;

pub use error::ClientError;
pub use feed::{
    DASHBOARD_POLL_INTERVAL, FeedEvent, OrderFeed, TRACKER_POLL_INTERVAL,
};
pub use flows::{refresh_category_options, submit_cart_order, transition_order_status};
pub use gateway::{GatewayError, HttpOrderGateway, OrderGateway};
