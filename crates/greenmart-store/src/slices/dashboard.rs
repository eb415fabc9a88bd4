//! Dashboard slice: admin stats and recent orders.

use crate::remote::RemoteStatus;
use greenmart_commerce::dashboard::{recent_orders, DashboardStats};
use greenmart_commerce::money::Currency;
use greenmart_commerce::order::Order;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// State behind the admin dashboard.
///
/// Stats normally arrive precomputed from the backend's analytics endpoint;
/// `fetch_loaded` stores them as-is but keeps only the newest
/// `recent_limit` orders for the recent-activity panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardSlice {
    /// Headline figures.
    pub stats: DashboardStats,
    /// Most recently placed orders, newest first.
    pub recent_orders: Vec<Order>,
    /// How many recent orders to keep.
    pub recent_limit: usize,
    /// Fetch status.
    pub status: RemoteStatus,
}

impl DashboardSlice {
    /// Create an empty slice in the given currency.
    pub fn new(currency: Currency, recent_limit: usize) -> Self {
        Self {
            stats: DashboardStats::empty(currency),
            recent_orders: Vec::new(),
            recent_limit,
            status: RemoteStatus::Idle,
        }
    }

    /// A fetch was kicked off.
    pub fn fetch_started(&mut self) {
        self.status = RemoteStatus::Loading;
    }

    /// A fetch returned stats and orders; the newest `recent_limit`
    /// orders are kept, newest first.
    pub fn fetch_loaded(&mut self, stats: DashboardStats, orders: Vec<Order>) {
        self.recent_orders = recent_orders(&orders, self.recent_limit)
            .into_iter()
            .cloned()
            .collect();
        debug!(
            total_orders = stats.total_orders,
            recent = self.recent_orders.len(),
            "dashboard loaded"
        );
        self.stats = stats;
        self.status = RemoteStatus::Idle;
    }

    /// A fetch failed.
    pub fn fetch_failed(&mut self, error: impl Into<String>) {
        self.status = RemoteStatus::Failed(error.into());
    }
}
