//! Couriers slice: the admin console's courier roster.

use crate::remote::RemoteStatus;
use greenmart_commerce::ids::CourierId;
use greenmart_commerce::order::Courier;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// State behind the courier management page.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CouriersSlice {
    /// Known couriers.
    pub couriers: Vec<Courier>,
    /// Fetch status.
    pub status: RemoteStatus,
}

impl CouriersSlice {
    /// Create an empty slice.
    pub fn new() -> Self {
        Self::default()
    }

    /// A fetch was kicked off.
    pub fn fetch_started(&mut self) {
        self.status = RemoteStatus::Loading;
    }

    /// A fetch returned the courier roster.
    pub fn fetch_loaded(&mut self, couriers: Vec<Courier>) {
        debug!(count = couriers.len(), "courier roster loaded");
        self.couriers = couriers;
        self.status = RemoteStatus::Idle;
    }

    /// A fetch failed.
    pub fn fetch_failed(&mut self, error: impl Into<String>) {
        self.status = RemoteStatus::Failed(error.into());
    }

    /// Record a courier the backend confirmed, replacing any existing entry
    /// with the same ID (covers both create and update).
    pub fn upsert(&mut self, courier: Courier) {
        match self.couriers.iter_mut().find(|c| c.id == courier.id) {
            Some(existing) => *existing = courier,
            None => self.couriers.push(courier),
        }
    }

    /// Look up a courier.
    pub fn get(&self, courier_id: &CourierId) -> Option<&Courier> {
        self.couriers.iter().find(|c| &c.id == courier_id)
    }

    /// Mutable lookup, used when assigning orders.
    pub fn get_mut(&mut self, courier_id: &CourierId) -> Option<&mut Courier> {
        self.couriers.iter_mut().find(|c| &c.id == courier_id)
    }

    /// Couriers able to take a new order right now.
    pub fn available(&self) -> Vec<&Courier> {
        self.couriers.iter().filter(|c| c.has_capacity()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn courier(id: &str, max_load: i64) -> Courier {
        Courier {
            id: CourierId::new(id),
            name: id.to_string(),
            email: format!("{}@example.com", id),
            phone: None,
            service_provider: "Local".to_string(),
            current_load: 0,
            max_load,
            is_active: true,
            assigned_orders: Vec::new(),
            created_at: 0,
        }
    }

    #[test]
    fn test_upsert_inserts_then_replaces() {
        let mut slice = CouriersSlice::new();
        slice.upsert(courier("cr-1", 5));
        assert_eq!(slice.couriers.len(), 1);

        let mut updated = courier("cr-1", 8);
        updated.name = "Renamed".to_string();
        slice.upsert(updated);
        assert_eq!(slice.couriers.len(), 1);
        assert_eq!(slice.get(&CourierId::new("cr-1")).unwrap().max_load, 8);
    }

    #[test]
    fn test_available_filters_full_couriers() {
        let mut slice = CouriersSlice::new();
        let mut full = courier("cr-1", 1);
        full.current_load = 1;
        slice.upsert(full);
        slice.upsert(courier("cr-2", 5));

        let available = slice.available();
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].id, CourierId::new("cr-2"));
    }

    #[test]
    fn test_fetch_lifecycle() {
        let mut slice = CouriersSlice::new();
        slice.fetch_started();
        assert!(slice.status.is_loading());
        slice.fetch_failed("timeout");
        assert_eq!(slice.status.error(), Some("timeout"));
    }
}
