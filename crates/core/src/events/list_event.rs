//! List interaction event types.

use serde::{Deserialize, Serialize};

/// Events emitted by the list core for the owning UI layer.
///
/// These are facts, not commands: the UI subscribes to react (dismiss an
/// open dropdown when scrolling starts, stop the refresh spinner when a
/// reload lands) without sharing mutable state with the core.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ListEvent {
    /// The user started scrolling the asset list.
    ScrollBegan,

    /// A pull-to-refresh reload was requested.
    RefreshStarted,

    /// A reload finished and the row set was replaced.
    RefreshCompleted { row_count: usize },

    /// A physical asset's market price was updated manually.
    MarketPriceUpdated { asset_id: String },
}

impl ListEvent {
    /// Creates a RefreshCompleted event.
    pub fn refresh_completed(row_count: usize) -> Self {
        Self::RefreshCompleted { row_count }
    }

    /// Creates a MarketPriceUpdated event.
    pub fn market_price_updated(asset_id: impl Into<String>) -> Self {
        Self::MarketPriceUpdated {
            asset_id: asset_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_event_serialization() {
        let event = ListEvent::market_price_updated("PREC:u0v1w2x3");
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("market_price_updated"));

        let deserialized: ListEvent = serde_json::from_str(&json).unwrap();
        match deserialized {
            ListEvent::MarketPriceUpdated { asset_id } => {
                assert_eq!(asset_id, "PREC:u0v1w2x3");
            }
            _ => panic!("Expected MarketPriceUpdated"),
        }
    }

    #[test]
    fn test_refresh_completed_carries_row_count() {
        let event = ListEvent::refresh_completed(7);
        assert_eq!(event, ListEvent::RefreshCompleted { row_count: 7 });
    }
}
