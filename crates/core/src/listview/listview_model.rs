//! List virtualization models.

use serde::{Deserialize, Serialize};

use super::listview_constants::{
    BATCH_SIZE, INITIAL_RENDER_COUNT, ITEM_HEIGHT, OVERSCAN_ROWS, WINDOW_SIZE,
};

/// Per-row mount lifecycle.
///
/// Ordered: a row only ever moves forward (`Unmounted -> Placeholder ->
/// Mounted`) within one list session. Once a card's heavy content has been
/// mounted it stays mounted even off-screen, trading memory for never
/// resetting card-local state (e.g. a chosen chart timeframe) on re-scroll.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MountState {
    #[default]
    Unmounted,
    Placeholder,
    Mounted,
}

/// What the scrolling container should render for a row right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RowPresentation {
    /// Fixed-height lightweight stand-in.
    Placeholder,
    /// The full card for the asset's display variant.
    Card,
}

/// Scroll-offset geometry for a row, constant-height by policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemLayout {
    pub offset: f32,
    pub length: f32,
}

/// Windowing parameters handed to the scrolling container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowConfig {
    pub item_height: f32,
    pub initial_render_count: usize,
    pub batch_size: usize,
    pub window_size: usize,
    pub overscan: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            item_height: ITEM_HEIGHT,
            initial_render_count: INITIAL_RENDER_COUNT,
            batch_size: BATCH_SIZE,
            window_size: WINDOW_SIZE,
            overscan: OVERSCAN_ROWS,
        }
    }
}

/// The one thing a list renders: data rows or the empty-state slot.
///
/// The controller reports `Empty` explicitly so the owning view requests
/// its empty-state component instead of silently rendering zero rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListContent {
    Rows(usize),
    Empty,
}
