//! Row virtualization policy for the asset list.
//!
//! The controller owns the only state the core keeps between renders: one
//! [`MountState`] per row id. It decides which rows carry a real card vs. a
//! placeholder and supplies the constant-height layout and window
//! parameters the scrolling container needs. It renders nothing itself.

use std::collections::HashMap;
use std::ops::Range;

use log::{debug, warn};

use super::listview_model::{ItemLayout, ListContent, MountState, RowPresentation, WindowConfig};
use crate::assets::Asset;

pub struct VirtualizedListController {
    config: WindowConfig,
    /// Row ids in display order, mirroring the backing collection.
    order: Vec<String>,
    /// Mount state per id. Monotonic per id within one controller lifetime.
    row_states: HashMap<String, MountState>,
}

impl VirtualizedListController {
    pub fn new() -> Self {
        Self::with_config(WindowConfig::default())
    }

    pub fn with_config(config: WindowConfig) -> Self {
        VirtualizedListController {
            config,
            order: Vec::new(),
            row_states: HashMap::new(),
        }
    }

    /// Stable row identity for an asset. Reused ids keep their row identity
    /// across reloads even when every other field changed.
    pub fn key_for(asset: &Asset) -> &str {
        &asset.id
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn row_ids(&self) -> &[String] {
        &self.order
    }

    /// Replaces the row set from a freshly loaded collection, diffing by id.
    ///
    /// Surviving ids keep their mount state (a pull-to-refresh must not
    /// remount anything), new ids inside the initial render batch mount
    /// immediately, other new ids start unmounted, and states for ids that
    /// disappeared are dropped. Duplicate ids share one state entry,
    /// last-one-wins; the renderer stays well-defined either way.
    pub fn sync_rows(&mut self, assets: &[Asset]) {
        let mut states: HashMap<String, MountState> = HashMap::with_capacity(assets.len());
        let mut order: Vec<String> = Vec::with_capacity(assets.len());

        for (index, asset) in assets.iter().enumerate() {
            let id = Self::key_for(asset);
            let baseline = if index < self.config.initial_render_count {
                MountState::Mounted
            } else {
                MountState::Unmounted
            };
            // Monotonic: a retained row can only move forward.
            let state = match self.row_states.get(id) {
                Some(prev) => (*prev).max(baseline),
                None => baseline,
            };
            if states.insert(id.to_string(), state).is_some() {
                warn!("Duplicate asset id '{id}' in backing collection; row state is shared");
            }
            order.push(id.to_string());
        }

        let dropped = self
            .row_states
            .keys()
            .filter(|id| !states.contains_key(*id))
            .count();
        if dropped > 0 {
            debug!("Dropped render state for {dropped} removed row(s)");
        }

        self.row_states = states;
        self.order = order;
    }

    /// Current mount state for a row id, if the row exists.
    pub fn mount_state(&self, id: &str) -> Option<MountState> {
        self.row_states.get(id).copied()
    }

    /// What the container should render for the row id right now.
    pub fn row_presentation(&self, id: &str) -> Option<RowPresentation> {
        self.mount_state(id).map(|state| match state {
            MountState::Mounted => RowPresentation::Card,
            MountState::Unmounted | MountState::Placeholder => RowPresentation::Placeholder,
        })
    }

    /// Presentation by display index.
    pub fn presentation_at(&self, index: usize) -> Option<RowPresentation> {
        self.order
            .get(index)
            .and_then(|id| self.row_presentation(id))
    }

    /// Constant-height layout for scroll-offset math.
    ///
    /// Applied uniformly to every row regardless of variant.
    pub fn item_layout(&self, index: usize) -> ItemLayout {
        ItemLayout {
            offset: index as f32 * self.config.item_height,
            length: self.config.item_height,
        }
    }

    /// Marks rows as materialized by the render window: anything still
    /// unmounted gets a placeholder. One-directional.
    pub fn mark_windowed_range(&mut self, range: Range<usize>) {
        for index in range {
            if let Some(id) = self.order.get(index) {
                promote(&mut self.row_states, id, MountState::Placeholder);
            }
        }
    }

    /// Marks a row as visible: it mounts its full card and never reverts.
    /// Unknown ids are ignored (the row may have been deleted mid-scroll).
    pub fn mark_viewable(&mut self, id: &str) {
        promote(&mut self.row_states, id, MountState::Mounted);
    }

    /// Marks a contiguous range of display indices as visible.
    pub fn mark_viewable_range(&mut self, range: Range<usize>) {
        for index in range {
            if let Some(id) = self.order.get(index) {
                promote(&mut self.row_states, id, MountState::Mounted);
            }
        }
    }

    /// Rows the render window should materialize for this scroll position,
    /// overscan included.
    pub fn render_window(&self, scroll_offset: f32, viewport_height: f32) -> Range<usize> {
        self.index_window(scroll_offset, viewport_height, self.config.overscan)
    }

    /// Rows actually intersecting the viewport, no overscan.
    pub fn visible_rows(&self, scroll_offset: f32, viewport_height: f32) -> Range<usize> {
        self.index_window(scroll_offset, viewport_height, 0)
    }

    fn index_window(
        &self,
        scroll_offset: f32,
        viewport_height: f32,
        overscan: usize,
    ) -> Range<usize> {
        let len = self.order.len();
        if len == 0 {
            return 0..0;
        }
        let item = self.config.item_height;
        let top = scroll_offset.max(0.0);
        let first = ((top / item).floor() as usize)
            .saturating_sub(overscan)
            .min(len);
        let last = (((top + viewport_height.max(0.0)) / item).floor() as usize + 1 + overscan)
            .min(len);
        first..last
    }

    /// Exactly one of data rows / empty-state.
    pub fn content(&self) -> ListContent {
        if self.order.is_empty() {
            ListContent::Empty
        } else {
            ListContent::Rows(self.order.len())
        }
    }
}

impl Default for VirtualizedListController {
    fn default() -> Self {
        Self::new()
    }
}

fn promote(states: &mut HashMap<String, MountState>, id: &str, target: MountState) {
    if let Some(state) = states.get_mut(id) {
        if *state < target {
            *state = target;
        }
    }
}
