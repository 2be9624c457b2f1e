//! Assembles the asset list pipeline: store -> classify -> valuate ->
//! virtualization -> rendered rows.

use std::ops::Range;
use std::sync::Arc;

use log::debug;
use rust_decimal::Decimal;

use crate::assets::{Asset, AssetStoreTrait};
use crate::dispatch::{CardInteractionHandler, RenderDispatcher, RenderedCard};
use crate::errors::{Error, Result};
use crate::events::{ListEvent, ListEventSink};
use crate::listview::{ItemLayout, ListContent, RowPresentation, VirtualizedListController, WindowConfig};
use crate::valuation::ValuationService;

/// A row as emitted to the scrolling container: either the full card or a
/// fixed-height placeholder, plus its layout.
#[derive(Debug, Clone)]
pub enum ListRow {
    Placeholder { asset_id: String, layout: ItemLayout },
    Card { card: RenderedCard, layout: ItemLayout },
}

/// Orchestrates the asset list for one screen.
///
/// Owns the per-render read snapshot of the backing collection (replaced
/// wholesale on each reload, never patched) and the per-row mount state in
/// the controller. All persistence flows back through the injected store.
pub struct PortfolioViewService {
    store: Arc<dyn AssetStoreTrait>,
    sink: Arc<dyn ListEventSink>,
    valuation: ValuationService,
    dispatcher: RenderDispatcher,
    controller: VirtualizedListController,
    assets: Vec<Asset>,
}

impl PortfolioViewService {
    pub fn new(
        store: Arc<dyn AssetStoreTrait>,
        sink: Arc<dyn ListEventSink>,
        handler: Arc<dyn CardInteractionHandler>,
    ) -> Self {
        Self::with_config(store, sink, handler, WindowConfig::default())
    }

    pub fn with_config(
        store: Arc<dyn AssetStoreTrait>,
        sink: Arc<dyn ListEventSink>,
        handler: Arc<dyn CardInteractionHandler>,
        config: WindowConfig,
    ) -> Self {
        PortfolioViewService {
            store,
            sink,
            valuation: ValuationService::new(),
            dispatcher: RenderDispatcher::new(handler),
            controller: VirtualizedListController::with_config(config),
            assets: Vec::new(),
        }
    }

    /// Pull-to-refresh: reload the backing collection wholesale, re-derive
    /// valuations, and diff the row set by id. Mount state of surviving
    /// rows is untouched. Overlapping refreshes need no cancellation;
    /// reloads are idempotent reads and the last one to complete wins.
    pub async fn refresh(&mut self) -> Result<ListContent> {
        self.sink.emit(ListEvent::RefreshStarted);

        let mut assets = self.store.load_assets().await?;
        self.valuation.valuate(&mut assets)?;
        self.controller.sync_rows(&assets);
        self.assets = assets;

        let content = self.controller.content();
        let row_count = match content {
            ListContent::Rows(n) => n,
            ListContent::Empty => 0,
        };
        debug!("Refresh completed with {row_count} row(s)");
        self.sink.emit(ListEvent::refresh_completed(row_count));
        Ok(content)
    }

    /// Manual market price update for a physical asset: recomputes the
    /// derived fields immediately, then persists through the store.
    pub async fn update_market_price(&mut self, asset_id: &str, price: Decimal) -> Result<()> {
        let asset = self
            .assets
            .iter_mut()
            .find(|a| a.id == asset_id)
            .ok_or_else(|| Error::Asset(format!("asset {asset_id} not found")))?;

        self.valuation.apply_manual_price(asset, price)?;
        self.store.update_market_price(asset_id, price).await?;
        self.sink.emit(ListEvent::market_price_updated(asset_id));
        Ok(())
    }

    /// Scroll notification from the container. Promotes rows entering the
    /// render window to placeholders and visible rows to mounted cards, and
    /// tells the UI layer scrolling began (so it can dismiss transient
    /// overlays).
    pub fn handle_scroll(&mut self, scroll_offset: f32, viewport_height: f32) {
        self.sink.emit(ListEvent::ScrollBegan);
        let window = self.controller.render_window(scroll_offset, viewport_height);
        self.controller.mark_windowed_range(window);
        let visible = self.controller.visible_rows(scroll_offset, viewport_height);
        self.controller.mark_viewable_range(visible);
    }

    /// Exactly one of data rows / empty-state.
    pub fn content(&self) -> ListContent {
        self.controller.content()
    }

    /// Emits the rows for a window of display indices.
    ///
    /// Mounted rows dispatch to their full card; everything else emits a
    /// placeholder at the same fixed height.
    pub fn rows(&self, window: Range<usize>) -> Result<Vec<ListRow>> {
        let mut rows = Vec::with_capacity(window.len());
        for index in window {
            let Some(asset) = self.assets.get(index) else {
                break;
            };
            let layout = self.controller.item_layout(index);
            match self.controller.presentation_at(index) {
                Some(RowPresentation::Card) => rows.push(ListRow::Card {
                    card: self.dispatcher.dispatch(asset)?,
                    layout,
                }),
                _ => rows.push(ListRow::Placeholder {
                    asset_id: asset.id.clone(),
                    layout,
                }),
            }
        }
        Ok(rows)
    }

    /// Dispatches a single asset by id, regardless of mount state.
    pub fn card_for(&self, asset_id: &str) -> Result<RenderedCard> {
        let asset = self
            .assets
            .iter()
            .find(|a| a.id == asset_id)
            .ok_or_else(|| Error::Asset(format!("asset {asset_id} not found")))?;
        self.dispatcher.dispatch(asset)
    }

    /// The virtualization controller, for layout and key queries by the
    /// scrolling container.
    pub fn controller(&self) -> &VirtualizedListController {
        &self.controller
    }
}
