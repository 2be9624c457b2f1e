//! Render dispatch models: card props and interaction handles.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::assets::{Asset, AssetType, PricePoint, WeightUnit};
use crate::valuation::Valuation;

/// Interaction callbacks a card can trigger.
///
/// Implemented by the owning UI layer; the dispatcher binds the handler to
/// each card together with the asset reference it must be invoked with.
pub trait CardInteractionHandler: Send + Sync {
    /// The user asked for AI insights on the asset.
    fn open_insights(&self, asset: &Asset);

    /// Long-press manage action (edit/delete flows downstream).
    fn open_manage(&self, asset: &Asset);

    /// The user asked to enter a new market price. Only ever reachable from
    /// physical cards; the dispatcher does not wire this handle anywhere
    /// else.
    fn request_value_update(&self, asset: &Asset);
}

/// Insights + manage handles, present on every card variant.
#[derive(Clone)]
pub struct CardActions {
    asset: Arc<Asset>,
    handler: Arc<dyn CardInteractionHandler>,
}

impl CardActions {
    pub fn new(asset: Arc<Asset>, handler: Arc<dyn CardInteractionHandler>) -> Self {
        CardActions { asset, handler }
    }

    pub fn open_insights(&self) {
        self.handler.open_insights(&self.asset);
    }

    pub fn open_manage(&self) {
        self.handler.open_manage(&self.asset);
    }

    /// The asset this card renders.
    pub fn asset(&self) -> &Asset {
        &self.asset
    }
}

impl fmt::Debug for CardActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardActions")
            .field("asset_id", &self.asset.id)
            .finish()
    }
}

/// Value-update handle, issued exclusively to physical cards.
#[derive(Clone)]
pub struct ValueUpdateAction {
    asset: Arc<Asset>,
    handler: Arc<dyn CardInteractionHandler>,
}

impl ValueUpdateAction {
    pub fn new(asset: Arc<Asset>, handler: Arc<dyn CardInteractionHandler>) -> Self {
        ValueUpdateAction { asset, handler }
    }

    pub fn request(&self) {
        self.handler.request_value_update(&self.asset);
    }
}

impl fmt::Debug for ValueUpdateAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueUpdateAction")
            .field("asset_id", &self.asset.id)
            .finish()
    }
}

/// Chart content for a tradable card.
///
/// When no history is available the card shows an explicit unavailable
/// state; the core never fabricates placeholder points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartData {
    Points { points: Vec<PricePoint> },
    Unavailable,
}

impl ChartData {
    /// Builds chart content from an optional price history, collapsing
    /// missing and empty histories into the unavailable state.
    pub fn from_history(history: Option<&[PricePoint]>) -> Self {
        match history {
            Some(points) if !points.is_empty() => ChartData::Points {
                points: points.to_vec(),
            },
            _ => ChartData::Unavailable,
        }
    }
}

/// Display payload for a tradable market card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradableCardProps {
    pub asset_id: String,
    pub name: String,
    pub asset_type: AssetType,
    pub symbol: String,
    pub exchange: Option<String>,
    pub currency: String,
    pub quantity: Decimal,
    pub valuation: Valuation,
    pub day_change: Option<Decimal>,
    pub day_change_percent: Option<Decimal>,
    pub sector: Option<String>,
    pub market_cap: Option<Decimal>,
    pub dividend_yield: Option<Decimal>,
    pub yield_to_maturity: Option<Decimal>,
    pub maturity_date: Option<NaiveDate>,
    pub chart: ChartData,
}

/// Display payload for a physical holding card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalCardProps {
    pub asset_id: String,
    pub name: String,
    pub asset_type: AssetType,
    pub unit: WeightUnit,
    pub quantity: Decimal,
    pub valuation: Valuation,
    pub purchase_price: Decimal,
    pub effective_price: Decimal,
    pub manual_price_override: bool,
    pub purity: Option<String>,
    pub storage_location: Option<String>,
    pub certificate_id: Option<String>,
}

/// Display payload for the generic fallback card: minimal, type-agnostic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericCardProps {
    pub asset_id: String,
    pub name: String,
    pub asset_type: AssetType,
    pub quantity: Decimal,
    pub valuation: Valuation,
}

/// A fully wired card, ready for the scrolling container to render.
///
/// Every variant carries insights + manage handles; only `Physical` carries
/// the value-update handle. Calling value-update on another variant is not
/// a runtime error, it is unrepresentable.
#[derive(Debug, Clone)]
pub enum RenderedCard {
    Tradable {
        props: TradableCardProps,
        actions: CardActions,
    },
    Physical {
        props: PhysicalCardProps,
        actions: CardActions,
        value_update: ValueUpdateAction,
    },
    Generic {
        props: GenericCardProps,
        actions: CardActions,
    },
}

impl RenderedCard {
    /// The asset id behind this card.
    pub fn asset_id(&self) -> &str {
        match self {
            RenderedCard::Tradable { props, .. } => &props.asset_id,
            RenderedCard::Physical { props, .. } => &props.asset_id,
            RenderedCard::Generic { props, .. } => &props.asset_id,
        }
    }

    /// The insights/manage handles common to all variants.
    pub fn actions(&self) -> &CardActions {
        match self {
            RenderedCard::Tradable { actions, .. }
            | RenderedCard::Physical { actions, .. }
            | RenderedCard::Generic { actions, .. } => actions,
        }
    }
}
