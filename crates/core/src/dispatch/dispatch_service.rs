//! Maps classified assets to the card variant the list renders.

use std::sync::Arc;

use crate::assets::{Asset, AssetClass};
use crate::errors::{Result, ValidationError};
use crate::valuation::{effective_price, physical_valuation, tradable_valuation, Valuation};

use super::dispatch_model::{
    CardActions, CardInteractionHandler, ChartData, GenericCardProps, PhysicalCardProps,
    RenderedCard, TradableCardProps, ValueUpdateAction,
};

/// Builds render-ready cards from asset records.
///
/// Classification picks the variant, the valuation calculator supplies the
/// derived metrics, and the interaction handler is bound per card. The
/// value-update handle is issued to physical cards only.
pub struct RenderDispatcher {
    handler: Arc<dyn CardInteractionHandler>,
}

impl RenderDispatcher {
    pub fn new(handler: Arc<dyn CardInteractionHandler>) -> Self {
        RenderDispatcher { handler }
    }

    /// Dispatches one asset to its display card.
    ///
    /// Tradable records missing their instrument section or current price
    /// surface the valuation contract violation unchanged.
    pub fn dispatch(&self, asset: &Asset) -> Result<RenderedCard> {
        match asset.class() {
            AssetClass::Tradable => self.tradable_card(asset),
            AssetClass::Physical => self.physical_card(asset),
            AssetClass::Generic => Ok(self.generic_card(asset)),
        }
    }

    fn tradable_card(&self, asset: &Asset) -> Result<RenderedCard> {
        let instrument = asset.instrument.as_ref().ok_or_else(|| {
            ValidationError::MissingField(format!("instrument (asset {})", asset.id))
        })?;
        let current_price = instrument.current_price.ok_or_else(|| {
            ValidationError::MissingField(format!("currentPrice (asset {})", asset.id))
        })?;
        let valuation =
            tradable_valuation(asset.quantity, instrument.average_purchase_price, current_price);

        let props = TradableCardProps {
            asset_id: asset.id.clone(),
            name: asset.name.clone(),
            asset_type: asset.asset_type,
            symbol: instrument.symbol.clone(),
            exchange: instrument.exchange.clone(),
            currency: instrument.currency.clone(),
            quantity: asset.quantity,
            valuation,
            day_change: instrument.day_change,
            day_change_percent: instrument.day_change_percent,
            sector: instrument.sector.clone(),
            market_cap: instrument.market_cap,
            dividend_yield: instrument.dividend_yield,
            yield_to_maturity: instrument.yield_to_maturity,
            maturity_date: instrument.maturity_date,
            chart: ChartData::from_history(instrument.price_history.as_deref()),
        };
        Ok(RenderedCard::Tradable {
            props,
            actions: self.actions_for(asset),
        })
    }

    fn physical_card(&self, asset: &Asset) -> Result<RenderedCard> {
        let details = asset.holding_details.as_ref().ok_or_else(|| {
            ValidationError::MissingField(format!("holdingDetails (asset {})", asset.id))
        })?;
        let valuation = physical_valuation(
            asset.quantity,
            details.purchase_price,
            details.current_market_price,
        );

        let props = PhysicalCardProps {
            asset_id: asset.id.clone(),
            name: asset.name.clone(),
            asset_type: asset.asset_type,
            unit: details.unit,
            quantity: asset.quantity,
            valuation,
            purchase_price: details.purchase_price,
            effective_price: effective_price(details.purchase_price, details.current_market_price),
            manual_price_override: details.manual_price_override,
            purity: details.purity.clone(),
            storage_location: details.storage_location.clone(),
            certificate_id: details.certificate_id.clone(),
        };
        let shared = Arc::new(asset.clone());
        Ok(RenderedCard::Physical {
            props,
            actions: CardActions::new(Arc::clone(&shared), Arc::clone(&self.handler)),
            value_update: ValueUpdateAction::new(shared, Arc::clone(&self.handler)),
        })
    }

    fn generic_card(&self, asset: &Asset) -> RenderedCard {
        // Minimal fallback: whatever derived fields the record already
        // carries, no variant-specific sections.
        let props = GenericCardProps {
            asset_id: asset.id.clone(),
            name: asset.name.clone(),
            asset_type: asset.asset_type,
            quantity: asset.quantity,
            valuation: Valuation {
                current_value: asset.total_value,
                gain_loss: asset.total_gain_loss,
                gain_loss_percent: asset.total_gain_loss_percent,
            },
        };
        RenderedCard::Generic {
            props,
            actions: self.actions_for(asset),
        }
    }

    fn actions_for(&self, asset: &Asset) -> CardActions {
        CardActions::new(Arc::new(asset.clone()), Arc::clone(&self.handler))
    }
}
