//! Valuation calculator and the service applying it across the asset list.

use chrono::Utc;
use log::{debug, warn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::valuation_model::Valuation;
use crate::assets::{Asset, AssetClass};
use crate::constants::{DECIMAL_PRECISION, QUANTITY_THRESHOLD};
use crate::errors::{Error, Result, ValidationError};

/// Check whether a quantity is large enough to be worth a log line when it
/// produces a degenerate valuation.
pub fn is_quantity_significant(quantity: &Decimal) -> bool {
    let threshold =
        Decimal::from_str_radix(QUANTITY_THRESHOLD, 10).unwrap_or_else(|_| Decimal::new(1, 8));
    quantity.abs() >= threshold
}

/// The price a physical holding is actually valued at: the user-maintained
/// market price when present, otherwise the purchase price.
///
/// This is the single place the fallback rule lives; callers never inline
/// it.
pub fn effective_price(purchase_price: Decimal, current_market_price: Option<Decimal>) -> Decimal {
    current_market_price.unwrap_or(purchase_price)
}

/// Percentage gain/loss over a cost basis, 0-100 scaled.
///
/// A zero cost basis yields zero rather than a division failure; negative
/// and oversized inputs propagate unclamped, since rejecting them is the
/// job of the creation/edit flows upstream.
fn gain_loss_percent(gain_loss: Decimal, cost_basis: Decimal) -> Decimal {
    if cost_basis.is_zero() {
        Decimal::ZERO
    } else {
        gain_loss / cost_basis * dec!(100)
    }
}

/// Valuation for a tradable market instrument.
///
/// `current_price` is required here; resolving its absence is the caller's
/// contract (see [`ValuationService::valuate_asset`]).
pub fn tradable_valuation(
    quantity: Decimal,
    average_purchase_price: Decimal,
    current_price: Decimal,
) -> Valuation {
    let current_value = quantity * current_price;
    let cost_basis = quantity * average_purchase_price;
    let gain_loss = current_value - cost_basis;
    Valuation {
        current_value,
        gain_loss,
        gain_loss_percent: gain_loss_percent(gain_loss, cost_basis),
    }
}

/// Valuation for a physical holding, applying the effective-price fallback.
pub fn physical_valuation(
    quantity: Decimal,
    purchase_price: Decimal,
    current_market_price: Option<Decimal>,
) -> Valuation {
    let price = effective_price(purchase_price, current_market_price);
    let current_value = quantity * price;
    let cost_basis = quantity * purchase_price;
    let gain_loss = current_value - cost_basis;
    Valuation {
        current_value,
        gain_loss,
        gain_loss_percent: gain_loss_percent(gain_loss, cost_basis),
    }
}

/// Applies the valuation calculator across asset records in place.
///
/// The pure functions above return unrounded numbers; this service rounds
/// only the stored percentage to [`DECIMAL_PRECISION`] before writing it
/// back to the record.
#[derive(Debug, Clone, Default)]
pub struct ValuationService;

impl ValuationService {
    pub fn new() -> Self {
        ValuationService
    }

    /// Recomputes the derived display fields for every asset in the slice.
    ///
    /// Fails fast on the first tradable record missing its instrument
    /// section or `current_price`: that is a caller contract violation
    /// (`ValidationError::MissingField`), never silently patched with a
    /// guessed price.
    pub fn valuate(&self, assets: &mut [Asset]) -> Result<()> {
        for asset in assets.iter_mut() {
            self.valuate_asset(asset)?;
        }
        Ok(())
    }

    /// Recomputes the derived display fields for a single asset.
    pub fn valuate_asset(&self, asset: &mut Asset) -> Result<()> {
        let valuation = match asset.class() {
            AssetClass::Tradable => {
                let instrument = asset.instrument.as_ref().ok_or_else(|| {
                    ValidationError::MissingField(format!("instrument (asset {})", asset.id))
                })?;
                let current_price = instrument.current_price.ok_or_else(|| {
                    ValidationError::MissingField(format!("currentPrice (asset {})", asset.id))
                })?;
                tradable_valuation(asset.quantity, instrument.average_purchase_price, current_price)
            }
            AssetClass::Physical => {
                let details = asset.holding_details.as_ref().ok_or_else(|| {
                    ValidationError::MissingField(format!("holdingDetails (asset {})", asset.id))
                })?;
                physical_valuation(
                    asset.quantity,
                    details.purchase_price,
                    details.current_market_price,
                )
            }
            // Generic assets carry no priceable shape; derived fields zero out.
            AssetClass::Generic => Valuation::zero(),
        };

        if asset.quantity.is_zero() || !is_quantity_significant(&asset.quantity) {
            debug!(
                "Asset {} has zero/insignificant quantity {}; valuation is degenerate",
                asset.id, asset.quantity
            );
        }

        asset.total_value = valuation.current_value;
        asset.total_gain_loss = valuation.gain_loss;
        asset.total_gain_loss_percent = valuation.gain_loss_percent.round_dp(DECIMAL_PRECISION);
        Ok(())
    }

    /// Applies a manually entered market price to a physical asset.
    ///
    /// Sets the override flag, recomputes the derived fields, and stamps
    /// `last_updated`. Targets that are not physical holdings are rejected;
    /// the dispatcher already withholds the value-update handle from them,
    /// so reaching this error means a collaborator bypassed the card
    /// contract.
    pub fn apply_manual_price(&self, asset: &mut Asset, new_price: Decimal) -> Result<()> {
        if asset.class() != AssetClass::Physical {
            warn!(
                "Rejected manual price update for non-physical asset {} ({})",
                asset.id,
                asset.asset_type.as_db_str()
            );
            return Err(Error::Asset(format!(
                "manual price update is only valid for physical assets (asset {})",
                asset.id
            )));
        }
        let details = asset.holding_details.as_mut().ok_or_else(|| {
            ValidationError::MissingField(format!("holdingDetails (asset {})", asset.id))
        })?;

        details.current_market_price = Some(new_price);
        details.manual_price_override = true;

        let valuation =
            physical_valuation(asset.quantity, details.purchase_price, Some(new_price));
        asset.total_value = valuation.current_value;
        asset.total_gain_loss = valuation.gain_loss;
        asset.total_gain_loss_percent = valuation.gain_loss_percent.round_dp(DECIMAL_PRECISION);
        asset.last_updated = Utc::now();
        Ok(())
    }
}
