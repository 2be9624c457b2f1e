//! Valuation output model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Derived financial metrics for a single holding.
///
/// Values are unrounded; display rounding and currency formatting are a
/// presentation concern layered on top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Valuation {
    pub current_value: Decimal,
    pub gain_loss: Decimal,
    /// Gain/loss as a percentage of cost basis, 0-100 scaled. Zero when the
    /// cost basis is zero.
    pub gain_loss_percent: Decimal,
}

impl Valuation {
    pub fn zero() -> Self {
        Valuation {
            current_value: Decimal::ZERO,
            gain_loss: Decimal::ZERO,
            gain_loss_percent: Decimal::ZERO,
        }
    }
}
