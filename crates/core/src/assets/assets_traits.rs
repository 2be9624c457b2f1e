use rust_decimal::Decimal;

use super::assets_model::Asset;
use crate::errors::Result;

/// Trait defining the contract with the backing asset store.
///
/// The store owns the collection; the core reads it wholesale on each
/// reload and writes back only through the explicit mutations below. The
/// core never keeps a second independently-mutable copy.
#[async_trait::async_trait]
pub trait AssetStoreTrait: Send + Sync {
    /// Loads the full backing collection, in display order.
    ///
    /// Reloads replace the collection wholesale; the store never patches it
    /// incrementally. Reads are idempotent, so overlapping reloads need no
    /// cancellation (last completion wins).
    async fn load_assets(&self) -> Result<Vec<Asset>>;

    /// Persists a manually entered market price for a physical asset.
    async fn update_market_price(&self, asset_id: &str, price: Decimal) -> Result<()>;

    /// Removes an asset. The list drops the row's render state on the next
    /// sync; no further obligation falls on the core.
    async fn delete_asset(&self, asset_id: &str) -> Result<()>;
}
