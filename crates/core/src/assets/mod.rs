//! Assets module - domain models, classification, and store contracts.

mod asset_id;
mod assets_model;
mod assets_traits;


// Re-export the public interface
pub use asset_id::{
    asset_type_prefix, class_from_asset_id, generate_asset_id, parse_asset_id, random_suffix,
    ParsedAssetId, ASSET_ID_DELIMITER, BOND_PREFIX, COMMODITY_PREFIX, CRYPTO_PREFIX, ETF_PREFIX,
    OTHER_PREFIX, PRECIOUS_PREFIX, STOCK_PREFIX,
};
pub use assets_model::{
    Asset, AssetClass, AssetType, Instrument, PhysicalDetails, PricePoint, WeightUnit,
};
pub use assets_traits::AssetStoreTrait;
