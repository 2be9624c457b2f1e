//! Asset ID generation and parsing.
//!
//! IDs follow a uniform `{PREFIX}:{suffix}` format, where the prefix names
//! the asset type family and the suffix is an 8-character random token:
//!
//! | Asset type | Prefix | Example |
//! |------------|--------|----------------|
//! | Stock | `EQ` | `EQ:a1b2c3d4` |
//! | ETF | `ETF` | `ETF:x9y8z7w6` |
//! | Bond | `BND` | `BND:m2n3o4p5` |
//! | Crypto | `CRY` | `CRY:q6r7s8t9` |
//! | Gold / Silver | `PREC` | `PREC:u0v1w2x3` |
//! | Commodity | `CMD` | `CMD:abcd1234` |
//! | Other | `ALT` | `ALT:efgh5678` |
//!
//! The core treats IDs as opaque row keys; these helpers exist so the
//! external creation flow and tests mint well-formed ones.

use uuid::Uuid;

use super::assets_model::{AssetClass, AssetType};

/// The delimiter used in all asset IDs (colon)
pub const ASSET_ID_DELIMITER: char = ':';

/// Prefix for stock assets
pub const STOCK_PREFIX: &str = "EQ";
/// Prefix for ETF assets
pub const ETF_PREFIX: &str = "ETF";
/// Prefix for bond assets
pub const BOND_PREFIX: &str = "BND";
/// Prefix for crypto assets
pub const CRYPTO_PREFIX: &str = "CRY";
/// Prefix for precious metal assets (gold, silver)
pub const PRECIOUS_PREFIX: &str = "PREC";
/// Prefix for other physical commodity assets
pub const COMMODITY_PREFIX: &str = "CMD";
/// Prefix for unrecognized (generic) assets
pub const OTHER_PREFIX: &str = "ALT";

/// Length of the random portion of generated asset IDs
const RANDOM_ID_LENGTH: usize = 8;

/// Alphabet for generating random ID suffixes (alphanumeric: a-z, 0-9)
const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A parsed `{PREFIX}:{suffix}` asset ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAssetId {
    pub prefix: String,
    pub suffix: String,
}

/// Returns the ID prefix for an asset type.
pub const fn asset_type_prefix(asset_type: AssetType) -> &'static str {
    match asset_type {
        AssetType::Stock => STOCK_PREFIX,
        AssetType::Etf => ETF_PREFIX,
        AssetType::Bond => BOND_PREFIX,
        AssetType::Crypto => CRYPTO_PREFIX,
        AssetType::Gold | AssetType::Silver => PRECIOUS_PREFIX,
        AssetType::Commodity => COMMODITY_PREFIX,
        AssetType::Other => OTHER_PREFIX,
    }
}

/// Generates a random 8-character suffix.
pub fn random_suffix() -> String {
    Uuid::new_v4()
        .as_bytes()
        .iter()
        .take(RANDOM_ID_LENGTH)
        .map(|b| ALPHABET[*b as usize % ALPHABET.len()] as char)
        .collect()
}

/// Generates a new prefixed asset ID for the given type.
pub fn generate_asset_id(asset_type: AssetType) -> String {
    format!(
        "{}{}{}",
        asset_type_prefix(asset_type),
        ASSET_ID_DELIMITER,
        random_suffix()
    )
}

/// Parses an asset ID into its prefix and suffix.
///
/// Returns `None` when the ID does not carry the delimiter or either part
/// is empty. Opaque externally minted IDs simply fail to parse; that is not
/// an error anywhere in the core.
pub fn parse_asset_id(id: &str) -> Option<ParsedAssetId> {
    let (prefix, suffix) = id.split_once(ASSET_ID_DELIMITER)?;
    if prefix.is_empty() || suffix.is_empty() {
        return None;
    }
    Some(ParsedAssetId {
        prefix: prefix.to_string(),
        suffix: suffix.to_string(),
    })
}

/// Returns the display class implied by an ID prefix, when recognized.
///
/// `PREC` is shared by gold and silver, so only the class (not the exact
/// type) is recoverable from an ID.
pub fn class_from_asset_id(id: &str) -> Option<AssetClass> {
    let parsed = parse_asset_id(id)?;
    match parsed.prefix.as_str() {
        STOCK_PREFIX | ETF_PREFIX | BOND_PREFIX | CRYPTO_PREFIX => Some(AssetClass::Tradable),
        PRECIOUS_PREFIX | COMMODITY_PREFIX => Some(AssetClass::Physical),
        OTHER_PREFIX => Some(AssetClass::Generic),
        _ => None,
    }
}
