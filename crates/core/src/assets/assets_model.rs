//! Asset domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Asset type tag carried by every record in the backing store.
///
/// The tag is the sole discriminator for display classification: membership
/// in the tradable or physical sets is decided here and nowhere else. Tags
/// the app does not recognize deserialize to `Other`, so a new type
/// introduced upstream degrades to the generic card instead of crashing the
/// list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", from = "String")]
pub enum AssetType {
    Stock,
    Etf,
    Bond,
    Crypto,
    Gold,
    Silver,
    Commodity,
    #[default]
    Other,
}

/// Display variant an asset renders as.
///
/// `Tradable` cards show market data and charts, `Physical` cards show the
/// manually maintained valuation, `Generic` cards show the minimal
/// type-agnostic fields only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetClass {
    Tradable,
    Physical,
    Generic,
}

impl AssetType {
    /// Returns the database string representation (SCREAMING_SNAKE_CASE).
    pub const fn as_db_str(&self) -> &'static str {
        match self {
            AssetType::Stock => "STOCK",
            AssetType::Etf => "ETF",
            AssetType::Bond => "BOND",
            AssetType::Crypto => "CRYPTO",
            AssetType::Gold => "GOLD",
            AssetType::Silver => "SILVER",
            AssetType::Commodity => "COMMODITY",
            AssetType::Other => "OTHER",
        }
    }

    /// Parses an asset type from its database string.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "STOCK" => Some(AssetType::Stock),
            "ETF" => Some(AssetType::Etf),
            "BOND" => Some(AssetType::Bond),
            "CRYPTO" => Some(AssetType::Crypto),
            "GOLD" => Some(AssetType::Gold),
            "SILVER" => Some(AssetType::Silver),
            "COMMODITY" => Some(AssetType::Commodity),
            "OTHER" => Some(AssetType::Other),
            _ => None,
        }
    }

    /// Total parser over arbitrary tag strings.
    ///
    /// Case-insensitive; anything outside the known set maps to `Other`.
    pub fn from_tag(s: &str) -> Self {
        Self::from_db_str(s.trim().to_uppercase().as_str()).unwrap_or(AssetType::Other)
    }

    /// Display classification for this tag.
    ///
    /// Pure and exhaustive: adding an `AssetType` variant without deciding
    /// its class is a compile error.
    pub const fn class(&self) -> AssetClass {
        match self {
            AssetType::Stock | AssetType::Etf | AssetType::Bond | AssetType::Crypto => {
                AssetClass::Tradable
            }
            AssetType::Gold | AssetType::Silver | AssetType::Commodity => AssetClass::Physical,
            AssetType::Other => AssetClass::Generic,
        }
    }

    /// Check if assets of this type are valued from a quoted market price.
    pub fn is_tradable(&self) -> bool {
        matches!(self.class(), AssetClass::Tradable)
    }

    /// Check if assets of this type are valued from a manually maintained price.
    pub fn is_physical(&self) -> bool {
        matches!(self.class(), AssetClass::Physical)
    }

    /// Returns a human-readable display name for the asset type.
    pub const fn display_name(&self) -> &'static str {
        match self {
            AssetType::Stock => "Stock",
            AssetType::Etf => "ETF",
            AssetType::Bond => "Bond",
            AssetType::Crypto => "Crypto",
            AssetType::Gold => "Gold",
            AssetType::Silver => "Silver",
            AssetType::Commodity => "Commodity",
            AssetType::Other => "Other",
        }
    }
}

impl From<String> for AssetType {
    fn from(s: String) -> Self {
        AssetType::from_tag(&s)
    }
}

/// Unit of measure for physical holdings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeightUnit {
    #[default]
    Grams,
    Ounces,
    Kilograms,
    Units,
}

impl WeightUnit {
    /// Short label shown next to quantities (e.g. "25 g").
    pub const fn short_label(&self) -> &'static str {
        match self {
            WeightUnit::Grams => "g",
            WeightUnit::Ounces => "oz",
            WeightUnit::Kilograms => "kg",
            WeightUnit::Units => "units",
        }
    }
}

/// A single historical price observation used for card charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub price: Decimal,
}

/// Market instrument data carried by tradable assets.
///
/// `current_price` is externally supplied and refreshed by the price
/// services; the core never fabricates it. Its absence at valuation time is
/// a caller contract violation, not a state the calculator patches over.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Instrument {
    pub symbol: String,
    pub exchange: Option<String>,
    pub currency: String,
    pub average_purchase_price: Decimal,
    pub current_price: Option<Decimal>,
    pub day_change: Option<Decimal>,
    pub day_change_percent: Option<Decimal>,
    pub sector: Option<String>,
    pub market_cap: Option<Decimal>,
    pub dividend_yield: Option<Decimal>,
    pub yield_to_maturity: Option<Decimal>,
    pub maturity_date: Option<NaiveDate>,
    pub price_history: Option<Vec<PricePoint>>,
}

/// Physical holding data carried by commodity-like assets.
///
/// `current_market_price` is user-maintained; when absent the valuation
/// falls back to `purchase_price`. `manual_price_override` records whether
/// the user has ever entered a market price, as opposed to the defaulted
/// valuation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalDetails {
    pub unit: WeightUnit,
    pub purchase_price: Decimal,
    pub current_market_price: Option<Decimal>,
    #[serde(default)]
    pub manual_price_override: bool,
    pub purity: Option<String>,
    pub storage_location: Option<String>,
    pub certificate_id: Option<String>,
}

/// Display record for a single holding, as supplied by the backing store.
///
/// Identity is an opaque string, immutable once created. The derived fields
/// (`total_value`, `total_gain_loss`, `total_gain_loss_percent`) default to
/// zero on raw records and are recomputed by the valuation pass before
/// anything renders. Exactly one of `instrument` / `holding_details` is
/// expected to be populated, matching the asset type's class; the generic
/// fallback carries neither.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub asset_type: AssetType,
    pub quantity: Decimal,

    // Derived display fields, recomputed by the valuation pass
    #[serde(default)]
    pub total_value: Decimal,
    #[serde(default)]
    pub total_gain_loss: Decimal,
    #[serde(default)]
    pub total_gain_loss_percent: Decimal,

    #[serde(default)]
    pub last_updated: DateTime<Utc>,

    // Variant sections (None for the classes that don't use them)
    pub instrument: Option<Instrument>,
    pub holding_details: Option<PhysicalDetails>,
}

impl Asset {
    /// Display classification, derived purely from the type tag.
    pub const fn class(&self) -> AssetClass {
        self.asset_type.class()
    }

    /// Check if this asset renders as a tradable market card.
    pub fn is_tradable(&self) -> bool {
        self.asset_type.is_tradable()
    }

    /// Check if this asset renders as a physical holding card.
    pub fn is_physical(&self) -> bool {
        self.asset_type.is_physical()
    }
}
