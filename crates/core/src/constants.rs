/// Decimal precision for valuation calculations
pub const DECIMAL_PRECISION: u32 = 6;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Quantity threshold for significant positions
pub const QUANTITY_THRESHOLD: &str = "0.00000001";
