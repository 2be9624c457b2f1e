/// Uniform row height, in display points, used for scroll-offset math.
///
/// Every row reports this height regardless of variant. A tradable card
/// with a chart and a physical card without one really do render at
/// different heights; treating them as equal keeps offset math trivial and
/// is accepted app-wide. Changing it changes scroll behavior everywhere.
pub const ITEM_HEIGHT: f32 = 140.0;

/// Rows mounted eagerly on first render, before any visibility signal.
pub const INITIAL_RENDER_COUNT: usize = 8;

/// Rows materialized per incremental render batch while scrolling.
pub const BATCH_SIZE: usize = 6;

/// Render window span, in viewport-height multiples, kept materialized
/// around the visible area.
pub const WINDOW_SIZE: usize = 11;

/// Extra rows kept rendered beyond each visible edge while scrolling.
pub const OVERSCAN_ROWS: usize = 3;
