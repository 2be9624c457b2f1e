//! Portfolio module - the assembled asset list pipeline.

mod portfolio_view_service;


// Re-export the public interface
pub use portfolio_view_service::{ListRow, PortfolioViewService};
