//! Valuation module - pure calculators and the list valuation pass.

mod valuation_model;
mod valuation_service;

#[cfg(test)]
mod valuation_service_tests;

// Re-export the public interface
pub use valuation_model::Valuation;
pub use valuation_service::{
    effective_price, is_quantity_significant, physical_valuation, tradable_valuation,
    ValuationService,
};
