//! Render dispatch module - card variants and interaction wiring.

mod dispatch_model;
mod dispatch_service;

#[cfg(test)]
mod dispatch_service_tests;

// Re-export the public interface
pub use dispatch_model::{
    CardActions, CardInteractionHandler, ChartData, GenericCardProps, PhysicalCardProps,
    RenderedCard, TradableCardProps, ValueUpdateAction,
};
pub use dispatch_service::RenderDispatcher;
