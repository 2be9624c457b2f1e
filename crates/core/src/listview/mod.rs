//! List virtualization module - row mount policy and window math.

mod listview_constants;
mod listview_model;
mod virtualization_controller;


// Re-export the public interface
pub use listview_constants::{
    BATCH_SIZE, INITIAL_RENDER_COUNT, ITEM_HEIGHT, OVERSCAN_ROWS, WINDOW_SIZE,
};
pub use listview_model::{ItemLayout, ListContent, MountState, RowPresentation, WindowConfig};
pub use virtualization_controller::VirtualizedListController;
