//! Drag-to-reorder controller for egui lists and tables.

pub use handle::Handle;
pub use session::{DragEvent, ReorderSession, Row, RowId};
pub use ui::{ReorderConfig, ReorderResponse, ReorderUi, RowState};

mod handle;
mod session;
mod ui;
pub mod utils;
