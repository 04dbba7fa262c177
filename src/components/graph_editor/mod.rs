mod component;
mod render;
mod state;

pub use component::GraphEditorCanvas;
pub use state::{EditMode, Interaction};
