mod component;
pub mod config;
pub mod edge;
pub mod geometry;
pub mod input;
mod render;
pub mod state;
pub mod types;

pub use component::GraphEditorCanvas;
pub use render::Surface;
