//! CLI commands for the bytepair tool.

pub mod inspect;
pub mod render;
pub mod train;

pub use inspect::InspectCommand;
pub use render::RenderCommand;
pub use train::TrainCommand;
