pub mod autosave;
pub mod display;
pub mod editor;
pub mod gesture;

pub use display::DisplayLayers;
pub use editor::{Command, TransformEditor};
pub use gesture::Point;
