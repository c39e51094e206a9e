pub mod app;
pub mod crop_preview;
pub mod editor_controls;
pub mod inline_crop;

pub use app::App;
