mod engine;
mod settings;

pub use engine::ConfigEngine;
pub use settings::{Settings, Shortcuts, normalize_sequence};
