//! Theme catalog and user settings for the smarttext editor.
//!
//! ```
//! let palette = smarttext::theme::get_palette("White");
//! assert_eq!(palette.window_bg, "#f3f3f5");
//! ```

pub mod config;
pub mod error;
pub mod theme;

pub use error::{ConfigError, Result};
