mod builtin;
mod palette;

pub use palette::{Palette, ROLE_NAMES};

/// Theme used when nothing (or something unknown) is selected
pub const DEFAULT_THEME: &str = "Dark";

/// Built-in palettes, default first
static BUILTIN_THEMES: [&Palette; 3] = [&builtin::DARK, &builtin::WHITE, &builtin::PURPLE];

pub fn default_palette() -> &'static Palette {
    &builtin::DARK
}

pub fn list_builtin_themes() -> Vec<&'static str> {
    BUILTIN_THEMES.iter().map(|palette| palette.name).collect()
}

/// Exact, case-sensitive lookup without fallback
pub fn find_palette(name: &str) -> Option<&'static Palette> {
    BUILTIN_THEMES
        .iter()
        .copied()
        .find(|palette| palette.name == name)
}

/// Resolve a theme name to its palette.
///
/// Never fails: unknown names resolve to the default (Dark) palette.
pub fn get_palette(name: &str) -> &'static Palette {
    find_palette(name).unwrap_or_else(default_palette)
}
