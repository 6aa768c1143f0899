use crate::theme::{self, Palette};

/// Keyboard shortcuts for the file actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcuts {
    pub new: String,
    pub open: String,
    pub save: String,
    pub save_as: String,
}

impl Default for Shortcuts {
    fn default() -> Self {
        Self {
            new: "Ctrl+N".to_string(),
            open: "Ctrl+O".to_string(),
            save: "Ctrl+S".to_string(),
            save_as: "Ctrl+Shift+S".to_string(),
        }
    }
}

impl Shortcuts {
    /// Set a shortcut by its action name ("new", "open", "save", "saveAs").
    /// Returns false for an unknown action.
    pub fn set(&mut self, action: &str, sequence: &str) -> bool {
        let slot = match action {
            "new" => &mut self.new,
            "open" => &mut self.open,
            "save" => &mut self.save,
            "saveAs" => &mut self.save_as,
            _ => return false,
        };
        *slot = normalize_sequence(sequence);
        true
    }
}

/// User settings that can be customized via Rhai config
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub theme: String,
    pub font_size: u32,
    pub shortcuts: Shortcuts,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: theme::DEFAULT_THEME.to_string(),
            font_size: 11,
            shortcuts: Shortcuts::default(),
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Palette for the selected theme (unknown names get the default)
    pub fn palette(&self) -> &'static Palette {
        theme::get_palette(&self.theme)
    }
}

/// Strip whitespace and fix modifier casing, e.g. "ctrl + shift + s" -> "Ctrl+Shift+s"
pub fn normalize_sequence(sequence: &str) -> String {
    let compact: String = sequence.split_whitespace().collect();

    [
        ("CTRL", "Ctrl"),
        ("ctrl", "Ctrl"),
        ("SHIFT", "Shift"),
        ("shift", "Shift"),
        ("ALT", "Alt"),
        ("alt", "Alt"),
        ("META", "Meta"),
        ("meta", "Meta"),
    ]
    .iter()
    .fold(compact, |s, &(from, to)| s.replace(from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::new();
        assert_eq!(settings.theme, "Dark");
        assert_eq!(settings.font_size, 11);
        assert_eq!(settings.shortcuts.save_as, "Ctrl+Shift+S");
    }

    #[test]
    fn palette_follows_theme() {
        let mut settings = Settings::new();
        settings.theme = "Purple".to_string();
        assert_eq!(settings.palette().name, "Purple");

        settings.theme = "Solarized".to_string();
        assert_eq!(settings.palette(), theme::default_palette());
    }

    #[test]
    fn normalize_strips_whitespace_and_fixes_case() {
        assert_eq!(normalize_sequence("ctrl + shift + s"), "Ctrl+Shift+s");
        assert_eq!(normalize_sequence("ALT+F4"), "Alt+F4");
        assert_eq!(normalize_sequence(" meta+\tK "), "Meta+K");
        assert_eq!(normalize_sequence(""), "");
    }

    #[test]
    fn set_shortcut_by_action() {
        let mut shortcuts = Shortcuts::default();
        assert!(shortcuts.set("saveAs", "ctrl+alt+s"));
        assert_eq!(shortcuts.save_as, "Ctrl+Alt+s");
        assert!(!shortcuts.set("print", "Ctrl+P"));
        assert_eq!(shortcuts.new, "Ctrl+N");
    }
}
