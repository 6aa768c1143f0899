use serde::Serialize;

/// Role names as the UI layer addresses them, in declaration order
pub const ROLE_NAMES: [&str; 18] = [
    "windowBg",
    "chromeBg",
    "railBg",
    "cardBg",
    "surface2",
    "editorBg",
    "editorBorder",
    "border",
    "borderStrong",
    "text",
    "textSoft",
    "textMuted",
    "btnBg",
    "btnHover",
    "dangerHover",
    "tabActiveBg",
    "tabInactiveBg",
    "overlayBottom",
];

/// Complete color palette for one theme.
/// Values are `#RRGGBB` or `#AARRGGBB` strings, handed to the UI as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    #[serde(skip)]
    pub name: &'static str,

    // Window chrome
    pub window_bg: &'static str,
    pub chrome_bg: &'static str,
    pub rail_bg: &'static str,
    pub card_bg: &'static str,
    pub surface2: &'static str,

    // Editor
    pub editor_bg: &'static str,
    pub editor_border: &'static str,

    pub border: &'static str,
    pub border_strong: &'static str,

    // Text
    pub text: &'static str,
    pub text_soft: &'static str,
    pub text_muted: &'static str,

    // Buttons
    pub btn_bg: &'static str,
    pub btn_hover: &'static str,
    pub danger_hover: &'static str,

    // Tabs
    pub tab_active_bg: &'static str,
    pub tab_inactive_bg: &'static str,

    pub overlay_bottom: &'static str,
}

impl Palette {
    /// Role/value pairs, ordered like [`ROLE_NAMES`]
    pub fn roles(&self) -> [(&'static str, &'static str); 18] {
        let values = [
            self.window_bg,
            self.chrome_bg,
            self.rail_bg,
            self.card_bg,
            self.surface2,
            self.editor_bg,
            self.editor_border,
            self.border,
            self.border_strong,
            self.text,
            self.text_soft,
            self.text_muted,
            self.btn_bg,
            self.btn_hover,
            self.danger_hover,
            self.tab_active_bg,
            self.tab_inactive_bg,
            self.overlay_bottom,
        ];

        std::array::from_fn(|i| (ROLE_NAMES[i], values[i]))
    }

    /// Look up a color by its UI role name, e.g. "editorBg"
    pub fn get(&self, role: &str) -> Option<&'static str> {
        self.roles()
            .into_iter()
            .find(|(name, _)| *name == role)
            .map(|(_, value)| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::get_palette;

    #[test]
    fn roles_follow_role_names() {
        let palette = get_palette("Dark");
        let names: Vec<_> = palette.roles().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ROLE_NAMES);
    }

    #[test]
    fn get_by_role_name() {
        let palette = get_palette("Dark");
        assert_eq!(palette.get("windowBg"), Some("#1e1e1e"));
        assert_eq!(palette.get("overlayBottom"), Some("#AA000000"));
    }

    #[test]
    fn get_unknown_role_is_none() {
        let palette = get_palette("Dark");
        assert!(palette.get("window_bg").is_none());
        assert!(palette.get("accent").is_none());
    }

    #[test]
    fn serializes_as_role_map() {
        let value = serde_json::to_value(get_palette("White")).unwrap();
        let map = value.as_object().unwrap();

        assert_eq!(map.len(), ROLE_NAMES.len());
        for role in ROLE_NAMES {
            assert!(map.contains_key(role), "missing role {role}");
        }
        assert_eq!(map["windowBg"], "#f3f3f5");
    }
}
