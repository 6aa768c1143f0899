use super::Palette;

/// Dark - neutral greys, the default
pub static DARK: Palette = Palette {
    name: "Dark",
    window_bg: "#1e1e1e",
    chrome_bg: "#2a2a2a",
    rail_bg: "#1b1b1b",
    card_bg: "#161616",
    surface2: "#111111",

    editor_bg: "#111111",
    editor_border: "#333333",

    border: "#2a2a2a",
    border_strong: "#333333",

    text: "#ffffff",
    text_soft: "#f0f0f0",
    text_muted: "#d9d9d9",

    btn_bg: "#2a2a2a",
    btn_hover: "#333333",
    danger_hover: "#c0392b",

    tab_active_bg: "#111111",
    tab_inactive_bg: "#232323",

    overlay_bottom: "#AA000000",
};

/// White - light surfaces, dark text
pub static WHITE: Palette = Palette {
    name: "White",
    window_bg: "#f3f3f5",
    chrome_bg: "#e6e6ea",
    rail_bg: "#ebebef",
    card_bg: "#ffffff",
    surface2: "#fafafa",

    editor_bg: "#ffffff",
    editor_border: "#c8c8cc",

    border: "#d6d6da",
    border_strong: "#c0c0c6",

    text: "#111111",
    text_soft: "#2b2b2b",
    text_muted: "#555555",

    btn_bg: "#e6e6ea",
    btn_hover: "#d6d6dc",
    danger_hover: "#e74c3c",

    tab_active_bg: "#ffffff",
    tab_inactive_bg: "#e9e9ed",

    overlay_bottom: "#66000000",
};

/// Purple - dark theme with violet-tinted surfaces
pub static PURPLE: Palette = Palette {
    name: "Purple",
    window_bg: "#1a1322",
    chrome_bg: "#241a30",
    rail_bg: "#17111f",
    card_bg: "#140f1b",
    surface2: "#100b15",

    editor_bg: "#120d18",
    editor_border: "#3a2a4d",

    border: "#2c2039",
    border_strong: "#3a2a4d",

    text: "#ffffff",
    text_soft: "#eee6f7",
    text_muted: "#cbbbe0",

    btn_bg: "#2c2039",
    btn_hover: "#3a2a4d",
    danger_hover: "#c0392b",

    tab_active_bg: "#120d18",
    tab_inactive_bg: "#201729",

    overlay_bottom: "#AA0b0710",
};
