//! Flat per-widget color themes.
//!
//! Defaults are a dark palette. There is no cascade: each widget kind reads
//! its own struct from [`Theme`].

use trellis_engine::paint::Color;
use trellis_engine::text::FontId;

#[derive(Debug, Clone)]
pub struct PanelTheme {
    pub default_fill: Color,
    pub stroke: Color,
}

impl Default for PanelTheme {
    fn default() -> Self {
        Self {
            default_fill: Color::hex_or("#2d2d2d", Color::rgb(45, 45, 45)),
            stroke: Color::hex_or("#555", Color::rgb(85, 85, 85)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ButtonTheme {
    pub fill: Color,
    pub stroke: Color,
    pub text: Color,
}

impl Default for ButtonTheme {
    fn default() -> Self {
        Self {
            fill: Color::hex_or("#404040", Color::rgb(64, 64, 64)),
            stroke: Color::hex_or("#666", Color::rgb(102, 102, 102)),
            text: Color::hex_or("#eee", Color::rgb(238, 238, 238)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CheckboxTheme {
    pub box_fill: Color,
    pub box_stroke: Color,
    pub check_fill: Color,
    pub text: Color,
    pub hover_overlay: Color,
}

impl Default for CheckboxTheme {
    fn default() -> Self {
        Self {
            box_fill: Color::hex_or("#2d2d2d", Color::rgb(45, 45, 45)),
            box_stroke: Color::hex_or("#666", Color::rgb(102, 102, 102)),
            check_fill: Color::hex_or("#4a9eff", Color::rgb(74, 158, 255)),
            text: Color::hex_or("#eee", Color::rgb(238, 238, 238)),
            hover_overlay: Color::from_srgb_u8(255, 255, 255, 20),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RadioTheme {
    pub circle_fill: Color,
    pub circle_stroke: Color,
    pub selected_fill: Color,
    pub text: Color,
    pub hover_overlay: Color,
}

impl Default for RadioTheme {
    fn default() -> Self {
        Self {
            circle_fill: Color::hex_or("#2d2d2d", Color::rgb(45, 45, 45)),
            circle_stroke: Color::hex_or("#666", Color::rgb(102, 102, 102)),
            selected_fill: Color::hex_or("#4a9eff", Color::rgb(74, 158, 255)),
            text: Color::hex_or("#eee", Color::rgb(238, 238, 238)),
            hover_overlay: Color::from_srgb_u8(255, 255, 255, 20),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SliderTheme {
    pub track_fill: Color,
    pub track_stroke: Color,
    pub fill: Color,
    pub thumb_fill: Color,
    pub thumb_stroke: Color,
    pub text: Color,
}

impl Default for SliderTheme {
    fn default() -> Self {
        Self {
            track_fill: Color::hex_or("#2d2d2d", Color::rgb(45, 45, 45)),
            track_stroke: Color::hex_or("#666", Color::rgb(102, 102, 102)),
            fill: Color::hex_or("#4a9eff", Color::rgb(74, 158, 255)),
            thumb_fill: Color::hex_or("#eee", Color::rgb(238, 238, 238)),
            thumb_stroke: Color::hex_or("#666", Color::rgb(102, 102, 102)),
            text: Color::hex_or("#eee", Color::rgb(238, 238, 238)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DropdownTheme {
    pub fill: Color,
    pub stroke: Color,
    pub hover: Color,
    pub selected: Color,
    pub text: Color,
    pub arrow: Color,
}

impl Default for DropdownTheme {
    fn default() -> Self {
        Self {
            fill: Color::hex_or("#2d2d2d", Color::rgb(45, 45, 45)),
            stroke: Color::hex_or("#666", Color::rgb(102, 102, 102)),
            hover: Color::hex_or("#3a3a3a", Color::rgb(58, 58, 58)),
            selected: Color::hex_or("#4a9eff", Color::rgb(74, 158, 255)),
            text: Color::hex_or("#eee", Color::rgb(238, 238, 238)),
            arrow: Color::hex_or("#aaa", Color::rgb(170, 170, 170)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MenuTheme {
    pub fill: Color,
    pub stroke: Color,
    pub hover: Color,
    pub active: Color,
    pub text: Color,
    pub separator: Color,
}

impl Default for MenuTheme {
    fn default() -> Self {
        Self {
            fill: Color::hex_or("#202020", Color::rgb(32, 32, 32)),
            stroke: Color::hex_or("#525252", Color::rgb(82, 82, 82)),
            hover: Color::hex_or("#2f2f2f", Color::rgb(47, 47, 47)),
            active: Color::hex_or("#3a3a3a", Color::rgb(58, 58, 58)),
            text: Color::hex_or("#f0f0f0", Color::rgb(240, 240, 240)),
            separator: Color::hex_or("#606060", Color::rgb(96, 96, 96)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ContextMenuTheme {
    pub fill: Color,
    pub stroke: Color,
    pub hover: Color,
    pub text: Color,
    pub disabled_text: Color,
    pub separator: Color,
}

impl Default for ContextMenuTheme {
    fn default() -> Self {
        Self {
            fill: Color::hex_or("#2d2d2d", Color::rgb(45, 45, 45)),
            stroke: Color::hex_or("#666", Color::rgb(102, 102, 102)),
            hover: Color::hex_or("#3a3a3a", Color::rgb(58, 58, 58)),
            text: Color::hex_or("#eee", Color::rgb(238, 238, 238)),
            disabled_text: Color::hex_or("#777", Color::rgb(119, 119, 119)),
            separator: Color::hex_or("#555", Color::rgb(85, 85, 85)),
        }
    }
}

/// Every widget theme plus the font used for labels.
#[derive(Debug, Clone)]
pub struct Theme {
    pub font: FontId,
    /// Label size in logical pixels.
    pub font_size: f32,
    pub background: Color,
    pub debug: Color,
    pub panel: PanelTheme,
    pub button: ButtonTheme,
    pub checkbox: CheckboxTheme,
    pub radio: RadioTheme,
    pub slider: SliderTheme,
    pub dropdown: DropdownTheme,
    pub menu: MenuTheme,
    pub context_menu: ContextMenuTheme,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            font: FontId::DEFAULT,
            font_size: 13.0,
            background: Color::BLACK,
            debug: Color::YELLOW,
            panel: PanelTheme::default(),
            button: ButtonTheme::default(),
            checkbox: CheckboxTheme::default(),
            radio: RadioTheme::default(),
            slider: SliderTheme::default(),
            dropdown: DropdownTheme::default(),
            menu: MenuTheme::default(),
            context_menu: ContextMenuTheme::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_hex_strings_parse() {
        assert_eq!(Color::from_hex("#4a9eff"), Some(CheckboxTheme::default().check_fill));
        assert_eq!(Color::from_hex("#202020"), Some(MenuTheme::default().fill));
        assert_eq!(Color::from_hex("#aaa"), Some(DropdownTheme::default().arrow));
    }
}
