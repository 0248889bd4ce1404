//! Rose Pine Color Palette Module
//! Based on the official Rose Pine theme: https://rosepinetheme.com/

use crate::models::SnippetLanguage;
use ratatui::style::Color;
pub struct RosePine;

impl RosePine {
    pub const BASE: Color = Color::Rgb(25, 23, 36);
    pub const SURFACE: Color = Color::Rgb(31, 29, 46);
    pub const OVERLAY: Color = Color::Rgb(38, 35, 58);
    pub const TEXT: Color = Color::Rgb(224, 222, 244);
    pub const SUBTLE: Color = Color::Rgb(144, 140, 170);
    pub const MUTED: Color = Color::Rgb(110, 106, 134);
    pub const LOVE: Color = Color::Rgb(235, 111, 146);
    pub const GOLD: Color = Color::Rgb(246, 193, 119);
    pub const ROSE: Color = Color::Rgb(235, 188, 186);
    pub const PINE: Color = Color::Rgb(49, 116, 143);
    pub const FOAM: Color = Color::Rgb(156, 207, 216);
    pub const IRIS: Color = Color::Rgb(196, 167, 231);
    pub const HIGHLIGHT_HIGH: Color = Color::Rgb(82, 79, 103);
    pub const HIGHLIGHT_LOW: Color = Color::Rgb(33, 32, 46);
}

/// Badge colour for a language; anything without its own colour is grey
pub fn language_color(language: SnippetLanguage) -> Color {
    match language {
        SnippetLanguage::JavaScript => Color::Rgb(240, 219, 79),
        SnippetLanguage::TypeScript => Color::Rgb(49, 120, 198),
        SnippetLanguage::Python => Color::Rgb(55, 118, 171),
        SnippetLanguage::React => Color::Rgb(97, 218, 251),
        SnippetLanguage::Css => Color::Rgb(21, 114, 182),
        SnippetLanguage::Html => Color::Rgb(227, 76, 38),
        SnippetLanguage::Sql => Color::Rgb(51, 103, 145),
        SnippetLanguage::Rust => Color::Rgb(222, 165, 132),
        SnippetLanguage::Go => Color::Rgb(0, 173, 216),
        SnippetLanguage::Java => Color::Rgb(237, 139, 0),
        _ => Color::Rgb(128, 128, 128),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlisted_language_falls_back_to_grey() {
        assert_eq!(
            language_color(SnippetLanguage::Kotlin),
            Color::Rgb(128, 128, 128)
        );
        assert_ne!(
            language_color(SnippetLanguage::React),
            Color::Rgb(128, 128, 128)
        );
    }
}
