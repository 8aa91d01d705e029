//! Fixed color enumerations and the named-color table built from them.
//!
//! Types:
//!
//! - `TextFormatting` lists the chat formatting codes. Sixteen of them carry a
//!   color; the remaining modifiers (`bold`, `reset`, ...) do not.
//! - `DyeColor` is the separate sixteen-entry dye palette.
//!
//! Functions:
//!
//! - `named_colors` exposes the lowercase, hyphenated name → `Color` table
//!   used by `Color::parse`. Only formatting entries with a color are included.
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use crate::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextFormatting {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
    Obfuscated,
    Bold,
    Strikethrough,
    Underline,
    Italic,
    Reset,
}

impl TextFormatting {
    pub const ALL: [TextFormatting; 22] = [
        Self::Black,
        Self::DarkBlue,
        Self::DarkGreen,
        Self::DarkAqua,
        Self::DarkRed,
        Self::DarkPurple,
        Self::Gold,
        Self::Gray,
        Self::DarkGray,
        Self::Blue,
        Self::Green,
        Self::Aqua,
        Self::Red,
        Self::LightPurple,
        Self::Yellow,
        Self::White,
        Self::Obfuscated,
        Self::Bold,
        Self::Strikethrough,
        Self::Underline,
        Self::Italic,
        Self::Reset,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::DarkBlue => "dark_blue",
            Self::DarkGreen => "dark_green",
            Self::DarkAqua => "dark_aqua",
            Self::DarkRed => "dark_red",
            Self::DarkPurple => "dark_purple",
            Self::Gold => "gold",
            Self::Gray => "gray",
            Self::DarkGray => "dark_gray",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Aqua => "aqua",
            Self::Red => "red",
            Self::LightPurple => "light_purple",
            Self::Yellow => "yellow",
            Self::White => "white",
            Self::Obfuscated => "obfuscated",
            Self::Bold => "bold",
            Self::Strikethrough => "strikethrough",
            Self::Underline => "underline",
            Self::Italic => "italic",
            Self::Reset => "reset",
        }
    }

    /// The character that follows the section sign in legacy formatted text.
    pub const fn code(self) -> char {
        match self {
            Self::Black => '0',
            Self::DarkBlue => '1',
            Self::DarkGreen => '2',
            Self::DarkAqua => '3',
            Self::DarkRed => '4',
            Self::DarkPurple => '5',
            Self::Gold => '6',
            Self::Gray => '7',
            Self::DarkGray => '8',
            Self::Blue => '9',
            Self::Green => 'a',
            Self::Aqua => 'b',
            Self::Red => 'c',
            Self::LightPurple => 'd',
            Self::Yellow => 'e',
            Self::White => 'f',
            Self::Obfuscated => 'k',
            Self::Bold => 'l',
            Self::Strikethrough => 'm',
            Self::Underline => 'n',
            Self::Italic => 'o',
            Self::Reset => 'r',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        let code = code.to_ascii_lowercase();
        Self::ALL.into_iter().find(|entry| entry.code() == code)
    }

    /// Packed 24-bit RGB, or `None` for modifiers.
    pub const fn color_value(self) -> Option<u32> {
        match self {
            Self::Black => Some(0x000000),
            Self::DarkBlue => Some(0x0000AA),
            Self::DarkGreen => Some(0x00AA00),
            Self::DarkAqua => Some(0x00AAAA),
            Self::DarkRed => Some(0xAA0000),
            Self::DarkPurple => Some(0xAA00AA),
            Self::Gold => Some(0xFFAA00),
            Self::Gray => Some(0xAAAAAA),
            Self::DarkGray => Some(0x555555),
            Self::Blue => Some(0x5555FF),
            Self::Green => Some(0x55FF55),
            Self::Aqua => Some(0x55FFFF),
            Self::Red => Some(0xFF5555),
            Self::LightPurple => Some(0xFF55FF),
            Self::Yellow => Some(0xFFFF55),
            Self::White => Some(0xFFFFFF),
            Self::Obfuscated
            | Self::Bold
            | Self::Strikethrough
            | Self::Underline
            | Self::Italic
            | Self::Reset => None,
        }
    }

    pub const fn is_color(self) -> bool {
        self.color_value().is_some()
    }
}

impl fmt::Display for TextFormatting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DyeColor {
    White,
    Orange,
    Magenta,
    LightBlue,
    Yellow,
    Lime,
    Pink,
    Gray,
    LightGray,
    Cyan,
    Purple,
    Blue,
    Brown,
    Green,
    Red,
    Black,
}

impl DyeColor {
    pub const ALL: [DyeColor; 16] = [
        Self::White,
        Self::Orange,
        Self::Magenta,
        Self::LightBlue,
        Self::Yellow,
        Self::Lime,
        Self::Pink,
        Self::Gray,
        Self::LightGray,
        Self::Cyan,
        Self::Purple,
        Self::Blue,
        Self::Brown,
        Self::Green,
        Self::Red,
        Self::Black,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Orange => "orange",
            Self::Magenta => "magenta",
            Self::LightBlue => "light_blue",
            Self::Yellow => "yellow",
            Self::Lime => "lime",
            Self::Pink => "pink",
            Self::Gray => "gray",
            Self::LightGray => "light_gray",
            Self::Cyan => "cyan",
            Self::Purple => "purple",
            Self::Blue => "blue",
            Self::Brown => "brown",
            Self::Green => "green",
            Self::Red => "red",
            Self::Black => "black",
        }
    }

    /// Packed 24-bit RGB used when the dye tints an entity.
    pub const fn color_value(self) -> u32 {
        match self {
            Self::White => 0xF9FFFE,
            Self::Orange => 0xF9801D,
            Self::Magenta => 0xC74EBD,
            Self::LightBlue => 0x3AB3DA,
            Self::Yellow => 0xFED83D,
            Self::Lime => 0x80C71F,
            Self::Pink => 0xF38BAA,
            Self::Gray => 0x474F52,
            Self::LightGray => 0x9D9D97,
            Self::Cyan => 0x169C9C,
            Self::Purple => 0x8932B8,
            Self::Blue => 0x3C44AA,
            Self::Brown => 0x835432,
            Self::Green => 0x5E7C16,
            Self::Red => 0xB02E26,
            Self::Black => 0x1D1D21,
        }
    }
}

impl fmt::Display for DyeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Name → color table for text colors, e.g. `dark-blue` → `#0000AA`.
pub fn named_colors() -> &'static BTreeMap<String, Color> {
    static TABLE: OnceLock<BTreeMap<String, Color>> = OnceLock::new();
    TABLE.get_or_init(|| {
        TextFormatting::ALL
            .into_iter()
            .filter(|entry| entry.is_color())
            .map(|entry| {
                (
                    entry.name().to_ascii_lowercase().replace('_', "-"),
                    Color::from_formatting(entry),
                )
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_holds_only_colors() {
        let table = named_colors();
        assert_eq!(table.len(), 16);
        assert!(!table.contains_key("bold"));
        assert!(!table.contains_key("reset"));
    }

    #[test]
    fn table_names_are_hyphenated() {
        let table = named_colors();
        assert_eq!(table.get("dark-blue").map(Color::rgb), Some(0x0000AA));
        assert_eq!(table.get("light-purple").map(Color::rgb), Some(0xFF55FF));
        assert!(!table.contains_key("dark_blue"));
    }

    #[test]
    fn modifiers_have_no_color() {
        assert_eq!(TextFormatting::Bold.color_value(), None);
        assert!(!TextFormatting::Reset.is_color());
        assert!(TextFormatting::Gold.is_color());
    }

    #[test]
    fn looks_up_formatting_codes() {
        assert_eq!(TextFormatting::from_code('c'), Some(TextFormatting::Red));
        assert_eq!(TextFormatting::from_code('L'), Some(TextFormatting::Bold));
        assert_eq!(TextFormatting::from_code('z'), None);
    }
}
