//! Fixed lookup tables: named formats and click actions.
//!
//! Both tables are compile-time `phf` maps keyed by lowercase names.

use phf::phf_map;

use crate::color::Rgb;

/// A named color or decoration, selected by a bare tag such as `<red>` or `<bold>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NamedFormat {
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
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Obfuscated,
}

static NAMED_FORMATS: phf::Map<&'static str, NamedFormat> = phf_map! {
    "black" => NamedFormat::Black,
    "dark_blue" => NamedFormat::DarkBlue,
    "dark_green" => NamedFormat::DarkGreen,
    "dark_aqua" => NamedFormat::DarkAqua,
    "dark_red" => NamedFormat::DarkRed,
    "dark_purple" => NamedFormat::DarkPurple,
    "gold" => NamedFormat::Gold,
    "gray" => NamedFormat::Gray,
    "dark_gray" => NamedFormat::DarkGray,
    "blue" => NamedFormat::Blue,
    "green" => NamedFormat::Green,
    "aqua" => NamedFormat::Aqua,
    "red" => NamedFormat::Red,
    "light_purple" => NamedFormat::LightPurple,
    "yellow" => NamedFormat::Yellow,
    "white" => NamedFormat::White,
    "bold" => NamedFormat::Bold,
    "italic" => NamedFormat::Italic,
    "underline" => NamedFormat::Underline,
    "strikethrough" => NamedFormat::Strikethrough,
    "obfuscated" => NamedFormat::Obfuscated,
};

impl NamedFormat {
    /// Look up a format by its tag name. Names are matched exactly (lowercase).
    pub fn from_name(name: &str) -> Option<Self> {
        NAMED_FORMATS.get(name).copied()
    }

    /// The tag name for this format.
    pub fn name(self) -> &'static str {
        match self {
            NamedFormat::Black => "black",
            NamedFormat::DarkBlue => "dark_blue",
            NamedFormat::DarkGreen => "dark_green",
            NamedFormat::DarkAqua => "dark_aqua",
            NamedFormat::DarkRed => "dark_red",
            NamedFormat::DarkPurple => "dark_purple",
            NamedFormat::Gold => "gold",
            NamedFormat::Gray => "gray",
            NamedFormat::DarkGray => "dark_gray",
            NamedFormat::Blue => "blue",
            NamedFormat::Green => "green",
            NamedFormat::Aqua => "aqua",
            NamedFormat::Red => "red",
            NamedFormat::LightPurple => "light_purple",
            NamedFormat::Yellow => "yellow",
            NamedFormat::White => "white",
            NamedFormat::Bold => "bold",
            NamedFormat::Italic => "italic",
            NamedFormat::Underline => "underline",
            NamedFormat::Strikethrough => "strikethrough",
            NamedFormat::Obfuscated => "obfuscated",
        }
    }

    /// Palette value for the sixteen named colors, `None` for decorations.
    pub fn rgb(self) -> Option<Rgb> {
        let packed = match self {
            NamedFormat::Black => 0x000000,
            NamedFormat::DarkBlue => 0x0000AA,
            NamedFormat::DarkGreen => 0x00AA00,
            NamedFormat::DarkAqua => 0x00AAAA,
            NamedFormat::DarkRed => 0xAA0000,
            NamedFormat::DarkPurple => 0xAA00AA,
            NamedFormat::Gold => 0xFFAA00,
            NamedFormat::Gray => 0xAAAAAA,
            NamedFormat::DarkGray => 0x555555,
            NamedFormat::Blue => 0x5555FF,
            NamedFormat::Green => 0x55FF55,
            NamedFormat::Aqua => 0x55FFFF,
            NamedFormat::Red => 0xFF5555,
            NamedFormat::LightPurple => 0xFF55FF,
            NamedFormat::Yellow => 0xFFFF55,
            NamedFormat::White => 0xFFFFFF,
            NamedFormat::Bold
            | NamedFormat::Italic
            | NamedFormat::Underline
            | NamedFormat::Strikethrough
            | NamedFormat::Obfuscated => return None,
        };
        Some(Rgb::from_packed(packed))
    }

    /// Returns true for the sixteen color formats.
    pub fn is_color(self) -> bool {
        self.rgb().is_some()
    }
}

/// What happens when the reader clicks a span.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClickAction {
    RunCommand,
    OpenUrl,
    SuggestCommand,
    CopyToClipboard,
}

static CLICK_ACTIONS: phf::Map<&'static str, ClickAction> = phf_map! {
    "run_command" => ClickAction::RunCommand,
    "open_url" => ClickAction::OpenUrl,
    "suggest_command" => ClickAction::SuggestCommand,
    "copy_to_clipboard" => ClickAction::CopyToClipboard,
};

impl ClickAction {
    /// Resolve an action key, ignoring case. Unknown keys yield `None`.
    ///
    /// ```
    /// use tagtext::ClickAction;
    ///
    /// assert_eq!(ClickAction::from_name("Open_URL"), Some(ClickAction::OpenUrl));
    /// assert_eq!(ClickAction::from_name("teleport"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        CLICK_ACTIONS.get(name.to_lowercase().as_str()).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            ClickAction::RunCommand => "run_command",
            ClickAction::OpenUrl => "open_url",
            ClickAction::SuggestCommand => "suggest_command",
            ClickAction::CopyToClipboard => "copy_to_clipboard",
        }
    }
}
