//! The closed set of somebar configuration keys.
//!
//! Every setting the bar reads lives in dconf under `/dotfiles/somebar/`.
//! Each setting has exactly one fully-qualified key path (its *spelling*) and
//! one grammar production, identified by a numeric node kind id.
//!
//! # What is a node kind id? (for beginners)
//!
//! A generated parser numbers every symbol in its grammar.  Id 0 is reserved
//! for the end-of-input symbol, the key productions follow in declaration
//! order starting at 1, and the `source_file` root comes last:
//!
//! | Production       | Kind id |
//! |------------------|---------|
//! | end of input     | 0       |
//! | `font`           | 1       |
//! | `font_fallback`  | 2       |
//! | ...              | ...     |
//! | `divider`        | 20      |
//! | `source_file`    | 21      |
//!
//! Tools that walk the syntax tree only see these ids, so [`KeyToken`] uses
//! them as its discriminants and [`KeyToken::from_kind_id`] maps them back.

use serde::{Deserialize, Serialize};

/// Directory that every somebar key path lives under.
pub const KEY_PREFIX: &str = "/dotfiles/somebar/";

/// Node kind id of the `source_file` root production.
pub const SOURCE_FILE_KIND_ID: u16 = 21;

/// One recognized somebar configuration key.
///
/// The numeric value of each variant is its node kind id.  The serialized
/// form is the snake_case production name (e.g. `"font_fallback"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u16)]
pub enum KeyToken {
    // Fonts
    Font = 1,
    FontFallback = 2,

    // Clock block
    TimeBlock = 3,
    DateFmt = 4,

    // Browser launcher
    BrowserPath = 5,
    Browser = 6,

    // Clock block (continued)
    TimeFmt = 7,
    UpdateTimeNtp = 8,

    // Block toggles
    BrightnessBlock = 9,
    BatteryBlock = 10,
    ConnmanBlock = 11,
    MediaBlock = 12,

    // Appearance
    ColorActive = 13,
    ColorInactive = 14,
    PaddingX = 15,
    PaddingY = 16,
    TopBar = 17,

    // Misc
    TimeServers = 18,
    BarShowTime = 19,
    Divider = 20,
}

impl KeyToken {
    /// Number of recognized keys.
    pub const COUNT: usize = 20;

    /// Every key, in grammar declaration order.
    pub const ALL: [KeyToken; KeyToken::COUNT] = [
        KeyToken::Font,
        KeyToken::FontFallback,
        KeyToken::TimeBlock,
        KeyToken::DateFmt,
        KeyToken::BrowserPath,
        KeyToken::Browser,
        KeyToken::TimeFmt,
        KeyToken::UpdateTimeNtp,
        KeyToken::BrightnessBlock,
        KeyToken::BatteryBlock,
        KeyToken::ConnmanBlock,
        KeyToken::MediaBlock,
        KeyToken::ColorActive,
        KeyToken::ColorInactive,
        KeyToken::PaddingX,
        KeyToken::PaddingY,
        KeyToken::TopBar,
        KeyToken::TimeServers,
        KeyToken::BarShowTime,
        KeyToken::Divider,
    ];

    /// Returns the fully-qualified dconf key path for this key.
    pub const fn spelling(self) -> &'static str {
        match self {
            KeyToken::Font => "/dotfiles/somebar/font",
            KeyToken::FontFallback => "/dotfiles/somebar/font-fallback",
            KeyToken::TimeBlock => "/dotfiles/somebar/time-block",
            KeyToken::DateFmt => "/dotfiles/somebar/date-fmt",
            KeyToken::BrowserPath => "/dotfiles/somebar/browser-path",
            KeyToken::Browser => "/dotfiles/somebar/browser",
            KeyToken::TimeFmt => "/dotfiles/somebar/time-fmt",
            KeyToken::UpdateTimeNtp => "/dotfiles/somebar/update-time-ntp",
            KeyToken::BrightnessBlock => "/dotfiles/somebar/brightness-block",
            KeyToken::BatteryBlock => "/dotfiles/somebar/battery-block",
            KeyToken::ConnmanBlock => "/dotfiles/somebar/connman-block",
            KeyToken::MediaBlock => "/dotfiles/somebar/media-block",
            KeyToken::ColorActive => "/dotfiles/somebar/color-active",
            KeyToken::ColorInactive => "/dotfiles/somebar/color-inactive",
            KeyToken::PaddingX => "/dotfiles/somebar/padding-x",
            KeyToken::PaddingY => "/dotfiles/somebar/padding-y",
            KeyToken::TopBar => "/dotfiles/somebar/top-bar",
            KeyToken::TimeServers => "/dotfiles/somebar/time-servers",
            KeyToken::BarShowTime => "/dotfiles/somebar/bar-show-time",
            KeyToken::Divider => "/dotfiles/somebar/divider",
        }
    }

    /// Returns the snake_case production name used in syntax trees.
    pub const fn name(self) -> &'static str {
        match self {
            KeyToken::Font => "font",
            KeyToken::FontFallback => "font_fallback",
            KeyToken::TimeBlock => "time_block",
            KeyToken::DateFmt => "date_fmt",
            KeyToken::BrowserPath => "browser_path",
            KeyToken::Browser => "browser",
            KeyToken::TimeFmt => "time_fmt",
            KeyToken::UpdateTimeNtp => "update_time_ntp",
            KeyToken::BrightnessBlock => "brightness_block",
            KeyToken::BatteryBlock => "battery_block",
            KeyToken::ConnmanBlock => "connman_block",
            KeyToken::MediaBlock => "media_block",
            KeyToken::ColorActive => "color_active",
            KeyToken::ColorInactive => "color_inactive",
            KeyToken::PaddingX => "padding_x",
            KeyToken::PaddingY => "padding_y",
            KeyToken::TopBar => "top_bar",
            KeyToken::TimeServers => "time_servers",
            KeyToken::BarShowTime => "bar_show_time",
            KeyToken::Divider => "divider",
        }
    }

    /// Converts a raw node kind id to a [`KeyToken`].
    ///
    /// Returns `None` for the end-of-input symbol (0), the `source_file`
    /// root, and any id the grammar does not assign.
    pub fn from_kind_id(id: u16) -> Option<Self> {
        match id {
            1 => Some(KeyToken::Font),
            2 => Some(KeyToken::FontFallback),
            3 => Some(KeyToken::TimeBlock),
            4 => Some(KeyToken::DateFmt),
            5 => Some(KeyToken::BrowserPath),
            6 => Some(KeyToken::Browser),
            7 => Some(KeyToken::TimeFmt),
            8 => Some(KeyToken::UpdateTimeNtp),
            9 => Some(KeyToken::BrightnessBlock),
            10 => Some(KeyToken::BatteryBlock),
            11 => Some(KeyToken::ConnmanBlock),
            12 => Some(KeyToken::MediaBlock),
            13 => Some(KeyToken::ColorActive),
            14 => Some(KeyToken::ColorInactive),
            15 => Some(KeyToken::PaddingX),
            16 => Some(KeyToken::PaddingY),
            17 => Some(KeyToken::TopBar),
            18 => Some(KeyToken::TimeServers),
            19 => Some(KeyToken::BarShowTime),
            20 => Some(KeyToken::Divider),
            _ => None,
        }
    }

    /// Returns the node kind id of this key's production.
    pub const fn kind_id(self) -> u16 {
        self as u16
    }

    /// Returns `true` if this key switches one of the bar's blocks on or off.
    pub fn is_block_toggle(self) -> bool {
        matches!(
            self,
            KeyToken::TimeBlock
                | KeyToken::BrightnessBlock
                | KeyToken::BatteryBlock
                | KeyToken::ConnmanBlock
                | KeyToken::MediaBlock
        )
    }
}

impl std::fmt::Display for KeyToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
