//! Value types and defaults for each key.
//!
//! dconf stores every value as a GVariant.  The bar reads each key with a
//! fixed type and falls back to a built-in default when the key is unset or
//! holds a value of the wrong type.  This module records both, so tooling can
//! show them without asking the bar.
//!
//! Nothing here parses values; the table is descriptive only.

use std::fmt;

use super::token::KeyToken;

/// NIST time servers queried when `time-servers` is unset.
pub const NTP_SERVERS: [&str; 18] = [
    "time-a-g.nist.gov",
    "time-b-g.nist.gov",
    "time-c-g.nist.gov",
    "time-d-g.nist.gov",
    "time-e-g.nist.gov",
    "time-a-wwv.nist.gov",
    "time-b-wwv.nist.gov",
    "time-c-wwv.nist.gov",
    "time-d-wwv.nist.gov",
    "time-e-wwv.nist.gov",
    "time-a-b.nist.gov",
    "time-b-b.nist.gov",
    "time-c-b.nist.gov",
    "time-d-b.nist.gov",
    "time-e-b.nist.gov",
    "utcnist.colorado.edu",
    "utcnist2.colorado.edu",
    "utcnist3.colorado.edu",
];

/// The GVariant type a key holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Boolean,
    String,
    StringArray,
    Double,
    UInt64,
    /// Foreground and background CSS colors.
    ColorPair,
}

impl ValueKind {
    /// Returns the GVariant type string (`b`, `s`, `as`, `d`, `t`, `(ss)`).
    pub fn type_string(self) -> &'static str {
        match self {
            ValueKind::Boolean => "b",
            ValueKind::String => "s",
            ValueKind::StringArray => "as",
            ValueKind::Double => "d",
            ValueKind::UInt64 => "t",
            ValueKind::ColorPair => "(ss)",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_string())
    }
}

/// The value the bar falls back to for an unset key.
///
/// `Display` renders GVariant text format, i.e. what `dconf write` accepts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    Boolean(bool),
    String(&'static str),
    StringArray(&'static [&'static str]),
    Double(f64),
    UInt64(u64),
    ColorPair(&'static str, &'static str),
}

impl DefaultValue {
    pub fn value_kind(&self) -> ValueKind {
        match self {
            DefaultValue::Boolean(_) => ValueKind::Boolean,
            DefaultValue::String(_) => ValueKind::String,
            DefaultValue::StringArray(_) => ValueKind::StringArray,
            DefaultValue::Double(_) => ValueKind::Double,
            DefaultValue::UInt64(_) => ValueKind::UInt64,
            DefaultValue::ColorPair(..) => ValueKind::ColorPair,
        }
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_str("'")?;
    for c in s.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\'' => f.write_str("\\'")?,
            c => write!(f, "{c}")?,
        }
    }
    f.write_str("'")
}

impl fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            DefaultValue::Boolean(b) => write!(f, "{b}"),
            DefaultValue::String(s) => write_quoted(f, s),
            // An empty array literal needs a type annotation.
            DefaultValue::StringArray([]) => f.write_str("@as []"),
            DefaultValue::StringArray(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write_quoted(f, item)?;
                }
                f.write_str("]")
            }
            // `{:?}` keeps the fractional part, so 10.0 stays a double.
            DefaultValue::Double(d) => write!(f, "{d:?}"),
            DefaultValue::UInt64(n) => write!(f, "uint64 {n}"),
            DefaultValue::ColorPair(fg, bg) => {
                f.write_str("(")?;
                write_quoted(f, fg)?;
                f.write_str(", ")?;
                write_quoted(f, bg)?;
                f.write_str(")")
            }
        }
    }
}

impl KeyToken {
    /// Returns the GVariant type this key holds.
    pub fn value_kind(self) -> ValueKind {
        match self {
            KeyToken::TimeBlock
            | KeyToken::UpdateTimeNtp
            | KeyToken::BrightnessBlock
            | KeyToken::BatteryBlock
            | KeyToken::ConnmanBlock
            | KeyToken::MediaBlock
            | KeyToken::TopBar => ValueKind::Boolean,
            KeyToken::Font
            | KeyToken::FontFallback
            | KeyToken::DateFmt
            | KeyToken::BrowserPath
            | KeyToken::Browser
            | KeyToken::TimeFmt
            | KeyToken::Divider => ValueKind::String,
            KeyToken::TimeServers => ValueKind::StringArray,
            KeyToken::PaddingX | KeyToken::PaddingY => ValueKind::Double,
            KeyToken::BarShowTime => ValueKind::UInt64,
            KeyToken::ColorActive | KeyToken::ColorInactive => ValueKind::ColorPair,
        }
    }

    /// Returns the value the bar uses when this key is unset.
    pub fn default_value(self) -> DefaultValue {
        match self {
            KeyToken::Font => DefaultValue::String("FiraCode Nerd Font 14"),
            KeyToken::FontFallback => DefaultValue::String("Noto Sans"),
            KeyToken::TimeBlock => DefaultValue::Boolean(true),
            KeyToken::DateFmt => DefaultValue::String("%m/%d/%y %A"),
            KeyToken::BrowserPath => DefaultValue::String(".firedragon"),
            KeyToken::Browser => DefaultValue::String("firedragon"),
            KeyToken::TimeFmt => DefaultValue::String("%I:%M"),
            KeyToken::UpdateTimeNtp => DefaultValue::Boolean(true),
            KeyToken::BrightnessBlock => DefaultValue::Boolean(true),
            KeyToken::BatteryBlock => DefaultValue::Boolean(true),
            KeyToken::ConnmanBlock => DefaultValue::Boolean(true),
            KeyToken::MediaBlock => DefaultValue::Boolean(true),
            KeyToken::ColorActive => DefaultValue::ColorPair("#ff8f40", "#333a40"),
            KeyToken::ColorInactive => DefaultValue::ColorPair("#b3b1ad", "#0a0e14"),
            KeyToken::PaddingX => DefaultValue::Double(10.0),
            KeyToken::PaddingY => DefaultValue::Double(3.0),
            KeyToken::TopBar => DefaultValue::Boolean(true),
            KeyToken::TimeServers => DefaultValue::StringArray(&NTP_SERVERS),
            KeyToken::BarShowTime => DefaultValue::UInt64(500),
            // Powerline thin separator from the Nerd Fonts private use area.
            KeyToken::Divider => DefaultValue::String("\u{e0b1}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_value_kind_matches_key_value_kind() {
        for token in KeyToken::ALL {
            assert_eq!(
                token.default_value().value_kind(),
                token.value_kind(),
                "{token:?} default has the wrong type"
            );
        }
    }

    #[test]
    fn test_block_toggles_are_booleans_defaulting_to_true() {
        for token in KeyToken::ALL.into_iter().filter(|t| t.is_block_toggle()) {
            assert_eq!(token.value_kind(), ValueKind::Boolean);
            assert_eq!(token.default_value(), DefaultValue::Boolean(true));
        }
    }

    #[test]
    fn test_type_strings() {
        assert_eq!(KeyToken::TopBar.value_kind().type_string(), "b");
        assert_eq!(KeyToken::Font.value_kind().type_string(), "s");
        assert_eq!(KeyToken::TimeServers.value_kind().type_string(), "as");
        assert_eq!(KeyToken::PaddingX.value_kind().type_string(), "d");
        assert_eq!(KeyToken::BarShowTime.value_kind().type_string(), "t");
        assert_eq!(KeyToken::ColorActive.value_kind().to_string(), "(ss)");
    }

    #[test]
    fn test_display_scalar_defaults() {
        assert_eq!(KeyToken::TopBar.default_value().to_string(), "true");
        assert_eq!(KeyToken::PaddingX.default_value().to_string(), "10.0");
        assert_eq!(KeyToken::PaddingY.default_value().to_string(), "3.0");
        assert_eq!(KeyToken::BarShowTime.default_value().to_string(), "uint64 500");
        assert_eq!(
            KeyToken::Font.default_value().to_string(),
            "'FiraCode Nerd Font 14'"
        );
    }

    #[test]
    fn test_display_color_pair() {
        assert_eq!(
            KeyToken::ColorInactive.default_value().to_string(),
            "('#b3b1ad', '#0a0e14')"
        );
    }

    #[test]
    fn test_display_time_servers_lists_every_server() {
        let rendered = KeyToken::TimeServers.default_value().to_string();
        assert!(rendered.starts_with("['time-a-g.nist.gov', "));
        assert!(rendered.ends_with("'utcnist3.colorado.edu']"));
        assert_eq!(rendered.matches(", ").count(), NTP_SERVERS.len() - 1);
    }

    #[test]
    fn test_display_escapes_quotes_and_backslashes() {
        assert_eq!(DefaultValue::String("it's").to_string(), r"'it\'s'");
        assert_eq!(DefaultValue::String(r"a\b").to_string(), r"'a\\b'");
    }

    #[test]
    fn test_display_empty_string_array_is_annotated() {
        assert_eq!(DefaultValue::StringArray(&[]).to_string(), "@as []");
    }

    #[test]
    fn test_divider_default_is_a_single_char() {
        let DefaultValue::String(divider) = KeyToken::Divider.default_value() else {
            panic!("divider default must be a string");
        };
        assert_eq!(divider.chars().count(), 1);
    }
}
