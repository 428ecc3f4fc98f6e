//! Recognition of somebar configuration key paths.
//!
//! The recognizer is a single exact-match step: an input either equals one
//! of the fixed key spellings or it is rejected with [`NoMatch`].  There is
//! no prefix, fuzzy or case-insensitive matching.

pub mod grammar;
pub mod schema;
pub mod token;

use std::str::FromStr;

use thiserror::Error;
use tracing::trace;

pub use grammar::{Grammar, GrammarError};
pub use schema::{DefaultValue, ValueKind};
pub use token::KeyToken;

/// The input did not equal any recognized key spelling.
///
/// Malformed and merely unknown inputs are not distinguished.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized configuration key: {input:?}")]
pub struct NoMatch {
    /// The rejected input, kept for diagnostics.
    pub input: String,
}

impl NoMatch {
    /// Creates a `NoMatch` for the rejected `input`.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

/// Classifies `input` as exactly one [`KeyToken`].
///
/// # Errors
///
/// Returns [`NoMatch`] when `input` is not byte-for-byte equal to one of the
/// key spellings.
///
/// # Examples
///
/// ```rust
/// use somebar_keys::{recognize, KeyToken};
///
/// assert_eq!(recognize("/dotfiles/somebar/top-bar"), Ok(KeyToken::TopBar));
/// assert!(recognize("/dotfiles/somebar/Top-Bar").is_err());
/// ```
pub fn recognize(input: &str) -> Result<KeyToken, NoMatch> {
    let token = match input {
        "/dotfiles/somebar/font" => KeyToken::Font,
        "/dotfiles/somebar/font-fallback" => KeyToken::FontFallback,
        "/dotfiles/somebar/time-block" => KeyToken::TimeBlock,
        "/dotfiles/somebar/date-fmt" => KeyToken::DateFmt,
        "/dotfiles/somebar/browser-path" => KeyToken::BrowserPath,
        "/dotfiles/somebar/browser" => KeyToken::Browser,
        "/dotfiles/somebar/time-fmt" => KeyToken::TimeFmt,
        "/dotfiles/somebar/update-time-ntp" => KeyToken::UpdateTimeNtp,
        "/dotfiles/somebar/brightness-block" => KeyToken::BrightnessBlock,
        "/dotfiles/somebar/battery-block" => KeyToken::BatteryBlock,
        "/dotfiles/somebar/connman-block" => KeyToken::ConnmanBlock,
        "/dotfiles/somebar/media-block" => KeyToken::MediaBlock,
        "/dotfiles/somebar/color-active" => KeyToken::ColorActive,
        "/dotfiles/somebar/color-inactive" => KeyToken::ColorInactive,
        "/dotfiles/somebar/padding-x" => KeyToken::PaddingX,
        "/dotfiles/somebar/padding-y" => KeyToken::PaddingY,
        "/dotfiles/somebar/top-bar" => KeyToken::TopBar,
        "/dotfiles/somebar/time-servers" => KeyToken::TimeServers,
        "/dotfiles/somebar/bar-show-time" => KeyToken::BarShowTime,
        "/dotfiles/somebar/divider" => KeyToken::Divider,
        _ => {
            trace!(input, "no key matches");
            return Err(NoMatch::new(input));
        }
    };
    trace!(key = %token, "recognized key");
    Ok(token)
}

impl FromStr for KeyToken {
    type Err = NoMatch;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        recognize(s)
    }
}
