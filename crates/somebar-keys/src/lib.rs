//! # somebar-keys
//!
//! Recognizer for the somebar dconf configuration dialect: a closed set of
//! key paths under `/dotfiles/somebar/`, each mapped to one grammar
//! production.
//!
//! The crate has no I/O and no OS dependencies.  Every table is a compiled-in
//! constant, so recognition is a pure function that any number of threads can
//! call at once.
//!
//! # Architecture overview (for beginners)
//!
//! somebar is a status bar whose settings (fonts, colors, which blocks to
//! show) live in dconf, GNOME's key/value settings store.  Editor tooling and
//! the bar itself need to turn a key path such as
//! `/dotfiles/somebar/battery-block` into something typed.  This crate
//! defines:
//!
//! - **`keys`** – The [`KeyToken`] enum, the exact-match [`recognize`]
//!   function, the [`Grammar`] table with its invariants, and per-key schema
//!   metadata (GVariant type and default value).
//!
//! - **`notify`** – Resolution of dconf `Notify` signals (a prefix plus a list
//!   of relative changes) into the keys they touch.
//!
//! The grammar only recognizes key names.  Values, assignments and comments
//! are not part of it.

pub mod keys;
pub mod notify;

// Re-export the most-used types at the crate root so callers can write
// `somebar_keys::KeyToken` instead of `somebar_keys::keys::token::KeyToken`.
pub use keys::grammar::{Grammar, GrammarError, Production};
pub use keys::schema::{DefaultValue, ValueKind, NTP_SERVERS};
pub use keys::token::{KeyToken, KEY_PREFIX, SOURCE_FILE_KIND_ID};
pub use keys::{recognize, NoMatch};
pub use notify::NotifyEvent;
