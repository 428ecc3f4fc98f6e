//! The grammar: an ordered, closed table of literal key productions.
//!
//! Each production pairs one literal spelling with the [`KeyToken`] it
//! produces.  The builtin table is compiled in and lists the productions in
//! declaration order.  [`Grammar::validate`] checks the table's invariants:
//! the spellings are pairwise distinct, and each spelling is the one its token
//! reports.

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use super::token::KeyToken;
use super::NoMatch;

/// A violated grammar invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    /// Two productions share a spelling, so recognition would be ambiguous.
    #[error("spelling {spelling:?} is claimed by both {first} and {second}")]
    DuplicateSpelling {
        spelling: String,
        first: KeyToken,
        second: KeyToken,
    },

    /// A production's spelling differs from [`KeyToken::spelling`].
    #[error("production for {token} is spelled {found:?}, expected {expected:?}")]
    SpellingMismatch {
        token: KeyToken,
        expected: &'static str,
        found: String,
    },
}

/// One literal alternative of the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Production<'a> {
    pub spelling: &'a str,
    pub token: KeyToken,
}

impl Production<'static> {
    /// Builds the canonical production for `token`.
    pub const fn of(token: KeyToken) -> Self {
        Self {
            spelling: token.spelling(),
            token,
        }
    }
}

/// The builtin productions, in declaration order.
pub static PRODUCTIONS: [Production<'static>; KeyToken::COUNT] = [
    Production::of(KeyToken::Font),
    Production::of(KeyToken::FontFallback),
    Production::of(KeyToken::TimeBlock),
    Production::of(KeyToken::DateFmt),
    Production::of(KeyToken::BrowserPath),
    Production::of(KeyToken::Browser),
    Production::of(KeyToken::TimeFmt),
    Production::of(KeyToken::UpdateTimeNtp),
    Production::of(KeyToken::BrightnessBlock),
    Production::of(KeyToken::BatteryBlock),
    Production::of(KeyToken::ConnmanBlock),
    Production::of(KeyToken::MediaBlock),
    Production::of(KeyToken::ColorActive),
    Production::of(KeyToken::ColorInactive),
    Production::of(KeyToken::PaddingX),
    Production::of(KeyToken::PaddingY),
    Production::of(KeyToken::TopBar),
    Production::of(KeyToken::TimeServers),
    Production::of(KeyToken::BarShowTime),
    Production::of(KeyToken::Divider),
];

/// An ordered set of literal productions.
#[derive(Debug, Clone, Copy)]
pub struct Grammar<'a> {
    productions: &'a [Production<'a>],
}

impl Grammar<'static> {
    /// Returns the compiled-in somebar grammar.
    pub fn builtin() -> Self {
        Self {
            productions: &PRODUCTIONS,
        }
    }
}

impl<'a> Grammar<'a> {
    /// Wraps a caller-supplied production table.
    ///
    /// The table is not checked; call [`Grammar::validate`] before relying
    /// on it.
    pub fn from_productions(productions: &'a [Production<'a>]) -> Self {
        Self { productions }
    }

    pub fn productions(&self) -> &'a [Production<'a>] {
        self.productions
    }

    pub fn len(&self) -> usize {
        self.productions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.productions.is_empty()
    }

    /// Returns `true` if `input` exactly equals one of the spellings.
    pub fn contains(&self, input: &str) -> bool {
        self.productions.iter().any(|p| p.spelling == input)
    }

    /// Classifies `input` against this grammar's productions.
    ///
    /// # Errors
    ///
    /// Returns [`NoMatch`] when no spelling equals `input`.
    pub fn recognize(&self, input: &str) -> Result<KeyToken, NoMatch> {
        self.productions
            .iter()
            .find(|p| p.spelling == input)
            .map(|p| p.token)
            .ok_or_else(|| NoMatch::new(input))
    }

    /// Checks that spellings are pairwise distinct and canonical.
    ///
    /// # Errors
    ///
    /// Returns the first [`GrammarError`] found, scanning in declaration order.
    pub fn validate(&self) -> Result<(), GrammarError> {
        let mut seen: HashMap<&str, KeyToken> = HashMap::with_capacity(self.len());

        for production in self.productions {
            if production.spelling != production.token.spelling() {
                return Err(GrammarError::SpellingMismatch {
                    token: production.token,
                    expected: production.token.spelling(),
                    found: production.spelling.to_string(),
                });
            }
            if let Some(&first) = seen.get(production.spelling) {
                return Err(GrammarError::DuplicateSpelling {
                    spelling: production.spelling.to_string(),
                    first,
                    second: production.token,
                });
            }
            seen.insert(production.spelling, production.token);
        }

        debug!(productions = self.len(), "grammar validated");
        Ok(())
    }
}

impl Default for Grammar<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}
