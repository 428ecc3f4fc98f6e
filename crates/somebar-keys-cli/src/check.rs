//! Line-by-line key checking.
//!
//! Each non-blank input line is one candidate key path.  Lines are trimmed
//! when the config asks for it; nothing else is normalized before the line is
//! handed to [`somebar_keys::recognize`].

use std::io::BufRead;

use serde::Serialize;
use somebar_keys::{recognize, KeyToken, NoMatch};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::CheckConfig;

/// Errors raised by the `check` subcommand.
#[derive(Debug, Error)]
pub enum CheckError {
    /// An input could not be read.
    #[error("failed to read {source_name}: {source}")]
    Io {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    /// At least one line was not a known key and unknown keys are denied.
    #[error("{count} unrecognized key(s)")]
    Unrecognized { count: usize },
}

/// Options controlling how lines are prepared.
#[derive(Debug, Clone, Copy)]
pub struct CheckOptions {
    pub trim: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self { trim: true }
    }
}

/// Outcome for one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOutcome {
    /// 1-based line number within its source.
    pub line: usize,
    pub input: String,
    pub result: Result<KeyToken, NoMatch>,
}

/// Serialized shape of a [`LineOutcome`]; fields keep this order in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineRecord<'a> {
    pub source: &'a str,
    pub line: usize,
    pub input: &'a str,
    /// `None` for rejected lines.
    pub key: Option<KeyToken>,
}

/// All outcomes for one input source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// File path, or `-` for stdin.
    pub source: String,
    pub outcomes: Vec<LineOutcome>,
}

impl CheckReport {
    pub fn recognized(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn unrecognized(&self) -> usize {
        self.outcomes.len() - self.recognized()
    }

    /// Renders recognized lines as `<source>:<line>: <node name>` and logs a
    /// warning for each rejected line.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for outcome in &self.outcomes {
            match &outcome.result {
                Ok(key) => {
                    out.push_str(&format!("{}:{}: {}\n", self.source, outcome.line, key));
                }
                Err(e) => warn!(source = %self.source, line = outcome.line, "{e}"),
            }
        }
        out
    }

    /// One record per outcome, in line order.
    pub fn records(&self) -> impl Iterator<Item = LineRecord<'_>> {
        self.outcomes.iter().map(move |o| LineRecord {
            source: &self.source,
            line: o.line,
            input: &o.input,
            key: o.result.as_ref().ok().copied(),
        })
    }
}

/// Recognizes every non-blank line of `reader`.
///
/// # Errors
///
/// Returns [`CheckError::Io`] if a line cannot be read (including invalid
/// UTF-8).
pub fn check_reader<R: BufRead>(
    source: &str,
    reader: R,
    options: CheckOptions,
) -> Result<CheckReport, CheckError> {
    let mut outcomes = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|err| CheckError::Io {
            source_name: source.to_string(),
            source: err,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let input = if options.trim { line.trim() } else { line.as_str() };
        outcomes.push(LineOutcome {
            line: index + 1,
            input: input.to_string(),
            result: recognize(input),
        });
    }

    let report = CheckReport {
        source: source.to_string(),
        outcomes,
    };
    debug!(
        source,
        recognized = report.recognized(),
        unrecognized = report.unrecognized(),
        "checked input"
    );
    Ok(report)
}

/// Renders every report as a single pretty-printed JSON array of records.
pub fn render_json(reports: &[CheckReport]) -> serde_json::Result<String> {
    let records: Vec<LineRecord<'_>> = reports.iter().flat_map(CheckReport::records).collect();
    serde_json::to_string_pretty(&records)
}

/// Effective deny-unknown policy: the config value unless `--allow-unknown`
/// was passed.
pub fn deny_unknown(config: &CheckConfig, allow_unknown: bool) -> bool {
    config.deny_unknown && !allow_unknown
}

/// Sums unrecognized lines across reports and fails if any are denied.
///
/// # Errors
///
/// Returns [`CheckError::Unrecognized`] when `deny_unknown` is set and at
/// least one line was rejected.
pub fn enforce(reports: &[CheckReport], deny_unknown: bool) -> Result<(), CheckError> {
    let count: usize = reports.iter().map(CheckReport::unrecognized).sum();
    if deny_unknown && count > 0 {
        return Err(CheckError::Unrecognized { count });
    }
    Ok(())
}
