//! Library half of the `somebar-keys` command-line tool.
//!
//! The binary in `main.rs` only parses arguments and wires these modules
//! together:
//!
//! - **`config`** – TOML configuration file (log level, check behaviour).
//! - **`check`** – Line-by-line recognition of key paths from files or stdin.
//! - **`output`** – Text and JSON rendering of the key table and Notify results.

pub mod check;
pub mod config;
pub mod output;
