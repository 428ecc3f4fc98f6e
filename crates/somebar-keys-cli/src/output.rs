//! Rendering of the key table and Notify results.

use clap::ValueEnum;
use serde::Serialize;
use somebar_keys::{KeyToken, NotifyEvent};

/// Output format shared by every subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One row of `somebar-keys list`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyRow {
    pub spelling: &'static str,
    pub name: &'static str,
    pub kind_id: u16,
    pub value_type: &'static str,
    pub default: String,
}

impl From<KeyToken> for KeyRow {
    fn from(token: KeyToken) -> Self {
        Self {
            spelling: token.spelling(),
            name: token.name(),
            kind_id: token.kind_id(),
            value_type: token.value_kind().type_string(),
            default: token.default_value().to_string(),
        }
    }
}

/// Builds the full key table in declaration order.
pub fn key_rows() -> Vec<KeyRow> {
    KeyToken::ALL.into_iter().map(KeyRow::from).collect()
}

/// Renders the key table as aligned columns.
pub fn render_rows_text(rows: &[KeyRow]) -> String {
    let width = rows.iter().map(|r| r.spelling.len()).max().unwrap_or(0);
    rows.iter()
        .map(|r| {
            format!(
                "{:<width$}  {:>2}  {:<16}  {:<4}  {}\n",
                r.spelling, r.kind_id, r.name, r.value_type, r.default
            )
        })
        .collect()
}

/// Renders the keys touched by a Notify payload, one node name per line.
pub fn render_notify_text(event: &NotifyEvent) -> String {
    event
        .resolve()
        .into_iter()
        .map(|key| format!("{key}\n"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_rows_cover_every_key_in_order() {
        let rows = key_rows();
        assert_eq!(rows.len(), KeyToken::COUNT);
        assert_eq!(rows[0].spelling, "/dotfiles/somebar/font");
        assert_eq!(rows[19].name, "divider");
    }

    #[test]
    fn test_key_row_carries_schema_metadata() {
        let row = KeyRow::from(KeyToken::BarShowTime);
        assert_eq!(row.kind_id, 19);
        assert_eq!(row.value_type, "t");
        assert_eq!(row.default, "uint64 500");
    }

    #[test]
    fn test_render_rows_text_has_one_line_per_key() {
        let text = render_rows_text(&key_rows());
        assert_eq!(text.lines().count(), KeyToken::COUNT);
        let top_bar = text
            .lines()
            .find(|l| l.starts_with("/dotfiles/somebar/top-bar "))
            .expect("top-bar row");
        assert!(top_bar.contains("top_bar"));
        assert!(top_bar.trim_end().ends_with("true"));
    }

    #[test]
    fn test_rows_serialize_to_json_objects() {
        let json = serde_json::to_value(key_rows()).expect("serialize");
        assert_eq!(json[14]["name"], "padding_x");
        assert_eq!(json[14]["default"], "10.0");
    }

    #[test]
    fn test_render_notify_text() {
        let event = NotifyEvent::new(
            "/dotfiles/somebar/",
            vec!["color-active".to_string(), "nope".to_string()],
        );
        assert_eq!(render_notify_text(&event), "color_active\n");
    }
}
