//! Resolution of dconf writer `Notify` signals into changed keys.
//!
//! dconf reports writes as `ca.desrt.dconf.Writer.Notify(prefix, changes, tag)`.
//! Every changed path is `prefix` joined with one entry of `changes`:
//!
//! | Write                           | prefix                         | changes                 |
//! |---------------------------------|--------------------------------|-------------------------|
//! | one key                         | `/dotfiles/somebar/font`       | `[""]`                  |
//! | several keys in one directory   | `/dotfiles/somebar/`           | `["font", "divider"]`   |
//!
//! [`NotifyEvent::resolve`] turns such a payload into the [`KeyToken`]s the
//! bar has to reload.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::keys::{recognize, KeyToken, NoMatch};

/// Payload of a dconf writer `Notify` signal.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NotifyEvent {
    pub prefix: String,
    #[serde(default)]
    pub changes: Vec<String>,
    #[serde(default)]
    pub tag: String,
}

impl NotifyEvent {
    /// Creates an event with an empty tag.
    pub fn new(prefix: impl Into<String>, changes: Vec<String>) -> Self {
        Self {
            prefix: prefix.into(),
            changes,
            tag: String::new(),
        }
    }

    /// Yields every changed path, `prefix + change`.
    ///
    /// An empty `changes` list is treated as `[""]`, i.e. the prefix itself.
    pub fn changed_paths(&self) -> impl Iterator<Item = String> + '_ {
        let bare = self.changes.is_empty().then(|| self.prefix.clone());
        bare.into_iter().chain(
            self.changes
                .iter()
                .map(move |change| format!("{}{}", self.prefix, change)),
        )
    }

    /// Recognizes every changed path, keeping rejections.
    pub fn resolve_all(&self) -> Vec<Result<KeyToken, NoMatch>> {
        self.changed_paths().map(|path| recognize(&path)).collect()
    }

    /// Returns the recognized keys in order of first appearance.
    ///
    /// Unrecognized paths are skipped.
    pub fn resolve(&self) -> Vec<KeyToken> {
        let mut keys = Vec::new();
        for result in self.resolve_all() {
            match result {
                Ok(key) if !keys.contains(&key) => keys.push(key),
                Ok(_) => {}
                Err(e) => debug!(path = %e.input, tag = %self.tag, "ignoring change to unknown key"),
            }
        }
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn changes(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_key_write_resolves_to_that_key() {
        // Arrange
        let event = NotifyEvent::new("/dotfiles/somebar/font", changes(&[""]));

        // Act
        let keys = event.resolve();

        // Assert
        assert_eq!(keys, vec![KeyToken::Font]);
    }

    #[test]
    fn test_directory_write_resolves_each_change() {
        let event = NotifyEvent::new(
            "/dotfiles/somebar/",
            changes(&["padding-x", "padding-y", "top-bar"]),
        );
        assert_eq!(
            event.resolve(),
            vec![KeyToken::PaddingX, KeyToken::PaddingY, KeyToken::TopBar]
        );
    }

    #[test]
    fn test_empty_changes_means_prefix_is_the_key() {
        let event = NotifyEvent::new("/dotfiles/somebar/divider", Vec::new());
        assert_eq!(
            event.changed_paths().collect::<Vec<_>>(),
            vec!["/dotfiles/somebar/divider".to_string()]
        );
        assert_eq!(event.resolve(), vec![KeyToken::Divider]);
    }

    #[test]
    fn test_unknown_paths_are_skipped_but_reported_by_resolve_all() {
        let event = NotifyEvent::new(
            "/dotfiles/somebar/",
            changes(&["wireplumber-block", "battery-block"]),
        );

        assert_eq!(event.resolve(), vec![KeyToken::BatteryBlock]);

        let all = event.resolve_all();
        assert_eq!(
            all[0],
            Err(NoMatch::new("/dotfiles/somebar/wireplumber-block"))
        );
        assert_eq!(all[1], Ok(KeyToken::BatteryBlock));
    }

    #[test]
    fn test_duplicate_changes_are_reported_once() {
        let event = NotifyEvent::new("/dotfiles/somebar/", changes(&["browser", "browser"]));
        assert_eq!(event.resolve(), vec![KeyToken::Browser]);
    }

    #[test]
    fn test_other_directories_resolve_to_nothing() {
        let event = NotifyEvent::new("/org/gnome/desktop/interface/", changes(&["font-name"]));
        assert!(event.resolve().is_empty());
    }

    #[test]
    fn test_notify_event_deserializes_with_optional_fields_missing() {
        let event: NotifyEvent =
            serde_json::from_str(r#"{"prefix":"/dotfiles/somebar/time-fmt"}"#).unwrap();
        assert!(event.changes.is_empty());
        assert_eq!(event.resolve(), vec![KeyToken::TimeFmt]);
    }
}
