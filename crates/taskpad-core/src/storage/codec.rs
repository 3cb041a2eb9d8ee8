//! JSON encoding of persisted values.
//!
//! Decoding never fails: malformed data is logged and replaced by the
//! default (an empty task list, which the state seeds, or the light theme).

use log::warn;
use serde::Deserialize;

use crate::{
    error::Result,
    models::{Task, Theme},
};

/// Serializes the committed fields of `tasks`.
pub fn encode_tasks(tasks: &[Task]) -> Result<String> {
    Ok(serde_json::to_string(tasks)?)
}

/// Parses a stored task list, falling back to an empty list.
pub fn decode_tasks(raw: Option<&str>) -> Vec<Task> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    match serde_json::from_str::<Option<Vec<Task>>>(raw) {
        Ok(tasks) => tasks.unwrap_or_default(),
        Err(e) => {
            warn!("Discarding malformed stored tasks: {e}");
            Vec::new()
        }
    }
}

pub fn encode_theme(theme: Theme) -> Result<String> {
    Ok(serde_json::to_string(&theme)?)
}

/// Accepted encodings of the theme flag.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredTheme {
    Named(Theme),
    /// Older dark-mode boolean
    DarkMode(bool),
}

/// Parses a stored theme, falling back to light.
pub fn decode_theme(raw: Option<&str>) -> Theme {
    let Some(raw) = raw else {
        return Theme::default();
    };
    match serde_json::from_str::<Option<StoredTheme>>(raw) {
        Ok(Some(StoredTheme::Named(theme))) => theme,
        Ok(Some(StoredTheme::DarkMode(true))) => Theme::Dark,
        Ok(Some(StoredTheme::DarkMode(false))) | Ok(None) => Theme::Light,
        Err(e) => {
            warn!("Discarding malformed stored theme: {e}");
            Theme::default()
        }
    }
}
