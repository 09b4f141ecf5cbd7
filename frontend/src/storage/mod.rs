//! Browser-local persistence. Every list lives under its own
//! `localStorage` key and is owned exclusively by its submodule;
//! corrupt JSON in any slot degrades to an empty list, never a crash.

pub mod history;
pub mod liked;
pub mod preferences;
pub mod watch_later;

use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::Storage;

pub const WATCH_HISTORY_KEY: &str = "watchHistory";
pub const LIKED_VIDEOS_KEY: &str = "likedVideos";
pub const WATCH_LATER_KEY: &str = "watchLater";
pub const REPORTED_VIDEOS_KEY: &str = "reportedVideos";
pub const HIDDEN_VIDEOS_KEY: &str = "hiddenVideos";
pub const PEERTUBE_INSTANCE_KEY: &str = "peertubeInstance";
pub const SIDEBAR_COLLAPSED_KEY: &str = "sidebarCollapsed";

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok()?
}

pub fn load_list<T: DeserializeOwned>(key: &str) -> Vec<T> {
    let Some(storage) = local_storage() else {
        return Vec::new();
    };
    let Ok(Some(raw)) = storage.get_item(key) else {
        return Vec::new();
    };

    match serde_json::from_str(&raw) {
        Ok(list) => list,
        Err(e) => {
            log::error!("Ignoring corrupt \"{key}\" storage entry: {e}");
            Vec::new()
        }
    }
}

pub fn save_list<T: Serialize>(key: &str, items: &[T]) {
    let Some(storage) = local_storage() else {
        return;
    };
    match serde_json::to_string(items) {
        Ok(raw) => {
            if let Err(e) = storage.set_item(key, &raw) {
                log::error!("Failed to persist \"{key}\": {e:?}");
            }
        }
        Err(e) => log::error!("Failed to serialize \"{key}\": {e}"),
    }
}

pub fn load_string(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

pub fn save_string(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        if let Err(e) = storage.set_item(key, value) {
            log::error!("Failed to persist \"{key}\": {e:?}");
        }
    }
}

pub fn remove_key(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

/// Move one element of a list a single step up or down, preserving
/// everything else. Out-of-range moves are no-ops.
pub fn move_item<T>(mut list: Vec<T>, index: usize, up: bool) -> Vec<T> {
    if up {
        if index > 0 && index < list.len() {
            list.swap(index, index - 1);
        }
    } else if index + 1 < list.len() {
        list.swap(index, index + 1);
    }
    list
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_item_swaps_neighbors() {
        let list = vec!["a", "b", "c"];
        assert_eq!(move_item(list.clone(), 1, true), vec!["b", "a", "c"]);
        assert_eq!(move_item(list, 1, false), vec!["a", "c", "b"]);
    }

    #[test]
    fn move_item_ignores_out_of_range() {
        let list = vec!["a", "b"];
        assert_eq!(move_item(list.clone(), 0, true), vec!["a", "b"]);
        assert_eq!(move_item(list.clone(), 1, false), vec!["a", "b"]);
        assert_eq!(move_item(list, 5, false), vec!["a", "b"]);
    }
}
