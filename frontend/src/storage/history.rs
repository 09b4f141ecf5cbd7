use crate::models::{HistoryEntry, Video};
use crate::storage::{load_list, remove_key, save_list, WATCH_HISTORY_KEY};

pub fn history_entries() -> Vec<HistoryEntry> {
    load_list(WATCH_HISTORY_KEY)
}

/// Record a watch: a repeat view of a known video bumps its count and
/// refreshes its timestamp, a new video starts at count 1. The most
/// recently watched entry always sits at the front.
pub fn record_watch(video: &Video) {
    let now = chrono::Utc::now().to_rfc3339();
    let entries = upsert_entry(history_entries(), video, &now);
    save_list(WATCH_HISTORY_KEY, &entries);
}

pub fn remove_entry(video_id: &str) -> Vec<HistoryEntry> {
    let mut entries = history_entries();
    entries.retain(|entry| entry.video.id != video_id);
    save_list(WATCH_HISTORY_KEY, &entries);
    entries
}

pub fn clear_history() {
    remove_key(WATCH_HISTORY_KEY);
}

pub fn upsert_entry(
    mut entries: Vec<HistoryEntry>,
    video: &Video,
    watched_at: &str,
) -> Vec<HistoryEntry> {
    if let Some(index) = entries.iter().position(|entry| entry.video.id == video.id) {
        let mut entry = entries.remove(index);
        entry.watch_count += 1;
        entry.watched_at = watched_at.to_string();
        entries.insert(0, entry);
    } else {
        entries.insert(
            0,
            HistoryEntry {
                video: video.clone(),
                watched_at: watched_at.to_string(),
                watch_count: 1,
                completion_rate: None,
            },
        );
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: &str) -> Video {
        Video {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            thumbnail: String::new(),
            uploader: String::new(),
            views: String::new(),
            likes: String::new(),
            comments: String::new(),
            upload_date: String::new(),
            platform: String::new(),
            category: String::new(),
            url: String::new(),
            duration: String::new(),
        }
    }

    #[test]
    fn first_watch_starts_at_count_one() {
        let entries = upsert_entry(Vec::new(), &video("a"), "2024-01-01T00:00:00Z");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].watch_count, 1);
        assert_eq!(entries[0].watched_at, "2024-01-01T00:00:00Z");
    }

    #[test]
    fn repeat_watch_bumps_count_and_moves_to_front() {
        let entries = upsert_entry(Vec::new(), &video("a"), "t1");
        let entries = upsert_entry(entries, &video("b"), "t2");
        let entries = upsert_entry(entries, &video("a"), "t3");

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].video.id, "a");
        assert_eq!(entries[0].watch_count, 2);
        assert_eq!(entries[0].watched_at, "t3");
        assert_eq!(entries[1].video.id, "b");
    }
}
