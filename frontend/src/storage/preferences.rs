use crate::storage::{
    load_list, load_string, remove_key, save_list, save_string, HIDDEN_VIDEOS_KEY,
    PEERTUBE_INSTANCE_KEY, REPORTED_VIDEOS_KEY, SIDEBAR_COLLAPSED_KEY,
};

fn add_id(key: &str, video_id: &str) {
    let mut ids: Vec<String> = load_list(key);
    if !ids.iter().any(|id| id == video_id) {
        ids.push(video_id.to_string());
        save_list(key, &ids);
    }
}

pub fn hide_video(video_id: &str) {
    add_id(HIDDEN_VIDEOS_KEY, video_id);
}

pub fn is_hidden(video_id: &str) -> bool {
    load_list::<String>(HIDDEN_VIDEOS_KEY)
        .iter()
        .any(|id| id == video_id)
}

pub fn report_video(video_id: &str) {
    add_id(REPORTED_VIDEOS_KEY, video_id);
    // Reported videos disappear from the UI as well.
    add_id(HIDDEN_VIDEOS_KEY, video_id);
}

pub fn peertube_instance() -> Option<String> {
    load_string(PEERTUBE_INSTANCE_KEY).filter(|url| !url.trim().is_empty())
}

pub fn set_peertube_instance(url: &str) {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        remove_key(PEERTUBE_INSTANCE_KEY);
    } else {
        save_string(PEERTUBE_INSTANCE_KEY, trimmed);
    }
}

pub fn sidebar_collapsed() -> bool {
    load_string(SIDEBAR_COLLAPSED_KEY)
        .map(|value| value == "true")
        .unwrap_or(false)
}

pub fn set_sidebar_collapsed(collapsed: bool) {
    save_string(SIDEBAR_COLLAPSED_KEY, if collapsed { "true" } else { "false" });
}
