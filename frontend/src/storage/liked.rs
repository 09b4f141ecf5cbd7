use crate::models::Video;
use crate::storage::{load_list, move_item, save_list, LIKED_VIDEOS_KEY};

pub fn liked_videos() -> Vec<Video> {
    load_list(LIKED_VIDEOS_KEY)
}

pub fn is_liked(video_id: &str) -> bool {
    liked_videos().iter().any(|video| video.id == video_id)
}

/// Flip the like state of a video. Returns the new state: `true` when
/// the video is now liked.
pub fn toggle_like(video: &Video) -> bool {
    let mut list = liked_videos();
    if let Some(index) = list.iter().position(|liked| liked.id == video.id) {
        list.remove(index);
        save_list(LIKED_VIDEOS_KEY, &list);
        false
    } else {
        list.insert(0, video.clone());
        save_list(LIKED_VIDEOS_KEY, &list);
        true
    }
}

pub fn remove_liked(video_id: &str) {
    let mut list = liked_videos();
    list.retain(|video| video.id != video_id);
    save_list(LIKED_VIDEOS_KEY, &list);
}

/// Nudge a liked video one position up or down in the saved order.
pub fn reorder_liked(index: usize, up: bool) -> Vec<Video> {
    let list = move_item(liked_videos(), index, up);
    save_list(LIKED_VIDEOS_KEY, &list);
    list
}

#[cfg(test)]
mod tests {
    use super::*;

    // The storage-backed paths only run in a browser; what can go
    // wrong off-browser is the list manipulation itself.
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
    fn reorder_helper_respects_bounds() {
        let list = vec![video("a"), video("b"), video("c")];
        let moved = move_item(list, 2, true);
        let ids: Vec<&str> = moved.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c", "b"]);
    }
}
