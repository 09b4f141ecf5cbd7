use crate::models::Video;
use crate::storage::{load_list, move_item, save_list, WATCH_LATER_KEY};

pub fn watch_later_videos() -> Vec<Video> {
    load_list(WATCH_LATER_KEY)
}

pub fn is_in_watch_later(video_id: &str) -> bool {
    watch_later_videos().iter().any(|video| video.id == video_id)
}

/// Queue a video at the front of the list; already-queued ids are left
/// where they are.
pub fn add_to_watch_later(video: &Video) -> Vec<Video> {
    let list = add_to_front(watch_later_videos(), video);
    save_list(WATCH_LATER_KEY, &list);
    list
}

pub fn remove_from_watch_later(video_id: &str) -> Vec<Video> {
    let mut list = watch_later_videos();
    list.retain(|video| video.id != video_id);
    save_list(WATCH_LATER_KEY, &list);
    list
}

pub fn reorder_watch_later(index: usize, up: bool) -> Vec<Video> {
    let list = move_item(watch_later_videos(), index, up);
    save_list(WATCH_LATER_KEY, &list);
    list
}

pub fn add_to_front(mut list: Vec<Video>, video: &Video) -> Vec<Video> {
    if list.iter().any(|queued| queued.id == video.id) {
        return list;
    }
    list.insert(0, video.clone());
    list
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
    fn newly_queued_videos_go_to_the_front() {
        let list = vec![video("a")];
        let list = add_to_front(list, &video("b"));
        let ids: Vec<&str> = list.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn duplicate_ids_are_not_requeued() {
        let list = vec![video("a"), video("b")];
        let list = add_to_front(list, &video("b"));
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id, "a");
    }
}
