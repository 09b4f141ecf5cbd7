//! Pure result-merging logic for the search page: local catalog
//! matching, source combination, and sorting. Kept free of any DOM or
//! network dependency so it can be tested off-browser.

use crate::models::Video;
use crate::search::search_options::SortOption;
use chrono::DateTime;

/// Strip everything but digits and dots, then parse. `"1,000"` parses
/// as `1000.0`, `"1.5K views"` as `1.5`, garbage as `0.0`.
pub fn parse_numeric_value(value: &str) -> f64 {
    let clean: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    clean.parse::<f64>().unwrap_or(0.0)
}

fn upload_timestamp(video: &Video) -> i64 {
    DateTime::parse_from_rfc3339(&video.upload_date)
        .map(|date| date.timestamp())
        .unwrap_or(0)
}

/// Sort a combined list. `Relevance` is the identity: combination
/// order already is the presentation policy.
pub fn sort_videos(videos: Vec<Video>, sort: &SortOption) -> Vec<Video> {
    if *sort == SortOption::Relevance {
        return videos;
    }

    let mut sorted = videos;
    match sort {
        SortOption::Date => {
            sorted.sort_by_key(|video| std::cmp::Reverse(upload_timestamp(video)));
        }
        SortOption::Views => {
            sorted.sort_by(|a, b| {
                parse_numeric_value(&b.views)
                    .partial_cmp(&parse_numeric_value(&a.views))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        }
        SortOption::Rating => {
            sorted.sort_by(|a, b| {
                parse_numeric_value(&b.likes)
                    .partial_cmp(&parse_numeric_value(&a.likes))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        }
        SortOption::Relevance => {}
    }
    sorted
}

/// Case-insensitive substring match over title, description and
/// uploader. Matches get their id prefixed with `local-` so they stay
/// unique next to remote results.
pub fn filter_local(catalog: &[Video], query: &str) -> Vec<Video> {
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|video| {
            video.title.to_lowercase().contains(&needle)
                || video.description.to_lowercase().contains(&needle)
                || video.uploader.to_lowercase().contains(&needle)
        })
        .map(|video| {
            let mut local = video.clone();
            local.id = format!("local-{}", video.id);
            local
        })
        .collect()
}

/// Remote sources are fetched eagerly when the local catalog comes up
/// empty, or nearly empty for a non-trivial query.
pub fn should_fetch_remote(local_matches: usize, query: &str) -> bool {
    local_matches == 0 || (local_matches < 3 && query.len() > 2)
}

/// Deterministic presentation order: local first, then PeerTube, then
/// YouTube. This is layout policy, not a relevance ranking.
pub fn combine_results(
    local: &[Video],
    peertube: &[Video],
    youtube: &[Video],
    show_peertube: bool,
    show_youtube: bool,
) -> Vec<Video> {
    let mut combined: Vec<Video> = local.to_vec();

    if show_peertube && !peertube.is_empty() {
        combined.extend_from_slice(peertube);
    }

    if show_youtube && !youtube.is_empty() {
        combined.extend_from_slice(youtube);
    }

    combined
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn video(id: &str, views: &str, likes: &str, upload_date: &str) -> Video {
        Video {
            id: id.to_string(),
            title: format!("video {id}"),
            description: "a test clip".to_string(),
            thumbnail: String::new(),
            uploader: "someone".to_string(),
            views: views.to_string(),
            likes: likes.to_string(),
            comments: "0".to_string(),
            upload_date: upload_date.to_string(),
            platform: "Vidion".to_string(),
            category: "Videos".to_string(),
            url: String::new(),
            duration: "5:00".to_string(),
        }
    }

    #[test]
    fn numeric_parsing_strips_separators() {
        assert_eq!(parse_numeric_value("10"), 10.0);
        assert_eq!(parse_numeric_value("1,000"), 1000.0);
        assert_eq!(parse_numeric_value("1.5K views"), 1.5);
        assert_eq!(parse_numeric_value("garbage"), 0.0);
    }

    #[test]
    fn views_sort_is_numeric_not_lexicographic() {
        let videos = vec![
            video("a", "10", "0", "2024-01-01T00:00:00Z"),
            video("b", "1,000", "0", "2024-01-01T00:00:00Z"),
        ];

        let sorted = sort_videos(videos, &SortOption::Views);
        assert_eq!(sorted[0].id, "b");
        assert_eq!(sorted[1].id, "a");
    }

    #[test]
    fn relevance_preserves_input_order() {
        let videos = vec![
            video("z", "1", "9", "2020-01-01T00:00:00Z"),
            video("a", "9", "1", "2024-01-01T00:00:00Z"),
        ];

        let sorted = sort_videos(videos.clone(), &SortOption::Relevance);
        assert_eq!(sorted, videos);
    }

    #[test]
    fn date_sort_is_newest_first() {
        let videos = vec![
            video("old", "0", "0", "2020-06-01T00:00:00Z"),
            video("new", "0", "0", "2024-06-01T00:00:00Z"),
            video("undated", "0", "0", ""),
        ];

        let sorted = sort_videos(videos, &SortOption::Date);
        assert_eq!(sorted[0].id, "new");
        assert_eq!(sorted[1].id, "old");
        assert_eq!(sorted[2].id, "undated");
    }

    #[test]
    fn rating_sort_uses_likes() {
        let videos = vec![
            video("low", "0", "12", "2024-01-01T00:00:00Z"),
            video("high", "0", "4,500", "2024-01-01T00:00:00Z"),
        ];

        let sorted = sort_videos(videos, &SortOption::Rating);
        assert_eq!(sorted[0].id, "high");
    }

    #[test]
    fn local_matches_are_case_insensitive_and_prefixed() {
        let catalog = vec![
            video("1", "0", "0", ""),
            {
                let mut v = video("2", "0", "0", "");
                v.title = "Completely Different".to_string();
                v.description = "nothing relevant".to_string();
                v.uploader = "else".to_string();
                v
            },
        ];

        let matches = filter_local(&catalog, "VIDEO 1");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, "local-1");
    }

    #[test]
    fn uploader_matches_count_too() {
        let catalog = vec![video("1", "0", "0", "")];
        assert_eq!(filter_local(&catalog, "someONE").len(), 1);
    }

    #[test]
    fn remote_fetch_policy() {
        assert!(should_fetch_remote(0, "x"));
        assert!(should_fetch_remote(2, "rust"));
        assert!(!should_fetch_remote(2, "ru"));
        assert!(!should_fetch_remote(3, "rust"));
    }

    #[test]
    fn combination_order_is_local_peertube_youtube() {
        let local = vec![video("local-1", "0", "0", "")];
        let peertube = vec![video("peertube-tilvids-x", "0", "0", "")];
        let youtube = vec![video("ytid", "0", "0", "")];

        let combined = combine_results(&local, &peertube, &youtube, true, true);
        let ids: Vec<&str> = combined.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["local-1", "peertube-tilvids-x", "ytid"]);
    }

    #[test]
    fn hidden_sources_are_left_out() {
        let local = vec![video("local-1", "0", "0", "")];
        let peertube = vec![video("peertube-tilvids-x", "0", "0", "")];
        let youtube = vec![video("ytid", "0", "0", "")];

        let combined = combine_results(&local, &peertube, &youtube, false, true);
        let ids: Vec<&str> = combined.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["local-1", "ytid"]);
    }

    #[test]
    fn source_prefixes_keep_merged_ids_unique() {
        // Same raw id on every source; prefixing keeps them distinct.
        let local = filter_local(&[video("abc", "0", "0", "")], "video");
        let peertube = vec![video("peertube-tilvids-abc", "0", "0", "")];
        let youtube = vec![video("abc", "0", "0", "")];

        let combined = combine_results(&local, &peertube, &youtube, true, true);
        let ids: HashSet<&str> = combined.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids.len(), combined.len());
    }
}
