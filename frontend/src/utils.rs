pub fn format_iso8601_date(iso_date: &str) -> String {
    if let Ok(datetime) = iso_date.parse::<chrono::DateTime<chrono::Utc>>() {
        datetime.format("%Y-%m-%d").to_string()
    } else {
        iso_date.to_string()
    }
}

/// Compress a raw view count into the usual K/M/B display form:
/// `999` -> "999 views", `1500` -> "1.5K views". Values that do not
/// parse as numbers are passed through untouched.
pub fn format_view_count(views: &str) -> String {
    let digits: String = views.chars().filter(|c| c.is_ascii_digit()).collect();
    let count = match digits.parse::<u64>() {
        Ok(count) => count,
        Err(_) => return views.to_string(),
    };

    if count >= 1_000_000_000 {
        format!("{} views", trim_decimal(count as f64 / 1_000_000_000.0, "B"))
    } else if count >= 1_000_000 {
        format!("{} views", trim_decimal(count as f64 / 1_000_000.0, "M"))
    } else if count >= 1_000 {
        format!("{} views", trim_decimal(count as f64 / 1_000.0, "K"))
    } else {
        format!("{count} views")
    }
}

fn trim_decimal(value: f64, suffix: &str) -> String {
    let formatted = format!("{value:.1}");
    let trimmed = formatted.strip_suffix(".0").unwrap_or(&formatted);
    format!("{trimmed}{suffix}")
}

/// Same colon-delimited clock format the proxy uses for PeerTube
/// durations, for videos fetched from a user-supplied instance.
pub fn format_seconds_duration(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_counts_pick_the_right_tier() {
        assert_eq!(format_view_count("999"), "999 views");
        assert_eq!(format_view_count("1500"), "1.5K views");
        assert_eq!(format_view_count("2500000"), "2.5M views");
        assert_eq!(format_view_count("3200000000"), "3.2B views");
    }

    #[test]
    fn whole_multiples_drop_the_decimal() {
        assert_eq!(format_view_count("1000"), "1K views");
        assert_eq!(format_view_count("2000000"), "2M views");
    }

    #[test]
    fn separators_are_ignored() {
        assert_eq!(format_view_count("1,500"), "1.5K views");
    }

    #[test]
    fn non_numeric_counts_pass_through() {
        assert_eq!(format_view_count("unknown"), "unknown");
        assert_eq!(format_view_count(""), "");
    }

    #[test]
    fn dates_render_as_ymd() {
        assert_eq!(format_iso8601_date("2024-03-02T12:30:00Z"), "2024-03-02");
        assert_eq!(format_iso8601_date("not a date"), "not a date");
    }

    #[test]
    fn second_counts_format_as_clock() {
        assert_eq!(format_seconds_duration(3723), "1:02:03");
        assert_eq!(format_seconds_duration(309), "5:09");
    }
}
