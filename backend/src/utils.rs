/// Parse an ISO 8601 duration (`PT1H2M3S`) into hour/minute/second
/// components. Fractional parts are truncated.
pub fn parse_iso8601_duration(duration: &str) -> Option<(u64, u64, u64)> {
    let rest = duration.strip_prefix("PT")?;

    let mut hours = 0;
    let mut minutes = 0;
    let mut seconds = 0;
    let mut current_number = String::new();

    for ch in rest.chars() {
        if ch.is_ascii_digit() || ch == '.' {
            current_number.push(ch);
        } else {
            let value = current_number.parse::<f64>().unwrap_or(0.0) as u64;
            match ch {
                'H' => hours = value,
                'M' => minutes = value,
                'S' => seconds = value,
                _ => {}
            }
            current_number.clear();
        }
    }

    Some((hours, minutes, seconds))
}

/// Render an ISO 8601 duration as a colon-delimited display string:
/// `PT1H2M3S` becomes `1:02:03`, `PT5M9S` becomes `5:09`. Unparseable
/// input renders as the empty string.
pub fn format_iso8601_duration(duration: &str) -> String {
    match parse_iso8601_duration(duration) {
        Some((hours, minutes, seconds)) => format_clock(hours, minutes, seconds),
        None => String::new(),
    }
}

/// Render a duration in whole seconds the same way PeerTube reports it.
pub fn format_seconds_duration(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format_clock(hours, minutes, seconds)
}

fn format_clock(hours: u64, minutes: u64, seconds: u64) -> String {
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

/// Short-form heuristic: a clip under a minute with zero hours and
/// minutes. Durations that do not parse are not considered short.
pub fn is_short_form_duration(duration: &str) -> bool {
    match parse_iso8601_duration(duration) {
        Some((0, 0, seconds)) => seconds < 60,
        _ => false,
    }
}

/// Lowercase a display name and collapse every non-alphanumeric run
/// into a single dash, so instance names become stable id prefixes.
pub fn slugify_instance_name(name: &str) -> String {
    let mut slug = String::new();
    let mut pending_dash = false;

    for ch in name.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        "default".to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_duration() {
        assert_eq!(parse_iso8601_duration("PT1H2M3S"), Some((1, 2, 3)));
        assert_eq!(parse_iso8601_duration("PT5M9S"), Some((0, 5, 9)));
        assert_eq!(parse_iso8601_duration("PT45S"), Some((0, 0, 45)));
        assert_eq!(parse_iso8601_duration("PT2H"), Some((2, 0, 0)));
    }

    #[test]
    fn rejects_non_iso_input() {
        assert_eq!(parse_iso8601_duration(""), None);
        assert_eq!(parse_iso8601_duration("12:34"), None);
    }

    #[test]
    fn formats_display_durations() {
        assert_eq!(format_iso8601_duration("PT1H2M3S"), "1:02:03");
        assert_eq!(format_iso8601_duration("PT5M9S"), "5:09");
        assert_eq!(format_iso8601_duration("PT45S"), "0:45");
        assert_eq!(format_iso8601_duration("bogus"), "");
    }

    #[test]
    fn formats_second_counts() {
        assert_eq!(format_seconds_duration(3723), "1:02:03");
        assert_eq!(format_seconds_duration(309), "5:09");
        assert_eq!(format_seconds_duration(0), "0:00");
    }

    #[test]
    fn flags_short_form_durations() {
        assert!(is_short_form_duration("PT45S"));
        assert!(is_short_form_duration("PT59S"));
        assert!(!is_short_form_duration("PT1M0S"));
        assert!(!is_short_form_duration("PT1H0M30S"));
        // Unparseable durations never count as shorts.
        assert!(!is_short_form_duration(""));
    }

    #[test]
    fn slugifies_instance_names() {
        assert_eq!(slugify_instance_name("PeerTube.TV"), "peertube-tv");
        assert_eq!(slugify_instance_name("Dalek Zone"), "dalek-zone");
        assert_eq!(slugify_instance_name("Blender"), "blender");
        assert_eq!(slugify_instance_name("---"), "default");
        assert_eq!(slugify_instance_name("  Causa Arcana  "), "causa-arcana");
    }
}
