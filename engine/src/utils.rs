// relative time label for item timestamps, e.g. "3h ago"
pub fn time_ago(timestamp: f64, now: f64) -> String {
    let diff = now - timestamp;

    if diff < 60.0 {
        return "just now".to_string();
    }
    if diff < 3600.0 {
        return format!("{}m ago", (diff / 60.0) as u64);
    }
    if diff < 86400.0 {
        return format!("{}h ago", (diff / 3600.0) as u64);
    }
    format!("{}d ago", (diff / 86400.0) as u64)
}
