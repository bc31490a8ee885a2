use chrono::TimeDelta;

/// Renders a duration as `HH:MM`.
pub fn format_hm(delta: TimeDelta) -> String {
    let total_minutes = delta.num_minutes().max(0);
    format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60)
}

/// Renders a pace as `M:SS /km`.
pub fn format_pace(min_per_km: f64) -> String {
    let secs = (min_per_km * 60.0).round() as i64;
    format!("{}:{:02} /km", secs / 60, secs % 60)
}
