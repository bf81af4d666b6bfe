/// Short status tag shown on every prompt, e.g. `📍 Context: 12/50`
pub fn freshness_indicator(count: u64, interval: u64, refreshed: bool) -> String {
    let suffix = if refreshed { " (refreshed)" } else { "" };
    format!("📍 Context: {}/{}{}", count, interval, suffix)
}
