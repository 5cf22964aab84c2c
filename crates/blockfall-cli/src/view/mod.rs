use std::time::Duration;

pub mod widgets;

/// Formats a play time as `m:ss.cc`.
pub fn format_play_time(duration: Duration) -> String {
    format!(
        "{:0}:{:0>2}.{:0>2}",
        duration.as_secs() / 60,
        duration.as_secs() % 60,
        duration.subsec_millis() / 10
    )
}
