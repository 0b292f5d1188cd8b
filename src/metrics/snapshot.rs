use serde::Serialize;

/// One point-in-time set of host resource readings.
///
/// Built fresh for every request and dropped once serialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Snapshot {
    /// Global CPU utilisation, 0–100
    pub cpu_usage: f64,
    /// Physical memory in use, 0–100
    pub memory_usage: f64,
    /// Capacity in use on the monitored filesystem, 0–100
    pub disk_usage: f64,
    /// Bytes sent + received over all interfaces since the counters were reset
    pub network_usage: u64,
}

impl Snapshot {
    /// True when every percentage lies in `[0, 100]`.
    pub fn is_within_bounds(&self) -> bool {
        [self.cpu_usage, self.memory_usage, self.disk_usage]
            .iter()
            .all(|v| (0.0..=100.0).contains(v))
    }
}

/// `used / total` as a percentage rounded to one decimal place.
///
/// Returns `None` for an empty total. `used` is capped at `total` so the
/// result never leaves `[0, 100]`.
pub fn percent(used: u64, total: u64) -> Option<f64> {
    if total == 0 {
        return None;
    }
    let ratio = used.min(total) as f64 / total as f64;
    Some(clamp_percent(ratio * 100.0))
}

/// Rounds a raw utilisation reading to one decimal place and clamps it into
/// `[0, 100]`. NaN maps to 0.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    ((value * 10.0).round() / 10.0).clamp(0.0, 100.0)
}
