use std::path::{Path, PathBuf};

use sysinfo::{Networks, System};

use super::error::SamplingError;
use super::snapshot::{clamp_percent, percent, Snapshot};
use super::Sampler;

// ─── Configuration ───────────────────────────────────────────────

/// Filesystem reported when no other path is configured
pub const DEFAULT_DISK_PATH: &str = "/";

// ─── Public types ────────────────────────────────────────────────

/// Production sampler backed by `sysinfo`.
///
/// Holds configuration only. Every [`Sampler::sample`] call opens fresh
/// `sysinfo` handles and issues its own `statvfs`, so nothing read by one
/// call is visible to the next and concurrent calls never contend on
/// shared state.
#[derive(Debug, Clone)]
pub struct SystemSampler {
    disk_path: PathBuf,
}

impl Default for SystemSampler {
    fn default() -> Self {
        Self::new(DEFAULT_DISK_PATH)
    }
}

impl SystemSampler {
    pub fn new(disk_path: impl Into<PathBuf>) -> Self {
        Self {
            disk_path: disk_path.into(),
        }
    }

    pub fn disk_path(&self) -> &Path {
        &self.disk_path
    }

    // ── Individual counters ─────────────────────────────────────

    /// Global utilisation across one minimum measurement window.
    ///
    /// `sysinfo` derives usage from the delta between two refreshes, so this
    /// blocks for `MINIMUM_CPU_UPDATE_INTERVAL`.
    fn cpu_usage(&self) -> Result<f64, SamplingError> {
        let mut sys = System::new();
        sys.refresh_cpu_usage();
        if sys.cpus().is_empty() {
            return Err(SamplingError::CpuUnavailable);
        }
        std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
        sys.refresh_cpu_usage();

        Ok(clamp_percent(f64::from(sys.global_cpu_usage())))
    }

    fn memory_usage(&self) -> Result<f64, SamplingError> {
        let mut sys = System::new();
        sys.refresh_memory();

        let total = sys.total_memory();
        let used = total.saturating_sub(sys.available_memory());
        percent(used, total).ok_or(SamplingError::MemoryUnavailable)
    }

    /// Capacity in use on the filesystem holding `disk_path`, as `df` reports it.
    #[cfg(unix)]
    fn disk_usage(&self) -> Result<f64, SamplingError> {
        use nix::sys::statvfs::statvfs;

        let stat = statvfs(self.disk_path.as_path()).map_err(|errno| SamplingError::DiskPath {
            path: self.disk_path.clone(),
            source: std::io::Error::from(errno),
        })?;

        disk_percent(
            stat.blocks() as u64,
            stat.blocks_free() as u64,
            stat.blocks_available() as u64,
            stat.fragment_size() as u64,
        )
        .ok_or_else(|| SamplingError::DiskUnavailable {
            path: self.disk_path.clone(),
        })
    }

    #[cfg(not(unix))]
    fn disk_usage(&self) -> Result<f64, SamplingError> {
        Err(SamplingError::UnsupportedPlatform)
    }

    /// Cumulative bytes in both directions, summed over every interface.
    fn network_usage(&self) -> Result<u64, SamplingError> {
        let networks = Networks::new_with_refreshed_list();
        if networks.list().is_empty() {
            return Err(SamplingError::NetworkUnavailable);
        }

        Ok(networks.list().values().fold(0u64, |acc, data| {
            acc.saturating_add(data.total_received())
                .saturating_add(data.total_transmitted())
        }))
    }
}

impl Sampler for SystemSampler {
    fn sample(&self) -> Result<Snapshot, SamplingError> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(SamplingError::UnsupportedPlatform);
        }

        let snapshot = Snapshot {
            cpu_usage: self.cpu_usage()?,
            memory_usage: self.memory_usage()?,
            disk_usage: self.disk_usage()?,
            network_usage: self.network_usage()?,
        };

        tracing::debug!(
            cpu = snapshot.cpu_usage,
            memory = snapshot.memory_usage,
            disk = snapshot.disk_usage,
            network_bytes = snapshot.network_usage,
            "host sampled"
        );
        Ok(snapshot)
    }
}

// ─── Helpers ─────────────────────────────────────────────────────

/// Usage percentage from raw `statvfs` block counts.
///
/// Blocks reserved for root count neither as used nor as available, so the
/// result is `used / (used + available)` rather than a share of the total.
pub fn disk_percent(
    blocks: u64,
    blocks_free: u64,
    blocks_available: u64,
    fragment_size: u64,
) -> Option<f64> {
    let used = blocks.saturating_sub(blocks_free).saturating_mul(fragment_size);
    let available = blocks_available.saturating_mul(fragment_size);
    percent(used, used.saturating_add(available))
}
