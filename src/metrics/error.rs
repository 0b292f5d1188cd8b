use std::path::PathBuf;

/// Raised when one of the OS-level queries behind a [`Snapshot`] fails.
///
/// A failure of any single counter fails the whole sample; there are no
/// partially populated snapshots.
///
/// [`Snapshot`]: super::Snapshot
#[derive(Debug, thiserror::Error)]
pub enum SamplingError {
    /// `sysinfo` has no backend for the running OS.
    #[error("host statistics are not supported on this platform")]
    UnsupportedPlatform,

    #[error("CPU utilisation is not exposed by this host")]
    CpuUnavailable,

    #[error("physical memory totals are not exposed by this host")]
    MemoryUnavailable,

    /// The configured disk path could not be inspected.
    #[error("cannot read disk path {}: {source}", .path.display())]
    DiskPath {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The filesystem holding the configured path reports no capacity.
    #[error("filesystem at {} reports no capacity", .path.display())]
    DiskUnavailable { path: PathBuf },

    #[error("network interface counters are not exposed by this host")]
    NetworkUnavailable,
}
