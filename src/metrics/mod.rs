pub mod error;
pub mod sampler;
pub mod snapshot;

pub use error::SamplingError;
pub use sampler::SystemSampler;
pub use snapshot::Snapshot;

/// Produces a fresh [`Snapshot`] of host resource usage on every call.
///
/// This is the seam the HTTP layer depends on. Implementations must not
/// cache readings between calls and must fail the whole sample when any
/// single counter cannot be read.
pub trait Sampler: Send + Sync {
    fn sample(&self) -> Result<Snapshot, SamplingError>;
}
