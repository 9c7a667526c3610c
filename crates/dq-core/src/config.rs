//! Top-level simulation configuration.
//!
//! Typically loaded from a JSON file by the `deskq` binary (with the `serde`
//! feature) and then overridden by command-line flags.

use crate::{CoreError, CoreResult};

/// Which queue implementation every desk uses.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum QueueBackend {
    /// Fixed-capacity ring buffer.  Enqueue fails once `capacity` is reached.
    Bounded,
    /// Singly-linked list.  Never full.
    #[default]
    Unbounded,
}

/// What happens to a passenger refused by a full bounded desk.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OverflowPolicy {
    /// Discard the passenger and report it.  No retry.
    #[default]
    Drop,
    /// Park the passenger in the desk's holding line and admit it when a
    /// completion frees a slot.
    Retry,
}

/// Run configuration.  The desk count is not here: it comes from the input.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Queue implementation used by every desk.
    pub backend: QueueBackend,

    /// Per-desk capacity.  Only meaningful for [`QueueBackend::Bounded`].
    pub capacity: usize,

    /// Policy for passengers refused by a full desk.
    pub overflow: OverflowPolicy,

    /// Upper bound on the number of passengers accepted from the input.
    pub max_passengers: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed:           42,
            backend:        QueueBackend::default(),
            capacity:       1_000,
            overflow:       OverflowPolicy::default(),
            max_passengers: 1_000,
        }
    }
}

impl SimConfig {
    /// Check values that would make a run meaningless.
    pub fn validate(&self) -> CoreResult<()> {
        if self.backend == QueueBackend::Bounded && self.capacity == 0 {
            return Err(CoreError::Config(
                "bounded queues need a capacity of at least 1".into(),
            ));
        }
        if self.max_passengers == 0 {
            return Err(CoreError::Config("max_passengers must be at least 1".into()));
        }
        Ok(())
    }
}
