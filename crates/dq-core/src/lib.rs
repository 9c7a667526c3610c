//! `dq-core`: foundational types for the `deskq` desk simulator.
//!
//! Every other `dq-*` crate depends on this one.  It has no `dq-*`
//! dependencies and only `rand` and `thiserror` externally (plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `DeskId`                                              |
//! | [`time`]        | `Tick`                                                |
//! | [`passenger`]   | `Passenger`, `MAX_ID_LEN`                             |
//! | [`config`]      | `SimConfig`, `QueueBackend`, `OverflowPolicy`         |
//! | [`rng`]         | `SimRng` (seeded two-choice draws)                    |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod passenger;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{OverflowPolicy, QueueBackend, SimConfig};
pub use error::{CoreError, CoreResult};
pub use ids::DeskId;
pub use passenger::{MAX_ID_LEN, Passenger, truncate_id};
pub use rng::SimRng;
pub use time::Tick;
