//! `dq-sim`: the event loop of the desk simulator.
//!
//! # Event loop
//!
//! ```text
//! while arrivals remain OR some desk is busy:
//!   t = min(next arrival, earliest desk completion)
//!   ① Completions  every desk due at t serves its head; the next head (if
//!                   any) starts service at t.
//!   ② Arrivals     every passenger arriving at t, in input order, is routed
//!                   by the DeskSelector (Power-of-Two-Choices by default)
//!                   and starts service at once if its desk was idle.
//!   ③ Snapshot     if ① or ② changed anything, record every desk's queue
//!                   contents for t.
//! ```
//!
//! Time only moves forward, so a run over finitely many passengers with
//! finite service times always terminates.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use dq_core::SimConfig;
//! use dq_sim::{NoopObserver, SimBuilder, load_input_reader};
//!
//! let input = load_input_reader(std::io::stdin(), config.max_passengers)?;
//! let mut sim = SimBuilder::new(config, input.desk_count, input.passengers).build()?;
//! sim.run(&mut NoopObserver)?;
//! let history = sim.into_history();
//! ```

pub mod arrivals;
pub mod builder;
pub mod desks;
pub mod error;
pub mod history;
pub mod loader;
pub mod observer;
pub mod selector;
pub mod sim;


pub use arrivals::ArrivalSchedule;
pub use builder::SimBuilder;
pub use desks::{Admission, Completion, Desk, DeskSet};
pub use error::{SimError, SimResult};
pub use history::{EMPTY_CELL, SnapshotHistory};
pub use loader::{SimInput, load_input_path, load_input_reader, parse_input};
pub use observer::{NoopObserver, SimObserver};
pub use selector::{DeskSelector, PowerOfTwoChoices, choose_shorter};
pub use sim::{Rejection, Sim, SimState, SimStats};
