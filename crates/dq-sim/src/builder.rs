//! Fluent builder for constructing a [`Sim`].

use dq_core::{CoreError, Passenger, SimConfig, SimRng, Tick};

use crate::{
    ArrivalSchedule, DeskSelector, DeskSet, PowerOfTwoChoices, Sim, SimError, SimResult,
    SimStats, SnapshotHistory,
};

/// Fluent builder for [`Sim<S>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: seed, queue backend, capacity, overflow policy, limits
/// - desk count (from the input, must be ≥ 2)
/// - the passengers, in input order
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                               |
/// |-----------------|---------------------------------------|
/// | `.selector(s)`  | [`PowerOfTwoChoices`]                 |
/// | `.rng(r)`       | `SimRng::new(config.seed)`            |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, 3, passengers).build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<S: DeskSelector = PowerOfTwoChoices> {
    config:     SimConfig,
    desk_count: usize,
    passengers: Vec<Passenger>,
    selector:   S,
    rng:        Option<SimRng>,
}

impl SimBuilder<PowerOfTwoChoices> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, desk_count: usize, passengers: Vec<Passenger>) -> Self {
        Self {
            config,
            desk_count,
            passengers,
            selector: PowerOfTwoChoices,
            rng:      None,
        }
    }
}

impl<S: DeskSelector> SimBuilder<S> {
    /// Replace the routing policy.
    pub fn selector<T: DeskSelector>(self, selector: T) -> SimBuilder<T> {
        SimBuilder {
            config:     self.config,
            desk_count: self.desk_count,
            passengers: self.passengers,
            selector,
            rng:        self.rng,
        }
    }

    /// Use an explicit RNG instead of one seeded from `config.seed`.
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Validate inputs, build the desks and arrival schedule, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<S>> {
        // ── Preconditions ─────────────────────────────────────────────────
        if self.desk_count < 2 {
            return Err(SimError::TooFewDesks(self.desk_count as i64));
        }
        if u32::try_from(self.desk_count).is_err() {
            return Err(CoreError::Config(format!("{} desks is too many", self.desk_count)).into());
        }
        self.config.validate()?;
        if self.passengers.len() > self.config.max_passengers {
            return Err(SimError::TooManyPassengers {
                got: self.passengers.len(),
                max: self.config.max_passengers,
            });
        }
        for p in &self.passengers {
            p.validate()?;
        }

        // ── State ─────────────────────────────────────────────────────────
        let desks = DeskSet::new(self.desk_count, &self.config)?;
        let history = SnapshotHistory::new(self.desk_count)?;
        let arrivals = ArrivalSchedule::new(self.passengers);
        let rng = self.rng.unwrap_or_else(|| SimRng::new(self.config.seed));

        Ok(Sim {
            config:   self.config,
            now:      Tick::ZERO,
            desks,
            arrivals,
            history,
            rng,
            selector: self.selector,
            stats:    SimStats::default(),
            rejected: Vec::new(),
            lens:     Vec::with_capacity(self.desk_count),
        })
    }
}
