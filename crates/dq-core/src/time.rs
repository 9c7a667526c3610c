//! Simulation time model.
//!
//! Time is an integer `Tick`.  The loop only ever visits ticks at which an
//! arrival or a service completion happens; there is no fixed step.
//!
//! "Infinite" time (an idle desk, an exhausted arrival list) is modelled as
//! `Option<Tick>::None` rather than a large sentinel value, so the minimum of
//! two candidate event times is simply [`Tick::earliest`].

use std::fmt;

/// An absolute simulation timestamp.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The tick `n` units after `self`, or `None` if that overflows `u64`.
    #[inline]
    pub fn checked_offset(self, n: u64) -> Option<Tick> {
        self.0.checked_add(n).map(Tick)
    }

    /// The earlier of two optional times, where `None` means "never".
    #[inline]
    pub fn earliest(a: Option<Tick>, b: Option<Tick>) -> Option<Tick> {
        match (a, b) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, None) => a,
            (None, b) => b,
        }
    }
}

/// Displays as the bare number, which is also how the output table prints it.
impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
