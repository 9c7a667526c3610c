//! Text input loader.
//!
//! # Format
//!
//! Whitespace-separated tokens.  The first is the desk count; every other
//! token is one passenger:
//!
//! ```text
//! 3
//! alice/0/5  bob/0/3
//! carol/2/4
//! ```
//!
//! `id/arrival_time/service_time`, with both times non-negative integers.
//! Empty fields are skipped (`a//1/2` reads as `a/1/2`) and fields after the
//! third are ignored.  Tokens that still lack a field, or whose times do not
//! parse, are skipped.  Ids longer than [`MAX_ID_LEN`] characters are
//! truncated.
//!
//! Reading stops after `max_passengers` passengers.  Passengers are returned
//! in input order; sorting by arrival time is the arrival schedule's job.

use std::io::Read;
use std::path::Path;

use dq_core::{MAX_ID_LEN, Passenger, truncate_id};
use tracing::{debug, warn};

use crate::{SimError, SimResult};

/// Everything the simulation needs from the input stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimInput {
    pub desk_count: usize,
    pub passengers: Vec<Passenger>,
}

/// Load input from a file.
pub fn load_input_path(path: &Path, max_passengers: usize) -> SimResult<SimInput> {
    let file = std::fs::File::open(path)?;
    load_input_reader(file, max_passengers)
}

/// Like [`load_input_path`] but accepts any `Read` source (stdin, a
/// `Cursor` in tests).
///
/// Input that is not UTF-8 is a [`SimError::Parse`], not an I/O error.
pub fn load_input_reader<R: Read>(mut reader: R, max_passengers: usize) -> SimResult<SimInput> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let text = String::from_utf8(bytes).map_err(|e| {
        SimError::Parse(format!(
            "input is not valid UTF-8 (byte {})",
            e.utf8_error().valid_up_to()
        ))
    })?;
    parse_input(&text, max_passengers)
}

/// Parse the whole input text.
pub fn parse_input(text: &str, max_passengers: usize) -> SimResult<SimInput> {
    let mut tokens = text.split_whitespace();

    let desk_count: i64 = tokens
        .next()
        .and_then(|t| t.parse().ok())
        .ok_or_else(|| SimError::Parse("failed to read number of desks".into()))?;
    if desk_count < 2 {
        return Err(SimError::TooFewDesks(desk_count));
    }
    let desk_count = usize::try_from(desk_count)
        .map_err(|_| SimError::Parse(format!("desk count {desk_count} is out of range")))?;

    let mut passengers = Vec::new();
    for token in tokens {
        if passengers.len() == max_passengers {
            warn!(max_passengers, "passenger limit reached, ignoring the rest of the input");
            break;
        }
        match parse_passenger(token) {
            Some(p) => passengers.push(p),
            None => debug!(token, "skipping malformed passenger token"),
        }
    }

    Ok(SimInput { desk_count, passengers })
}

/// Parse one `id/arrival/service` token.
fn parse_passenger(token: &str) -> Option<Passenger> {
    let mut fields = token.split('/').filter(|f| !f.is_empty());
    let id = fields.next()?;
    let arrival: u64 = fields.next()?.parse().ok()?;
    let service: u64 = fields.next()?.parse().ok()?;

    if id.chars().count() > MAX_ID_LEN {
        debug!(id, "truncating long passenger id");
    }
    Some(Passenger::new(truncate_id(id), arrival, service))
}
