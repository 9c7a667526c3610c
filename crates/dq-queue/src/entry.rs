use dq_core::Passenger;

/// What a queue stores for each passenger: the id and how long serving
/// them takes.  The arrival time is no longer needed once queued.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueueEntry {
    pub id:           String,
    pub service_time: u64,
}

impl QueueEntry {
    pub fn new(id: impl Into<String>, service_time: u64) -> Self {
        Self { id: id.into(), service_time }
    }
}

impl From<Passenger> for QueueEntry {
    fn from(p: Passenger) -> Self {
        Self { id: p.id, service_time: p.service_time }
    }
}
