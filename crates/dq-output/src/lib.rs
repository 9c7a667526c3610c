//! `dq-output`: renderers for a finished [`SnapshotHistory`].
//!
//! | Writer          | Output                                                  |
//! |-----------------|---------------------------------------------------------|
//! | [`TableWriter`] | fixed-width text table, times across, one row per desk  |
//! | [`CsvWriter`]   | `desk,<t0>,<t1>,...` header, one record per desk        |
//!
//! Both implement [`OutputWriter`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use dq_output::{OutputWriter, TableWriter};
//!
//! let mut out = TableWriter::new(std::io::stdout().lock());
//! out.write_history(&sim.history)?;
//! out.finish()?;
//! ```
//!
//! [`SnapshotHistory`]: dq_sim::SnapshotHistory

pub mod csv;
pub mod error;
pub mod table;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use table::{TableWriter, render_table};
pub use writer::OutputWriter;
