//! Copy the field mapping of today's time-partitioned index into tomorrow's,
//! so the new index has the right schema before it receives data.

pub mod config;
pub mod copier;
pub mod error;
pub mod es;
pub mod models;
