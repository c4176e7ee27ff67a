//! Domain types: launch records, the read-only dataset, selection inputs and
//! the chart descriptions derived from them.

pub mod chart;
pub mod dataset;
pub mod launch;
pub mod ports;
pub mod selection;
