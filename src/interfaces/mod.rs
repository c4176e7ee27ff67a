//! Edges of the dashboard: CSV input, chart output formats and scripted widget events.

pub mod csv;
pub mod events;
pub mod json;
