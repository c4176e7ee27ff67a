//! Adapters implementing the domain ports without any I/O.

pub mod in_memory;
