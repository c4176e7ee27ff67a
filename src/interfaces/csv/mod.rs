pub mod chart_writer;
pub mod launch_reader;
